//! # Dribble Configuration
//!
//! Every tunable used by the scorer and the sampler lives here and is
//! validated once via [`DribbleConfig::validate`] before the first tick.
//!
//! ```rust
//! use dribble_core::config::DribbleConfig;
//!
//! let config = DribbleConfig::default();
//! assert!(config.validate().is_ok());
//! let aggressive = DribbleConfig::aggressive();
//! assert!(aggressive.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Allowed deviation of the weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Distance and decay parameters shared with the passing layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassingConfig {
    /// Exponential decay rate applied to the enemy-to-path distance (per m)
    pub enemy_proximity_importance: f64,
    /// Dribble length at which the dribble-distance score reaches 0 (m)
    pub max_dribble_distance: f64,
    /// Length scale of the teammate-support decay (m)
    pub max_effective_proximity: f64,
}

impl Default for PassingConfig {
    fn default() -> Self {
        Self { enemy_proximity_importance: 1.0, max_dribble_distance: 2.0, max_effective_proximity: 1.5 }
    }
}

impl PassingConfig {
    pub fn validate(&self) -> Result<()> {
        check_positive("enemy_proximity_importance", self.enemy_proximity_importance)?;
        check_positive("max_dribble_distance", self.max_dribble_distance)?;
        check_positive("max_effective_proximity", self.max_effective_proximity)?;
        Ok(())
    }
}

/// Weights of the five sub-scores (sum 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub goal_distance: f64,
    pub enemy_path_proximity: f64,
    pub dribble_distance: f64,
    pub teammate_proximity: f64,
    pub shot_opportunity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            goal_distance: 0.15,
            enemy_path_proximity: 0.35,
            dribble_distance: 0.10,
            teammate_proximity: 0.25,
            shot_opportunity: 0.15,
        }
    }
}

impl ScoreWeights {
    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("goal_distance", self.goal_distance),
            ("enemy_path_proximity", self.enemy_path_proximity),
            ("dribble_distance", self.dribble_distance),
            ("teammate_proximity", self.teammate_proximity),
            ("shot_opportunity", self.shot_opportunity),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.named().iter().map(|(_, w)| w).sum()
    }

    /// Each weight finite and non-negative, total within tolerance of 1.0
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.named() {
            check_finite(field, value)?;
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight { field, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }
}

/// Candidate generation defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Dribble disk radius (m)
    pub max_radius: f64,
    pub sample_count: usize,
    /// Fixed seed for reproducible runs; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { max_radius: 1.0, sample_count: 10, seed: None }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<()> {
        check_positive("max_radius", self.max_radius)?;
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(())
    }
}

/// Full dribble planning configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DribbleConfig {
    pub passing: PassingConfig,
    pub weights: ScoreWeights,
    pub sampler: SamplerConfig,
}

impl DribbleConfig {
    /// Balanced defaults
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Longer dribbles, goal threat over support
    pub fn aggressive() -> Self {
        let mut cfg = Self::default();
        cfg.passing.max_dribble_distance = 3.0;
        cfg.weights = ScoreWeights {
            goal_distance: 0.30,
            enemy_path_proximity: 0.25,
            dribble_distance: 0.05,
            teammate_proximity: 0.15,
            shot_opportunity: 0.25,
        };
        cfg.sampler.max_radius = 1.5;
        cfg.sampler.sample_count = 20;
        cfg
    }

    /// Short dribbles that stay close to teammates
    pub fn conservative() -> Self {
        let mut cfg = Self::default();
        cfg.passing.max_dribble_distance = 1.0;
        cfg.passing.max_effective_proximity = 2.0;
        cfg.weights = ScoreWeights {
            goal_distance: 0.10,
            enemy_path_proximity: 0.35,
            dribble_distance: 0.20,
            teammate_proximity: 0.30,
            shot_opportunity: 0.05,
        };
        cfg.sampler.max_radius = 0.75;
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        self.passing.validate()?;
        self.weights.validate()?;
        self.sampler.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON document; missing sections fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
