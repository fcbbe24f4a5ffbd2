//! Candidate generation
//!
//! Draws dribble targets uniformly by *area* inside a disk around the
//! pivot. The radius is `sqrt(U) * R`; drawing `U * R` directly would crowd
//! samples near the centre.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SamplerConfig;
use crate::geometry::{point, Point};

/// Disk sampler with its own seedable generator
#[derive(Debug, Clone)]
pub struct CandidateSampler {
    rng: ChaCha8Rng,
}

impl CandidateSampler {
    /// Deterministic sampler
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }

    /// Seeded when the config carries a seed, entropy-backed otherwise
    pub fn from_config(config: &SamplerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Exactly `sample_count` points within `max_radius` of `center`.
    ///
    /// A non-positive or non-finite radius collapses every sample onto `center`.
    pub fn sample_points_in_disk(&mut self, center: Point, max_radius: f64, sample_count: usize) -> Vec<Point> {
        let radius = if max_radius.is_finite() { max_radius.max(0.0) } else { 0.0 };

        (0..sample_count)
            .map(|_| {
                let u1: f64 = self.rng.gen();
                let u2: f64 = self.rng.gen();
                let r = u1.sqrt() * radius;
                let theta = u2 * TAU;
                center + point(r * theta.cos(), r * theta.sin())
            })
            .collect()
    }

    /// Sample using the radius and count from `config`
    pub fn sample(&mut self, center: Point, config: &SamplerConfig) -> Vec<Point> {
        self.sample_points_in_disk(center, config.max_radius, config.sample_count)
    }
}
