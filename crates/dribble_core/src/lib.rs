//! # dribble_core - Dribble Target Selection
//!
//! Picks where a ball-carrying robot should dribble next.
//!
//! ## Features
//! - Area-uniform candidate sampling in a disk around the ball (seedable)
//! - Five-term tactical position score (goal threat, path safety, dribble
//!   length, teammate support, shot opportunity)
//! - Parallel candidate scoring with deterministic tie-breaking
//!
//! ```rust
//! use dribble_core::{point, DribbleConfig, DribblePlanner, Field, Robot, Team, World};
//!
//! let mut config = DribbleConfig::default();
//! config.sampler.seed = Some(42);
//! let mut planner = DribblePlanner::new(&config).unwrap();
//!
//! let world = World::new(
//!     Field::div_b(),
//!     Team::new(vec![Robot::new(1, point(1.0, 1.0))]),
//!     Team::new(vec![Robot::new(7, point(2.0, -0.5))]),
//! );
//! let target = planner.plan(point(0.0, 0.0), &world).unwrap();
//! assert!(target.length() <= 1.0 + 1e-9);
//! ```

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// Scoring APIs take the full snapshot plus positions
#![allow(clippy::too_many_arguments)]

pub mod config;
pub mod dribble;
pub mod error;
pub mod geometry;
pub mod planner;
pub mod sampler;
pub mod scorer;
pub mod shot;
pub mod world;

pub use config::{DribbleConfig, PassingConfig, SamplerConfig, ScoreWeights};
pub use dribble::DribbleTarget;
pub use error::{ConfigError, Result};
pub use geometry::{distance, distance_point_to_segment, point, Point};
pub use planner::{select_best, select_target, DribblePlanner, PlanReport};
pub use sampler::CandidateSampler;
pub use scorer::{PositionScorer, ScoreBreakdown};
pub use shot::{OpenLaneShotEvaluator, Shot, ShotEvaluator};
pub use world::{Field, Goal, Robot, Team, World};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
