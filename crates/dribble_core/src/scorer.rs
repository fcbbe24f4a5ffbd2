//! Position scoring
//!
//! Composite attractiveness of a dribble target as a weighted sum of five
//! normalised sub-scores:
//!
//! | sub-score            | formula                                        | empty team |
//! |----------------------|------------------------------------------------|------------|
//! | goal distance        | `1 - min(d(p, goal) / field_length, 1)`        | -          |
//! | enemy path proximity | `exp(-importance * min d(enemy, ball→p))`      | 1.0        |
//! | dribble distance     | `1 - min(d(ball, p) / max_dribble_distance, 1)`| -          |
//! | teammate proximity   | `exp(-min d(p, mate) / max_effective_proximity)`| 0.0       |
//! | shot opportunity     | `1` if a shot exists from `p`, else `0`        | -          |
//!
//! All sub-scores lie in [0, 1]; with validated weights so does the total.

use serde::Serialize;
use tracing::trace;

use crate::config::{DribbleConfig, PassingConfig, ScoreWeights};
use crate::error::Result;
use crate::geometry::{distance, distance_point_to_segment, Point};
use crate::shot::{OpenLaneShotEvaluator, ShotEvaluator};
use crate::world::{Field, Team, World};

/// Per-candidate score components
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub goal_distance: f64,
    pub enemy_path_proximity: f64,
    pub dribble_distance: f64,
    pub teammate_proximity: f64,
    pub shot_opportunity: f64,
    /// Weighted sum of the components
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn components(&self) -> [f64; 5] {
        [
            self.goal_distance,
            self.enemy_path_proximity,
            self.dribble_distance,
            self.teammate_proximity,
            self.shot_opportunity,
        ]
    }
}

/// `1 - min(numerator / denominator, 1)`, 0 for a degenerate denominator
fn inverse_ratio_score(numerator: f64, denominator: f64) -> f64 {
    if !denominator.is_finite() || denominator <= 0.0 {
        return 0.0;
    }
    1.0 - (numerator / denominator).min(1.0)
}

/// Scores candidate dribble targets against a world snapshot.
///
/// Holds only immutable configuration, so one instance can be shared
/// across threads for a parallel scoring pass.
#[derive(Debug, Clone)]
pub struct PositionScorer<E = OpenLaneShotEvaluator> {
    passing: PassingConfig,
    weights: ScoreWeights,
    shot_evaluator: E,
}

impl PositionScorer<OpenLaneShotEvaluator> {
    pub fn new(passing: PassingConfig, weights: ScoreWeights) -> Result<Self> {
        Self::with_evaluator(passing, weights, OpenLaneShotEvaluator::default())
    }

    pub fn from_config(config: &DribbleConfig) -> Result<Self> {
        Self::new(config.passing, config.weights)
    }
}

impl<E: ShotEvaluator> PositionScorer<E> {
    /// Validates the configuration; this is the only fallible step
    pub fn with_evaluator(passing: PassingConfig, weights: ScoreWeights, shot_evaluator: E) -> Result<Self> {
        passing.validate()?;
        weights.validate()?;
        Ok(Self { passing, weights, shot_evaluator })
    }

    pub fn passing(&self) -> &PassingConfig {
        &self.passing
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Composite score in [0, 1]
    pub fn score(&self, position: Point, ball_position: Point, world: &World) -> f64 {
        self.score_breakdown(position, ball_position, world).total
    }

    pub fn score_breakdown(&self, position: Point, ball_position: Point, world: &World) -> ScoreBreakdown {
        let goal_distance = self.goal_distance_score(position, &world.field);
        let enemy_path_proximity = self.enemy_path_proximity_score(ball_position, position, &world.enemy_team);
        let dribble_distance = self.dribble_distance_score(ball_position, position);
        let teammate_proximity = self.teammate_proximity_score(position, &world.friendly_team);
        let shot_opportunity = self.shot_opportunity_score(position, &world.field, &world.enemy_team);

        let w = &self.weights;
        let total = goal_distance * w.goal_distance
            + enemy_path_proximity * w.enemy_path_proximity
            + dribble_distance * w.dribble_distance
            + teammate_proximity * w.teammate_proximity
            + shot_opportunity * w.shot_opportunity;

        let breakdown = ScoreBreakdown {
            goal_distance,
            enemy_path_proximity,
            dribble_distance,
            teammate_proximity,
            shot_opportunity,
            // Weight sum is only validated to a tolerance.
            total: total.clamp(0.0, 1.0),
        };

        trace!(x = position.x, y = position.y, ?breakdown, "scored candidate");
        breakdown
    }

    /// Closeness to the enemy goal relative to field length
    pub fn goal_distance_score(&self, position: Point, field: &Field) -> f64 {
        inverse_ratio_score(distance(field.enemy_goal_center(), position), field.x_length)
    }

    /// Exponential decay of the closest enemy distance to the `start → end` segment.
    ///
    /// NOTE: as written this rewards paths that pass *close* to an enemy
    /// (an enemy on the path scores 1.0). The sign is most likely inverted
    /// but is kept until the intended behaviour is confirmed.
    pub fn enemy_path_proximity_score(&self, start: Point, end: Point, enemy_team: &Team) -> f64 {
        let min_distance = enemy_team
            .positions()
            .map(|enemy| distance_point_to_segment(enemy, start, end))
            .min_by(f64::total_cmp);

        match min_distance {
            Some(d) => (-self.passing.enemy_proximity_importance * d).exp(),
            None => 1.0,
        }
    }

    /// Shorter dribbles score higher, 0 at or beyond `max_dribble_distance`
    pub fn dribble_distance_score(&self, ball_position: Point, target: Point) -> f64 {
        inverse_ratio_score(distance(ball_position, target), self.passing.max_dribble_distance)
    }

    /// Support from the nearest teammate; no teammates means no support
    pub fn teammate_proximity_score(&self, target: Point, friendly_team: &Team) -> f64 {
        match friendly_team.nearest_distance(target) {
            Some(d) => (-d / self.passing.max_effective_proximity).exp(),
            None => 0.0,
        }
    }

    pub fn shot_opportunity_score(&self, position: Point, field: &Field, enemy_team: &Team) -> f64 {
        match self.shot_evaluator.best_shot(&field.enemy_goal, position, enemy_team.all_robots()) {
            Some(_) => 1.0,
            None => 0.0,
        }
    }
}
