//! Per-tick dribble target selection
//!
//! sample candidates around the pivot → score each one (in parallel) →
//! keep the best → build a [`DribbleTarget`] from the ball to that point.
//!
//! Ties go to the earliest candidate in generation order, so a seeded
//! sampler always produces the same plan.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::{DribbleConfig, SamplerConfig};
use crate::dribble::DribbleTarget;
use crate::error::Result;
use crate::geometry::Point;
use crate::sampler::CandidateSampler;
use crate::scorer::{PositionScorer, ScoreBreakdown};
use crate::shot::{OpenLaneShotEvaluator, ShotEvaluator};
use crate::world::World;

/// Index of the strictly greatest finite score; the first one wins ties
pub fn select_best(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        if !score.is_finite() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Score every candidate, order preserved
pub fn score_candidates<E: ShotEvaluator>(
    scorer: &PositionScorer<E>,
    candidates: &[Point],
    ball_position: Point,
    world: &World,
) -> Vec<ScoreBreakdown> {
    candidates.par_iter().map(|&c| scorer.score_breakdown(c, ball_position, world)).collect()
}

/// Pick the best of an existing candidate set
pub fn select_target<E: ShotEvaluator>(
    scorer: &PositionScorer<E>,
    candidates: &[Point],
    ball_position: Point,
    world: &World,
) -> Option<DribbleTarget> {
    let totals: Vec<f64> =
        score_candidates(scorer, candidates, ball_position, world).iter().map(|b| b.total).collect();
    select_best(&totals).map(|idx| DribbleTarget::new(ball_position, candidates[idx]))
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
    pub position: Point,
    pub breakdown: ScoreBreakdown,
}

/// Everything evaluated during one tick
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub pivot: Point,
    pub ball: Point,
    pub candidates: Vec<CandidateReport>,
    pub chosen: Option<usize>,
    pub target: Option<DribbleTarget>,
}

/// Owns a scorer and a sampler and runs the selection loop
#[derive(Debug, Clone)]
pub struct DribblePlanner<E = OpenLaneShotEvaluator> {
    scorer: PositionScorer<E>,
    sampler: CandidateSampler,
    sampler_config: SamplerConfig,
}

impl DribblePlanner<OpenLaneShotEvaluator> {
    pub fn new(config: &DribbleConfig) -> Result<Self> {
        config.sampler.validate()?;
        let scorer = PositionScorer::from_config(config)?;
        Ok(Self { scorer, sampler: CandidateSampler::from_config(&config.sampler), sampler_config: config.sampler })
    }
}

impl<E: ShotEvaluator> DribblePlanner<E> {
    pub fn with_parts(scorer: PositionScorer<E>, sampler: CandidateSampler, sampler_config: SamplerConfig) -> Result<Self> {
        sampler_config.validate()?;
        Ok(Self { scorer, sampler, sampler_config })
    }

    pub fn scorer(&self) -> &PositionScorer<E> {
        &self.scorer
    }

    pub fn sampler_config(&self) -> &SamplerConfig {
        &self.sampler_config
    }

    /// Sample around the ball and pick the best target
    pub fn plan(&mut self, ball_position: Point, world: &World) -> Option<DribbleTarget> {
        self.plan_from(ball_position, ball_position, world)
    }

    /// Sample around `pivot` (e.g. the dribbling robot) instead of the ball
    pub fn plan_from(&mut self, pivot: Point, ball_position: Point, world: &World) -> Option<DribbleTarget> {
        self.plan_with_report(pivot, ball_position, world).target
    }

    pub fn plan_with_report(&mut self, pivot: Point, ball_position: Point, world: &World) -> PlanReport {
        let candidates = self.sampler.sample(pivot, &self.sampler_config);
        let breakdowns = score_candidates(&self.scorer, &candidates, ball_position, world);
        let totals: Vec<f64> = breakdowns.iter().map(|b| b.total).collect();
        let chosen = select_best(&totals);
        let target = chosen.map(|idx| DribbleTarget::new(ball_position, candidates[idx]));

        match (&target, chosen) {
            (Some(t), Some(idx)) => debug!(
                candidates = candidates.len(),
                chosen = idx,
                score = totals[idx],
                target = %t,
                "dribble target selected"
            ),
            _ => debug!(candidates = candidates.len(), "no dribble target selected"),
        }

        PlanReport {
            pivot,
            ball: ball_position,
            candidates: candidates
                .into_iter()
                .zip(breakdowns)
                .map(|(position, breakdown)| CandidateReport { position, breakdown })
                .collect(),
            chosen,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PassingConfig, ScoreWeights};
    use crate::geometry::{distance, point};
    use crate::shot::Shot;
    use crate::world::{Field, Goal, Robot, Team};

    fn no_shot(_: &Goal, _: Point, _: &[Robot]) -> Option<Shot> {
        None
    }

    fn quiet_scorer() -> PositionScorer<fn(&Goal, Point, &[Robot]) -> Option<Shot>> {
        PositionScorer::with_evaluator(
            PassingConfig::default(),
            ScoreWeights::default(),
            no_shot as fn(&Goal, Point, &[Robot]) -> Option<Shot>,
        )
        .unwrap()
    }

    fn empty_world() -> World {
        World::new(Field::div_b(), Team::empty(), Team::empty())
    }

    #[test]
    fn test_select_best_strict_max_first_on_ties() {
        assert_eq!(select_best(&[0.2, 0.7, 0.7, 0.1]), Some(1));
        assert_eq!(select_best(&[0.9, 0.1]), Some(0));
        assert_eq!(select_best(&[0.1, 0.9]), Some(1));
        assert_eq!(select_best(&[]), None);
        assert_eq!(select_best(&[f64::NAN, 0.3]), Some(1));
        assert_eq!(select_best(&[f64::NAN]), None);
    }

    #[test]
    fn test_higher_score_wins_regardless_of_order() {
        let scorer = quiet_scorer();
        let world = empty_world();
        let ball = point(0.0, 0.0);
        // Closer to the enemy goal and a shorter dribble: strictly better.
        let good = point(0.5, 0.0);
        let bad = point(-1.5, 0.0);

        for candidates in [[good, bad], [bad, good]] {
            let target = select_target(&scorer, &candidates, ball, &world).unwrap();
            assert_eq!(target.end(), good);
            assert_eq!(target.start(), ball);
        }
    }

    #[test]
    fn test_equal_scores_pick_first_generated() {
        let scorer = quiet_scorer();
        let world = empty_world();
        let ball = point(0.0, 0.0);
        let upper = point(1.0, 0.5);
        let lower = point(1.0, -0.5);
        assert_eq!(scorer.score(upper, ball, &world), scorer.score(lower, ball, &world));

        assert_eq!(select_target(&scorer, &[upper, lower], ball, &world).unwrap().end(), upper);
        assert_eq!(select_target(&scorer, &[lower, upper], ball, &world).unwrap().end(), lower);
    }

    #[test]
    fn test_empty_candidate_set() {
        assert!(select_target(&quiet_scorer(), &[], point(0.0, 0.0), &empty_world()).is_none());
    }

    #[test]
    fn test_parallel_scores_match_sequential() {
        let scorer = PositionScorer::new(PassingConfig::default(), ScoreWeights::default()).unwrap();
        let world = World::new(
            Field::div_b(),
            Team::new(vec![Robot::new(0, point(1.0, 1.0))]),
            Team::new(vec![Robot::new(5, point(2.0, -0.5)), Robot::new(6, point(3.0, 0.5))]),
        );
        let ball = point(0.2, 0.1);
        let candidates = CandidateSampler::seeded(5).sample_points_in_disk(ball, 1.0, 64);

        let parallel = score_candidates(&scorer, &candidates, ball, &world);
        let sequential: Vec<ScoreBreakdown> =
            candidates.iter().map(|&c| scorer.score_breakdown(c, ball, &world)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_seeded_planner_is_repeatable() {
        let mut config = DribbleConfig::default();
        config.sampler.seed = Some(99);
        let world = World::new(
            Field::div_b(),
            Team::new(vec![Robot::new(0, point(-1.0, 1.0))]),
            Team::new(vec![Robot::new(1, point(1.0, 0.0))]),
        );
        let ball = point(0.0, 0.0);

        let first = DribblePlanner::new(&config).unwrap().plan(ball, &world);
        let second = DribblePlanner::new(&config).unwrap().plan(ball, &world);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_target_within_radius_of_pivot() {
        let mut config = DribbleConfig::default();
        config.sampler = SamplerConfig { max_radius: 0.5, sample_count: 25, seed: Some(3) };
        let mut planner = DribblePlanner::new(&config).unwrap();
        let ball = point(0.0, 0.0);
        let pivot = point(0.1, 0.0);

        let target = planner.plan_from(pivot, ball, &empty_world()).unwrap();
        assert_eq!(target.start(), ball);
        assert!(distance(target.end(), pivot) <= 0.5 * (1.0 + 1e-12));
    }

    #[test]
    fn test_report_lists_every_candidate() {
        let mut config = DribbleConfig::default();
        config.sampler.seed = Some(17);
        config.sampler.sample_count = 8;
        let mut planner = DribblePlanner::new(&config).unwrap();
        let ball = point(1.0, 0.0);

        let report = planner.plan_with_report(ball, ball, &empty_world());
        assert_eq!(report.candidates.len(), 8);
        let chosen = report.chosen.unwrap();
        let best = report.candidates[chosen].breakdown.total;
        assert!(report.candidates.iter().all(|c| c.breakdown.total <= best));
        assert!(report.candidates[..chosen].iter().all(|c| c.breakdown.total < best));
        assert_eq!(report.target.unwrap().end(), report.candidates[chosen].position);
    }

    #[test]
    fn test_invalid_sampler_config_rejected() {
        let mut config = DribbleConfig::default();
        config.sampler.sample_count = 0;
        assert!(DribblePlanner::new(&config).is_err());
    }
}
