//! Shot opportunity evaluation
//!
//! The scorer only needs a yes/no answer ("is there a viable shot from
//! here?"), so the seam is the [`ShotEvaluator`] trait. Production callers
//! can plug in their own evaluator; [`OpenLaneShotEvaluator`] is the default
//! and treats a shot as viable when at least one straight lane from the
//! shooter to the goal mouth is clear of obstacles.

use serde::Serialize;

use crate::geometry::{distance_point_to_segment, Point};
use crate::world::{Goal, Robot};

/// SSL robot radius (m)
pub const ROBOT_RADIUS: f64 = 0.09;
/// Golf ball radius (m)
pub const BALL_RADIUS: f64 = 0.0215;

/// A viable shot on goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shot {
    pub origin: Point,
    /// Aim point on the goal line
    pub target: Point,
    /// Share of sampled aim points with a clear lane, in [0, 1]
    pub open_fraction: f64,
}

/// Answers "can we score from `position`?"
pub trait ShotEvaluator: Send + Sync {
    fn best_shot(&self, goal: &Goal, position: Point, obstacles: &[Robot]) -> Option<Shot>;
}

impl<F> ShotEvaluator for F
where
    F: Fn(&Goal, Point, &[Robot]) -> Option<Shot> + Send + Sync,
{
    fn best_shot(&self, goal: &Goal, position: Point, obstacles: &[Robot]) -> Option<Shot> {
        self(goal, position, obstacles)
    }
}

/// Samples aim points across the goal mouth and keeps the one with the most
/// clearance from every obstacle.
#[derive(Debug, Clone, Copy)]
pub struct OpenLaneShotEvaluator {
    /// Number of aim points spread post to post (>= 2)
    pub aim_samples: usize,
    /// Minimum obstacle-to-lane distance for the lane to count as open
    pub clearance: f64,
}

impl Default for OpenLaneShotEvaluator {
    fn default() -> Self {
        Self { aim_samples: 9, clearance: ROBOT_RADIUS + BALL_RADIUS }
    }
}

impl OpenLaneShotEvaluator {
    pub fn new(aim_samples: usize, clearance: f64) -> Self {
        Self { aim_samples: aim_samples.max(2), clearance }
    }

    fn aim_points(&self, goal: &Goal) -> impl Iterator<Item = Point> {
        let neg = goal.neg_post();
        let pos = goal.pos_post();
        let n = self.aim_samples.max(2);
        (0..n).map(move |i| neg + (pos - neg) * (i as f64 / (n - 1) as f64))
    }

    /// Smallest obstacle distance to the lane, infinite with no obstacles
    fn lane_clearance(position: Point, target: Point, obstacles: &[Robot]) -> f64 {
        obstacles
            .iter()
            .map(|r| distance_point_to_segment(r.position, position, target))
            .fold(f64::INFINITY, f64::min)
    }
}

impl ShotEvaluator for OpenLaneShotEvaluator {
    fn best_shot(&self, goal: &Goal, position: Point, obstacles: &[Robot]) -> Option<Shot> {
        let mut total = 0usize;
        let mut open = 0usize;
        let mut best: Option<(Point, f64)> = None;

        for target in self.aim_points(goal) {
            total += 1;
            let clearance = Self::lane_clearance(position, target, obstacles);
            if clearance <= self.clearance {
                continue;
            }
            open += 1;

            // Prefer more clearance; among equals prefer the aim point nearer the centre.
            let better = match best {
                None => true,
                Some((best_target, best_clearance)) => {
                    clearance > best_clearance
                        || (clearance == best_clearance
                            && (target - goal.center).norm() < (best_target - goal.center).norm())
                }
            };
            if better {
                best = Some((target, clearance));
            }
        }

        best.map(|(target, _)| Shot { origin: position, target, open_fraction: open as f64 / total as f64 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;
    use crate::world::Field;

    fn goal() -> Goal {
        Field::div_b().enemy_goal
    }

    #[test]
    fn test_clear_goal_shoots_at_centre() {
        let shot = OpenLaneShotEvaluator::default().best_shot(&goal(), point(2.0, 0.0), &[]).unwrap();
        assert_eq!(shot.target, point(4.5, 0.0));
        assert_eq!(shot.open_fraction, 1.0);
        assert_eq!(shot.origin, point(2.0, 0.0));
    }

    #[test]
    fn test_walled_goal_has_no_shot() {
        let wall: Vec<Robot> = (0..6)
            .map(|i| Robot::new(i, point(4.3, -0.5 + 0.2 * i as f64)))
            .collect();
        assert!(OpenLaneShotEvaluator::default().best_shot(&goal(), point(2.0, 0.0), &wall).is_none());
    }

    #[test]
    fn test_keeper_on_centre_pushes_aim_to_a_post() {
        let keeper = [Robot::new(0, point(4.4, 0.0))];
        let shot = OpenLaneShotEvaluator::default().best_shot(&goal(), point(2.0, 0.0), &keeper).unwrap();
        assert!(shot.target.y.abs() > 0.2, "aim should move away from keeper: {:?}", shot.target);
        assert!(shot.open_fraction < 1.0);
        assert!(shot.open_fraction > 0.0);
    }

    #[test]
    fn test_closure_is_an_evaluator() {
        let never = |_: &Goal, _: Point, _: &[Robot]| -> Option<Shot> { None };
        assert!(never.best_shot(&goal(), point(0.0, 0.0), &[]).is_none());
    }
}
