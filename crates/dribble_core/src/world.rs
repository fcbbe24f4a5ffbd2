//! Read-only world snapshot consumed by the scorer.
//!
//! Coordinates follow the usual robot-soccer convention: origin at the
//! centre spot, +x towards the enemy goal, metres throughout.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::{distance, point, Point};

/// A goal mouth, described by its centre on the goal line and its width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub center: Point,
    pub width: f64,
}

impl Goal {
    pub fn new(center: Point, width: f64) -> Self {
        Self { center, width }
    }

    /// Post with the smaller y coordinate
    pub fn neg_post(&self) -> Point {
        point(self.center.x, self.center.y - self.width / 2.0)
    }

    /// Post with the larger y coordinate
    pub fn pos_post(&self) -> Point {
        point(self.center.x, self.center.y + self.width / 2.0)
    }
}

/// Field geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Goal line to goal line (m)
    pub x_length: f64,
    /// Touchline to touchline (m)
    pub y_length: f64,
    pub enemy_goal: Goal,
}

impl Field {
    pub fn new(x_length: f64, y_length: f64, enemy_goal: Goal) -> Self {
        Self { x_length, y_length, enemy_goal }
    }

    /// SSL division B: 9m x 6m, 1m goal
    pub fn div_b() -> Self {
        Self::new(9.0, 6.0, Goal::new(point(4.5, 0.0), 1.0))
    }

    /// SSL division A: 12m x 9m, 1.8m goal
    pub fn div_a() -> Self {
        Self::new(12.0, 9.0, Goal::new(point(6.0, 0.0), 1.8))
    }

    pub fn enemy_goal_center(&self) -> Point {
        self.enemy_goal.center
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x.abs() <= self.x_length / 2.0 && p.y.abs() <= self.y_length / 2.0
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::div_b()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub id: u32,
    pub position: Point,
}

impl Robot {
    pub fn new(id: u32, position: Point) -> Self {
        Self { id, position }
    }
}

/// Robots of one side, unique by id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Robot>", into = "Vec<Robot>")]
pub struct Team {
    robots: Vec<Robot>,
}

impl Team {
    /// Build a team, keeping the first robot seen for each id
    pub fn new(robots: impl IntoIterator<Item = Robot>) -> Self {
        let mut unique: Vec<Robot> = Vec::new();
        for robot in robots {
            if unique.iter().any(|r| r.id == robot.id) {
                warn!(id = robot.id, "duplicate robot id in team snapshot, ignoring");
                continue;
            }
            unique.push(robot);
        }
        Self { robots: unique }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all_robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn get(&self, id: u32) -> Option<&Robot> {
        self.robots.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.robots.iter().map(|r| r.position)
    }

    /// Distance from `p` to the closest robot, `None` for an empty team
    pub fn nearest_distance(&self, p: Point) -> Option<f64> {
        self.positions().map(|pos| distance(pos, p)).min_by(f64::total_cmp)
    }
}

impl From<Vec<Robot>> for Team {
    fn from(robots: Vec<Robot>) -> Self {
        Team::new(robots)
    }
}

impl From<Team> for Vec<Robot> {
    fn from(team: Team) -> Self {
        team.robots
    }
}

/// One consistent snapshot of the game
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct World {
    #[serde(default)]
    pub field: Field,
    #[serde(default)]
    pub friendly_team: Team,
    #[serde(default)]
    pub enemy_team: Team,
    #[serde(default)]
    pub ball: Option<Point>,
}

impl World {
    pub fn new(field: Field, friendly_team: Team, enemy_team: Team) -> Self {
        Self { field, friendly_team, enemy_team, ball: None }
    }

    pub fn with_ball(mut self, ball: Point) -> Self {
        self.ball = Some(ball);
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
