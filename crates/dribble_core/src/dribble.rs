use std::fmt;

use serde::Serialize;

use crate::geometry::{distance, Point};

/// A chosen dribble: carry the ball from `start` to `end`.
///
/// Immutable once built; both points are required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DribbleTarget {
    start: Point,
    end: Point,
}

impl DribbleTarget {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Straight-line dribble length (m)
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }
}

impl fmt::Display for DribbleTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Dribble(start: ({}, {}), end: ({}, {}))",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
