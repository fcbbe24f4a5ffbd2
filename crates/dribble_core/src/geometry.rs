//! Geometry helpers shared by the scorer and the shot evaluator.
//!
//! All coordinates are in metres. `Point` is a plain nalgebra vector so the
//! usual algebra (`-`, `dot`, `norm`, `norm_squared`) is available directly.

use nalgebra::Vector2;

/// 2D field position in metres
pub type Point = Vector2<f64>;

/// Shorthand constructor used throughout the crate and in tests
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Shortest distance from `p` to the segment `[line_start, line_end]`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to that endpoint rather than to the infinite line.
/// A zero-length segment degenerates to the distance to `line_start`.
pub fn distance_point_to_segment(p: Point, line_start: Point, line_end: Point) -> f64 {
    let segment = line_end - line_start;
    let length_sq = segment.norm_squared();

    if length_sq == 0.0 {
        return distance(p, line_start);
    }

    let t = ((p - line_start).dot(&segment) / length_sq).clamp(0.0, 1.0);
    let closest = line_start + segment * t;

    distance(p, closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_perpendicular_foot_on_segment() {
        let d = distance_point_to_segment(point(5.0, 5.0), point(0.0, 0.0), point(10.0, 0.0));
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn test_clamps_to_start_endpoint() {
        let d = distance_point_to_segment(point(-5.0, 0.0), point(0.0, 0.0), point(10.0, 0.0));
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_segment() {
        let d = distance_point_to_segment(point(3.0, 4.0), point(0.0, 0.0), point(0.0, 0.0));
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn test_not_infinite_line_distance() {
        // (13, 4) sits 4m off the x-axis but the nearest segment point is B=(10, 0).
        let d = distance_point_to_segment(point(13.0, 4.0), point(0.0, 0.0), point(10.0, 0.0));
        assert!((d - 5.0).abs() < EPS, "expected endpoint distance 5, got {}", d);
        assert!((d - 4.0).abs() > 0.5);
    }

    #[test]
    fn test_point_on_segment_is_zero() {
        let d = distance_point_to_segment(point(2.5, 2.5), point(0.0, 0.0), point(5.0, 5.0));
        assert!(d.abs() < EPS);
    }

    #[test]
    fn test_symmetric_in_segment_direction() {
        let p = point(1.0, -3.0);
        let a = point(-2.0, 1.0);
        let b = point(4.0, 2.0);
        let forward = distance_point_to_segment(p, a, b);
        let backward = distance_point_to_segment(p, b, a);
        assert!((forward - backward).abs() < EPS);
    }
}
