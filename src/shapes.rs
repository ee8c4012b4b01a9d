//! Target-shape generators.
//!
//! While a formation is active, every particle is pulled toward an assigned
//! target point. The generators here lay those points out deterministically:
//! [`circle_targets`] spaces them evenly around a circle, [`square_targets`]
//! walks them along the perimeter of a (possibly rotated) square.
//!
//! Both functions are pure; the engine re-invokes them whenever the particle
//! count, shape radius, or shape angle changes while a formation is active.

use glam::DVec2;
use std::f64::consts::TAU;

/// The formation particles are being pulled into.
///
/// Mutual exclusion between formations is a type-level fact: the engine holds
/// an `Option<Shape>`, so at most one formation is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Evenly spaced ring of radius `shape_radius`.
    Circle,
    /// Perimeter of a square with half-side `shape_radius`, rotated by
    /// `shape_angle`.
    Square,
}

/// Target points evenly spaced on a circle.
///
/// Point `i` sits at angle `-i * 2π/count` (clockwise from the top of the
/// circle, since the basis is `(sin θ, cos θ)`), at distance `radius` from
/// `center`.
pub fn circle_targets(count: usize, radius: f64, center: DVec2) -> Vec<DVec2> {
    let mut targets = Vec::with_capacity(count);
    let mut angle: f64 = 0.0;
    let delta_theta = TAU / count as f64;

    for _ in 0..count {
        targets.push(DVec2::new(angle.sin(), angle.cos()) * radius + center);
        angle -= delta_theta;
    }

    targets
}

/// Target points along the perimeter of a square.
///
/// The walk starts at the corner `(radius, radius)` and moves left, then up,
/// then right, then down, stepping `8 * radius / count` each time. Each raw
/// point is rotated by `angle` about the origin and translated by `center`.
/// The corner itself is the first emitted point; the step applies after
/// emission.
///
/// The side for point `i` is `i * 4 / count` by integer floor, so when
/// `count` is not divisible by 4 the final (downward) leg absorbs the
/// remainder.
pub fn square_targets(count: usize, radius: f64, angle: f64, center: DVec2) -> Vec<DVec2> {
    let mut targets = Vec::with_capacity(count);
    let rotation = DVec2::from_angle(angle);
    let mut pos = DVec2::new(radius, radius);
    let delta_length = 8.0 * radius / count as f64;

    for i in 0..count {
        targets.push(rotation.rotate(pos) + center);

        match i * 4 / count {
            0 => pos.x -= delta_length,
            1 => pos.y -= delta_length,
            2 => pos.x += delta_length,
            _ => pos.y += delta_length,
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_circle_count_and_radius() {
        let center = DVec2::new(400.0, 400.0);
        let targets = circle_targets(8, 300.0, center);

        assert_eq!(targets.len(), 8);
        for t in &targets {
            assert!((t.distance(center) - 300.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_circle_adjacent_spacing() {
        let center = DVec2::ZERO;
        let targets = circle_targets(8, 1.0, center);

        // Adjacent points subtend 2π/8, i.e. a fixed chord length.
        let chord = 2.0 * (TAU / 16.0).sin();
        for i in 0..8 {
            let a = targets[i];
            let b = targets[(i + 1) % 8];
            assert!((a.distance(b) - chord).abs() < EPSILON);
        }
    }

    #[test]
    fn test_circle_starts_at_top_and_goes_clockwise() {
        let targets = circle_targets(4, 1.0, DVec2::ZERO);

        // Angle 0 with a (sin, cos) basis is the point (0, radius).
        assert!(targets[0].distance(DVec2::new(0.0, 1.0)) < EPSILON);
        // Decreasing angle: second point is at (-radius, 0).
        assert!(targets[1].distance(DVec2::new(-1.0, 0.0)) < EPSILON);
    }

    #[test]
    fn test_square_starts_at_corner() {
        let targets = square_targets(8, 2.0, 0.0, DVec2::ZERO);
        assert!(targets[0].distance(DVec2::new(2.0, 2.0)) < EPSILON);
    }

    #[test]
    fn test_square_bounding_box() {
        let targets = square_targets(16, 3.0, 0.0, DVec2::ZERO);

        let min_x = targets.iter().map(|t| t.x).fold(f64::INFINITY, f64::min);
        let max_x = targets.iter().map(|t| t.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = targets.iter().map(|t| t.y).fold(f64::INFINITY, f64::min);
        let max_y = targets.iter().map(|t| t.y).fold(f64::NEG_INFINITY, f64::max);

        assert!((min_x - -3.0).abs() < EPSILON);
        assert!((max_x - 3.0).abs() < EPSILON);
        assert!((min_y - -3.0).abs() < EPSILON);
        assert!((max_y - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_square_walks_left_up_right_down() {
        let targets = square_targets(8, 2.0, 0.0, DVec2::ZERO);

        // Two points per side: x decreases first.
        assert!(targets[1].x < targets[0].x);
        assert!((targets[1].y - targets[0].y).abs() < EPSILON);
        // Then y decreases.
        assert!(targets[3].y < targets[2].y);
        // Then x increases.
        assert!(targets[5].x > targets[4].x);
        // Then y increases.
        assert!(targets[7].y > targets[6].y);
    }

    #[test]
    fn test_square_remainder_goes_to_last_leg() {
        // 10 points: sides get 3, 2, 3, 2 by floor division of i*4/10.
        let targets = square_targets(10, 1.0, 0.0, DVec2::ZERO);
        assert_eq!(targets.len(), 10);

        let sides: Vec<usize> = (0..10).map(|i| i * 4 / 10).collect();
        assert_eq!(sides, vec![0, 0, 0, 1, 1, 2, 2, 2, 3, 3]);
    }

    #[test]
    fn test_square_rotation_preserves_corner_distance() {
        let plain = square_targets(8, 2.0, 0.0, DVec2::ZERO);
        let rotated = square_targets(8, 2.0, 0.7, DVec2::ZERO);

        for (a, b) in plain.iter().zip(&rotated) {
            assert!((a.length() - b.length()).abs() < EPSILON);
        }
    }

    #[test]
    fn test_square_translation() {
        let center = DVec2::new(100.0, 50.0);
        let at_origin = square_targets(8, 2.0, 0.3, DVec2::ZERO);
        let moved = square_targets(8, 2.0, 0.3, center);

        for (a, b) in at_origin.iter().zip(&moved) {
            assert!((*a + center).distance(*b) < EPSILON);
        }
    }

    #[test]
    fn test_generators_are_deterministic() {
        let c = DVec2::new(1.0, 2.0);
        assert_eq!(circle_targets(50, 10.0, c), circle_targets(50, 10.0, c));
        assert_eq!(
            square_targets(50, 10.0, 0.5, c),
            square_targets(50, 10.0, 0.5, c)
        );
    }
}
