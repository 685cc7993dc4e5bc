//! Particle interpolation between two layouts
//!
//! Particle `i` moves on a straight line from `start[i]` to `end[i]` as the
//! eased progress goes from 0 to 1. A small sine/cosine offset is added on
//! top at all times so the field keeps drifting while idle.

use std::f32::consts::TAU;

use crate::shapes::{Point, PointSet};

/// Largest idle offset in either axis (normalized units)
pub const FLOAT_AMPLITUDE: f32 = 0.008;

/// Cubic ease-in-out mapping.
/// Input: linear progress, clamped to [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0].
pub fn ease_in_out(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Idle drift for particle `index` at a float phase in [0, 1]
pub fn float_offset(index: usize, float_phase: f32) -> (f32, f32) {
    let t = float_phase * TAU;
    let i = index as f32;
    (
        FLOAT_AMPLITUDE * (t + i * 0.1).sin(),
        FLOAT_AMPLITUDE * (t + i * 0.15).cos(),
    )
}

/// Linear blend between two points
pub fn lerp(a: Point, b: Point, progress: f32) -> Point {
    Point::new(
        a.x + (b.x - a.x) * progress,
        a.y + (b.y - a.y) * progress,
    )
}

/// Current normalized position of particle `index`
///
/// # Panics
/// Panics if `index` is out of range for either set. Layouts from
/// `generate_outline` all share the same length.
pub fn interpolate(
    start: &PointSet,
    end: &PointSet,
    progress: f32,
    float_phase: f32,
    index: usize,
) -> Point {
    let base = lerp(start[index], end[index], progress);
    let (dx, dy) = float_offset(index, float_phase);
    Point::new(base.x + dx, base.y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{generate_outline, ShapeKind, POINT_COUNT};

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_endpoints_match_layouts() {
        let start = generate_outline(ShapeKind::Circle.into());
        let end = generate_outline(ShapeKind::Box.into());
        let phase = 0.37;

        for i in 0..POINT_COUNT {
            let (dx, dy) = float_offset(i, phase);

            let p = interpolate(&start, &end, 0.0, phase, i);
            assert!((p.x - dx - start[i].x).abs() < 1e-6);
            assert!((p.y - dy - start[i].y).abs() < 1e-6);

            let p = interpolate(&start, &end, 1.0, phase, i);
            assert!((p.x - dx - end[i].x).abs() < 1e-6);
            assert!((p.y - dy - end[i].y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_halfway() {
        let p = lerp(Point::new(0.2, 0.2), Point::new(0.8, 0.6), 0.5);
        assert!((p.x - 0.5).abs() < 1e-6);
        assert!((p.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_float_amplitude_bound() {
        for i in 0..POINT_COUNT {
            for step in 0..=50 {
                let (dx, dy) = float_offset(i, step as f32 / 50.0);
                assert!(dx.abs() <= FLOAT_AMPLITUDE);
                assert!(dy.abs() <= FLOAT_AMPLITUDE);
            }
        }
    }
}
