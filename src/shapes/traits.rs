//! Outline trait definition
//!
//! Every piece of a shape's silhouette (an edge, an ellipse, an arc) is a
//! parametric curve. Layouts are built by sampling runs of points along
//! these curves and concatenating the runs.

use super::layout::Point;

/// A parametric curve in normalized [0, 1] x [0, 1] space
///
/// ## Parametric Representation
///
/// - `t = 0.0` → Start of the curve
/// - `t = 0.5` → Halfway along
/// - `t = 1.0` → End of the curve
///
/// ## Coordinate System
///
/// - X grows to the right, Y grows downward (screen order)
/// - (0.5, 0.5) is the middle of the drawing area
pub trait Outline {
    /// Sample the curve at parameter t
    fn sample(&self, t: f32) -> Point;

    /// Append `count` evenly spaced samples to `out`
    ///
    /// t runs from 0 up to but excluding 1, so consecutive runs that share
    /// an endpoint do not duplicate it.
    fn trace(&self, count: usize, out: &mut Vec<Point>) {
        out.reserve(count);
        for i in 0..count {
            let t = i as f32 / count as f32;
            out.push(self.sample(t));
        }
    }
}
