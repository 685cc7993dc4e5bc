//! Primitive curves - Line, Ellipse
//!
//! These are the building blocks the outline layouts are traced from.

use std::f32::consts::TAU;

use super::layout::Point;
use super::traits::Outline;

/// A line segment from (x1, y1) to (x2, y2)
///
/// ## Parametric Equation
/// ```text
/// x = x1 + t * (x2 - x1)
/// y = y1 + t * (y2 - y1)
/// ```
#[derive(Clone, Debug)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Line {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Line between two points
    pub fn between(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Vertical line at x position
    pub fn vertical(x: f32, y_start: f32, y_end: f32) -> Self {
        Self::new(x, y_start, x, y_end)
    }
}

impl Outline for Line {
    fn sample(&self, t: f32) -> Point {
        let x = self.x1 + t * (self.x2 - self.x1);
        let y = self.y1 + t * (self.y2 - self.y1);
        Point::new(x, y)
    }
}

/// An elliptical arc centered at (cx, cy)
///
/// ## Parametric Equation
/// ```text
/// angle = start + t * sweep
/// x = cx + rx * cos(angle)
/// y = cy + ry * sin(angle)
/// ```
///
/// A full sweep (2π) traces the whole ellipse; a circle is an ellipse with
/// equal radii.
#[derive(Clone, Debug)]
pub struct Ellipse {
    /// Center X coordinate
    pub cx: f32,
    /// Center Y coordinate
    pub cy: f32,
    /// Horizontal radius
    pub rx: f32,
    /// Vertical radius
    pub ry: f32,
    /// Angle at t = 0 (radians)
    pub start: f32,
    /// Angle covered from t = 0 to t = 1 (radians)
    pub sweep: f32,
}

impl Ellipse {
    /// Full ellipse starting at angle 0
    pub fn new(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            start: 0.0,
            sweep: TAU,
        }
    }

    /// Full circle starting at angle 0
    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx, cy, radius, radius)
    }

    /// Restrict to an arc
    pub fn arc(mut self, start: f32, sweep: f32) -> Self {
        self.start = start;
        self.sweep = sweep;
        self
    }
}

impl Outline for Ellipse {
    fn sample(&self, t: f32) -> Point {
        let angle = self.start + t * self.sweep;
        Point::new(
            self.cx + self.rx * angle.cos(),
            self.cy + self.ry * angle.sin(),
        )
    }
}
