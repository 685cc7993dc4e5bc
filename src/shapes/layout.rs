//! Outline layouts - fixed-size point sets per shape
//!
//! Each shape is laid out as `POINT_COUNT` points in normalized space by
//! tracing runs along its edges. Point `i` of one layout always pairs with
//! point `i` of another when morphing, so every layout has exactly the same
//! length no matter how the per-edge arithmetic works out.

use std::f32::consts::PI;
use std::ops::Index;

use rand::Rng;

use super::kind::{LayoutKind, ShapeKind};
use super::primitives::{Ellipse, Line};
use super::traits::Outline;

/// Number of particles in every layout
pub const POINT_COUNT: usize = 120;

/// A 2D point in normalized [0, 1] space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An ordered, fixed-length set of outline points
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Build a set of exactly `len` points, padding or truncating as needed
    pub fn with_len(points: Vec<Point>, len: usize) -> Self {
        Self {
            points: fit_to_len(points, len),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

/// Force a point list to exactly `len` entries
///
/// Short lists repeat their last point; long lists keep their first `len`
/// points. An empty list is padded with the center of the unit square.
pub fn fit_to_len(mut points: Vec<Point>, len: usize) -> Vec<Point> {
    if points.len() > len {
        points.truncate(len);
    } else if points.len() < len {
        let last = points.last().copied().unwrap_or(Point::new(0.5, 0.5));
        points.resize(len, last);
    }
    points
}

/// Lay out `kind` with the default particle count
///
/// Deterministic for every real shape. `LayoutKind::Loading` draws from the
/// thread-local RNG.
pub fn generate_outline(kind: LayoutKind) -> PointSet {
    generate_outline_with(kind, POINT_COUNT, &mut rand::rng())
}

/// Lay out `kind` as exactly `count` points
///
/// The RNG is only consulted for `LayoutKind::Loading`.
pub fn generate_outline_with<R: Rng + ?Sized>(
    kind: LayoutKind,
    count: usize,
    rng: &mut R,
) -> PointSet {
    let points = match kind {
        LayoutKind::Loading => scatter(count, rng),
        LayoutKind::Shape(shape) => trace_shape(shape, count),
    };
    PointSet::with_len(points, count)
}

fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.random::<f32>(), rng.random::<f32>()))
        .collect()
}

const TRIANGLE: [Point; 3] = [
    Point::new(0.5, 0.2),
    Point::new(0.8, 0.8),
    Point::new(0.2, 0.8),
];

const RECTANGLE: [Point; 4] = [
    Point::new(0.2, 0.2),
    Point::new(0.8, 0.2),
    Point::new(0.8, 0.8),
    Point::new(0.2, 0.8),
];

const TRAPEZOID: [Point; 4] = [
    Point::new(0.35, 0.25),
    Point::new(0.65, 0.25),
    Point::new(0.8, 0.75),
    Point::new(0.2, 0.75),
];

const CONE_APEX: Point = Point::new(0.5, 0.2);
const CONE_BASE_Y: f32 = 0.75;
const CONE_BASE_RX: f32 = 0.3;
const CONE_BASE_RY: f32 = 0.08;

const CYLINDER_TOP_Y: f32 = 0.3;
const CYLINDER_BOTTOM_Y: f32 = 0.7;
const CYLINDER_RX: f32 = 0.3;
const CYLINDER_RY: f32 = 0.05;

/// Front face of the box; the back face is this shifted by `BOX_DEPTH`
const BOX_FRONT: [Point; 4] = [
    Point::new(0.2, 0.35),
    Point::new(0.65, 0.35),
    Point::new(0.65, 0.8),
    Point::new(0.2, 0.8),
];
const BOX_DEPTH: (f32, f32) = (0.15, -0.15);

fn trace_shape(shape: ShapeKind, count: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);

    match shape {
        ShapeKind::Circle => {
            Ellipse::circle(0.5, 0.5, 0.35).trace(count, &mut out);
        }

        ShapeKind::Triangle => trace_polygon(&TRIANGLE, count / 3, &mut out),
        ShapeKind::Rectangle => trace_polygon(&RECTANGLE, count / 4, &mut out),
        ShapeKind::Trapezoid => trace_polygon(&TRAPEZOID, count / 4, &mut out),

        ShapeKind::Cone => {
            let per_run = count / 3;
            let left = Point::new(0.5 - CONE_BASE_RX, CONE_BASE_Y);
            let right = Point::new(0.5 + CONE_BASE_RX, CONE_BASE_Y);

            Line::between(CONE_APEX, left).trace(per_run, &mut out);
            // Front half of the base, left extreme to right extreme
            Ellipse::new(0.5, CONE_BASE_Y, CONE_BASE_RX, CONE_BASE_RY)
                .arc(PI, -PI)
                .trace(per_run, &mut out);
            Line::between(right, CONE_APEX).trace(per_run, &mut out);
        }

        ShapeKind::Cylinder => {
            let per_ellipse = count / 3;
            let per_side = count / 6;
            let left = 0.5 - CYLINDER_RX;
            let right = 0.5 + CYLINDER_RX;

            Ellipse::new(0.5, CYLINDER_TOP_Y, CYLINDER_RX, CYLINDER_RY).trace(per_ellipse, &mut out);
            Ellipse::new(0.5, CYLINDER_BOTTOM_Y, CYLINDER_RX, CYLINDER_RY)
                .trace(per_ellipse, &mut out);
            Line::vertical(left, CYLINDER_TOP_Y, CYLINDER_BOTTOM_Y).trace(per_side, &mut out);
            Line::vertical(right, CYLINDER_TOP_Y, CYLINDER_BOTTOM_Y).trace(per_side, &mut out);
        }

        ShapeKind::Box => {
            let per_edge = count / 12;
            let back = BOX_FRONT.map(|p| Point::new(p.x + BOX_DEPTH.0, p.y + BOX_DEPTH.1));

            trace_polygon(&BOX_FRONT, per_edge, &mut out);
            trace_polygon(&back, per_edge, &mut out);
            for (near, far) in BOX_FRONT.iter().zip(back.iter()) {
                Line::between(*near, *far).trace(per_edge, &mut out);
            }
        }
    }

    out
}

/// Trace a closed polygon, `per_edge` points per edge
fn trace_polygon(corners: &[Point], per_edge: usize, out: &mut Vec<Point>) {
    let n = corners.len();
    for i in 0..n {
        Line::between(corners[i], corners[(i + 1) % n]).trace(per_edge, out);
    }
}
