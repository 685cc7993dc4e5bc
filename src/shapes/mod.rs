//! Shapes module - shape identifiers and particle layouts
//!
//! This module provides:
//! - `ShapeKind` / `LayoutKind` identifiers
//! - `Outline` trait and the primitive curves layouts are traced from
//! - Fixed-size `PointSet` layouts for every shape

mod kind;
mod layout;
mod primitives;
mod traits;

pub use kind::{LayoutKind, ShapeKind};
#[allow(unused_imports)]
pub use layout::{generate_outline, Point, PointSet, POINT_COUNT};
