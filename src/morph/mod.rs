//! Morph module - animating the particle field between layouts
//!
//! This module provides:
//! - Easing and per-particle interpolation with idle float
//! - `FloatOscillator` ping-pong phase for the float
//! - `IntroScript` timed startup sequence
//! - `MorphDriver` owning the per-frame `MorphState`

mod driver;
mod float;
mod interpolate;
mod intro;

pub use driver::{MorphDriver, MorphState, MorphTiming};
