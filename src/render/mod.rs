//! Render module - UI components for the calculator screen
//!
//! This module provides:
//! - Particle field widget for the morphing shape preview
//! - Horizontally scrolling shape carousel

mod carousel;
mod particles;

pub use carousel::Carousel;
pub use particles::{FieldSettings, ParticleField};
