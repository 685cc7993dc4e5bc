//! Morph driver - owns the animation state for the particle field
//!
//! All state changes go through two entry points:
//! - `select_shape` when the user picks a shape
//! - `advance_frame` once per rendered frame
//!
//! Times are plain seconds on whatever monotonic clock the caller uses
//! (egui's `InputState::time` in the app).

use std::time::Duration;

use super::float::FloatOscillator;
use super::interpolate::{ease_in_out, interpolate};
use super::intro::IntroScript;
use crate::shapes::{generate_outline, LayoutKind, Point, PointSet, ShapeKind};

/// Animation durations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphTiming {
    /// Morph length for user selections
    pub morph: Duration,
    /// Morph length for steps of the intro
    pub intro_morph: Duration,
    /// Pause between intro steps
    pub intro_hold: Duration,
    /// How long the loading scatter shows before the first shape
    pub intro_lead: Duration,
    /// One sweep of the idle float
    pub float_period: Duration,
}

impl Default for MorphTiming {
    fn default() -> Self {
        Self {
            morph: Duration::from_millis(800),
            intro_morph: Duration::from_millis(500),
            intro_hold: Duration::from_millis(300),
            intro_lead: Duration::from_millis(600),
            float_period: Duration::from_secs(3),
        }
    }
}

/// Snapshot of the animation for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphState {
    pub start: LayoutKind,
    pub end: LayoutKind,
    /// Eased morph progress in [0, 1]
    pub progress: f32,
    /// Ping-pong float phase in [0, 1]
    pub float_phase: f32,
}

/// Drives morphs between layouts and the startup intro
pub struct MorphDriver {
    state: MorphState,
    start_points: PointSet,
    end_points: PointSet,
    timing: MorphTiming,
    oscillator: FloatOscillator,
    /// When the current morph began (seconds)
    morph_started: f64,
    /// Length of the current morph
    morph_duration: Duration,
    intro: Option<IntroScript>,
}

impl MorphDriver {
    /// Create a driver showing the loading scatter, at rest
    pub fn new(timing: MorphTiming, now: f64) -> Self {
        let points = generate_outline(LayoutKind::Loading);
        Self {
            state: MorphState {
                start: LayoutKind::Loading,
                end: LayoutKind::Loading,
                progress: 1.0,
                float_phase: 0.0,
            },
            start_points: points.clone(),
            end_points: points,
            timing,
            oscillator: FloatOscillator::new(timing.float_period, now),
            morph_started: now,
            morph_duration: Duration::ZERO,
            intro: None,
        }
    }

    /// Attach an intro script, played from the next frame on
    pub fn with_intro(mut self, script: IntroScript) -> Self {
        log::debug!("Intro script queued with {} steps", script.len());
        self.intro = Some(script);
        self
    }

    /// Standard intro ending on `last`, using this driver's timing
    pub fn with_standard_intro(self, last: ShapeKind) -> Self {
        let timing = self.timing;
        self.with_intro(IntroScript::standard(
            last,
            timing.intro_morph,
            timing.intro_hold,
            timing.intro_lead,
        ))
    }

    /// User picked a shape: cancel any intro and morph toward it
    pub fn select_shape(&mut self, kind: ShapeKind, now: f64) {
        if self.intro.take().is_some() {
            log::debug!("Intro cancelled by selection");
        }
        self.begin_morph(kind.into(), self.timing.morph, now);
    }

    /// Start morphing from the current target toward `target`
    ///
    /// A morph still in flight is abandoned; the new morph starts from the
    /// old target's layout. Re-targeting the current target does nothing.
    fn begin_morph(&mut self, target: LayoutKind, duration: Duration, now: f64) {
        if target == self.state.end {
            return;
        }
        log::debug!("Morph {:?} -> {:?} over {:?}", self.state.end, target, duration);

        let next = generate_outline(target);
        self.start_points = std::mem::replace(&mut self.end_points, next);
        self.state.start = self.state.end;
        self.state.end = target;
        self.state.progress = 0.0;
        self.morph_started = now;
        self.morph_duration = duration;
    }

    /// Advance the animation to `now` and return the frame's state
    pub fn advance_frame(&mut self, now: f64) -> MorphState {
        if let Some(step) = self.intro.as_mut().and_then(|script| script.poll(now)) {
            log::debug!("Intro step -> {:?}", step.target);
            self.begin_morph(step.target, step.morph, now);
        }
        if self.intro.as_ref().is_some_and(IntroScript::is_finished) {
            log::debug!("Intro finished");
            self.intro = None;
        }

        if self.state.start != self.state.end {
            let duration = self.morph_duration.as_secs_f64();
            let linear = if duration > 0.0 {
                ((now - self.morph_started) / duration).clamp(0.0, 1.0) as f32
            } else {
                1.0
            };
            self.state.progress = ease_in_out(linear);

            if linear >= 1.0 {
                // Settled: the target becomes the source layout
                self.state.start = self.state.end;
                self.start_points = self.end_points.clone();
                self.state.progress = 1.0;
            }
        }

        self.state.float_phase = self.oscillator.phase_at(now);
        self.state
    }

    /// Normalized position of particle `index` in the current frame
    pub fn particle(&self, index: usize) -> Point {
        interpolate(
            &self.start_points,
            &self.end_points,
            self.state.progress,
            self.state.float_phase,
            index,
        )
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    /// Layout the particles are moving from
    pub fn start_points(&self) -> &PointSet {
        &self.start_points
    }

    /// Layout the particles are moving toward
    pub fn end_points(&self) -> &PointSet {
        &self.end_points
    }
}
