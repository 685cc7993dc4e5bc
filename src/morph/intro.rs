//! Intro script - the timed shape sequence played at startup
//!
//! The script is a finite list of steps. Each step names a target layout,
//! how long the morph toward it takes, and how long to hold before the next
//! step fires. The driver polls the script once per frame.

use std::time::Duration;

use crate::shapes::{LayoutKind, ShapeKind};

/// One step of the intro
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroStep {
    pub target: LayoutKind,
    pub morph: Duration,
    pub hold: Duration,
}

impl IntroStep {
    /// Time from this step firing until the next one may fire
    fn span(&self) -> f64 {
        (self.morph + self.hold).as_secs_f64()
    }
}

/// Step-index state machine over a fixed list of steps
#[derive(Clone, Debug)]
pub struct IntroScript {
    steps: Vec<IntroStep>,
    /// Index of the next step to fire
    next: usize,
    /// Time the previous step fired (seconds)
    fired_at: f64,
}

impl IntroScript {
    pub fn new(steps: Vec<IntroStep>) -> Self {
        Self {
            steps,
            next: 0,
            fired_at: 0.0,
        }
    }

    /// Default startup sequence
    ///
    /// Holds the loading scatter for `lead`, visits every shape in carousel
    /// order, then settles on `last`.
    pub fn standard(last: ShapeKind, morph: Duration, hold: Duration, lead: Duration) -> Self {
        let mut steps = Vec::with_capacity(ShapeKind::ALL.len() + 2);
        steps.push(IntroStep {
            target: LayoutKind::Loading,
            morph: Duration::ZERO,
            hold: lead,
        });
        for kind in ShapeKind::ALL {
            steps.push(IntroStep {
                target: (*kind).into(),
                morph,
                hold,
            });
        }
        steps.push(IntroStep {
            target: last.into(),
            morph,
            hold: Duration::ZERO,
        });
        Self::new(steps)
    }

    /// Return the step that fires at `now`, if any
    ///
    /// The first step fires on the first poll; each later step fires once
    /// the previous step's morph and hold have elapsed.
    pub fn poll(&mut self, now: f64) -> Option<IntroStep> {
        let step = *self.steps.get(self.next)?;
        if let Some(prev) = self.next.checked_sub(1).map(|i| self.steps[i]) {
            if now - self.fired_at < prev.span() {
                return None;
            }
        }
        self.next += 1;
        self.fired_at = now;
        Some(step)
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}
