//! Float oscillator - slow ping-pong phase for the idle "breathing" motion
//!
//! Unlike a looping LFO, the phase sweeps 0 → 1 over one period and then
//! sweeps back 1 → 0 over the next, so the motion never jumps.

use std::time::Duration;

/// Ping-pong phase generator
#[derive(Clone, Debug)]
pub struct FloatOscillator {
    /// Time for a single sweep in one direction
    pub period: Duration,
    /// Time the oscillator was started (seconds, same clock as `phase_at`)
    pub epoch: f64,
}

impl FloatOscillator {
    pub fn new(period: Duration, epoch: f64) -> Self {
        Self { period, epoch }
    }

    /// Phase at a given time
    ///
    /// # Arguments
    /// * `time` - Current time in seconds
    ///
    /// # Returns
    /// Value in [0, 1]; rising during even sweeps, falling during odd ones
    pub fn phase_at(&self, time: f64) -> f32 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }

        // Position within a full there-and-back cycle, 0.0 to 2.0
        let cycle = ((time - self.epoch) / period).rem_euclid(2.0);
        let phase = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        phase as f32
    }
}

impl Default for FloatOscillator {
    fn default() -> Self {
        Self::new(Duration::from_secs(3), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_pong() {
        let osc = FloatOscillator::default();

        assert!(osc.phase_at(0.0).abs() < 1e-6);
        assert!((osc.phase_at(1.5) - 0.5).abs() < 1e-6);
        assert!((osc.phase_at(3.0) - 1.0).abs() < 1e-6);
        // Reversed on the way back
        assert!((osc.phase_at(4.5) - 0.5).abs() < 1e-6);
        assert!(osc.phase_at(6.0).abs() < 1e-6);
    }

    #[test]
    fn test_epoch_offset() {
        let osc = FloatOscillator::new(Duration::from_secs(3), 10.0);
        assert!(osc.phase_at(10.0).abs() < 1e-6);
        assert!((osc.phase_at(11.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_stays_in_range() {
        let osc = FloatOscillator::default();
        for i in 0..200 {
            let p = osc.phase_at(i as f64 * 0.137);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}
