//! Looping oscillator for micro-animations
//!
//! Drives the small infinite animations on the page (the pulsing crest, the
//! bobbing scroll indicator): a `[a, b, a]` value sequence repeated with a
//! fixed period, running until the unit is torn down.

use crate::easing::Easing;

/// A looping `a -> b -> a` oscillation
#[derive(Clone, Copy, Debug)]
pub struct LoopOscillator {
    low: f32,
    high: f32,
    period_ms: f32,
    easing: Easing,
    current_time: f32,
    playing: bool,
}

impl LoopOscillator {
    /// Create an oscillator; starts playing immediately
    pub fn new(low: f32, high: f32, period_ms: f32) -> Self {
        Self {
            low,
            high,
            period_ms,
            easing: Easing::EaseInOut,
            current_time: 0.0,
            playing: true,
        }
    }

    /// Override the easing applied to each half-cycle
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Stop the oscillation (teardown)
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance by delta time, wrapping at the period boundary
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing || self.period_ms <= 0.0 {
            return;
        }
        self.current_time = (self.current_time + dt_ms) % self.period_ms;
    }

    /// Current value: rises `low -> high` over the first half of the period,
    /// falls back `high -> low` over the second half
    pub fn value(&self) -> f32 {
        if self.period_ms <= 0.0 {
            return self.low;
        }
        let progress = self.current_time / self.period_ms;
        let (from, to, half_progress) = if progress < 0.5 {
            (self.low, self.high, progress * 2.0)
        } else {
            (self.high, self.low, (progress - 0.5) * 2.0)
        };
        let eased = self.easing.apply(half_progress);
        from + (to - from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillates_a_b_a() {
        let mut osc = LoopOscillator::new(1.0, 1.1, 2000.0).with_easing(Easing::Linear);

        assert!((osc.value() - 1.0).abs() < 1e-6);

        osc.tick(1000.0); // peak
        assert!((osc.value() - 1.1).abs() < 1e-4);

        osc.tick(999.0); // almost back to start
        assert!((osc.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_wraps_across_period() {
        let mut osc = LoopOscillator::new(0.0, 10.0, 2000.0).with_easing(Easing::Linear);

        // 2.5 periods land exactly at the peak
        osc.tick(5000.0);
        assert!((osc.value() - 10.0).abs() < 1e-4);
        assert!(osc.is_playing());
    }

    #[test]
    fn test_stop_freezes_value() {
        let mut osc = LoopOscillator::new(0.0, 10.0, 2000.0).with_easing(Easing::Linear);
        osc.tick(500.0);
        let frozen = osc.value();

        osc.stop();
        osc.tick(500.0);
        assert_eq!(osc.value(), frozen);
        assert!(!osc.is_playing());
    }
}
