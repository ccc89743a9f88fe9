//! Easing functions
//!
//! Cubic ease family applied to normalized progress (0.0 to 1.0).

/// Easing function selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Slow start
    EaseIn,
    /// Slow finish (default for reveals)
    #[default]
    EaseOut,
    /// Slow start and finish
    EaseInOut,
}

impl Easing {
    /// Apply the easing curve to a progress value
    ///
    /// Input is clamped to 0.0..=1.0; output stays within the same range.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}
