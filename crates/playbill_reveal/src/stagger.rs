//! Stagger configuration for grouped reveals
//!
//! A per-unit delay offset proportional to its position in a sequence, so
//! grouped reveals appear sequential rather than simultaneous.

/// Direction for stagger animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// Animate first to last
    #[default]
    Forward,
    /// Animate last to first
    Reverse,
    /// Animate from center outward
    FromCenter,
}

/// Configuration for stagger delays
#[derive(Clone, Copy, Debug)]
pub struct StaggerConfig {
    /// Delay between each unit's reveal start (ms)
    pub step_ms: f32,
    /// Direction of stagger
    pub direction: StaggerDirection,
    /// Optional: cap the effective index at N
    pub limit: Option<usize>,
}

impl StaggerConfig {
    /// Create a new stagger config with the given step between units
    pub fn new(step_ms: f32) -> Self {
        Self { step_ms, direction: StaggerDirection::Forward, limit: None }
    }

    /// Stagger from last to first
    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    /// Stagger from center outward
    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Cap the effective index at N
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Calculate the delay for a specific unit index
    pub fn delay_for_index(&self, index: usize, total: usize) -> f32 {
        let effective_index = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                if index <= center {
                    center - index
                } else {
                    index - center
                }
            }
        };

        let capped_index = match self.limit {
            Some(limit) => effective_index.min(limit),
            None => effective_index,
        };

        self.step_ms * capped_index as f32
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self::new(100.0)
    }
}
