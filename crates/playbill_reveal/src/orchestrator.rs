//! Reveal orchestrator
//!
//! Tracks, for each registered visual unit, whether it has entered the
//! viewport, and plays its reveal exactly once on first entry. The "is it
//! visible" signal comes from an external intersection source; the "has it
//! played" state is owned here, which is what makes one-shot semantics
//! testable without a renderer.
//!
//! The orchestrator is driven by `tick(dt_ms)` from the host's frame loop.
//! Pending stagger delays, reveal progress, and looping oscillators all
//! advance on the same tick, the same way the animation scheduler steps
//! springs, keyframes and timelines together.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::easing::Easing;
use crate::oscillator::LoopOscillator;
use crate::stagger::StaggerConfig;

new_key_type! {
    /// Handle to a registered reveal unit
    pub struct RevealId;
}

/// How a unit animates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Fires once on first viewport entry, never restarts
    OneShot,
    /// Oscillates for the unit's entire lifetime, independent of viewport
    Looping,
}

/// Timing defaults for the page's reveals
#[derive(Clone, Copy, Debug)]
pub struct RevealTiming {
    /// Fixed delay applied to every one-shot reveal (ms)
    pub base_delay_ms: f32,
    /// Index-derived delay between grouped reveals
    pub stagger: StaggerConfig,
    /// Duration of the reveal transition (ms)
    pub reveal_duration_ms: f32,
    /// Easing applied to the reveal transition
    pub easing: Easing,
    /// Vertical rise distance covered by a reveal (px)
    pub rise_px: f32,
    /// Period of looping units (ms)
    pub loop_period_ms: f32,
    /// Value range of looping units (e.g. scale 1.0 to 1.1)
    pub loop_range: (f32, f32),
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            base_delay_ms: 0.0,
            stagger: StaggerConfig::default(),
            reveal_duration_ms: 600.0,
            easing: Easing::EaseOut,
            rise_px: 30.0,
            loop_period_ms: 2000.0,
            loop_range: (1.0, 1.1),
        }
    }
}

/// Where a one-shot unit is in its reveal
#[derive(Clone, Copy, Debug, PartialEq)]
enum RevealPhase {
    /// Not yet entered the viewport
    Hidden,
    /// Entered; waiting out the stagger delay
    Pending { remaining_ms: f32 },
    /// Transition in progress
    Playing { elapsed_ms: f32 },
    /// Fully revealed
    Revealed,
}

struct RevealUnit {
    name: String,
    stagger_index: usize,
    mode: RevealMode,
    has_entered: bool,
    phase: RevealPhase,
    oscillator: Option<LoopOscillator>,
}

/// Orchestrates one-shot reveals and looping micro-animations
pub struct RevealOrchestrator {
    units: SlotMap<RevealId, RevealUnit>,
    by_name: FxHashMap<String, RevealId>,
    timing: RevealTiming,
}

impl RevealOrchestrator {
    pub fn new() -> Self {
        Self::with_timing(RevealTiming::default())
    }

    pub fn with_timing(timing: RevealTiming) -> Self {
        Self { units: SlotMap::with_key(), by_name: FxHashMap::default(), timing }
    }

    /// Register a visual unit
    ///
    /// One-shot units start hidden; looping units start oscillating
    /// immediately. Re-registering a name replaces the previous unit.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        stagger_index: usize,
        mode: RevealMode,
    ) -> RevealId {
        let name = name.into();
        if let Some(old) = self.by_name.remove(&name) {
            tracing::debug!(%name, "replacing previously registered reveal unit");
            self.units.remove(old);
        }

        let oscillator = match mode {
            RevealMode::Looping => {
                let (low, high) = self.timing.loop_range;
                Some(LoopOscillator::new(low, high, self.timing.loop_period_ms))
            }
            RevealMode::OneShot => None,
        };

        let id = self.units.insert(RevealUnit {
            name: name.clone(),
            stagger_index,
            mode,
            has_entered: false,
            phase: RevealPhase::Hidden,
            oscillator,
        });
        self.by_name.insert(name, id);
        id
    }

    /// Remove a unit, cancelling any pending reveal or running oscillation
    pub fn remove(&mut self, name: &str) {
        if let Some(id) = self.by_name.remove(name) {
            if let Some(mut unit) = self.units.remove(id) {
                if let Some(ref mut osc) = unit.oscillator {
                    osc.stop();
                }
            }
        }
    }

    /// Feed a viewport intersection change for a unit
    ///
    /// The first `true` for a one-shot unit schedules its reveal after
    /// `base_delay + stagger(index)` and latches `has_entered`; every later
    /// event for that unit is ignored. Unknown names are a no-op; this path
    /// only affects cosmetic timing.
    pub fn on_intersection(&mut self, name: &str, is_intersecting: bool) {
        let total = self.units.len();
        let Some(&id) = self.by_name.get(name) else {
            tracing::trace!(name, "intersection event for unregistered unit ignored");
            return;
        };
        let unit = &mut self.units[id];

        if unit.mode != RevealMode::OneShot || unit.has_entered || !is_intersecting {
            return;
        }

        // The latch guards against duplicate scheduling; visual firing is
        // idempotent because it is gated on this flip.
        unit.has_entered = true;
        let delay = self.timing.base_delay_ms
            + self.timing.stagger.delay_for_index(unit.stagger_index, total);
        unit.phase = RevealPhase::Pending { remaining_ms: delay };
        tracing::debug!(name, delay_ms = delay, "reveal scheduled");
    }

    /// Advance all pending delays, reveal transitions and oscillators
    ///
    /// Returns true while anything is still animating (the host should keep
    /// ticking).
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let duration = self.timing.reveal_duration_ms;
        let mut active = false;

        for (_, unit) in self.units.iter_mut() {
            match unit.phase {
                RevealPhase::Pending { remaining_ms } => {
                    let remaining = remaining_ms - dt_ms;
                    if remaining <= 0.0 {
                        // Spill leftover time into the transition
                        unit.phase = RevealPhase::Playing { elapsed_ms: -remaining };
                        tracing::trace!(name = %unit.name, "reveal playing");
                    } else {
                        unit.phase = RevealPhase::Pending { remaining_ms: remaining };
                    }
                    active = true;
                }
                RevealPhase::Playing { elapsed_ms } => {
                    let elapsed = elapsed_ms + dt_ms;
                    if elapsed >= duration {
                        unit.phase = RevealPhase::Revealed;
                    } else {
                        unit.phase = RevealPhase::Playing { elapsed_ms: elapsed };
                        active = true;
                    }
                }
                RevealPhase::Hidden | RevealPhase::Revealed => {}
            }

            if let Some(ref mut osc) = unit.oscillator {
                osc.tick(dt_ms);
                active |= osc.is_playing();
            }
        }

        active
    }

    /// Eased reveal progress for a one-shot unit (0.0 hidden, 1.0 revealed)
    pub fn progress(&self, name: &str) -> f32 {
        let Some(unit) = self.by_name.get(name).and_then(|&id| self.units.get(id)) else {
            return 0.0;
        };
        match unit.phase {
            RevealPhase::Hidden | RevealPhase::Pending { .. } => 0.0,
            RevealPhase::Playing { elapsed_ms } => {
                self.timing.easing.apply(elapsed_ms / self.timing.reveal_duration_ms)
            }
            RevealPhase::Revealed => 1.0,
        }
    }

    /// Current opacity for a one-shot unit
    pub fn opacity(&self, name: &str) -> f32 {
        self.progress(name)
    }

    /// Current upward translation offset for a one-shot unit (px)
    pub fn offset_y(&self, name: &str) -> f32 {
        (1.0 - self.progress(name)) * self.timing.rise_px
    }

    /// Current oscillator value for a looping unit
    pub fn loop_value(&self, name: &str) -> Option<f32> {
        self.by_name
            .get(name)
            .and_then(|&id| self.units.get(id))
            .and_then(|unit| unit.oscillator.as_ref())
            .map(LoopOscillator::value)
    }

    /// Whether a unit has entered the viewport at least once
    pub fn has_entered(&self, name: &str) -> Option<bool> {
        self.by_name
            .get(name)
            .and_then(|&id| self.units.get(id))
            .map(|unit| unit.has_entered)
    }

    /// Number of registered units
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}

impl Default for RevealOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
