//! Playbill Reveal
//!
//! Scroll-driven reveal orchestration for page sections and list items:
//!
//! - **One-shot reveals**: fire once on first viewport entry, optionally
//!   delayed by an index-derived stagger, and never restart
//! - **Looping micro-animations**: small oscillations that run for a unit's
//!   entire lifetime, independent of viewport state
//! - **Easing**: the usual cubic ease family
//!
//! Everything is driven by `tick(dt_ms)` rather than wall-clock timers, so
//! reveal behavior is deterministic under test.

pub mod easing;
pub mod orchestrator;
pub mod oscillator;
pub mod stagger;

pub use easing::Easing;
pub use orchestrator::{RevealId, RevealMode, RevealOrchestrator, RevealTiming};
pub use oscillator::LoopOscillator;
pub use stagger::{StaggerConfig, StaggerDirection};
