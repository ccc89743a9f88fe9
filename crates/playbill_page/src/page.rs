//! Page composer
//!
//! Wires the field store, validator, submission controller and reveal
//! orchestrator into one page session. Purely compositional: the page owns
//! its subsystems and forwards thin handlers; all interesting behavior lives
//! in the crates underneath.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use playbill_core::{
    Field, FieldStore, FieldValue, NotificationSink, RegistrationForm, Result, SubmissionEvent,
    SubmissionReceipt,
};
use playbill_form::{SubmissionController, SubmissionState, SubmitBackend, SubmitConfig};
use playbill_reveal::{RevealMode, RevealOrchestrator, RevealTiming};

use crate::content;

/// Reveal unit names registered by the page, in document order
pub mod units {
    /// Hero block (title, tagline, epigraph)
    pub const HERO: &str = "hero";
    /// Pulsing fortress crest (looping)
    pub const CREST_PULSE: &str = "crest-pulse";
    /// Bobbing scroll indicator (looping)
    pub const SCROLL_HINT: &str = "scroll-hint";
    /// Playbill fact cards, staggered: `fact-0` .. `fact-3`
    pub const FACT_PREFIX: &str = "fact-";
    /// Pricing block
    pub const PRICING: &str = "pricing";
    /// Five-act entries, staggered: `act-0` .. `act-4`
    pub const ACT_PREFIX: &str = "act-";
    /// Registration form card
    pub const FORM: &str = "form";
    /// FAQ entries, staggered: `faq-0` .. `faq-4`
    pub const FAQ_PREFIX: &str = "faq-";
}

/// One page session
///
/// Each visit owns its own instance; nothing here is process-global.
pub struct Page {
    store: FieldStore,
    controller: Arc<SubmissionController>,
    reveals: Mutex<RevealOrchestrator>,
    submit_enabled: Arc<AtomicBool>,
}

impl Page {
    pub fn new(backend: Arc<dyn SubmitBackend>, sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_config(backend, sink, SubmitConfig::default(), RevealTiming::default())
    }

    pub fn with_config(
        backend: Arc<dyn SubmitBackend>,
        sink: Arc<dyn NotificationSink>,
        submit_config: SubmitConfig,
        timing: RevealTiming,
    ) -> Self {
        let controller = Arc::new(SubmissionController::with_config(backend, sink, submit_config));

        // The submit control follows the lifecycle: disabled while an
        // attempt is in flight, re-enabled on either terminal transition.
        let submit_enabled = Arc::new(AtomicBool::new(true));
        let enabled = submit_enabled.clone();
        controller.on_event(move |event| match event {
            SubmissionEvent::Started => enabled.store(false, Ordering::SeqCst),
            SubmissionEvent::Succeeded(_) | SubmissionEvent::Failed(_) => {
                enabled.store(true, Ordering::SeqCst)
            }
        });

        let page = Self {
            store: FieldStore::new(),
            controller,
            reveals: Mutex::new(RevealOrchestrator::with_timing(timing)),
            submit_enabled,
        };
        page.register_reveal_units();
        page
    }

    /// Register every animated section and list item in document order
    fn register_reveal_units(&self) {
        let mut reveals = self.reveals.lock().unwrap();

        reveals.register(units::HERO, 0, RevealMode::OneShot);
        reveals.register(units::CREST_PULSE, 0, RevealMode::Looping);
        reveals.register(units::SCROLL_HINT, 0, RevealMode::Looping);

        for (index, _fact) in content::event_facts().iter().enumerate() {
            reveals.register(format!("{}{index}", units::FACT_PREFIX), index, RevealMode::OneShot);
        }
        reveals.register(units::PRICING, 0, RevealMode::OneShot);

        for (index, _act) in content::five_acts().iter().enumerate() {
            reveals.register(format!("{}{index}", units::ACT_PREFIX), index, RevealMode::OneShot);
        }

        reveals.register(units::FORM, 0, RevealMode::OneShot);

        for (index, _faq) in content::faq_entries().iter().enumerate() {
            reveals.register(format!("{}{index}", units::FAQ_PREFIX), index, RevealMode::OneShot);
        }

        tracing::debug!(units = reveals.unit_count(), "page reveal units registered");
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Apply a user edit (last-write-wins per field)
    pub fn set_field(&self, field: Field, value: FieldValue) {
        self.store.set(field, value);
    }

    /// Current value of a single field
    pub fn field(&self, field: Field) -> FieldValue {
        self.store.get(field)
    }

    /// Immutable copy of the current form
    pub fn snapshot(&self) -> RegistrationForm {
        self.store.snapshot()
    }

    /// Clear the form back to defaults
    ///
    /// Not called automatically on success; the page retains submitted
    /// values and surfaces only the confirmation notification.
    pub fn reset_form(&self) {
        self.store.reset();
    }

    /// Run one submit attempt with the current field values
    pub async fn submit(&self) -> Result<SubmissionReceipt> {
        self.controller.submit(self.store.snapshot()).await
    }

    /// Current submission state
    pub fn submission_state(&self) -> SubmissionState {
        self.controller.state()
    }

    /// Whether the submit control is currently enabled
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled.load(Ordering::SeqCst)
    }

    /// Return a settled controller to idle
    pub fn reset_submission(&self) {
        self.controller.reset();
    }

    // =========================================================================
    // Reveals
    // =========================================================================

    /// Feed a viewport intersection change from the host
    pub fn handle_intersection(&self, unit: &str, is_intersecting: bool) {
        self.reveals.lock().unwrap().on_intersection(unit, is_intersecting);
    }

    /// Advance all reveal timing; returns true while anything is animating
    pub fn tick(&self, dt_ms: f32) -> bool {
        self.reveals.lock().unwrap().tick(dt_ms)
    }

    /// Current opacity of a one-shot unit
    pub fn reveal_opacity(&self, unit: &str) -> f32 {
        self.reveals.lock().unwrap().opacity(unit)
    }

    /// Current upward offset of a one-shot unit (px)
    pub fn reveal_offset_y(&self, unit: &str) -> f32 {
        self.reveals.lock().unwrap().offset_y(unit)
    }

    /// Current oscillator value of a looping unit
    pub fn loop_value(&self, unit: &str) -> Option<f32> {
        self.reveals.lock().unwrap().loop_value(unit)
    }
}
