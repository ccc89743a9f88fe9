//! Submission controller
//!
//! Owns the submission state machine for one form. The controller is shared
//! behind `Arc` and mutated under a short-lived lock; the backend call is
//! awaited outside the lock, so a concurrent `submit()` observes
//! `Submitting` and is rejected without touching the in-flight attempt.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use playbill_core::{
    validate, BackendError, NotificationKind, NotificationSink, RegistrationForm, Result,
    SubmissionEvent, SubmissionReceipt, SubmitError, ValidationResult,
};

/// Future returned by a submit backend
pub type SubmitFuture =
    Pin<Box<dyn Future<Output = std::result::Result<SubmissionReceipt, BackendError>> + Send>>;

/// External submit collaborator
///
/// Takes an owned snapshot so later field edits cannot leak into an
/// in-flight attempt. The transport behind this trait is out of scope.
pub trait SubmitBackend: Send + Sync {
    fn submit(&self, snapshot: RegistrationForm) -> SubmitFuture;
}

/// Controller configuration
#[derive(Clone, Copy, Debug)]
pub struct SubmitConfig {
    /// Backend calls that do not resolve within this bound fail with
    /// `SubmitError::Timeout`
    pub timeout: Duration,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(10) }
    }
}

/// Submission state machine states
///
/// `Succeeded` and `Failed` are terminal for their attempt; a new `submit()`
/// or an explicit `reset()` starts over from there.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting { started_at: Instant },
    Succeeded { receipt: SubmissionReceipt },
    Failed { reason: SubmitError },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting { .. })
    }
}

type EventListener = Arc<dyn Fn(&SubmissionEvent) + Send + Sync>;

struct Inner {
    state: SubmissionState,
    listeners: Vec<EventListener>,
}

/// Orchestrates the submission lifecycle for one form
pub struct SubmissionController {
    backend: Arc<dyn SubmitBackend>,
    sink: Arc<dyn NotificationSink>,
    config: SubmitConfig,
    inner: Mutex<Inner>,
}

impl SubmissionController {
    pub fn new(backend: Arc<dyn SubmitBackend>, sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_config(backend, sink, SubmitConfig::default())
    }

    pub fn with_config(
        backend: Arc<dyn SubmitBackend>,
        sink: Arc<dyn NotificationSink>,
        config: SubmitConfig,
    ) -> Self {
        Self {
            backend,
            sink,
            config,
            inner: Mutex::new(Inner { state: SubmissionState::Idle, listeners: Vec::new() }),
        }
    }

    /// Current state (cloned)
    pub fn state(&self) -> SubmissionState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Register a lifecycle event listener
    ///
    /// Listeners run synchronously on the submitting task, outside the state
    /// lock.
    pub fn on_event<F>(&self, listener: F)
    where
        F: Fn(&SubmissionEvent) + Send + Sync + 'static,
    {
        self.inner.lock().unwrap().listeners.push(Arc::new(listener));
    }

    /// Return a terminal controller to `Idle`
    ///
    /// Ignored while an attempt is in flight; the in-flight guard must not
    /// be cleared underneath it.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.state.is_in_flight() {
            tracing::debug!("reset ignored while submitting");
            return;
        }
        inner.state = SubmissionState::Idle;
    }

    /// Run one submit attempt with the given snapshot
    ///
    /// Exactly one of the following happens:
    /// - the call is rejected synchronously with `AlreadyInFlight`;
    /// - validation fails, the state becomes `Failed { ValidationFailed }`
    ///   and the backend is never contacted;
    /// - one backend invocation runs to a terminal state (`Succeeded`, or
    ///   `Failed` with a network/rejection/timeout reason).
    ///
    /// Every terminal transition emits one lifecycle event and one
    /// notification.
    pub async fn submit(&self, snapshot: RegistrationForm) -> Result<SubmissionReceipt> {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.state.is_in_flight() {
                tracing::debug!("submit rejected: attempt already in flight");
                return Err(SubmitError::AlreadyInFlight);
            }

            if let ValidationResult::Invalid(violations) = validate(&snapshot) {
                let reason = SubmitError::ValidationFailed(violations);
                inner.state = SubmissionState::Failed { reason: reason.clone() };
                drop(inner);

                tracing::debug!(%reason, "submit rejected by validation");
                self.emit(&SubmissionEvent::Failed(reason.clone()));
                self.sink.notify(
                    NotificationKind::Error,
                    "Your registration needs attention",
                    &reason.to_string(),
                );
                return Err(reason);
            }

            inner.state = SubmissionState::Submitting { started_at: Instant::now() };
        }

        tracing::debug!("submission started");
        self.emit(&SubmissionEvent::Started);

        let outcome =
            match tokio::time::timeout(self.config.timeout, self.backend.submit(snapshot)).await {
                Ok(Ok(receipt)) => Ok(receipt),
                Ok(Err(backend_err)) => Err(SubmitError::from(backend_err)),
                Err(_elapsed) => Err(SubmitError::Timeout),
            };

        match outcome {
            Ok(receipt) => {
                self.inner.lock().unwrap().state =
                    SubmissionState::Succeeded { receipt: receipt.clone() };

                tracing::debug!(confirmation_id = %receipt.confirmation_id, "submission succeeded");
                self.emit(&SubmissionEvent::Succeeded(receipt.clone()));
                self.sink.notify(
                    NotificationKind::Success,
                    "Your place has been reserved!",
                    "Check your email for confirmation details.",
                );
                Ok(receipt)
            }
            Err(reason) => {
                self.inner.lock().unwrap().state =
                    SubmissionState::Failed { reason: reason.clone() };

                tracing::debug!(%reason, "submission failed");
                self.emit(&SubmissionEvent::Failed(reason.clone()));
                self.sink.notify(
                    NotificationKind::Error,
                    "Reservation failed",
                    &reason.to_string(),
                );
                Err(reason)
            }
        }
    }

    fn emit(&self, event: &SubmissionEvent) {
        // Cloned out of the lock so a listener may call back into the
        // controller without deadlocking.
        let listeners = self.inner.lock().unwrap().listeners.clone();
        for listener in listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbill_core::{Field, HousePreference, TicketType, ViolationKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that echoes the snapshot after an optional delay
    struct EchoBackend {
        delay: Duration,
        calls: Arc<AtomicUsize>,
    }

    impl EchoBackend {
        fn new(delay_ms: u64) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (Self { delay: Duration::from_millis(delay_ms), calls: calls.clone() }, calls)
        }
    }

    impl SubmitBackend for EchoBackend {
        fn submit(&self, snapshot: RegistrationForm) -> SubmitFuture {
            let delay = self.delay;
            let calls = self.calls.clone();
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                Ok(SubmissionReceipt { confirmation_id: "ACK-0001".into(), echo: snapshot })
            })
        }
    }

    /// Backend whose future never resolves
    struct HungBackend;

    impl SubmitBackend for HungBackend {
        fn submit(&self, _snapshot: RegistrationForm) -> SubmitFuture {
            Box::pin(std::future::pending())
        }
    }

    /// Backend that rejects every registration
    struct RejectingBackend;

    impl SubmitBackend for RejectingBackend {
        fn submit(&self, _snapshot: RegistrationForm) -> SubmitFuture {
            Box::pin(async { Err(BackendError::Rejected("sold out".into())) })
        }
    }

    /// Sink that records every notification
    #[derive(Default)]
    struct RecordingSink {
        notifications: Mutex<Vec<(NotificationKind, String)>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, kind: NotificationKind, title: &str, _detail: &str) {
            self.notifications.lock().unwrap().push((kind, title.to_string()));
        }
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            lead_name: "Romeo".into(),
            partner_name: String::new(),
            email: "romeo@verona.it".into(),
            ticket_type: TicketType::Individual,
            house_preference: HousePreference::Fire,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_happy_path_state_sequence() {
        let (backend, calls) = EchoBackend::new(200);
        let sink = Arc::new(RecordingSink::default());
        let controller =
            Arc::new(SubmissionController::new(Arc::new(backend), sink.clone()));

        let events: Arc<Mutex<Vec<SubmissionEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        controller.on_event(move |e| events_clone.lock().unwrap().push(e.clone()));

        assert_eq!(controller.state(), SubmissionState::Idle);

        let receipt = controller.submit(valid_form()).await.unwrap();
        assert_eq!(receipt.confirmation_id, "ACK-0001");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(controller.state(), SubmissionState::Succeeded { .. }));

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SubmissionEvent::Started);
        assert!(matches!(events[1], SubmissionEvent::Succeeded(_)));

        // Exactly one success notification
        let notifications = sink.notifications.lock().unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, NotificationKind::Success);
    }

    #[tokio::test]
    async fn test_validation_failure_skips_backend() {
        let (backend, calls) = EchoBackend::new(0);
        let sink = Arc::new(RecordingSink::default());
        let controller = SubmissionController::new(Arc::new(backend), sink.clone());

        let form = RegistrationForm {
            lead_name: String::new(),
            email: "a@b.com".into(),
            ..valid_form()
        };

        let err = controller.submit(form).await.unwrap_err();
        match &err {
            SubmitError::ValidationFailed(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, Field::LeadName);
                assert_eq!(violations[0].kind, ViolationKind::RequiredFieldMissing);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.state(), SubmissionState::Failed { reason: err });
        assert_eq!(sink.notifications.lock().unwrap()[0].0, NotificationKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_submit_rejected_in_flight() {
        let (backend, calls) = EchoBackend::new(500);
        let controller = Arc::new(SubmissionController::new(
            Arc::new(backend),
            Arc::new(playbill_core::NullSink),
        ));

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit(valid_form()).await })
        };
        // Let the first attempt reach Submitting
        tokio::task::yield_now().await;
        assert!(controller.state().is_in_flight());

        let second = controller.submit(valid_form()).await;
        assert_eq!(second.unwrap_err(), SubmitError::AlreadyInFlight);

        // The in-flight attempt is unaffected and completes normally
        let receipt = first.await.unwrap().unwrap();
        assert_eq!(receipt.confirmation_id, "ACK-0001");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(controller.state(), SubmissionState::Succeeded { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fires_at_threshold() {
        let controller = SubmissionController::with_config(
            Arc::new(HungBackend),
            Arc::new(playbill_core::NullSink),
            SubmitConfig { timeout: Duration::from_secs(10) },
        );

        let start = tokio::time::Instant::now();
        let err = controller.submit(valid_form()).await.unwrap_err();
        assert_eq!(err, SubmitError::Timeout);
        assert!(start.elapsed() >= Duration::from_secs(10));
        assert_eq!(controller.state(), SubmissionState::Failed { reason: SubmitError::Timeout });
    }

    #[tokio::test]
    async fn test_rejection_maps_to_server_rejected() {
        let controller = SubmissionController::new(
            Arc::new(RejectingBackend),
            Arc::new(playbill_core::NullSink),
        );

        let err = controller.submit(valid_form()).await.unwrap_err();
        assert_eq!(err, SubmitError::ServerRejected("sold out".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_isolation_round_trip() {
        let (backend, _calls) = EchoBackend::new(100);
        let controller =
            SubmissionController::new(Arc::new(backend), Arc::new(playbill_core::NullSink));

        let store = playbill_core::FieldStore::new();
        store.update(|f| {
            f.lead_name = "Romeo".into();
            f.email = "romeo@verona.it".into();
        });

        let snapshot = store.snapshot();
        let attempt = controller.submit(snapshot.clone());

        // Edits after the snapshot was taken must not leak into the attempt
        store.update(|f| f.lead_name = "Paris".into());

        let receipt = attempt.await.unwrap();
        assert_eq!(receipt.echo, snapshot);
        assert_eq!(receipt.echo.lead_name, "Romeo");
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let controller = SubmissionController::new(
            Arc::new(RejectingBackend),
            Arc::new(playbill_core::NullSink),
        );

        let _ = controller.submit(valid_form()).await;
        assert!(matches!(controller.state(), SubmissionState::Failed { .. }));

        controller.reset();
        assert_eq!(controller.state(), SubmissionState::Idle);

        // A new attempt is allowed directly from a terminal state too
        let _ = controller.submit(valid_form()).await;
        assert!(matches!(controller.state(), SubmissionState::Failed { .. }));
    }
}
