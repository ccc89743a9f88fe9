//! Submission lifecycle events and the notification boundary
//!
//! The controller emits one `Started` event per accepted attempt and exactly
//! one terminal event per attempt. The notification sink is the external
//! toast widget, consumed fire-and-forget.

use crate::error::SubmitError;
use crate::form::SubmissionReceipt;

/// Lifecycle events emitted by the submission controller
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionEvent {
    /// An attempt was accepted; the submit control should be disabled
    Started,
    /// The attempt resolved successfully; the submit control is re-enabled
    Succeeded(SubmissionReceipt),
    /// The attempt failed; the submit control is re-enabled
    Failed(SubmitError),
}

impl SubmissionEvent {
    /// Whether this event ends an attempt (re-enables the submit control)
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionEvent::Succeeded(_) | SubmissionEvent::Failed(_))
    }
}

/// Kind of user-facing notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// External toast/notification widget boundary
///
/// Invoked by the controller on terminal transitions; implementations must
/// not block.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, detail: &str);
}

/// Sink that drops every notification; useful for tests and headless hosts
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, kind: NotificationKind, title: &str, detail: &str) {
        tracing::debug!(?kind, title, detail, "notification dropped (null sink)");
    }
}
