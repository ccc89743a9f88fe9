//! Error types for the registration core

use thiserror::Error;

use crate::validate::Violation;

/// Errors produced by a submit attempt
///
/// There is no fatal error in this core: every variant leaves the form data
/// intact and the controller retryable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The form snapshot failed validation; the backend was never contacted
    #[error("registration form has {} invalid field(s)", .0.len())]
    ValidationFailed(Vec<Violation>),

    /// A submission is already in flight; the call performed no action
    #[error("a submission is already in flight")]
    AlreadyInFlight,

    /// The backend could not be reached
    #[error("network error: {0}")]
    NetworkError(String),

    /// The backend rejected the registration
    #[error("registration rejected: {0}")]
    ServerRejected(String),

    /// The backend did not resolve within the configured threshold
    #[error("submission timed out")]
    Timeout,
}

/// Failure surfaced by the submit collaborator
///
/// Network failures and rejections are distinguishable so the controller can
/// map them onto the right terminal reason.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),

    #[error("rejected: {0}")]
    Rejected(String),
}

impl From<anyhow::Error> for BackendError {
    fn from(err: anyhow::Error) -> Self {
        BackendError::Network(err.to_string())
    }
}

impl From<BackendError> for SubmitError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Network(msg) => SubmitError::NetworkError(msg),
            BackendError::Rejected(msg) => SubmitError::ServerRejected(msg),
        }
    }
}

/// Result type for submit operations
pub type Result<T> = std::result::Result<T, SubmitError>;
