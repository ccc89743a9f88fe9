//! Playbill Form
//!
//! The submission controller: an `Idle → Submitting → {Succeeded, Failed}`
//! state machine that owns at most one in-flight attempt, validates before
//! contacting the backend, bounds the backend call with a timeout, and emits
//! lifecycle events plus notifications on terminal transitions.
//!
//! The backend and the clock are injected: the backend as a trait object,
//! time via tokio's clock so tests run against a paused clock instead of
//! real timers.

pub mod controller;

pub use controller::{
    SubmissionController, SubmissionState, SubmitBackend, SubmitConfig, SubmitFuture,
};
