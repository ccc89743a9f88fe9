//! Playbill Core
//!
//! This crate provides the foundational primitives for the Playbill
//! registration page:
//!
//! - **Form Model**: The registration form entity and its field/value enums
//! - **Field Store**: Owned mutable form state with synchronous change notification
//! - **Validation**: Pure field-level rules collected into a `ValidationResult`
//! - **Events**: Submission lifecycle events and the notification sink boundary
//!
//! # Example
//!
//! ```rust
//! use playbill_core::{validate, Field, FieldStore, FieldValue, ValidationResult};
//!
//! let store = FieldStore::new();
//! store.set(Field::LeadName, FieldValue::Text("Romeo Montague".into()));
//! store.set(Field::Email, FieldValue::Text("romeo@verona.it".into()));
//!
//! assert_eq!(validate(&store.snapshot()), ValidationResult::Valid);
//! ```

pub mod error;
pub mod events;
pub mod form;
pub mod store;
pub mod validate;

pub use error::{BackendError, Result, SubmitError};
pub use events::{NotificationKind, NotificationSink, NullSink, SubmissionEvent};
pub use form::{
    Field, FieldValue, HousePreference, RegistrationForm, SubmissionReceipt, TicketType,
};
pub use store::{FieldStore, SubscriptionHandle};
pub use validate::{validate, ValidationResult, Violation, ViolationKind};
