//! Field store - owned mutable form state
//!
//! A pure value holder: no validation happens here. Each page session owns
//! its own `FieldStore` instance and passes it by reference into the
//! validator and the submission controller; there is no process-wide
//! singleton.
//!
//! Subscribers are notified synchronously after every mutation, which keeps
//! the ordering guarantee simple: any edit applied before a submit attempt
//! is visible in the snapshot taken for that attempt.
//!
//! # Example
//!
//! ```rust
//! use playbill_core::{Field, FieldStore, FieldValue, TicketType};
//!
//! let store = FieldStore::new();
//! store.set(Field::LeadName, FieldValue::Text("Romeo".into()));
//! store.set(Field::TicketType, FieldValue::Ticket(TicketType::Individual));
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.lead_name, "Romeo");
//! ```

use std::sync::RwLock;

use crate::form::{Field, FieldValue, RegistrationForm};

/// Callback invoked with the full form after each mutation
type ChangeListener = Box<dyn Fn(&RegistrationForm) + Send + Sync>;

/// Handle for unsubscribing from store updates
#[derive(Debug)]
pub struct SubscriptionHandle {
    index: usize,
}

/// Holds the current value of each form field with change notification
pub struct FieldStore {
    form: RwLock<RegistrationForm>,
    /// Slots are tombstoned on unsubscribe so handles stay stable
    subscribers: RwLock<Vec<Option<ChangeListener>>>,
}

impl FieldStore {
    /// Create a store initialized with the form defaults
    pub fn new() -> Self {
        Self {
            form: RwLock::new(RegistrationForm::default()),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Get the current value of a single field
    pub fn get(&self, field: Field) -> FieldValue {
        let form = self.form.read().unwrap();
        match field {
            Field::LeadName => FieldValue::Text(form.lead_name.clone()),
            Field::PartnerName => FieldValue::Text(form.partner_name.clone()),
            Field::Email => FieldValue::Text(form.email.clone()),
            Field::TicketType => FieldValue::Ticket(form.ticket_type),
            Field::HousePreference => FieldValue::House(form.house_preference),
        }
    }

    /// Replace the value of a single field and notify subscribers
    ///
    /// A field/value kind mismatch is ignored (this path only carries user
    /// edits, so there is nothing useful to surface).
    pub fn set(&self, field: Field, value: FieldValue) {
        let updated = {
            let mut form = self.form.write().unwrap();
            match (field, value) {
                (Field::LeadName, FieldValue::Text(v)) => form.lead_name = v,
                (Field::PartnerName, FieldValue::Text(v)) => form.partner_name = v,
                (Field::Email, FieldValue::Text(v)) => form.email = v,
                (Field::TicketType, FieldValue::Ticket(v)) => form.ticket_type = v,
                (Field::HousePreference, FieldValue::House(v)) => form.house_preference = v,
                (field, value) => {
                    tracing::trace!(?field, ?value, "ignoring mismatched field value");
                    return;
                }
            }
            form.clone()
        };
        self.notify(&updated);
    }

    /// Update the form using a closure and notify subscribers
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut RegistrationForm),
    {
        let updated = {
            let mut form = self.form.write().unwrap();
            f(&mut form);
            form.clone()
        };
        self.notify(&updated);
    }

    /// Take an immutable copy of the current form
    ///
    /// This is the snapshot passed to an in-flight submission; later edits
    /// never affect it.
    pub fn snapshot(&self) -> RegistrationForm {
        self.form.read().unwrap().clone()
    }

    /// Reset every field to its default and notify subscribers
    pub fn reset(&self) {
        let updated = {
            let mut form = self.form.write().unwrap();
            *form = RegistrationForm::default();
            form.clone()
        };
        self.notify(&updated);
    }

    /// Subscribe to form changes
    ///
    /// The callback runs synchronously on the mutating call. Returns a
    /// handle for `unsubscribe`.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&RegistrationForm) + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.write().unwrap();
        let index = subscribers.len();
        subscribers.push(Some(Box::new(callback)));
        SubscriptionHandle { index }
    }

    /// Remove a subscriber
    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        let mut subscribers = self.subscribers.write().unwrap();
        if let Some(slot) = subscribers.get_mut(handle.index) {
            *slot = None;
        }
    }

    fn notify(&self, form: &RegistrationForm) {
        let subscribers = self.subscribers.read().unwrap();
        for callback in subscribers.iter().flatten() {
            callback(form);
        }
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{HousePreference, TicketType};
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_store_defaults() {
        let store = FieldStore::new();
        assert_eq!(store.get(Field::LeadName), FieldValue::Text(String::new()));
        assert_eq!(
            store.get(Field::TicketType),
            FieldValue::Ticket(TicketType::CouplesBundle)
        );
        assert_eq!(
            store.get(Field::HousePreference),
            FieldValue::House(HousePreference::Surprise)
        );
    }

    #[test]
    fn test_set_replaces_value() {
        let store = FieldStore::new();
        store.set(Field::LeadName, FieldValue::Text("Romeo".into()));
        store.set(Field::LeadName, FieldValue::Text("Juliet".into()));

        // Last write wins
        assert_eq!(store.get(Field::LeadName), FieldValue::Text("Juliet".into()));
    }

    #[test]
    fn test_mismatched_value_is_ignored() {
        let store = FieldStore::new();
        store.set(Field::LeadName, FieldValue::Ticket(TicketType::Individual));
        assert_eq!(store.get(Field::LeadName), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_snapshot_isolated_from_later_edits() {
        let store = FieldStore::new();
        store.set(Field::Email, FieldValue::Text("romeo@verona.it".into()));

        let snapshot = store.snapshot();
        store.set(Field::Email, FieldValue::Text("tybalt@verona.it".into()));

        assert_eq!(snapshot.email, "romeo@verona.it");
        assert_eq!(store.snapshot().email, "tybalt@verona.it");
    }

    #[test]
    fn test_subscriber_notified_synchronously() {
        let store = FieldStore::new();
        let calls = Arc::new(AtomicI32::new(0));
        let calls_clone = calls.clone();

        let handle = store.subscribe(move |form| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            assert!(form.partner_name.is_empty() || form.partner_name == "Juliet");
        });

        store.set(Field::PartnerName, FieldValue::Text("Juliet".into()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        store.update(|f| f.partner_name.clear());
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        store.unsubscribe(handle);
        store.set(Field::PartnerName, FieldValue::Text("Juliet".into()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = FieldStore::new();
        store.update(|f| {
            f.lead_name = "Romeo".into();
            f.ticket_type = TicketType::Individual;
        });

        store.reset();
        assert_eq!(store.snapshot(), RegistrationForm::default());
    }
}
