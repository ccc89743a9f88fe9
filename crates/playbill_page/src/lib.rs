//! Playbill Page
//!
//! The "Dragons & Dates" registration page: static event content plus the
//! `Page` composer that wires the field store, validator, submission
//! controller and reveal orchestrator into one page session.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use playbill_core::{Field, FieldValue};
//! use playbill_page::{units, Page};
//!
//! let page = Page::new(backend, sink);
//!
//! // User scrolls the form into view
//! page.handle_intersection(units::FORM, true);
//! page.tick(16.0);
//!
//! // User fills and submits
//! page.set_field(Field::LeadName, FieldValue::Text("Romeo".into()));
//! page.set_field(Field::Email, FieldValue::Text("romeo@verona.it".into()));
//! let receipt = page.submit().await?;
//! ```

pub mod content;
pub mod page;

pub use content::{
    event_facts, faq_entries, five_acts, footer_lines, hero, pricing, ActEntry, EventFact,
    FaqEntry, Hero, PricingOption,
};
pub use page::{units, Page};
