//! Registration form model
//!
//! The form is a single entity per page visit: two name fields, a contact
//! email, and two always-selected choice fields. Choice fields default at
//! construction and are replaced atomically, so an empty or multi selection
//! is not representable.

use serde::{Deserialize, Serialize};

/// Ticket type selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    /// Single seat
    Individual,
    /// Two seats, discounted (default)
    #[default]
    CouplesBundle,
}

impl TicketType {
    /// Admission price in whole dollars
    pub fn price_usd(&self) -> u32 {
        match self {
            TicketType::Individual => 45,
            TicketType::CouplesBundle => 85,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Individual => "Individual",
            TicketType::CouplesBundle => "Couples Bundle",
        }
    }
}

/// House preference selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousePreference {
    /// House of Fire
    Fire,
    /// House of Ice
    Ice,
    /// Let the hosts decide (default)
    #[default]
    Surprise,
}

impl HousePreference {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            HousePreference::Fire => "House of Fire",
            HousePreference::Ice => "House of Ice",
            HousePreference::Surprise => "Surprise Us!",
        }
    }
}

/// The registration form state
///
/// Mutated in place by user edits (last-write-wins per field) and copied
/// wholesale into an immutable snapshot when a submission starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    /// Required; must be non-empty after trimming
    pub lead_name: String,
    /// Optional
    pub partner_name: String,
    /// Required; basic `local@domain` shape
    pub email: String,
    /// Always selected
    pub ticket_type: TicketType,
    /// Always selected
    pub house_preference: HousePreference,
}

/// Identifies one form field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    LeadName,
    PartnerName,
    Email,
    TicketType,
    HousePreference,
}

impl Field {
    /// Display label for violation messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::LeadName => "Your Name",
            Field::PartnerName => "Partner's Name",
            Field::Email => "Contact Email",
            Field::TicketType => "Ticket Type",
            Field::HousePreference => "House Preference",
        }
    }
}

/// A value for one form field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Ticket(TicketType),
    House(HousePreference),
}

/// Acknowledgement returned by the submit collaborator
///
/// Carries the confirmation identifier and echoes the exact snapshot the
/// backend accepted, so callers can verify snapshot isolation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Opaque acknowledgement identifier
    pub confirmation_id: String,
    /// The snapshot as accepted by the backend
    pub echo: RegistrationForm,
}
