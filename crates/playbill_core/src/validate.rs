//! Field-level validation rules
//!
//! Validation is a pure function over a form snapshot: every rule is
//! evaluated independently and all violations are collected in field order,
//! never short-circuited. The choice fields cannot be invalid by
//! construction, so only the text fields carry rules.

use crate::form::{Field, RegistrationForm};

/// What went wrong with a field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field is empty or whitespace-only
    RequiredFieldMissing,
    /// Value present but malformed
    InvalidFormat,
}

/// A single field-level violation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

/// Result of validating a form snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Validate a form snapshot, collecting all violations
pub fn validate(form: &RegistrationForm) -> ValidationResult {
    let mut violations = Vec::new();

    if form.lead_name.trim().is_empty() {
        violations.push(Violation {
            field: Field::LeadName,
            kind: ViolationKind::RequiredFieldMissing,
        });
    }

    if form.email.trim().is_empty() {
        violations.push(Violation {
            field: Field::Email,
            kind: ViolationKind::RequiredFieldMissing,
        });
    } else if !email_shape_ok(&form.email) {
        violations.push(Violation {
            field: Field::Email,
            kind: ViolationKind::InvalidFormat,
        });
    }

    if violations.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(violations)
    }
}

/// Basic `local@domain` shape check: a non-whitespace local part, exactly
/// one `@`, and at least one `.` after the `@`.
fn email_shape_ok(value: &str) -> bool {
    let parts: Vec<&str> = value.split('@').collect();
    parts.len() == 2 && !parts[0].trim().is_empty() && parts[1].contains('.')
}
