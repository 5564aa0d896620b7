//! Required-field presence checks.
//!
//! Request DTOs derive [`validator::Validate`] with `required` (and
//! `length(min = 1)` for strings) on every mandatory field. [`require`]
//! runs those rules and folds any failure into a single
//! [`CoreError::Validation`] naming the missing fields.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived presence rules on `input`.
pub fn require<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(missing_fields_message(&errors)))
}

/// Build `"Missing required fields: a, b"` with field names sorted so the
/// message is stable regardless of hash ordering.
pub fn missing_fields_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    format!("Missing required fields: {}", fields.join(", "))
}

/// Take a required value out of its `Option`, reporting `field` as missing
/// when it is absent.
///
/// Handlers call this after [`require`] to move validated fields into the
/// store DTOs without unwrapping.
pub fn present<T>(field: &'static str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Missing required fields: {field}")))
}

/// Error returned by a sparse patch that carries no recognized field.
pub fn no_fields_provided() -> CoreError {
    CoreError::Validation("No fields provided".into())
}
