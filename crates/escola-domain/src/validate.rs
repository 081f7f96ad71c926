//! Field-level validation shared by the entity types.
//!
//! Each entity exposes `validate()`, called by the unit of work before any
//! staged operation reaches the store.

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Require `value` to contain between `min` and `max` characters (inclusive).
pub fn check_chars(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let n = value.chars().count();
    if n < min || n > max {
        return Err(ValidationError::new(
            field,
            format!("must be {min}-{max} characters, got {n}"),
        ));
    }
    Ok(())
}

/// Require `value` to be exactly `len` ASCII digits.
pub fn check_digits(field: &'static str, value: &str, len: usize) -> Result<(), ValidationError> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("must be exactly {len} digits"),
        ));
    }
    Ok(())
}

/// Minimal structural email check: non-empty local part and domain separated
/// by a single `@`, at most 255 characters overall.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().count() > 255 {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        _ => false,
    }
}

pub fn check_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !is_valid_email(value) {
        return Err(ValidationError::new(field, "not a valid email address"));
    }
    Ok(())
}
