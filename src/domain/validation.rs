// src/domain/validation.rs
use crate::domain::DomainError;

/// Returns true if every character is an ASCII letter or digit, a space,
/// a period or a comma. The empty string is valid.
///
/// # Examples
///
/// ```
/// use notekeeper::domain::validation::is_valid;
///
/// assert!(is_valid("Groceries, week 3."));
/// assert!(!is_valid("Bad!Title"));
/// ```
pub fn is_valid(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | ','))
}

pub fn validate_field(field: &'static str, value: &str) -> Result<(), DomainError> {
    if is_valid(value) {
        Ok(())
    } else {
        Err(DomainError::InvalidInput {
            field,
            value: value.to_string(),
        })
    }
}
