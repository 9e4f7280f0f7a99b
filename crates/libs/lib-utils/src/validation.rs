//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a numeric setting is greater than zero.
pub fn validate_positive(value: u64, field_name: &str) -> Result<(), String> {
    if value == 0 {
        Err(format!("{} must be greater than zero", field_name))
    } else {
        Ok(())
    }
}
