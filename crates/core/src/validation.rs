//! Request-field validation helpers.

use crate::error::CoreError;

/// Require that a field is present and non-empty after trimming.
///
/// Used by signup (username, email, password) and track upload (title).
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
