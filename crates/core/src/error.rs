use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every failure the portal reports to a caller maps to one of these kinds;
/// the API layer attaches the HTTP status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Signup conflict: username or email is already taken.
    #[error("Username or email already exists")]
    DuplicateIdentity,

    /// Unknown username or failed password verification. Deliberately one
    /// variant for both so the response does not reveal which part matched.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Credentials matched but the artist account has not been approved.
    #[error("Your account is pending approval")]
    PendingApproval,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
