//! User session model and DTOs.
//!
//! A session row is the server-side half of a login: the cookie holds an
//! opaque token whose SHA-256 digest is `token_hash`. The identity columns
//! are the snapshot embedded at login; authorization guards re-fetch the
//! user row instead of trusting them.

use kdm_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::status::Role;

/// A session row from the `user_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub role: Role,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session at login.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: DbId,
    pub username: String,
    pub role: Role,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
