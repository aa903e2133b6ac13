//! Track entity model and DTOs.

use kdm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::TrackStatus;

/// A row from the `tracks` table.
///
/// `artist_id` is a weak reference to the owning user; `file_path` points at
/// the stored binary and is set once at creation. `updated_at` is recomputed
/// on every mutation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub artist_id: DbId,
    pub description: Option<String>,
    pub file_path: String,
    pub status: TrackStatus,
    pub approval_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new track. Tracks always enter in `pending` status.
#[derive(Debug, Clone)]
pub struct CreateTrack {
    pub title: String,
    pub artist_id: DbId,
    pub description: Option<String>,
    pub file_path: String,
}

/// A pending track annotated with the owning artist's username.
///
/// The username comes from a read-time join against `users`; it is not a
/// stored field.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingTrack {
    pub id: DbId,
    pub title: String,
    pub artist_id: DbId,
    pub artist_username: String,
    pub description: Option<String>,
    pub file_path: String,
    pub status: TrackStatus,
    pub approval_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
