//! Repository for the `tracks` table.

use kdm_core::types::DbId;
use sqlx::PgPool;

use crate::models::status::TrackStatus;
use crate::models::track::{CreateTrack, PendingTrack, Track};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, artist_id, description, file_path, status, \
                       approval_notes, created_at, updated_at";

/// Provides CRUD operations for tracks.
///
/// Status transitions are admin-initiated only; artists create and list but
/// never mutate. Tracks are never deleted.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track in `pending` status, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (title, artist_id, description, file_path)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.title)
            .bind(input.artist_id)
            .bind(&input.description)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    /// Find a track by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks owned by the given artist, newest upload first.
    pub async fn list_by_artist(pool: &PgPool, artist_id: DbId) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks WHERE artist_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// List tracks awaiting review, each annotated with the owning artist's
    /// username (read-time join), oldest upload first.
    pub async fn list_pending_with_artist(pool: &PgPool) -> Result<Vec<PendingTrack>, sqlx::Error> {
        sqlx::query_as::<_, PendingTrack>(
            "SELECT t.id, t.title, t.artist_id, u.username AS artist_username,
                    t.description, t.file_path, t.status, t.approval_notes,
                    t.created_at, t.updated_at
             FROM tracks t
             JOIN users u ON u.id = t.artist_id
             WHERE t.status = $1
             ORDER BY t.created_at ASC",
        )
        .bind(TrackStatus::Pending)
        .fetch_all(pool)
        .await
    }

    /// Mark a track approved and bump `updated_at`.
    ///
    /// Returns `false` when no such track exists. Re-approving an approved
    /// track succeeds (last write wins).
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE tracks SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(TrackStatus::Approved)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a track rejected, record the reviewer's notes, and bump
    /// `updated_at`. Returns `false` when no such track exists.
    pub async fn reject(
        pool: &PgPool,
        id: DbId,
        notes: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tracks SET status = $2, approval_notes = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(TrackStatus::Rejected)
        .bind(notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
