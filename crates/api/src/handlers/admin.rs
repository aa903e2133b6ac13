//! Handlers for the `/admin` moderation queues.
//!
//! All handlers require the admin role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::Json;
use kdm_core::error::CoreError;
use kdm_core::types::DbId;
use kdm_db::models::track::PendingTrack;
use kdm_db::models::user::UserResponse;
use kdm_db::repositories::{TrackRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::guards::RequireAdmin;
use crate::response::StatusResponse;
use crate::state::AppState;

/// Request body for `PUT /admin/tracks/{id}/reject`.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub notes: Option<String>,
}

/// GET /api/v1/admin/pending-users
///
/// List accounts awaiting approval. Password hashes never leave the server.
pub async fn list_pending_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list_pending(&state.pool).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// PUT /api/v1/admin/users/{id}/approve
///
/// Approve an account. Unconditional: approving an already-approved account
/// succeeds without error.
pub async fn approve_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let updated = UserRepo::approve(&state.pool, id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(user_id = id, admin_id = admin.user_id, "User approved");

    Ok(Json(StatusResponse::ok()))
}

/// GET /api/v1/admin/pending-tracks
///
/// List tracks awaiting review, each annotated with the owning artist's
/// username (a read-time join, not a stored field).
pub async fn list_pending_tracks(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PendingTrack>>> {
    let tracks = TrackRepo::list_pending_with_artist(&state.pool).await?;
    Ok(Json(tracks))
}

/// PUT /api/v1/admin/tracks/{id}/approve
///
/// Approve a track. Re-approving succeeds (last write wins).
pub async fn approve_track(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let updated = TrackRepo::approve(&state.pool, id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "Track", id }));
    }

    tracing::info!(track_id = id, admin_id = admin.user_id, "Track approved");

    Ok(Json(StatusResponse::ok()))
}

/// PUT /api/v1/admin/tracks/{id}/reject
///
/// Reject a track and record the reviewer's notes.
pub async fn reject_track(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RejectRequest>,
) -> AppResult<Json<StatusResponse>> {
    let updated = TrackRepo::reject(&state.pool, id, input.notes.as_deref()).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "Track", id }));
    }

    tracing::info!(
        track_id = id,
        admin_id = admin.user_id,
        notes = ?input.notes,
        "Track rejected"
    );

    Ok(Json(StatusResponse::ok()))
}
