//! Handlers for the `/tracks` resource (upload, list own).

use axum::extract::{Multipart, State};
use axum::Json;
use kdm_core::error::CoreError;
use kdm_core::storage::stored_filename;
use kdm_core::validation::require_non_empty;
use kdm_db::models::track::{CreateTrack, Track};
use kdm_db::repositories::TrackRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::guards::RequireApprovedArtist;
use crate::state::AppState;

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub track: Track,
}

/// POST /api/v1/tracks
///
/// Multipart upload: `title` (required), `description` (optional), and the
/// `track` binary (required). The binary is durably written before the row
/// referencing it is created; a failed insert leaves an orphaned file rather
/// than a dangling record.
pub async fn create(
    RequireApprovedArtist(artist): RequireApprovedArtist,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut title = String::new();
    let mut description: Option<String> = None;
    let mut file_path: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("title") => {
                title = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            Some("description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            Some("track") => {
                let original = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;

                let stored = stored_filename(&original);
                let dest = state.config.upload_dir.join(&stored);
                tokio::fs::write(&dest, &data)
                    .await
                    .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

                file_path = Some(format!("uploads/{stored}"));
            }
            _ => {}
        }
    }

    require_non_empty("title", &title)?;
    let file_path = file_path.ok_or_else(|| {
        AppError::Core(CoreError::Validation("track file is required".into()))
    })?;

    let track = TrackRepo::create(
        &state.pool,
        &CreateTrack {
            title,
            artist_id: artist.user_id,
            description,
            file_path,
        },
    )
    .await?;

    tracing::info!(
        track_id = track.id,
        artist_id = artist.user_id,
        file_path = %track.file_path,
        "Track uploaded"
    );

    Ok(Json(UploadResponse {
        success: true,
        track,
    }))
}

/// GET /api/v1/tracks
///
/// List the caller's own tracks, newest upload first.
pub async fn list_own(
    RequireApprovedArtist(artist): RequireApprovedArtist,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Track>>> {
    let tracks = TrackRepo::list_by_artist(&state.pool, artist.user_id).await?;
    Ok(Json(tracks))
}
