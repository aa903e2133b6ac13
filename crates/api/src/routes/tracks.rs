//! Route definitions for the `/tracks` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::tracks;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET  /   -> list own tracks
/// POST /   -> upload (multipart)
/// ```
///
/// The upload carries its own body limit so the configured maximum applies
/// to the multipart payload as a whole.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(tracks::list_own).post(tracks::create))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
