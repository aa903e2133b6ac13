//! Route definitions for the `/admin` moderation queues.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /pending-users              accounts awaiting approval
/// PUT /users/{id}/approve         approve account
/// GET /pending-tracks             tracks awaiting review
/// PUT /tracks/{id}/approve        approve track
/// PUT /tracks/{id}/reject         reject track with notes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending-users", get(admin::list_pending_users))
        .route("/users/{id}/approve", put(admin::approve_user))
        .route("/pending-tracks", get(admin::list_pending_tracks))
        .route("/tracks/{id}/approve", put(admin::approve_track))
        .route("/tracks/{id}/reject", put(admin::reject_track))
}
