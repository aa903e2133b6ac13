pub mod admin;
pub mod auth;
pub mod health;
pub mod tracks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                    signup (public)
/// /auth/login                     login (public)
/// /auth/logout                    logout (public, idempotent)
///
/// /tracks                         create (POST), list own (GET)
///                                 -- authenticated approved artists only
///
/// /admin/pending-users            accounts awaiting approval (GET)
/// /admin/users/{id}/approve       approve account (PUT)
/// /admin/pending-tracks           tracks awaiting review (GET)
/// /admin/tracks/{id}/approve      approve track (PUT)
/// /admin/tracks/{id}/reject       reject track with notes (PUT)
///                                 -- authenticated admins only
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tracks", tracks::router(max_upload_bytes))
        .nest("/admin", admin::router())
}
