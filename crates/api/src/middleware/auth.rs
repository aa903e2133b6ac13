//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kdm_core::error::CoreError;
use kdm_core::types::DbId;
use kdm_db::models::status::Role;
use kdm_db::repositories::SessionRepo;

use crate::auth::session::{hash_session_token, session_token};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the session cookie.
///
/// The fields are the identity snapshot embedded at login. The snapshot is
/// static for the session's lifetime, so the guards in
/// [`crate::middleware::guards`] re-fetch the user row before any
/// role/approval decision instead of trusting it.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: SessionUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// Username at login time.
    pub username: String,
    /// Role at login time.
    pub role: Role,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Please log in".into()))
        })?;

        // Resolving the session also slides its idle deadline forward.
        let session = SessionRepo::find_active_and_touch(
            &state.pool,
            &hash_session_token(&token),
            state.config.session_ttl_secs,
        )
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Session expired. Please log in again".into(),
            ))
        })?;

        Ok(SessionUser {
            user_id: session.user_id,
            username: session.username,
            role: session.role,
        })
    }
}
