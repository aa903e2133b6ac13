//! Authorization guard extractors.
//!
//! Each guard wraps [`SessionUser`] and re-fetches the user row before
//! deciding, so an approval or role change takes effect on the very next
//! request without re-login. The session's copy of the role is static after
//! login and is deliberately not trusted here; the cost is one extra lookup
//! per guarded request.
//!
//! Guards compose by short-circuiting: authentication resolves first, and a
//! failure never reaches entity-level logic.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kdm_core::error::CoreError;
use kdm_db::models::status::{ApprovalStatus, Role};
use kdm_db::models::track::Track;
use kdm_db::models::user::User;
use kdm_db::repositories::UserRepo;
use sqlx::PgPool;

use super::auth::SessionUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an approved account. Rejects with 403 Forbidden otherwise.
///
/// Admin accounts are seeded approved, so they pass too.
///
/// ```ignore
/// async fn artists_only(RequireApprovedArtist(user): RequireApprovedArtist) -> AppResult<Json<()>> {
///     // user's account is guaranteed approved here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireApprovedArtist(pub SessionUser);

impl FromRequestParts<AppState> for RequireApprovedArtist {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = SessionUser::from_request_parts(parts, state).await?;
        // A vanished user row fails exactly like an unapproved one.
        let approved = fetch_fresh(&state.pool, &user)
            .await?
            .is_some_and(|row| row.approval_status == ApprovalStatus::Approved);
        if !approved {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account not approved yet".into(),
            )));
        }
        Ok(RequireApprovedArtist(user))
    }
}

/// Requires the admin role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub SessionUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = SessionUser::from_request_parts(parts, state).await?;
        let is_admin = fetch_fresh(&state.pool, &user)
            .await?
            .is_some_and(|row| row.role == Role::Admin);
        if !is_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin access required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Composite predicate: the caller must be an admin or own the track.
///
/// Not wired to any route yet; intended for endpoints that mutate a single
/// track on behalf of its owner.
pub async fn ensure_admin_or_owner(
    pool: &PgPool,
    user: &SessionUser,
    track: &Track,
) -> Result<(), AppError> {
    let row = fetch_fresh(pool, user).await?.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
    })?;
    if row.role == Role::Admin || track.artist_id == row.id {
        return Ok(());
    }
    Err(AppError::Core(CoreError::Forbidden(
        "Not authorized for this action".into(),
    )))
}

/// Re-fetch the full user row behind a session identity.
async fn fetch_fresh(pool: &PgPool, user: &SessionUser) -> Result<Option<User>, AppError> {
    Ok(UserRepo::find_by_id(pool, user.user_id).await?)
}
