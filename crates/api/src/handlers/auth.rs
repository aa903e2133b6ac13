//! Handlers for the `/auth` resource (signup, login, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use cookie::Cookie;
use kdm_core::error::CoreError;
use kdm_core::validation::require_non_empty;
use kdm_db::models::session::CreateSession;
use kdm_db::models::status::{ApprovalStatus, Role};
use kdm_db::models::user::CreateUser;
use kdm_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{
    generate_session_token, hash_session_token, removal_cookie, session_cookie, session_token,
};
use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response body for a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login.
///
/// `redirect` is a role-dependent landing location hint for the caller, not
/// an enforced redirect.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub redirect: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Register a new artist account. The account starts `pending` and cannot
/// log in until an admin approves it.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<Json<SignupResponse>> {
    require_non_empty("username", &input.username)?;
    require_non_empty("email", &input.email)?;
    require_non_empty("password", &input.password)?;

    // Username and email are both identity keys: one combined lookup.
    if UserRepo::find_by_username_or_email(&state.pool, &input.username, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::DuplicateIdentity));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash: hashed,
            role: Role::Artist,
            approval_status: ApprovalStatus::Pending,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Signup submitted");

    Ok(Json(SignupResponse {
        success: true,
        message: "Signup request submitted. Please wait for admin approval.".to_string(),
    }))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password, establish a session, and return
/// the landing location for the account's role.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    // 1. Find user by username. Unknown usernames and bad passwords produce
    //    the same error.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    // 2. Verify password via the hashing primitive.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    // 3. Artists must be approved before their first login; admins are
    //    seeded approved and always pass.
    if user.role == Role::Artist && user.approval_status != ApprovalStatus::Approved {
        return Err(AppError::Core(CoreError::PendingApproval));
    }

    // 4. Establish the session: opaque token to the client, hash plus
    //    identity snapshot to the database.
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::seconds(state.config.session_ttl_secs);
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
            token_hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = user.role.as_str(), "Login succeeded");

    let redirect = match user.role {
        Role::Admin => "/admin/dashboard",
        Role::Artist => "/artist/dashboard",
    };

    let cookie = session_cookie(
        &token,
        state.config.session_ttl_secs,
        state.config.cookie_secure,
    );

    with_cookie(
        Json(LoginResponse {
            success: true,
            redirect: redirect.to_string(),
        }),
        &cookie,
    )
}

/// POST /api/v1/auth/logout
///
/// Destroy the session referenced by the cookie, if any, and clear the
/// cookie. Idempotent: logging out twice succeeds both times.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    if let Some(token) = session_token(&headers) {
        SessionRepo::delete_by_token_hash(&state.pool, &hash_session_token(&token)).await?;
    }

    with_cookie(
        Json(StatusResponse::ok()),
        &removal_cookie(state.config.cookie_secure),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Attach a `Set-Cookie` header to a response body.
fn with_cookie(body: impl IntoResponse, cookie: &Cookie<'static>) -> AppResult<Response> {
    let value = HeaderValue::from_str(&cookie.to_string())
        .map_err(|e| AppError::InternalError(format!("Cookie encoding error: {e}")))?;
    let mut response = body.into_response();
    response.headers_mut().insert(SET_COOKIE, value);
    Ok(response)
}
