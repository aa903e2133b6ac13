//! Repository for the `user_sessions` table.

use sqlx::PgPool;

use crate::models::session::{CreateSession, UserSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, username, role, token_hash, expires_at, created_at";

/// Provides CRUD operations for user sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<UserSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (user_id, username, role, token_hash, expires_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(input.user_id)
            .bind(&input.username)
            .bind(input.role)
            .bind(&input.token_hash)
            .bind(&input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an unexpired session by its token hash and slide its idle
    /// deadline forward by `ttl_secs` in the same statement.
    ///
    /// Returns `None` for unknown or expired tokens. The single UPDATE keeps
    /// lookup and touch atomic under concurrent requests on one session.
    pub async fn find_active_and_touch(
        pool: &PgPool,
        token_hash: &str,
        ttl_secs: i64,
    ) -> Result<Option<UserSession>, sqlx::Error> {
        let query = format!(
            "UPDATE user_sessions
             SET expires_at = NOW() + make_interval(secs => $2)
             WHERE token_hash = $1 AND expires_at > NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(token_hash)
            .bind(ttl_secs as f64)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session with the given token hash.
    ///
    /// Returns `true` if a row was removed. Logout calls this and succeeds
    /// either way.
    pub async fn delete_by_token_hash(pool: &PgPool, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete expired sessions. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE expires_at < NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
