//! Idempotent admin account bootstrap.
//!
//! Runs once at process start, after migrations: if no admin account exists,
//! create one from the configured credentials. Lookup-or-create, so repeated
//! startups and concurrently starting instances converge on a single seeded
//! admin.

use kdm_db::models::status::{ApprovalStatus, Role};
use kdm_db::models::user::CreateUser;
use kdm_db::repositories::UserRepo;
use kdm_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeedConfig;
use crate::error::AppError;

/// Ensure exactly one admin account exists, seeding it if necessary.
///
/// Admin accounts are always created approved.
pub async fn ensure_admin(pool: &DbPool, admin: &AdminSeedConfig) -> Result<(), AppError> {
    if UserRepo::admin_exists(pool).await? {
        tracing::debug!("Admin account already present, skipping seed");
        return Ok(());
    }

    let hashed = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        username: admin.username.clone(),
        email: admin.email.clone(),
        password_hash: hashed,
        role: Role::Admin,
        approval_status: ApprovalStatus::Approved,
    };

    match UserRepo::create(pool, &input).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, username = %user.username, "Seeded admin account");
            Ok(())
        }
        // A concurrently starting instance seeded the admin first.
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
            tracing::debug!("Admin account seeded by another instance");
            Ok(())
        }
        Err(e) => Err(AppError::Database(e)),
    }
}
