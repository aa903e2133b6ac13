//! Integration tests for the idempotent admin bootstrap.

use kdm_api::bootstrap::ensure_admin;
use kdm_api::config::AdminSeedConfig;
use kdm_db::models::status::{ApprovalStatus, Role};
use kdm_db::repositories::UserRepo;
use sqlx::PgPool;

fn seed_config() -> AdminSeedConfig {
    AdminSeedConfig {
        username: "admin".to_string(),
        email: "admin@kdm.network".to_string(),
        password: "admin123".to_string(),
    }
}

/// A fresh database gets exactly one approved admin.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bootstrap_seeds_admin_once(pool: PgPool) {
    ensure_admin(&pool, &seed_config()).await.unwrap();

    let admin = UserRepo::find_by_username(&pool, "admin")
        .await
        .unwrap()
        .expect("bootstrap should create the admin");
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.approval_status, ApprovalStatus::Approved);

    // Running the bootstrap again is a lookup, not a second insert.
    ensure_admin(&pool, &seed_config()).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'admin'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// An existing admin under a different name suppresses the seed entirely.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bootstrap_respects_existing_admin(pool: PgPool) {
    let existing = kdm_db::models::user::CreateUser {
        username: "root".to_string(),
        email: "root@x.com".to_string(),
        password_hash: "$argon2id$fake$hash".to_string(),
        role: Role::Admin,
        approval_status: ApprovalStatus::Approved,
    };
    UserRepo::create(&pool, &existing).await.unwrap();

    ensure_admin(&pool, &seed_config()).await.unwrap();

    assert!(
        UserRepo::find_by_username(&pool, "admin")
            .await
            .unwrap()
            .is_none(),
        "no default admin may be created when one already exists"
    );
}
