//! Integration tests for user creation, duplicate lookup, and approval.

use kdm_db::models::status::{ApprovalStatus, Role};
use kdm_db::models::user::CreateUser;
use kdm_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_artist(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake$hash".to_string(),
        role: Role::Artist,
        approval_status: ApprovalStatus::Pending,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_artist_defaults(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_artist("alice", "a@x.com"))
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.role, Role::Artist);
    assert_eq!(user.approval_status, ApprovalStatus::Pending);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_combined_duplicate_lookup(pool: PgPool) {
    UserRepo::create(&pool, &new_artist("alice", "a@x.com"))
        .await
        .unwrap();

    // Matches on username alone.
    let by_username = UserRepo::find_by_username_or_email(&pool, "alice", "other@x.com")
        .await
        .unwrap();
    assert!(by_username.is_some());

    // Matches on email alone.
    let by_email = UserRepo::find_by_username_or_email(&pool, "bob", "a@x.com")
        .await
        .unwrap();
    assert!(by_email.is_some());

    // Case-sensitive: a different casing is a different identity.
    let cased = UserRepo::find_by_username_or_email(&pool, "Alice", "A@X.COM")
        .await
        .unwrap();
    assert!(cased.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unique_constraints_backstop(pool: PgPool) {
    UserRepo::create(&pool, &new_artist("alice", "a@x.com"))
        .await
        .unwrap();

    let result = UserRepo::create(&pool, &new_artist("alice", "different@x.com")).await;
    match result {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_approve_is_idempotent(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_artist("alice", "a@x.com"))
        .await
        .unwrap();

    assert!(UserRepo::approve(&pool, user.id).await.unwrap());
    let approved = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(approved.approval_status, ApprovalStatus::Approved);

    // Second approval is a no-op that still reports success.
    assert!(UserRepo::approve(&pool, user.id).await.unwrap());
    let still = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(still.approval_status, ApprovalStatus::Approved);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_approve_missing_user_reports_absence(pool: PgPool) {
    assert!(!UserRepo::approve(&pool, 9999).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_pending_excludes_approved(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_artist("alice", "a@x.com"))
        .await
        .unwrap();
    UserRepo::create(&pool, &new_artist("bob", "b@x.com"))
        .await
        .unwrap();
    UserRepo::approve(&pool, a.id).await.unwrap();

    let pending = UserRepo::list_pending(&pool).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].username, "bob");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_exists(pool: PgPool) {
    assert!(!UserRepo::admin_exists(&pool).await.unwrap());

    let admin = CreateUser {
        username: "admin".to_string(),
        email: "admin@x.com".to_string(),
        password_hash: "$argon2id$fake$hash".to_string(),
        role: Role::Admin,
        approval_status: ApprovalStatus::Approved,
    };
    UserRepo::create(&pool, &admin).await.unwrap();

    assert!(UserRepo::admin_exists(&pool).await.unwrap());
}
