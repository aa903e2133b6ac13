//! Periodic cleanup of expired sessions.
//!
//! Expired rows are already unreachable (the session lookup filters on
//! `expires_at`); this task keeps the table from growing without bound.
//! Runs on a fixed interval using `tokio::time::interval`.

use std::time::Duration;

use kdm_db::repositories::SessionRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// How often the cleanup job runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the session cleanup loop until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Session reaper started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session reaper stopping");
                break;
            }
            _ = interval.tick() => {
                match SessionRepo::cleanup_expired(&pool).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Session reaper: purged expired sessions");
                        } else {
                            tracing::debug!("Session reaper: no rows to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Session reaper: cleanup failed");
                    }
                }
            }
        }
    }
}
