//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Bare `{ "success": true }` acknowledgement for mutations whose result is
/// the status change itself (approve, reject, logout).
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
