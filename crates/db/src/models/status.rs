//! Account role and moderation status enums.
//!
//! Each enum maps to a PostgreSQL enum type created in the migrations; the
//! lowercase wire form must match the type's labels exactly.

use serde::{Deserialize, Serialize};

/// Account kind. A closed set of two variants; authorization guards
/// dispatch on the variant rather than comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Artist,
    Admin,
}

impl Role {
    /// Return the database label.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Artist => "artist",
            Role::Admin => "admin",
        }
    }
}

/// Account approval lifecycle. `Approved` is terminal; there is no
/// rejection state for accounts -- unapproved signups stay `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "approval_status", rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

impl ApprovalStatus {
    /// Return the database label.
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
        }
    }
}

/// Track moderation lifecycle. `Pending` is the only entry state; the
/// other three are terminal in the exposed API. `Copyright` is modeled in
/// the schema but no exposed operation currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "track_status", rename_all = "lowercase")]
pub enum TrackStatus {
    Pending,
    Approved,
    Rejected,
    Copyright,
}

impl TrackStatus {
    /// Return the database label.
    pub fn as_str(self) -> &'static str {
        match self {
            TrackStatus::Pending => "pending",
            TrackStatus::Approved => "approved",
            TrackStatus::Rejected => "rejected",
            TrackStatus::Copyright => "copyright",
        }
    }
}
