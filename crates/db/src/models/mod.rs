//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Safe `Serialize` projections where the row itself must not leave the
//!   server (password hashes)

pub mod session;
pub mod status;
pub mod track;
pub mod user;
