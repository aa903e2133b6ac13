//! Domain logic shared by the persistence and API layers.
//!
//! This crate holds the pieces with no I/O: the error taxonomy, ID and
//! timestamp aliases, request-field validation, and upload naming.

pub mod error;
pub mod storage;
pub mod types;
pub mod validation;
