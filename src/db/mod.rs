//! Database layer for data persistence and access.
//!
//! SQLx over PostgreSQL, organized the repository way:
//!
//! - [`handlers`]: repository structs owning the queries
//! - [`models`]: record structures matching table rows
//! - [`errors`]: typed database error classification
//!
//! Migrations live in `migrations/` and run on startup via
//! [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;
