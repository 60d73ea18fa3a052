//! Database record structures matching table schemas.

pub mod ratings;
pub mod recipes;
