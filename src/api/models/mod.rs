//! Request/response data structures for API communication.

pub mod ratings;
pub mod recipes;
