//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: axum route handlers for all endpoints
//! - **[`models`]**: request/response data structures
//! - **[`extract`]**: extractors mapping malformed input to 422
//!
//! All endpoints carry OpenAPI annotations via `utoipa`; the rendered
//! documentation is served at `/docs`.

pub mod extract;
pub mod handlers;
pub mod models;
