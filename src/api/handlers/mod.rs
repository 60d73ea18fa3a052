//! Axum route handlers for all API endpoints.

pub mod ratings;
pub mod recipes;

use axum::Json;

/// Root welcome message.
#[utoipa::path(
    get,
    path = "/",
    tag = "recipes",
    summary = "Welcome message",
    responses(
        (status = 200, description = "Welcome message")
    )
)]
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the recipe API. See /docs for more information."
    }))
}
