//! API request/response models for ratings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the rating submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RatingCreate {
    /// Must name an existing user
    pub username: String,
    pub recipe_rating: i32,
    pub recipe_comment: String,
    /// ISO calendar date, e.g. `2024-05-17`
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
}
