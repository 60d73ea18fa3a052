//! Database records for recipe ratings.

use crate::api::models::ratings::RatingCreate;
use crate::types::{RecipeId, UserId};
use chrono::NaiveDate;

/// Database request for inserting a new rating
#[derive(Debug, Clone)]
pub struct RatingCreateDBRequest {
    pub user_id: UserId,
    pub recipe_id: RecipeId,
    pub recipe_rating: i32,
    pub recipe_comment: String,
    pub date: NaiveDate,
}

impl RatingCreateDBRequest {
    pub fn new(user_id: UserId, recipe_id: RecipeId, rating: RatingCreate) -> Self {
        Self {
            user_id,
            recipe_id,
            recipe_rating: rating.recipe_rating,
            recipe_comment: rating.recipe_comment,
            date: rating.date,
        }
    }
}
