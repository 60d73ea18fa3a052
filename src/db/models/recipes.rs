//! Database records for recipes.

use crate::types::RecipeId;
use sqlx::FromRow;

/// Aggregated detail record: one row per recipe with its steps, ingredients,
/// and rating comments collected into arrays.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeDetailRow {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub total_time: i32,
    pub servings: i32,
    pub spicelevel: i32,
    pub cookinglevel: i32,
    pub recipe_description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// NULL (not an empty array) when the recipe has no ratings
    pub comments: Option<Vec<String>>,
}

/// Projection used by the list endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeSummaryRow {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub total_time: i32,
    pub servings: i32,
    pub spicelevel: i32,
    pub cookinglevel: i32,
    pub recipe_description: String,
}

/// One search hit: a recipe and the number of its ingredient rows matching
/// any requested token.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeMatchRow {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub frequency: i64,
}
