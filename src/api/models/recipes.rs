//! API request/response models for recipes.

use crate::db::models::recipes::{RecipeDetailRow, RecipeMatchRow, RecipeSummaryRow};
use crate::types::RecipeId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default page size for the list endpoint.
pub const DEFAULT_LIMIT: i64 = 50;

/// Columns the list endpoint can sort by. Any other value is rejected at the
/// boundary with 422 before handler logic runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    TotalTime,
    SpiceLevel,
    CookingLevel,
    Servings,
}

impl SortKey {
    /// The recipe column this key sorts by. Note the schema spells the spice
    /// and cooking level columns without underscores.
    pub fn column(self) -> &'static str {
        match self {
            SortKey::TotalTime => "total_time",
            SortKey::SpiceLevel => "spicelevel",
            SortKey::CookingLevel => "cookinglevel",
            SortKey::Servings => "servings",
        }
    }
}

/// Query parameters for listing recipes
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListRecipesQuery {
    /// Case-insensitive substring filter on the recipe description
    pub tag: Option<String>,

    /// Maximum number of results to return (default: 50)
    #[param(default = 50, minimum = 0)]
    pub limit: Option<i64>,

    /// Number of results to skip before returning results (default: 0)
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,

    /// Sort column
    #[serde(default)]
    pub sort: SortKey,
}

impl ListRecipesQuery {
    /// The tag filter, with the empty string treated as "no filter".
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).max(0)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Query parameters for the ingredient search
#[derive(Debug, Deserialize, IntoParams)]
pub struct FindRecipesQuery {
    /// Comma-separated core ingredient tokens, e.g. `salt,pepper`
    pub ingredient_list: String,
}

impl FindRecipesQuery {
    /// Split the CSV into tokens. No trimming, no deduplication: tokens are
    /// matched exactly against `core_ingredient`.
    pub fn tokens(&self) -> Vec<String> {
        self.ingredient_list.split(',').map(str::to_string).collect()
    }
}

/// Aggregated recipe detail. Field names follow the established response
/// contract, capitalization and spaces included.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeDetail {
    #[serde(rename = "Recipe Name")]
    pub recipe_name: String,
    #[serde(rename = "Cooking Time")]
    pub cooking_time: i32,
    #[serde(rename = "Servings")]
    pub servings: i32,
    #[serde(rename = "Spice Level")]
    pub spice_level: i32,
    #[serde(rename = "Cooking Level")]
    pub cooking_level: i32,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<String>,
    #[serde(rename = "Steps")]
    pub steps: Vec<String>,
    /// Null when the recipe has no ratings
    #[serde(rename = "User Comments")]
    pub user_comments: Option<Vec<String>>,
}

impl From<RecipeDetailRow> for RecipeDetail {
    fn from(row: RecipeDetailRow) -> Self {
        Self {
            recipe_name: row.recipe_name,
            cooking_time: row.total_time,
            servings: row.servings,
            spice_level: row.spicelevel,
            cooking_level: row.cookinglevel,
            description: row.recipe_description,
            ingredients: row.ingredients,
            steps: row.steps,
            user_comments: row.comments,
        }
    }
}

/// One row of the list endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub recipe_id: RecipeId,
    #[serde(rename = "recipe name")]
    pub recipe_name: String,
    #[serde(rename = "total time")]
    pub total_time: i32,
    #[serde(rename = "spice level")]
    pub spice_level: i32,
    #[serde(rename = "cooking level")]
    pub cooking_level: i32,
    pub servings: i32,
    pub description: String,
}

impl From<RecipeSummaryRow> for RecipeSummary {
    fn from(row: RecipeSummaryRow) -> Self {
        Self {
            recipe_id: row.recipe_id,
            recipe_name: row.recipe_name,
            total_time: row.total_time,
            spice_level: row.spicelevel,
            cooking_level: row.cookinglevel,
            servings: row.servings,
            description: row.recipe_description,
        }
    }
}

/// One ingredient-search hit.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeMatch {
    pub recipe_name: String,
    pub recipe_id: RecipeId,
}

impl From<RecipeMatchRow> for RecipeMatch {
    fn from(row: RecipeMatchRow) -> Self {
        Self {
            recipe_name: row.recipe_name,
            recipe_id: row.recipe_id,
        }
    }
}
