//! OpenAPI documentation configuration.

use crate::api::handlers;
use crate::api::models::ratings::RatingCreate;
use crate::api::models::recipes::{RecipeDetail, RecipeMatch, RecipeSummary, SortKey};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe API",
        description = "Fetch, list, search, and rate recipes.",
        version = "0.1.0"
    ),
    paths(
        handlers::root,
        handlers::recipes::get_recipe,
        handlers::recipes::list_recipes,
        handlers::recipes::find_recipes,
        handlers::ratings::add_rating,
    ),
    components(schemas(RecipeDetail, RecipeSummary, RecipeMatch, SortKey, RatingCreate)),
    tags(
        (name = "recipes", description = "Access and rate recipe data.")
    )
)]
pub struct ApiDoc;
