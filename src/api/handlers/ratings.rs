use crate::AppState;
use crate::api::extract::Path;
use crate::api::models::ratings::RatingCreate;
use crate::db::handlers::{Ratings, Users};
use crate::db::models::ratings::RatingCreateDBRequest;
use crate::errors::{Error, Result};
use crate::types::{RatingId, RecipeId};
use axum::{Json, extract::State};

#[utoipa::path(
    post,
    path = "/recipes/{recipe_id}/rate/",
    tag = "recipes",
    summary = "Add a rating to a recipe",
    request_body = RatingCreate,
    responses(
        (status = 200, description = "Id of the created rating", body = i32),
        (status = 404, description = "Unknown username, recipe, or user"),
        (status = 422, description = "Invalid request body or path"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    )
)]
#[tracing::instrument(skip_all, fields(recipe_id))]
pub async fn add_rating(
    State(state): State<AppState>,
    Path(recipe_id): Path<RecipeId>,
    Json(rating): Json<RatingCreate>,
) -> Result<Json<RatingId>> {
    if rating.username.is_empty() {
        return Err(Error::Validation {
            message: "username must not be empty".to_string(),
        });
    }

    // Lookup and insert share one transaction; it commits on success and
    // rolls back when dropped on any error path.
    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;

    let user_id = Users::new(&mut tx)
        .id_by_username(&rating.username)
        .await?
        .ok_or_else(|| Error::NotFound {
            message: "username not found. Please check or create new user.".to_string(),
        })?;

    // The id comes straight from the insert; no re-query by descending id
    let rating_id = Ratings::new(&mut tx)
        .create(&RatingCreateDBRequest::new(user_id, recipe_id, rating))
        .await?;

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(Json(rating_id))
}
