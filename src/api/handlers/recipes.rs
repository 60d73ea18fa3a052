use crate::AppState;
use crate::api::extract::{Path, Query};
use crate::api::models::recipes::{FindRecipesQuery, ListRecipesQuery, RecipeDetail, RecipeMatch, RecipeSummary};
use crate::db::handlers::{Recipes, recipes::RecipeFilter};
use crate::errors::{Error, Result};
use crate::types::RecipeId;
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    summary = "Get recipe by id",
    responses(
        (status = 200, description = "One-element list with the recipe detail", body = Vec<RecipeDetail>),
        (status = 404, description = "Recipe not found"),
        (status = 422, description = "Invalid recipe id"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Recipe ID")
    )
)]
#[tracing::instrument(skip_all, fields(id))]
pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<RecipeId>) -> Result<Json<Vec<RecipeDetail>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Recipes::new(&mut conn);

    // The response stays a list of at most one object for compatibility with
    // existing consumers.
    match repo.get_detail(id).await? {
        Some(row) => Ok(Json(vec![RecipeDetail::from(row)])),
        None => Err(Error::NotFound {
            message: "recipe not found.".to_string(),
        }),
    }
}

#[utoipa::path(
    get,
    path = "/recipes/",
    tag = "recipes",
    summary = "List recipes",
    responses(
        (status = 200, description = "Ordered list of recipe summaries", body = Vec<RecipeSummary>),
        (status = 422, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    params(ListRecipesQuery)
)]
#[tracing::instrument(skip_all)]
pub async fn list_recipes(State(state): State<AppState>, Query(query): Query<ListRecipesQuery>) -> Result<Json<Vec<RecipeSummary>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Recipes::new(&mut conn);

    let filter = RecipeFilter {
        sort: query.sort,
        tag: query.tag().map(str::to_string),
        limit: query.limit(),
        offset: query.offset(),
    };
    let rows = repo.list(&filter).await?;

    Ok(Json(rows.into_iter().map(RecipeSummary::from).collect()))
}

#[utoipa::path(
    get,
    path = "/findrecipes/",
    tag = "recipes",
    summary = "Search recipes by available ingredients",
    responses(
        (status = 200, description = "Recipes ordered by descending ingredient match count", body = Vec<RecipeMatch>),
        (status = 422, description = "Missing ingredient_list parameter"),
        (status = 500, description = "Internal server error")
    ),
    params(FindRecipesQuery)
)]
#[tracing::instrument(skip_all)]
pub async fn find_recipes(State(state): State<AppState>, Query(query): Query<FindRecipesQuery>) -> Result<Json<Vec<RecipeMatch>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Recipes::new(&mut conn);

    let tokens = query.tokens();
    let rows = repo.find_by_ingredients(&tokens).await?;

    Ok(Json(rows.into_iter().map(RecipeMatch::from).collect()))
}
