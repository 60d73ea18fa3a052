//! Shared helpers for database and end-to-end tests.

use crate::{Application, Config};
use axum_test::TestServer;
use sqlx::PgPool;

/// Build a test server around a `#[sqlx::test]` pool.
pub async fn create_test_app(pool: PgPool) -> TestServer {
    let app = Application::new_with_pool(Config::default(), Some(pool))
        .await
        .expect("Failed to create application");
    app.into_test_server()
}

pub async fn seed_user(pool: &PgPool, username: &str) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO users (username) VALUES ($1) RETURNING user_id")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("Failed to seed user")
}

#[allow(clippy::too_many_arguments)]
pub async fn seed_recipe(
    pool: &PgPool,
    user_id: i32,
    name: &str,
    total_time: i32,
    servings: i32,
    spicelevel: i32,
    cookinglevel: i32,
    description: &str,
) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO recipe
            (recipe_name, user_id, total_time, servings, spicelevel, cookinglevel, recipe_description)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING recipe_id",
    )
    .bind(name)
    .bind(user_id)
    .bind(total_time)
    .bind(servings)
    .bind(spicelevel)
    .bind(cookinglevel)
    .bind(description)
    .fetch_one(pool)
    .await
    .expect("Failed to seed recipe")
}

pub async fn seed_ingredient(pool: &PgPool, recipe_id: i32, ingredient_name: &str, core_ingredient: &str) {
    sqlx::query("INSERT INTO ingredients (recipe_id, ingredient_name, core_ingredient) VALUES ($1, $2, $3)")
        .bind(recipe_id)
        .bind(ingredient_name)
        .bind(core_ingredient)
        .execute(pool)
        .await
        .expect("Failed to seed ingredient");
}

pub async fn seed_step(pool: &PgPool, recipe_id: i32, step_name: &str) {
    sqlx::query("INSERT INTO instructions (recipe_id, step_name) VALUES ($1, $2)")
        .bind(recipe_id)
        .bind(step_name)
        .execute(pool)
        .await
        .expect("Failed to seed step");
}

pub async fn seed_rating(pool: &PgPool, user_id: i32, recipe_id: i32, rating: i32, comment: &str) {
    sqlx::query(
        "INSERT INTO recipe_rating (user_id, recipe_id, recipe_rating, recipe_comment, date)
         VALUES ($1, $2, $3, $4, CURRENT_DATE)",
    )
    .bind(user_id)
    .bind(recipe_id)
    .bind(rating)
    .bind(comment)
    .execute(pool)
    .await
    .expect("Failed to seed rating");
}
