//! Database repository for recipe ratings.

use crate::db::errors::Result;
use crate::db::models::ratings::RatingCreateDBRequest;
use crate::types::RatingId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Ratings<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Ratings<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Insert a rating and return the id assigned by the database.
    ///
    /// The id comes from `RETURNING`, so concurrent inserts cannot be
    /// confused with each other. Foreign key failures surface as
    /// [`DbError::ForeignKeyViolation`](crate::db::errors::DbError) carrying
    /// the violated constraint name.
    #[instrument(skip(self, request), fields(recipe_id = request.recipe_id, user_id = request.user_id), err)]
    pub async fn create(&mut self, request: &RatingCreateDBRequest) -> Result<RatingId> {
        let rating_id = sqlx::query_scalar::<_, RatingId>(
            r#"
            INSERT INTO recipe_rating (user_id, recipe_id, recipe_rating, recipe_comment, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING rating_id
            "#,
        )
        .bind(request.user_id)
        .bind(request.recipe_id)
        .bind(request.recipe_rating)
        .bind(&request.recipe_comment)
        .bind(request.date)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(rating_id)
    }
}
