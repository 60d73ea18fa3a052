//! Database repository for users.
//!
//! The service never creates or mutates user rows; it only resolves usernames
//! submitted with ratings.

use crate::db::errors::Result;
use crate::types::UserId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Users<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Resolve a username to its internal id. Returns `None` when no such
    /// user exists.
    #[instrument(skip(self), err)]
    pub async fn id_by_username(&mut self, username: &str) -> Result<Option<UserId>> {
        let id = sqlx::query_scalar::<_, UserId>("SELECT user_id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(id)
    }
}
