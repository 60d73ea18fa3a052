use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Requested resource not found
    #[error("{message}")]
    NotFound { message: String },

    /// Malformed query/path/body parameters, rejected at the boundary
    #[error("{message}")]
    Validation { message: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                // A rating referencing a missing user or recipe surfaces as
                // 404, matching the API contract for unresolved references.
                DbError::ForeignKeyViolation { .. } => StatusCode::NOT_FOUND,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::NotFound { message } => message.clone(),
            Error::Validation { message } => message.clone(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Resource not found".to_string(),
                DbError::ForeignKeyViolation { constraint, .. } => {
                    // Tell the caller which reference was invalid, keyed by
                    // the violated constraint name.
                    match constraint.as_deref() {
                        Some("recipe_rating_recipe_id_fkey") => "Invalid recipe_id.".to_string(),
                        Some("recipe_rating_user_id_fkey") => "Invalid user_id.".to_string(),
                        _ => "Invalid reference to related resource".to_string(),
                    }
                }
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::NotFound { .. } | Error::Validation { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        (self.status_code(), self.user_message()).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
