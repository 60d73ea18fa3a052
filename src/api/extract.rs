//! Extractors that reject malformed input with 422.
//!
//! Axum's built-in `Query` and `Path` reject with 400; this service's
//! contract is that boundary validation failures (bad pagination numbers, an
//! unknown sort value, a non-integer path id) surface as 422 with the
//! deserializer's message. These wrappers route the rejection through
//! [`Error::Validation`].

use crate::errors::Error;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// `axum::extract::Query` with validation-failure semantics.
#[derive(Debug, Clone, Copy)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) = axum::extract::Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::Validation {
                message: rejection.body_text(),
            })?;
        Ok(Query(value))
    }
}

/// `axum::extract::Path` with validation-failure semantics.
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::Validation {
                message: rejection.body_text(),
            })?;
        Ok(Path(value))
    }
}
