//! Custom Axum extractors
//!
//! A path segment that is not an integer id answers 404, since no route
//! matches it. Body problems answer [`ApiError::MalformedInput`].

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract an integer entity id from the `{id}` path segment
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NoRoute {
                path: parts.uri.path().to_owned(),
            })?;

        Ok(Self(id))
    }
}

/// JSON body that must deserialize into `T` in full.
///
/// The `Content-Type` header is ignored; the raw body is always parsed as
/// JSON. Missing fields, unknown fields, wrong types and broken JSON all end
/// up as a 400 carrying serde's message.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedInput {
                message: rejection.body_text(),
            })?;

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|rejection| {
            ApiError::MalformedInput {
                message: rejection.body_text(),
            }
        })?;

        Ok(Self(value))
    }
}
