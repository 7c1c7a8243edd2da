//! Request extractors that reject with [`AppError`].
//!
//! Axum's built-in `Path` and `Json` extractors answer malformed input with
//! their own plain-text bodies. These wrappers route those failures through
//! `AppError` so clients always receive the JSON envelope.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use catalog_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// The `{id}` path segment of a product route, parsed as a non-negative id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for ProductId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        parse_id(&raw).map(ProductId)
    }
}

/// Parse a path segment into a [`DbId`]. Negative and non-numeric values are rejected.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<u64>()
        .ok()
        .and_then(|n| DbId::try_from(n).ok())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid product ID: '{raw}'")))
}

/// JSON request body. Decoding failures become `400 Bad Request`.
///
/// The body is decoded whatever its `Content-Type`; clients that post JSON
/// as form data or with no header at all are still served.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
        })?;

        decode_body(&bytes).map(JsonBody)
    }
}

/// Decode a JSON document into `T`, mapping syntax and type errors to `BadRequest`.
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("Invalid input: {e}")))
}
