//! JSON body extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use common::AppError;

/// Deserializes the request body as JSON regardless of `Content-Type`.
///
/// Older clients post bodies without a JSON content type, so unlike
/// `axum::Json` the header is not checked. Any decode failure becomes a
/// 400 carrying the serde message.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_label(JsonBody(label): JsonBody<Label>) {
///     // label is decoded, unknown fields ignored
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::bad_request(format!("invalid JSON body: {e}")))?;

        Ok(JsonBody(value))
    }
}
