//! Unified error handling for the HTTP layer.
//!
//! Provides a single error type that every layer returns and that
//! converts directly into an Axum response:
//!
//! | Variant      | Status | Body            |
//! |--------------|--------|-----------------|
//! | `NotFound`   | 204    | none            |
//! | `BadRequest` | 400    | message         |
//! | `Database`   | 500    | raw driver text |
//! | `Internal`   | 500    | message         |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// The database reported no matching row (or an empty result set)
    #[error("no rows in result set")]
    NotFound,

    /// Malformed request body or query parameter
    #[error("{0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NO_CONTENT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", self);
        } else {
            tracing::warn!(code = self.code(), "{}", self);
        }

        match self {
            // 204 must not carry a body
            AppError::NotFound => status.into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_empty_no_content() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn bad_request_carries_message() {
        let response = AppError::bad_request("invalid digit found in string").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "invalid digit found in string");
    }

    #[cfg(feature = "database")]
    #[tokio::test]
    async fn database_error_exposes_raw_text() {
        let err = AppError::from(sea_orm::DbErr::Custom("connection refused".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.contains("connection refused"));
    }

    #[test]
    fn option_ext_maps_none_to_not_found() {
        let missing: Option<i32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }
}
