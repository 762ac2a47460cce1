//! Health check handler.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: &'static str,
    pub database: ServiceStatus,
}

/// Status of one backing service
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint with database connectivity check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            ServiceStatus {
                status: "unhealthy",
                error: Some(e.to_string()),
            }
        }
    };

    let (status_code, status) = if database.error.is_none() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (status_code, Json(HealthResponse { status, database }))
}
