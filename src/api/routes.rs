//! Application route configuration.

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health, label_routes, task_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{OPENAPI_JSON_PATH, SWAGGER_UI_PATH};

/// Create the application router with all routes configured
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .merge(task_routes())
        .merge(user_routes())
        .merge(label_routes())
        // Global middleware
        .layer(middleware::from_fn(answer_options))
        .layer(cors_layer())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin, fixed method and header allow-lists
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Answer a bare `OPTIONS` on any known route with the methods it accepts.
///
/// CORS preflights never get here, the CORS layer answers them first.
async fn answer_options(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let response = next.run(request).await;
    if !is_options || response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let mut reply = StatusCode::OK.into_response();
    if let Some(allowed) = response.headers().get(header::ALLOW) {
        reply
            .headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_METHODS, allowed.clone());
    }
    reply
}
