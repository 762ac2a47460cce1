//! User handlers.

use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};

use crate::api::extractors::{IdParam, JsonBody, QueryParams};
use crate::api::AppState;
use crate::types::PrettyJson;
use common::AppResult;
use domain::User;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/allusers", get(list_users))
        .route("/getuser", get(get_user))
        .route("/createuser", post(create_user))
        .route("/updateuser", put(update_user))
        .route("/deleteuser", get(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/allusers",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 204, description = "No users")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<PrettyJson<Vec<User>>> {
    Ok(PrettyJson(state.user_service.list_users().await?))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/getuser",
    tag = "Users",
    params(IdParam),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 204, description = "User not found"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParam>,
) -> AppResult<PrettyJson<User>> {
    Ok(PrettyJson(state.user_service.get_user(params.id).await?))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/createuser",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Malformed JSON")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<PrettyJson<User>> {
    Ok(PrettyJson(state.user_service.create_user(user).await?))
}

/// Rename a user
#[utoipa::path(
    put,
    path = "/updateuser",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User as stored after the update", body = User),
        (status = 204, description = "User not found"),
        (status = 400, description = "Malformed JSON")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<PrettyJson<User>> {
    Ok(PrettyJson(state.user_service.update_user(user).await?))
}

/// Delete a user
///
/// Fails with 500 while tasks still reference the user.
#[utoipa::path(
    get,
    path = "/deleteuser",
    tag = "Users",
    params(IdParam),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 204, description = "User not found"),
        (status = 400, description = "Invalid id"),
        (status = 500, description = "User still referenced by tasks")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParam>,
) -> AppResult<PrettyJson<User>> {
    Ok(PrettyJson(state.user_service.delete_user(params.id).await?))
}
