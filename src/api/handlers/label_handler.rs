//! Label handlers.

use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};

use crate::api::extractors::{IdParam, JsonBody, QueryParams};
use crate::api::AppState;
use crate::types::PrettyJson;
use common::AppResult;
use domain::Label;

/// Create label routes
pub fn label_routes() -> Router<AppState> {
    Router::new()
        .route("/alllabels", get(list_labels))
        .route("/getlabel", get(get_label))
        .route("/createlabel", post(create_label))
        .route("/updatelabel", put(update_label))
        .route("/deletelabel", get(delete_label))
}

#[utoipa::path(
    get,
    path = "/alllabels",
    tag = "Labels",
    responses(
        (status = 200, description = "All labels", body = [Label]),
        (status = 204, description = "No labels")
    )
)]
pub async fn list_labels(State(state): State<AppState>) -> AppResult<PrettyJson<Vec<Label>>> {
    Ok(PrettyJson(state.label_service.list_labels().await?))
}

#[utoipa::path(
    get,
    path = "/getlabel",
    tag = "Labels",
    params(IdParam),
    responses(
        (status = 200, description = "Label found", body = Label),
        (status = 204, description = "Label not found"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn get_label(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParam>,
) -> AppResult<PrettyJson<Label>> {
    Ok(PrettyJson(state.label_service.get_label(params.id).await?))
}

#[utoipa::path(
    post,
    path = "/createlabel",
    tag = "Labels",
    request_body = Label,
    responses(
        (status = 200, description = "Label created", body = Label),
        (status = 400, description = "Malformed JSON")
    )
)]
pub async fn create_label(
    State(state): State<AppState>,
    JsonBody(label): JsonBody<Label>,
) -> AppResult<PrettyJson<Label>> {
    Ok(PrettyJson(state.label_service.create_label(label).await?))
}

#[utoipa::path(
    put,
    path = "/updatelabel",
    tag = "Labels",
    request_body = Label,
    responses(
        (status = 200, description = "Label as stored after the update", body = Label),
        (status = 204, description = "Label not found"),
        (status = 400, description = "Malformed JSON")
    )
)]
pub async fn update_label(
    State(state): State<AppState>,
    JsonBody(label): JsonBody<Label>,
) -> AppResult<PrettyJson<Label>> {
    Ok(PrettyJson(state.label_service.update_label(label).await?))
}

/// Delete a label and its task associations
#[utoipa::path(
    get,
    path = "/deletelabel",
    tag = "Labels",
    params(IdParam),
    responses(
        (status = 200, description = "Deleted label", body = Label),
        (status = 204, description = "Label not found"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn delete_label(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParam>,
) -> AppResult<PrettyJson<Label>> {
    Ok(PrettyJson(state.label_service.delete_label(params.id).await?))
}
