//! Task handlers.

use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};

use crate::api::extractors::{IdParam, JsonBody, LinkParams, QueryParams, TaskFilterParams};
use crate::api::AppState;
use crate::types::PrettyJson;
use common::AppResult;
use domain::{Task, TaskLabel};

/// Create task routes
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/alltasks", get(list_tasks))
        .route("/gettask", get(get_task))
        .route("/createtask", post(create_task))
        .route("/createtasks", post(create_tasks))
        .route("/updatetask", put(update_task))
        .route("/deletetask", get(delete_task))
        .route("/taskby", get(filter_tasks))
        .route("/taskbyauthor", get(tasks_by_author))
        .route("/taskbylabel", get(tasks_by_label))
        .route("/tasklabel", post(attach_label))
        .route("/untasklabel", get(detach_label))
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/alltasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "All tasks ordered by id", body = [Task]),
        (status = 204, description = "No tasks")
    )
)]
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<PrettyJson<Vec<Task>>> {
    Ok(PrettyJson(state.task_service.list_tasks().await?))
}

/// Get task by ID
#[utoipa::path(
    get,
    path = "/gettask",
    tag = "Tasks",
    params(IdParam),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 204, description = "Task not found"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParam>,
) -> AppResult<PrettyJson<Task>> {
    Ok(PrettyJson(state.task_service.get_task(params.id).await?))
}

/// Create a task
///
/// Only `title`, `content` and non-zero `author_id`/`assigned_id` are used;
/// the rest is filled in by the database.
#[utoipa::path(
    post,
    path = "/createtask",
    tag = "Tasks",
    request_body = Task,
    responses(
        (status = 200, description = "Task created", body = Task),
        (status = 400, description = "Malformed JSON"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(task): JsonBody<Task>,
) -> AppResult<PrettyJson<Task>> {
    Ok(PrettyJson(state.task_service.create_task(task).await?))
}

/// Create several tasks in one transaction
#[utoipa::path(
    post,
    path = "/createtasks",
    tag = "Tasks",
    request_body = [Task],
    responses(
        (status = 200, description = "All tasks created", body = [Task]),
        (status = 400, description = "Malformed JSON"),
        (status = 500, description = "A row failed, nothing was stored")
    )
)]
pub async fn create_tasks(
    State(state): State<AppState>,
    JsonBody(tasks): JsonBody<Vec<Task>>,
) -> AppResult<PrettyJson<Vec<Task>>> {
    Ok(PrettyJson(state.task_service.create_tasks(tasks).await?))
}

/// Update title, content and closed time of a task
#[utoipa::path(
    put,
    path = "/updatetask",
    tag = "Tasks",
    request_body = Task,
    responses(
        (status = 200, description = "Task as stored after the update", body = Task),
        (status = 204, description = "Task not found"),
        (status = 400, description = "Malformed JSON")
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    JsonBody(task): JsonBody<Task>,
) -> AppResult<PrettyJson<Task>> {
    Ok(PrettyJson(state.task_service.update_task(task).await?))
}

/// Delete a task
#[utoipa::path(
    get,
    path = "/deletetask",
    tag = "Tasks",
    params(IdParam),
    responses(
        (status = 200, description = "Deleted task", body = Task),
        (status = 204, description = "Task not found"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParam>,
) -> AppResult<PrettyJson<Task>> {
    Ok(PrettyJson(state.task_service.delete_task(params.id).await?))
}

/// Filter by task id and author id
#[utoipa::path(
    get,
    path = "/taskby",
    tag = "Tasks",
    params(TaskFilterParams),
    responses(
        (status = 200, description = "Matching tasks", body = [Task]),
        (status = 204, description = "No match"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn filter_tasks(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<TaskFilterParams>,
) -> AppResult<PrettyJson<Vec<Task>>> {
    let tasks = state
        .task_service
        .filter_tasks(params.tid, params.aid)
        .await?;

    Ok(PrettyJson(tasks))
}

/// Tasks written by an author
#[utoipa::path(
    get,
    path = "/taskbyauthor",
    tag = "Tasks",
    params(IdParam),
    responses(
        (status = 200, description = "Tasks of the author", body = [Task]),
        (status = 204, description = "No match"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn tasks_by_author(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParam>,
) -> AppResult<PrettyJson<Vec<Task>>> {
    Ok(PrettyJson(state.task_service.tasks_by_author(params.id).await?))
}

/// Tasks carrying a label
#[utoipa::path(
    get,
    path = "/taskbylabel",
    tag = "Tasks",
    params(IdParam),
    responses(
        (status = 200, description = "Tasks with the label", body = [Task]),
        (status = 204, description = "No match"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn tasks_by_label(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParam>,
) -> AppResult<PrettyJson<Vec<Task>>> {
    Ok(PrettyJson(state.task_service.tasks_by_label(params.id).await?))
}

/// Attach a label to a task
#[utoipa::path(
    post,
    path = "/tasklabel",
    tag = "Tasks",
    request_body = TaskLabel,
    responses(
        (status = 200, description = "Association stored", body = TaskLabel),
        (status = 400, description = "Malformed JSON"),
        (status = 500, description = "Unknown task or label")
    )
)]
pub async fn attach_label(
    State(state): State<AppState>,
    JsonBody(link): JsonBody<TaskLabel>,
) -> AppResult<PrettyJson<TaskLabel>> {
    Ok(PrettyJson(state.task_service.attach_label(link).await?))
}

/// Detach a label from a task
#[utoipa::path(
    get,
    path = "/untasklabel",
    tag = "Tasks",
    params(LinkParams),
    responses(
        (status = 200, description = "Removed association", body = TaskLabel),
        (status = 204, description = "Association not found"),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn detach_label(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<LinkParams>,
) -> AppResult<PrettyJson<TaskLabel>> {
    let link = TaskLabel::new(params.tid, params.lid);
    Ok(PrettyJson(state.task_service.detach_label(link).await?))
}
