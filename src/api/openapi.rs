//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, label_handler, task_handler, user_handler};
use domain::{Label, Task, TaskLabel, User};

/// OpenAPI documentation for the task manager
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Manager",
        version = "0.1.0",
        description = "CRUD backend for tasks, users and labels",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8010", description = "Local development server")
    ),
    paths(
        // Task endpoints
        task_handler::list_tasks,
        task_handler::get_task,
        task_handler::create_task,
        task_handler::create_tasks,
        task_handler::update_task,
        task_handler::delete_task,
        task_handler::filter_tasks,
        task_handler::tasks_by_author,
        task_handler::tasks_by_label,
        task_handler::attach_label,
        task_handler::detach_label,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Label endpoints
        label_handler::list_labels,
        label_handler::get_label,
        label_handler::create_label,
        label_handler::update_label,
        label_handler::delete_label,
        // Health
        health_handler::health,
    ),
    components(
        schemas(
            Task,
            TaskLabel,
            User,
            Label,
            health_handler::HealthResponse,
            health_handler::ServiceStatus,
        )
    ),
    tags(
        (name = "Tasks", description = "Task CRUD, filters and label associations"),
        (name = "Users", description = "User CRUD"),
        (name = "Labels", description = "Label CRUD"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
