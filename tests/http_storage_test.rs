//! End-to-end tests: the real router over migrated in-memory SQLite.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use task_manager::api::create_router;
use task_manager::infra::{Database, Migrator, TaskRepository, TaskStore};
use task_manager::AppState;

// =============================================================================
// Test Helpers
// =============================================================================

async fn setup() -> (Router, DatabaseConnection) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = SeaDatabase::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let state = AppState::from_database(Arc::new(Database::from_connection(db.clone())));
    (create_router(state, Duration::from_secs(15)), db)
}

async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Wire Format
// =============================================================================

#[tokio::test]
async fn test_created_task_uses_legacy_keys() {
    let (app, _db) = setup().await;

    let response = post_json(app, "/createtask", r#"{"Title": "t", "Content": "c"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let task: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(task["ID"], 1);
    assert_eq!(task["AuthorID"], 1);
    assert_eq!(task["AssignedID"], 1);
    assert_eq!(task["Closed"], 0);
    assert_eq!(task["Title"], "t");
    assert!(task["Opened"].as_i64().unwrap() > 0);
    assert!(task.get("id").is_none());
}

#[tokio::test]
async fn test_seeded_user_listing() {
    let (app, _db) = setup().await;

    let response = app
        .oneshot(Request::get("/allusers").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let users: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(users, serde_json::json!([{ "ID": 1, "Name": "default" }]));
}

// =============================================================================
// Bulk Creation
// =============================================================================

#[tokio::test]
async fn test_failed_bulk_create_is_500_and_commits_nothing() {
    let (app, db) = setup().await;

    let response = post_json(
        app.clone(),
        "/createtasks",
        r#"[{"Title": "one"}, {"Title": "two", "AuthorID": 999}, {"Title": "three"}]"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(response).await.is_empty());

    assert!(TaskStore::new(db).list().await.unwrap().is_empty());

    let response = app
        .oneshot(Request::get("/alltasks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_bulk_create_returns_every_row() {
    let (app, db) = setup().await;

    let response = post_json(
        app,
        "/createtasks",
        r#"[{"Title": "one"}, {"Title": "two", "AssignedID": 1}]"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let created: Value = serde_json::from_str(&body_text(response).await).unwrap();
    let ids: Vec<i64> = created
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["ID"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(TaskStore::new(db).list().await.unwrap().len(), 2);
}
