//! Integration tests for the storage layer.
//!
//! Each test opens a private in-memory SQLite database, applies the real
//! migrations and exercises the repositories and the unit of work.

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use task_manager::infra::{
    Database, LabelRepository, LabelStore, Migrator, Persistence, TaskRepository, TaskStore,
    UserRepository, UserStore,
};
use task_manager::services::{TaskManager, TaskService};
use task_manager::{AppError, Label, Task, TaskLabel, User};

// =============================================================================
// Test Helpers
// =============================================================================

async fn setup() -> DatabaseConnection {
    // One connection, otherwise every pooled connection gets its own database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = SeaDatabase::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn seed_tasks(store: &TaskStore, count: usize) -> Vec<Task> {
    let mut created = Vec::with_capacity(count);
    for n in 1..=count {
        created.push(
            store
                .create(Task::new(format!("task {n}"), "body"))
                .await
                .unwrap(),
        );
    }
    created
}

// =============================================================================
// Migrations
// =============================================================================

#[tokio::test]
async fn test_migrations_seed_default_user_once() {
    let db = setup().await;

    // Already applied, nothing runs twice
    Migrator::up(&db, None).await.unwrap();

    let users = UserStore::new(db.clone()).list().await.unwrap();
    assert_eq!(users, vec![User { id: 1, name: "default".into() }]);

    let status = Database::from_connection(db).migration_status().await.unwrap();
    assert_eq!(status.len(), 5);
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_ping() {
    let db = Database::from_connection(setup().await);
    assert!(db.ping().await.is_ok());
}

// =============================================================================
// Tasks
// =============================================================================

#[tokio::test]
async fn test_create_task_fills_database_defaults() {
    let store = TaskStore::new(setup().await);

    let task = store.create(Task::new("write docs", "all of them")).await.unwrap();

    assert!(task.id > 0);
    assert!(task.opened > 0);
    assert_eq!(task.closed, 0);
    assert_eq!(task.author_id, 1);
    assert_eq!(task.assigned_id, 1);
    assert_eq!(task.title, "write docs");
    assert_eq!(task.content, "all of them");
    assert!(task.is_open());
}

#[tokio::test]
async fn test_create_task_with_unknown_author_fails() {
    let store = TaskStore::new(setup().await);

    let result = store.create(Task::new("orphan", "").authored_by(999)).await;
    assert!(matches!(result, Err(AppError::Database(_))));
}

#[tokio::test]
async fn test_delete_missing_task_is_none() {
    let store = TaskStore::new(setup().await);
    assert!(store.delete(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_returns_snapshot() {
    let store = TaskStore::new(setup().await);
    let created = store.create(Task::new("short lived", "")).await.unwrap();

    let deleted = store.delete(created.id).await.unwrap();
    assert_eq!(deleted, Some(created.clone()));
    assert!(store.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_tables_list_nothing() {
    let db = setup().await;

    assert!(TaskStore::new(db.clone()).list().await.unwrap().is_empty());
    assert!(LabelStore::new(db.clone()).list().await.unwrap().is_empty());

    // Only the seeded user
    assert_eq!(UserStore::new(db).list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_list_surfaces_as_not_found() {
    let uow = Arc::new(Persistence::new(setup().await));
    let service = TaskManager::new(uow);

    assert!(matches!(service.list_tasks().await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_task_rereads_row() {
    let store = TaskStore::new(setup().await);
    let created = store.create(Task::new("draft", "v1")).await.unwrap();

    let updated = store
        .update(Task {
            title: "final".into(),
            content: "v2".into(),
            closed: 1_700_000_000,
            // Not part of the update
            author_id: 42,
            ..created.clone()
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "final");
    assert_eq!(updated.closed, 1_700_000_000);
    assert_eq!(updated.author_id, 1);
    assert_eq!(updated.opened, created.opened);
    assert_eq!(Some(updated), store.find_by_id(created.id).await.unwrap());
}

#[tokio::test]
async fn test_update_missing_task_is_none() {
    let store = TaskStore::new(setup().await);
    let ghost = Task {
        id: 77,
        ..Task::new("ghost", "")
    };
    assert!(store.update(ghost).await.unwrap().is_none());
}

#[tokio::test]
async fn test_filter_by_task_and_author() {
    let db = setup().await;
    let second = UserStore::new(db.clone()).create("second".into()).await.unwrap();
    let store = TaskStore::new(db);

    // Even ids belong to the second user
    for n in 1..=16 {
        let task = Task::new(format!("task {n}"), "");
        let task = if n % 2 == 0 { task.authored_by(second.id) } else { task };
        store.create(task).await.unwrap();
    }

    let only_14 = store.filter(14, 0).await.unwrap();
    assert_eq!(only_14.len(), 1);
    assert_eq!(only_14[0].id, 14);
    assert_eq!(only_14[0].author_id, second.id);

    let by_default_user = store.filter(0, 1).await.unwrap();
    assert_eq!(by_default_user.len(), 8);
    assert!(by_default_user.iter().all(|t| t.author_id == 1));

    assert!(store.filter(14, 1).await.unwrap().is_empty());
    assert_eq!(store.filter(0, 0).await.unwrap().len(), 16);

    let ids: Vec<i32> = store
        .list_by_author(second.id)
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![2, 4, 6, 8, 10, 12, 14, 16]);
}

// =============================================================================
// Bulk creation
// =============================================================================

#[tokio::test]
async fn test_bulk_create_commits_all_rows() {
    let db = setup().await;
    let service = TaskManager::new(Arc::new(Persistence::new(db.clone())));

    let created = service
        .create_tasks(vec![
            Task::new("one", ""),
            Task::new("two", "").assigned_to(1),
            Task::new("three", ""),
        ])
        .await
        .unwrap();

    assert_eq!(created.len(), 3);
    assert!(created.iter().all(|t| t.opened > 0 && t.author_id == 1));
    assert_eq!(TaskStore::new(db).list().await.unwrap(), created);
}

#[tokio::test]
async fn test_bulk_create_is_all_or_nothing() {
    let db = setup().await;
    let service = TaskManager::new(Arc::new(Persistence::new(db.clone())));

    // Second row references a user that does not exist
    let result = service
        .create_tasks(vec![
            Task::new("one", ""),
            Task::new("two", "").authored_by(999),
            Task::new("three", ""),
        ])
        .await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert!(TaskStore::new(db).list().await.unwrap().is_empty());
}

// =============================================================================
// Users and labels
// =============================================================================

#[tokio::test]
async fn test_label_update_matches_refetch() {
    let store = LabelStore::new(setup().await);
    let created = store.create("bug".into()).await.unwrap();

    let updated = store
        .update(Label {
            id: created.id,
            name: "defect".into(),
        })
        .await
        .unwrap()
        .unwrap();

    let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "defect");
    assert_eq!(updated, fetched);
}

#[tokio::test]
async fn test_user_crud_round() {
    let store = UserStore::new(setup().await);

    let alice = store.create("alice".into()).await.unwrap();
    assert_eq!(alice.id, 2);

    let renamed = store
        .update(User {
            id: alice.id,
            name: "alice b".into(),
        })
        .await
        .unwrap();
    assert_eq!(renamed.map(|u| u.name), Some("alice b".to_string()));

    assert!(store.delete(alice.id).await.unwrap().is_some());
    assert!(store.find_by_id(alice.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleting_referenced_user_fails() {
    let db = setup().await;
    let users = UserStore::new(db.clone());
    let bob = users.create("bob".into()).await.unwrap();
    TaskStore::new(db)
        .create(Task::new("bob's", "").authored_by(bob.id))
        .await
        .unwrap();

    assert!(matches!(users.delete(bob.id).await, Err(AppError::Database(_))));
}

#[tokio::test]
async fn test_tasks_by_label() {
    let db = setup().await;
    let tasks = TaskStore::new(db.clone());
    let labels = LabelStore::new(db);

    let created = seed_tasks(&tasks, 3).await;
    let urgent = labels.create("urgent".into()).await.unwrap();
    let later = labels.create("later".into()).await.unwrap();

    tasks
        .attach_label(TaskLabel::new(created[0].id, urgent.id))
        .await
        .unwrap();
    tasks
        .attach_label(TaskLabel::new(created[2].id, urgent.id))
        .await
        .unwrap();
    tasks
        .attach_label(TaskLabel::new(created[1].id, later.id))
        .await
        .unwrap();

    let tagged = tasks.list_by_label(urgent.id).await.unwrap();
    assert_eq!(tagged, vec![created[0].clone(), created[2].clone()]);

    let removed = tasks
        .detach_label(TaskLabel::new(created[0].id, urgent.id))
        .await
        .unwrap();
    assert_eq!(removed, Some(TaskLabel::new(created[0].id, urgent.id)));
    assert!(tasks
        .detach_label(TaskLabel::new(created[0].id, urgent.id))
        .await
        .unwrap()
        .is_none());

    // Deleting the label drops its associations
    labels.delete(urgent.id).await.unwrap();
    assert!(tasks.list_by_label(urgent.id).await.unwrap().is_empty());
    assert_eq!(tasks.list_by_label(later.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_attach_unknown_label_fails() {
    let db = setup().await;
    let tasks = TaskStore::new(db);
    let created = seed_tasks(&tasks, 1).await;

    let result = tasks.attach_label(TaskLabel::new(created[0].id, 404)).await;
    assert!(matches!(result, Err(AppError::Database(_))));
}
