//! Task service - Handles task use cases.
//!
//! Reads and writes go straight to the task repository. Bulk creation
//! runs inside one transaction so a failing row leaves nothing behind.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{Task, TaskLabel};

use super::non_empty;
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Task service trait for dependency injection.
///
/// Single-row lookups and list lookups that match nothing both return
/// `AppError::NotFound`.
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn list_tasks(&self) -> AppResult<Vec<Task>>;

    async fn get_task(&self, id: i32) -> AppResult<Task>;

    /// Insert one task, returning it with generated fields
    async fn create_task(&self, task: Task) -> AppResult<Task>;

    /// Insert every task or none of them
    async fn create_tasks(&self, tasks: Vec<Task>) -> AppResult<Vec<Task>>;

    async fn update_task(&self, task: Task) -> AppResult<Task>;

    /// Delete a task, returning the row as it was
    async fn delete_task(&self, id: i32) -> AppResult<Task>;

    /// Tasks matching both ids, where zero leaves that id unconstrained
    async fn filter_tasks(&self, task_id: i32, author_id: i32) -> AppResult<Vec<Task>>;

    async fn tasks_by_author(&self, author_id: i32) -> AppResult<Vec<Task>>;

    async fn tasks_by_label(&self, label_id: i32) -> AppResult<Vec<Task>>;

    async fn attach_label(&self, link: TaskLabel) -> AppResult<TaskLabel>;

    async fn detach_label(&self, link: TaskLabel) -> AppResult<TaskLabel>;
}

/// Concrete implementation of TaskService using Unit of Work.
pub struct TaskManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TaskManager<U> {
    /// Create new task service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> TaskService for TaskManager<U> {
    async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        non_empty(self.uow.tasks().list().await?)
    }

    async fn get_task(&self, id: i32) -> AppResult<Task> {
        self.uow.tasks().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_task(&self, task: Task) -> AppResult<Task> {
        let created = self.uow.tasks().create(task).await?;
        tracing::info!(task_id = created.id, "Task created");
        Ok(created)
    }

    async fn create_tasks(&self, tasks: Vec<Task>) -> AppResult<Vec<Task>> {
        let created = with_transaction!(self.uow, |ctx| ctx.tasks().create_many(&tasks).await)?;

        tracing::info!(count = created.len(), "Tasks created in bulk");
        Ok(created)
    }

    async fn update_task(&self, task: Task) -> AppResult<Task> {
        self.uow.tasks().update(task).await?.ok_or_not_found()
    }

    async fn delete_task(&self, id: i32) -> AppResult<Task> {
        let deleted = self.uow.tasks().delete(id).await?.ok_or_not_found()?;
        tracing::info!(task_id = id, "Task deleted");
        Ok(deleted)
    }

    async fn filter_tasks(&self, task_id: i32, author_id: i32) -> AppResult<Vec<Task>> {
        non_empty(self.uow.tasks().filter(task_id, author_id).await?)
    }

    async fn tasks_by_author(&self, author_id: i32) -> AppResult<Vec<Task>> {
        non_empty(self.uow.tasks().list_by_author(author_id).await?)
    }

    async fn tasks_by_label(&self, label_id: i32) -> AppResult<Vec<Task>> {
        non_empty(self.uow.tasks().list_by_label(label_id).await?)
    }

    async fn attach_label(&self, link: TaskLabel) -> AppResult<TaskLabel> {
        self.uow.tasks().attach_label(link).await
    }

    async fn detach_label(&self, link: TaskLabel) -> AppResult<TaskLabel> {
        self.uow.tasks().detach_label(link).await?.ok_or_not_found()
    }
}
