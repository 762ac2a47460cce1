//! Task repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::base::{DeleteRepository, ReadRepository};
use super::entities::task::{self, ActiveModel, Entity as TaskEntity};
use super::entities::task_label::{
    self, ActiveModel as TaskLabelActiveModel, Entity as TaskLabelEntity,
};
use common::{AppError, AppResult};
use domain::{Task, TaskLabel, UNCONSTRAINED};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Task repository trait for dependency injection.
///
/// Lookups return `None` when no row matches; the service layer turns
/// that into `AppError::NotFound`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find task by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Task>>;

    /// List all tasks ordered by ID
    async fn list(&self) -> AppResult<Vec<Task>>;

    /// List tasks matching `task_id` and `author_id`, zero meaning "any"
    async fn filter(&self, task_id: i32, author_id: i32) -> AppResult<Vec<Task>>;

    /// List tasks written by the given author
    async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<Task>>;

    /// List tasks carrying the given label
    async fn list_by_label(&self, label_id: i32) -> AppResult<Vec<Task>>;

    /// Insert a task and return the stored row with database defaults
    async fn create(&self, task: Task) -> AppResult<Task>;

    /// Write title, content and closed, then return the re-read row
    async fn update(&self, task: Task) -> AppResult<Option<Task>>;

    /// Delete task by ID, returning the row as it was before deletion
    async fn delete(&self, id: i32) -> AppResult<Option<Task>>;

    /// Associate a label with a task
    async fn attach_label(&self, link: TaskLabel) -> AppResult<TaskLabel>;

    /// Remove a label association, returning it if it existed
    async fn detach_label(&self, link: TaskLabel) -> AppResult<Option<TaskLabel>>;
}

/// Concrete implementation of TaskRepository
pub struct TaskStore {
    db: DatabaseConnection,
}

impl TaskStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<TaskEntity> for TaskStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<TaskEntity> for TaskStore {}

/// Insert one task on any connection (pool or transaction) and re-read it.
///
/// Only the user-supplied columns are sent; `opened`, `closed` and, when
/// left at zero, `author_id`/`assigned_id` take their column defaults.
pub(crate) async fn insert_task<C: ConnectionTrait>(db: &C, task: &Task) -> AppResult<Task> {
    let active_model = ActiveModel {
        title: Set(task.title.clone()),
        content: Set(task.content.clone()),
        author_id: task.explicit_author().map_or(NotSet, Set),
        assigned_id: task.explicit_assignee().map_or(NotSet, Set),
        ..Default::default()
    };

    let id = TaskEntity::insert(active_model).exec(db).await?.last_insert_id;

    TaskEntity::find_by_id(id)
        .one(db)
        .await?
        .map(Task::from)
        .ok_or_else(|| AppError::internal(format!("task {id} missing right after insert")))
}

async fn fetch_tasks<C: ConnectionTrait>(db: &C, condition: Condition) -> AppResult<Vec<Task>> {
    let models = TaskEntity::find()
        .filter(condition)
        .order_by_asc(task::Column::Id)
        .all(db)
        .await?;

    Ok(models.into_iter().map(Task::from).collect())
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Task>> {
        Ok(self.find_one(id).await?.map(Task::from))
    }

    async fn list(&self) -> AppResult<Vec<Task>> {
        let models = self.find_all().await?;
        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn filter(&self, task_id: i32, author_id: i32) -> AppResult<Vec<Task>> {
        let mut condition = Condition::all();
        if task_id != UNCONSTRAINED {
            condition = condition.add(task::Column::Id.eq(task_id));
        }
        if author_id != UNCONSTRAINED {
            condition = condition.add(task::Column::AuthorId.eq(author_id));
        }

        fetch_tasks(&self.db, condition).await
    }

    async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<Task>> {
        fetch_tasks(
            &self.db,
            Condition::all().add(task::Column::AuthorId.eq(author_id)),
        )
        .await
    }

    async fn list_by_label(&self, label_id: i32) -> AppResult<Vec<Task>> {
        let models = TaskEntity::find()
            .inner_join(TaskLabelEntity)
            .filter(task_label::Column::LabelId.eq(label_id))
            .order_by_asc(task::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn create(&self, task: Task) -> AppResult<Task> {
        insert_task(&self.db, &task).await
    }

    async fn update(&self, task: Task) -> AppResult<Option<Task>> {
        TaskEntity::update_many()
            .col_expr(task::Column::Title, Expr::value(task.title))
            .col_expr(task::Column::Content, Expr::value(task.content))
            .col_expr(task::Column::Closed, Expr::value(task.closed))
            .filter(task::Column::Id.eq(task.id))
            .exec(&self.db)
            .await?;

        self.find_by_id(task.id).await
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Task>> {
        Ok(self.take(id).await?.map(Task::from))
    }

    async fn attach_label(&self, link: TaskLabel) -> AppResult<TaskLabel> {
        let active_model = TaskLabelActiveModel {
            task_id: Set(link.task_id),
            label_id: Set(link.label_id),
        };

        TaskLabelEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await?;

        Ok(link)
    }

    async fn detach_label(&self, link: TaskLabel) -> AppResult<Option<TaskLabel>> {
        let key = (link.task_id, link.label_id);

        let Some(existing) = TaskLabelEntity::find_by_id(key).one(&self.db).await? else {
            return Ok(None);
        };
        TaskLabelEntity::delete_by_id(key).exec(&self.db).await?;

        Ok(Some(TaskLabel::from(existing)))
    }
}
