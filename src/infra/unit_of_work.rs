//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Makes multi-row writes atomic (bulk task creation)

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    insert_task, LabelRepository, LabelStore, TaskRepository, TaskStore, UserRepository,
    UserStore,
};
use common::{AppError, AppResult};
use domain::Task;

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock the repositories and wrap them in a test unit of work.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get task repository
    fn tasks(&self) -> Arc<dyn TaskRepository>;

    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get label repository
    fn labels(&self) -> Arc<dyn LabelRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed when the closure returns `Ok` and
    /// rolled back when it returns `Err`.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get task repository for this transaction
    pub fn tasks(&self) -> TxTaskRepository<'_> {
        TxTaskRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    task_repo: Arc<TaskStore>,
    user_repo: Arc<UserStore>,
    label_repo: Arc<LabelStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            task_repo: Arc::new(TaskStore::new(db.clone())),
            user_repo: Arc::new(UserStore::new(db.clone())),
            label_repo: Arc::new(LabelStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn tasks(&self) -> Arc<dyn TaskRepository> {
        self.task_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn labels(&self) -> Arc<dyn LabelRepository> {
        self.label_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware task repository.
///
/// Executes all operations within the borrowed transaction.
pub struct TxTaskRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxTaskRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert a task inside the transaction
    pub async fn create(&self, task: &Task) -> AppResult<Task> {
        insert_task(self.txn, task).await
    }

    /// Insert tasks in order, stopping at the first failure
    pub async fn create_many(&self, tasks: &[Task]) -> AppResult<Vec<Task>> {
        let mut created = Vec::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            let stored = self.create(task).await.inspect_err(|e| {
                tracing::warn!(row = index, "Bulk insert failed: {}", e);
            })?;
            created.push(stored);
        }
        Ok(created)
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
