//! Unit of work double for service unit tests.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};

use crate::infra::{
    LabelRepository, MockLabelRepository, MockTaskRepository, MockUserRepository,
    TaskRepository, TransactionContext, UnitOfWork, UserRepository,
};

/// Wraps mocked repositories. Unset repositories are strict mocks with no
/// expectations, so any call to them fails the test.
pub(crate) struct TestUnitOfWork {
    task_repo: Arc<MockTaskRepository>,
    user_repo: Arc<MockUserRepository>,
    label_repo: Arc<MockLabelRepository>,
}

impl TestUnitOfWork {
    fn new(
        tasks: MockTaskRepository,
        users: MockUserRepository,
        labels: MockLabelRepository,
    ) -> Self {
        Self {
            task_repo: Arc::new(tasks),
            user_repo: Arc::new(users),
            label_repo: Arc::new(labels),
        }
    }

    pub(crate) fn with_tasks(repo: MockTaskRepository) -> Self {
        Self::new(repo, MockUserRepository::new(), MockLabelRepository::new())
    }

    pub(crate) fn with_users(repo: MockUserRepository) -> Self {
        Self::new(MockTaskRepository::new(), repo, MockLabelRepository::new())
    }

    pub(crate) fn with_labels(repo: MockLabelRepository) -> Self {
        Self::new(MockTaskRepository::new(), MockUserRepository::new(), repo)
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn tasks(&self) -> Arc<dyn TaskRepository> {
        self.task_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn labels(&self) -> Arc<dyn LabelRepository> {
        self.label_repo.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Transactions need a real connection, see tests/storage_test.rs
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
