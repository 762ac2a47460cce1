//! Label service.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::Label;

use super::non_empty;
use crate::infra::UnitOfWork;

/// Label service trait for dependency injection.
#[async_trait]
pub trait LabelService: Send + Sync {
    async fn list_labels(&self) -> AppResult<Vec<Label>>;

    async fn get_label(&self, id: i32) -> AppResult<Label>;

    async fn create_label(&self, label: Label) -> AppResult<Label>;

    async fn update_label(&self, label: Label) -> AppResult<Label>;

    async fn delete_label(&self, id: i32) -> AppResult<Label>;
}

/// Concrete implementation of LabelService using Unit of Work.
pub struct LabelManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> LabelManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> LabelService for LabelManager<U> {
    async fn list_labels(&self) -> AppResult<Vec<Label>> {
        non_empty(self.uow.labels().list().await?)
    }

    async fn get_label(&self, id: i32) -> AppResult<Label> {
        self.uow.labels().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_label(&self, label: Label) -> AppResult<Label> {
        self.uow.labels().create(label.name).await
    }

    async fn update_label(&self, label: Label) -> AppResult<Label> {
        self.uow.labels().update(label).await?.ok_or_not_found()
    }

    async fn delete_label(&self, id: i32) -> AppResult<Label> {
        self.uow.labels().delete(id).await?.ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockLabelRepository;
    use crate::services::test_support::TestUnitOfWork;
    use common::AppError;

    #[tokio::test]
    async fn update_returns_stored_label() {
        let mut repo = MockLabelRepository::new();
        repo.expect_update().returning(|label| {
            Ok(Some(Label {
                name: label.name.to_uppercase(),
                ..label
            }))
        });

        let service = LabelManager::new(Arc::new(TestUnitOfWork::with_labels(repo)));
        let label = service
            .update_label(Label { id: 3, name: "urgent".into() })
            .await
            .unwrap();
        assert_eq!(label, Label { id: 3, name: "URGENT".into() });
    }

    #[tokio::test]
    async fn empty_label_list_is_not_found() {
        let mut repo = MockLabelRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let service = LabelManager::new(Arc::new(TestUnitOfWork::with_labels(repo)));
        assert!(matches!(service.list_labels().await, Err(AppError::NotFound)));
    }
}
