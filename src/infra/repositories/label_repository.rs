//! Label repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::base::{DeleteRepository, ReadRepository};
use super::entities::label::{self, ActiveModel, Entity as LabelEntity};
use common::{AppError, AppResult};
use domain::Label;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Label repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LabelRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Label>>;

    async fn list(&self) -> AppResult<Vec<Label>>;

    async fn create(&self, name: String) -> AppResult<Label>;

    /// Rename a label and return the re-read row
    async fn update(&self, label: Label) -> AppResult<Option<Label>>;

    /// Delete label (and its task associations), returning the old row
    async fn delete(&self, id: i32) -> AppResult<Option<Label>>;
}

pub struct LabelStore {
    db: DatabaseConnection,
}

impl LabelStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<LabelEntity> for LabelStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<LabelEntity> for LabelStore {}

#[async_trait]
impl LabelRepository for LabelStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Label>> {
        Ok(self.find_one(id).await?.map(Label::from))
    }

    async fn list(&self) -> AppResult<Vec<Label>> {
        let models = self.find_all().await?;
        Ok(models.into_iter().map(Label::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<Label> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let id = LabelEntity::insert(active_model)
            .exec(&self.db)
            .await?
            .last_insert_id;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("label {id} missing right after insert")))
    }

    async fn update(&self, label: Label) -> AppResult<Option<Label>> {
        LabelEntity::update_many()
            .col_expr(label::Column::Name, Expr::value(label.name))
            .filter(label::Column::Id.eq(label.id))
            .exec(&self.db)
            .await?;

        self.find_by_id(label.id).await
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Label>> {
        Ok(self.take(id).await?.map(Label::from))
    }
}
