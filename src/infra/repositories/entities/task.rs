//! Task database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Task;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Epoch seconds, defaulted by the database on insert
    pub opened: i64,
    /// Epoch seconds, 0 while the task is open
    pub closed: i64,
    pub author_id: i32,
    pub assigned_id: i32,
    pub title: String,
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::task_label::Entity")]
    TaskLabel,
}

impl Related<super::task_label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskLabel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Task {
            id: model.id,
            opened: model.opened,
            closed: model.closed,
            author_id: model.author_id,
            assigned_id: model.assigned_id,
            title: model.title,
            content: model.content,
        }
    }
}
