//! Label database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Label;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "labels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
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

impl From<Model> for Label {
    fn from(model: Model) -> Self {
        Label {
            id: model.id,
            name: model.name,
        }
    }
}
