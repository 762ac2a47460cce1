//! Migration: Create the task/label join table.

use sea_orm_migration::prelude::*;

use super::{Labels, Tasks, TasksLabels};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TasksLabels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TasksLabels::TaskId).integer().not_null())
                    .col(ColumnDef::new(TasksLabels::LabelId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(TasksLabels::TaskId)
                            .col(TasksLabels::LabelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_labels_task_id")
                            .from(TasksLabels::Table, TasksLabels::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_labels_label_id")
                            .from(TasksLabels::Table, TasksLabels::LabelId)
                            .to(Labels::Table, Labels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by label go through this index
        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_labels_label_id")
                    .table(TasksLabels::Table)
                    .col(TasksLabels::LabelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tasks_labels_label_id")
                    .table(TasksLabels::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TasksLabels::Table).to_owned())
            .await
    }
}
