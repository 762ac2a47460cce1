//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_labels_table;
mod m20240101_000003_create_tasks_table;
mod m20240101_000004_create_tasks_labels_table;
mod m20240101_000005_seed_default_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_labels_table::Migration),
            Box::new(m20240101_000003_create_tasks_table::Migration),
            Box::new(m20240101_000004_create_tasks_labels_table::Migration),
            Box::new(m20240101_000005_seed_default_user::Migration),
        ]
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub(crate) enum Labels {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub(crate) enum Tasks {
    Table,
    Id,
    Opened,
    Closed,
    AuthorId,
    AssignedId,
    Title,
    Content,
}

#[derive(DeriveIden)]
pub(crate) enum TasksLabels {
    Table,
    TaskId,
    LabelId,
}
