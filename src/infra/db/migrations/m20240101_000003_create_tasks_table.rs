//! Migration: Create tasks table.
//!
//! `opened` defaults to the current epoch second. The expression differs
//! per backend, everything else is portable.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

use super::{Tasks, Users};
use domain::DEFAULT_USER_ID;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn epoch_now(backend: DatabaseBackend) -> SimpleExpr {
    match backend {
        DatabaseBackend::Sqlite => Expr::cust("(CAST(strftime('%s','now') AS INTEGER))"),
        DatabaseBackend::MySql => Expr::cust("(UNIX_TIMESTAMP())"),
        DatabaseBackend::Postgres => Expr::cust("(extract(epoch from now())::bigint)"),
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tasks::Opened)
                            .big_integer()
                            .not_null()
                            .default(epoch_now(backend)),
                    )
                    .col(
                        ColumnDef::new(Tasks::Closed)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tasks::AuthorId)
                            .integer()
                            .not_null()
                            .default(DEFAULT_USER_ID),
                    )
                    .col(
                        ColumnDef::new(Tasks::AssignedId)
                            .integer()
                            .not_null()
                            .default(DEFAULT_USER_ID),
                    )
                    .col(ColumnDef::new(Tasks::Title).text().not_null().default(""))
                    .col(ColumnDef::new(Tasks::Content).text().not_null().default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_author_id")
                            .from(Tasks::Table, Tasks::AuthorId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_assigned_id")
                            .from(Tasks::Table, Tasks::AssignedId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_author_id")
                    .table(Tasks::Table)
                    .col(Tasks::AuthorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tasks_author_id")
                    .table(Tasks::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}
