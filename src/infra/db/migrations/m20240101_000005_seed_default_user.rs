//! Migration: Seed the user that tasks fall back to.

use sea_orm_migration::prelude::*;

use super::Users;
use domain::{DEFAULT_USER_ID, DEFAULT_USER_NAME};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Users::Table)
            .columns([Users::Name])
            .values([DEFAULT_USER_NAME.into()])
            .map_err(|e| DbErr::Migration(e.to_string()))?;

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Users::Table)
            .and_where(Expr::col(Users::Id).eq(DEFAULT_USER_ID))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
