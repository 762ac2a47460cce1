//! Base repository traits shared by the entity stores.
//!
//! Reads and deletes by primary key are identical for every table, so
//! each store gets them by implementing these traits. Inserts and
//! updates differ per table and live in the concrete stores.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use std::fmt::Debug;

use common::AppResult;

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find one row by primary key
    async fn find_one(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<E::Model>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send,
    {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// Find all rows ordered by primary key
    async fn find_all(&self) -> AppResult<Vec<E::Model>> {
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        select.all(self.db()).await.map_err(Into::into)
    }
}

/// Delete operations
#[async_trait]
pub trait DeleteRepository<E>: ReadRepository<E>
where
    E: EntityTrait,
{
    /// Delete row by primary key, returning the number of rows removed
    async fn remove(&self, id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType) -> AppResult<u64>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send + Debug,
    {
        let result = E::delete_by_id(id).exec(ReadRepository::db(self)).await?;
        Ok(result.rows_affected)
    }

    /// Read the row, then delete it, returning the pre-delete snapshot
    async fn take(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<E::Model>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send + Debug,
    {
        let Some(snapshot) = self.find_one(id.clone()).await? else {
            return Ok(None);
        };
        self.remove(id).await?;
        Ok(Some(snapshot))
    }
}
