//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::User;

use super::non_empty;
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users, `NotFound` when there are none
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create a user from its name
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// Rename a user and return the stored row
    async fn update_user(&self, user: User) -> AppResult<User>;

    /// Delete a user, returning the row as it was
    async fn delete_user(&self, id: i32) -> AppResult<User>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        non_empty(self.uow.users().list().await?)
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, user: User) -> AppResult<User> {
        let created = self.uow.users().create(user.name).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        self.uow.users().update(user).await?.ok_or_not_found()
    }

    async fn delete_user(&self, id: i32) -> AppResult<User> {
        let deleted = self.uow.users().delete(id).await?.ok_or_not_found()?;
        tracing::info!(user_id = id, "User deleted");
        Ok(deleted)
    }
}
