//! User repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::base::{DeleteRepository, ReadRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// List all users ordered by ID
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, name: String) -> AppResult<User>;

    /// Rename a user and return the re-read row
    async fn update(&self, user: User) -> AppResult<Option<User>>;

    /// Permanently delete user, returning the row as it was before deletion
    async fn delete(&self, id: i32) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<UserEntity> for UserStore {}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.find_one(id).await?.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = self.find_all().await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<User> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let id = UserEntity::insert(active_model)
            .exec(&self.db)
            .await?
            .last_insert_id;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("user {id} missing right after insert")))
    }

    async fn update(&self, user: User) -> AppResult<Option<User>> {
        UserEntity::update_many()
            .col_expr(user::Column::Name, Expr::value(user.name))
            .filter(user::Column::Id.eq(user.id))
            .exec(&self.db)
            .await?;

        self.find_by_id(user.id).await
    }

    async fn delete(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.take(id).await?.map(User::from))
    }
}
