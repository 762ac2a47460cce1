//! Service Container - Centralized service access.
//!
//! Handlers depend on the service traits held here, never on the
//! concrete managers, so tests can swap in their own implementations.

use std::sync::Arc;

use super::{LabelManager, LabelService, TaskManager, TaskService, UserManager, UserService};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get task service
    fn tasks(&self) -> Arc<dyn TaskService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get label service
    fn labels(&self) -> Arc<dyn LabelService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    task_service: Arc<dyn TaskService>,
    user_service: Arc<dyn UserService>,
    label_service: Arc<dyn LabelService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            task_service: Arc::new(TaskManager::new(uow.clone())),
            user_service: Arc::new(UserManager::new(uow.clone())),
            label_service: Arc::new(LabelManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn tasks(&self) -> Arc<dyn TaskService> {
        self.task_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn labels(&self) -> Arc<dyn LabelService> {
        self.label_service.clone()
    }
}
