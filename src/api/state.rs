//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{LabelService, ServiceContainer, Services, TaskService, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Task service
    pub task_service: Arc<dyn TaskService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Label service
    pub label_service: Arc<dyn LabelService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state backed by the given database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::new(&container, database)
    }

    /// Create application state from any service container.
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            task_service: services.tasks(),
            user_service: services.users(),
            label_service: services.labels(),
            database,
        }
    }
}
