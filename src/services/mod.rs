//! Application services layer - Use cases.
//!
//! Services sit between the HTTP handlers and the repositories. They
//! depend on abstractions (traits) for dependency inversion and turn
//! "no row" results into `AppError::NotFound`.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

pub mod container;
mod label_service;
mod task_service;
mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

use common::{AppError, AppResult};

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use label_service::{LabelManager, LabelService};
pub use task_service::{TaskManager, TaskService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

/// An empty list reads as "no rows" to clients.
pub(crate) fn non_empty<T>(rows: Vec<T>) -> AppResult<Vec<T>> {
    if rows.is_empty() {
        Err(AppError::NotFound)
    } else {
        Ok(rows)
    }
}
