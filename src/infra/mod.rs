//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories, one per entity
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    LabelRepository, LabelStore, TaskRepository, TaskStore, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, TransactionContext, TxTaskRepository, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockLabelRepository, MockTaskRepository, MockUserRepository};
