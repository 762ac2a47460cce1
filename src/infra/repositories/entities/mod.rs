//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod label;
pub mod task;
pub mod task_label;
pub mod user;
