//! Task Manager - HTTP CRUD backend for tasks, users and labels
//!
//! Every endpoint maps onto one parameterized statement against a
//! relational database; bulk task creation is the only transaction.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories, unit of work
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Pretty-printed JSON responses
//!
//! Domain entities live in the `domain` crate, errors and shared config
//! structs in `common`.
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (applies pending migrations first)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use common::{AppError, AppResult};
pub use config::Config;
pub use domain::{Label, Task, TaskLabel, User};
