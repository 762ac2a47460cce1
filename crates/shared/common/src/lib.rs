//! Common utilities shared by the task manager crates.
//!
//! This crate provides:
//! - Unified error handling with HTTP response conversion
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
