//! Domain layer - Core entities of the task tracker.
//!
//! Plain data types shared by the storage, service and HTTP layers.
//! No infrastructure dependencies live here.

pub mod constants;
pub mod label;
pub mod task;
pub mod user;

pub use constants::*;
pub use label::Label;
pub use task::{Task, TaskLabel};
pub use user::User;
