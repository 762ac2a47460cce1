//! HTTP request handlers.

pub mod health_handler;
pub mod label_handler;
pub mod task_handler;
pub mod user_handler;

pub use health_handler::health;
pub use label_handler::label_routes;
pub use task_handler::task_routes;
pub use user_handler::user_routes;
