//! Request extractors that reject with `AppError::BadRequest`.

mod json_body;
mod query_params;

pub use json_body::JsonBody;
pub use query_params::{IdParam, LinkParams, QueryParams, TaskFilterParams};
