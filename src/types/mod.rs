//! Shared response types.

mod response;

pub use response::{to_pretty_json, PrettyJson};
