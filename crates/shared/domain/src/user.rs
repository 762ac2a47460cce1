//! User domain entity.

use serde::{Deserialize, Serialize};

/// A named actor that can author or be assigned tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct User {
    /// Database-assigned identifier
    #[serde(rename = "ID", alias = "id")]
    pub id: i32,
    /// Display name
    #[serde(rename = "Name", alias = "name")]
    #[cfg_attr(feature = "openapi", schema(example = "default"))]
    pub name: String,
}
