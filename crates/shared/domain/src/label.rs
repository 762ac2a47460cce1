//! Label domain entity.

use serde::{Deserialize, Serialize};

/// A named tag attachable to any number of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct Label {
    #[serde(rename = "ID", alias = "id")]
    pub id: i32,
    #[serde(rename = "Name", alias = "name")]
    #[cfg_attr(feature = "openapi", schema(example = "bug"))]
    pub name: String,
}
