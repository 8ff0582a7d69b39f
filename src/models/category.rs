// src/models/category.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display label (e.g. "Science").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Builds the wire mapping `{"<id>": "<type>", ...}` used by every listing
/// endpoint. An empty table maps to `{}`.
pub fn category_map(categories: &[Category]) -> Value {
    let mut map = Map::with_capacity(categories.len());
    for category in categories {
        map.insert(
            category.id.to_string(),
            Value::String(category.category_type.clone()),
        );
    }
    Value::Object(map)
}
