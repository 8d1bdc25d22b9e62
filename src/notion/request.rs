//! Request bodies for the Notion API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::filter::QueryFilter;

/// Largest page size the query endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseQuery {
    /// Optional filter on the database rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<QueryFilter>,
    /// Cursor returned by the previous page, if continuing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    /// Number of rows per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Where a created page lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    /// The owning database.
    pub database_id: String,
}

/// Body of `POST /pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePageRequest {
    /// The database the new row is added to.
    pub parent: Parent,
    /// Property values of the new row.
    pub properties: Map<String, Value>,
}

impl CreatePageRequest {
    /// Creates a request for a new row in `database_id`.
    pub fn in_database(database_id: impl Into<String>) -> Self {
        Self {
            parent: Parent {
                database_id: database_id.into(),
            },
            properties: Map::new(),
        }
    }

    /// Sets a property value, returning the request for chaining.
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

/// Body of `PATCH /pages/{id}`.
///
/// Only the listed properties are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePageRequest {
    /// Property values to overwrite.
    pub properties: Map<String, Value>,
}

impl UpdatePageRequest {
    /// Sets a property value, returning the request for chaining.
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}
