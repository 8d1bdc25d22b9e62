//! Response bodies of the Notion API.

use serde::{Deserialize, Serialize};

use crate::error::SyncError;

use super::page::Page;

/// Body returned by `POST /databases/{id}/query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The rows on this page of results.
    pub results: Vec<Page>,
    /// Whether more rows follow.
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next page when `has_more` is set.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Always `"error"` on the wire.
    #[serde(default = "error_object")]
    pub object: String,
    /// Machine-readable error code, e.g. `object_not_found`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

fn error_object() -> String {
    "error".to_string()
}

impl ApiErrorBody {
    /// Creates an error body.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            object: error_object(),
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }
}

/// Builds the error for a non-success response from its status and raw body.
///
/// Falls back to the raw body when it is not an API error object.
pub fn api_error(status: u16, body: &str) -> SyncError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => SyncError::Api {
            status,
            code: parsed.code.unwrap_or_else(|| "unknown".to_string()),
            message: parsed.message.unwrap_or_else(|| body.to_string()),
        },
        Err(_) => SyncError::Api {
            status,
            code: "unknown".to_string(),
            message: body.to_string(),
        },
    }
}
