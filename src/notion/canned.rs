//! A workspace that answers queries from a fixed script.
//!
//! Lets tests feed query responses the in-memory store never produces, such
//! as a truncated cursor or a row with an empty relation.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{SyncError, SyncResult};

use super::client::WorkspaceApi;
use super::page::Page;
use super::request::{CreatePageRequest, DatabaseQuery, UpdatePageRequest};
use super::response::QueryResponse;

#[derive(Debug, Default)]
pub struct CannedQueries {
    responses: Mutex<VecDeque<QueryResponse>>,
    queries: Mutex<Vec<DatabaseQuery>>,
}

impl CannedQueries {
    pub fn new(responses: impl IntoIterator<Item = QueryResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            queries: Mutex::default(),
        }
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<DatabaseQuery> {
        self.queries.lock().unwrap().clone()
    }
}

fn unsupported(operation: &str) -> SyncError {
    SyncError::Api {
        status: 501,
        code: "not_implemented".to_string(),
        message: format!("{} is not scripted", operation),
    }
}

impl WorkspaceApi for CannedQueries {
    async fn query_database(
        &self,
        _database_id: &str,
        query: &DatabaseQuery,
    ) -> SyncResult<QueryResponse> {
        self.queries.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| unsupported("query beyond the script"))
    }

    async fn retrieve_page(&self, _page_id: &str) -> SyncResult<Page> {
        Err(unsupported("retrieve"))
    }

    async fn create_page(&self, _request: &CreatePageRequest) -> SyncResult<Page> {
        Err(unsupported("create"))
    }

    async fn update_page(&self, _page_id: &str, _request: &UpdatePageRequest) -> SyncResult<Page> {
        Err(unsupported("update"))
    }
}
