//! In-memory workspace.
//!
//! Holds pages in insertion order and answers the same four operations as the
//! remote API, including filter evaluation and cursor pagination. Used as the
//! store behind tests, benchmarks and the stub server in the integration
//! tests.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::{SyncError, SyncResult};

use super::client::WorkspaceApi;
use super::page::Page;
use super::request::{CreatePageRequest, DatabaseQuery, MAX_PAGE_SIZE, UpdatePageRequest};
use super::response::QueryResponse;

/// Number of calls received per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestCounts {
    /// Database queries.
    pub queries: usize,
    /// Page retrievals.
    pub retrieves: usize,
    /// Page creations.
    pub creates: usize,
    /// Page updates.
    pub updates: usize,
}

#[derive(Debug)]
struct StoredPage {
    database_id: Option<String>,
    page: Page,
}

#[derive(Debug, Default)]
struct State {
    pages: Vec<StoredPage>,
    counts: RequestCounts,
}

/// A workspace kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    state: Mutex<State>,
}

impl MemoryWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds a page, optionally as a row of `database_id`.
    pub fn insert_page(&self, database_id: Option<&str>, page: Page) {
        self.state().pages.push(StoredPage {
            database_id: database_id.map(str::to_string),
            page,
        });
    }

    /// Returns a copy of a page by id.
    pub fn page(&self, page_id: &str) -> Option<Page> {
        self.state()
            .pages
            .iter()
            .find(|stored| stored.page.id == page_id)
            .map(|stored| stored.page.clone())
    }

    /// Returns copies of every row of a database, in insertion order.
    pub fn database_pages(&self, database_id: &str) -> Vec<Page> {
        self.state()
            .pages
            .iter()
            .filter(|stored| stored.database_id.as_deref() == Some(database_id))
            .map(|stored| stored.page.clone())
            .collect()
    }

    /// Returns how many calls each operation has received.
    pub fn request_counts(&self) -> RequestCounts {
        self.state().counts
    }

    /// Answers a database query.
    ///
    /// Cursors are row offsets rendered as strings.
    pub fn query(&self, database_id: &str, query: &DatabaseQuery) -> SyncResult<QueryResponse> {
        let mut state = self.state();
        state.counts.queries += 1;

        let offset = match &query.start_cursor {
            Some(cursor) => cursor.parse::<usize>().map_err(|_| SyncError::Api {
                status: 400,
                code: "validation_error".to_string(),
                message: format!("start_cursor should be a valid cursor, got '{}'", cursor),
            })?,
            None => 0,
        };
        let page_size = query.page_size.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE) as usize;

        let matching: Vec<&Page> = state
            .pages
            .iter()
            .filter(|stored| stored.database_id.as_deref() == Some(database_id))
            .map(|stored| &stored.page)
            .filter(|page| query.filter.as_ref().is_none_or(|f| f.matches(page)))
            .collect();

        let results: Vec<Page> = matching
            .iter()
            .skip(offset)
            .take(page_size)
            .map(|page| (*page).clone())
            .collect();
        let next_offset = offset + results.len();
        let has_more = next_offset < matching.len();

        Ok(QueryResponse {
            results,
            has_more,
            next_cursor: has_more.then(|| next_offset.to_string()),
        })
    }

    /// Returns a page by id, or a 404 API error.
    pub fn retrieve(&self, page_id: &str) -> SyncResult<Page> {
        let mut state = self.state();
        state.counts.retrieves += 1;
        state
            .pages
            .iter()
            .find(|stored| stored.page.id == page_id)
            .map(|stored| stored.page.clone())
            .ok_or_else(|| not_found(page_id))
    }

    /// Adds a row with a fresh id.
    pub fn create(&self, request: &CreatePageRequest) -> SyncResult<Page> {
        let mut state = self.state();
        state.counts.creates += 1;
        let page = Page {
            id: Uuid::new_v4().to_string(),
            properties: request.properties.clone(),
        };
        state.pages.push(StoredPage {
            database_id: Some(request.parent.database_id.clone()),
            page: page.clone(),
        });
        Ok(page)
    }

    /// Overwrites the listed properties of a page.
    pub fn update(&self, page_id: &str, request: &UpdatePageRequest) -> SyncResult<Page> {
        let mut state = self.state();
        state.counts.updates += 1;
        let stored = state
            .pages
            .iter_mut()
            .find(|stored| stored.page.id == page_id)
            .ok_or_else(|| not_found(page_id))?;
        for (name, value) in &request.properties {
            stored.page.properties.insert(name.clone(), value.clone());
        }
        Ok(stored.page.clone())
    }
}

fn not_found(page_id: &str) -> SyncError {
    SyncError::Api {
        status: 404,
        code: "object_not_found".to_string(),
        message: format!("Could not find page with ID: {}.", page_id),
    }
}

impl WorkspaceApi for MemoryWorkspace {
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> SyncResult<QueryResponse> {
        self.query(database_id, query)
    }

    async fn retrieve_page(&self, page_id: &str) -> SyncResult<Page> {
        self.retrieve(page_id)
    }

    async fn create_page(&self, request: &CreatePageRequest) -> SyncResult<Page> {
        self.create(request)
    }

    async fn update_page(&self, page_id: &str, request: &UpdatePageRequest) -> SyncResult<Page> {
        self.update(page_id, request)
    }
}
