//! Cursor-based retrieval of database query results.

use tracing::{debug, warn};

use crate::error::SyncResult;

use super::client::WorkspaceApi;
use super::filter::QueryFilter;
use super::page::Page;
use super::request::{DatabaseQuery, MAX_PAGE_SIZE};

/// Lazily walks every page of a filtered database query.
///
/// Each call to [`next_batch`](Paginator::next_batch) issues at most one
/// request. The sequence ends when the API reports no further results, and
/// [`restart`](Paginator::restart) rewinds it to the first page.
///
/// # Example
///
/// ```no_run
/// use shift_payroll::notion::{NotionClient, Paginator, QueryFilter};
///
/// # async fn example(client: NotionClient) -> shift_payroll::error::SyncResult<()> {
/// let filter = QueryFilter::status_equals("Status", "Accepted");
/// let mut pages = Paginator::new(&client, "shifts_db", Some(filter));
/// while let Some(batch) = pages.next_batch().await? {
///     println!("{} shifts", batch.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Paginator<'a, A: WorkspaceApi> {
    api: &'a A,
    database_id: String,
    filter: Option<QueryFilter>,
    page_size: u32,
    cursor: Option<String>,
    exhausted: bool,
    batches_fetched: usize,
}

impl<'a, A: WorkspaceApi> Paginator<'a, A> {
    /// Creates a paginator positioned before the first page.
    pub fn new(api: &'a A, database_id: impl Into<String>, filter: Option<QueryFilter>) -> Self {
        Self {
            api,
            database_id: database_id.into(),
            filter,
            page_size: MAX_PAGE_SIZE,
            cursor: None,
            exhausted: false,
            batches_fetched: 0,
        }
    }

    /// Sets the number of rows requested per page, capped at the API maximum.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Fetches the next page of rows, or `None` once all pages were returned.
    pub async fn next_batch(&mut self) -> SyncResult<Option<Vec<Page>>> {
        if self.exhausted {
            return Ok(None);
        }

        let query = DatabaseQuery {
            filter: self.filter.clone(),
            start_cursor: self.cursor.clone(),
            page_size: Some(self.page_size),
        };
        let response = self.api.query_database(&self.database_id, &query).await?;
        self.batches_fetched += 1;

        match (response.has_more, response.next_cursor) {
            (true, Some(cursor)) => self.cursor = Some(cursor),
            (true, None) => {
                warn!(
                    database_id = %self.database_id,
                    "Query reported more results without a cursor; stopping"
                );
                self.exhausted = true;
            }
            (false, _) => self.exhausted = true,
        }

        debug!(
            database_id = %self.database_id,
            batch = self.batches_fetched,
            rows = response.results.len(),
            "Fetched query batch"
        );
        Ok(Some(response.results))
    }

    /// Drains every remaining page into a single list.
    pub async fn collect_all(&mut self) -> SyncResult<Vec<Page>> {
        let mut pages = Vec::new();
        while let Some(batch) = self.next_batch().await? {
            pages.extend(batch);
        }
        Ok(pages)
    }

    /// Rewinds to the first page.
    pub fn restart(&mut self) {
        self.cursor = None;
        self.exhausted = false;
        self.batches_fetched = 0;
    }

    /// Returns true once the last page has been fetched.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns how many requests were issued since the last restart.
    pub fn batches_fetched(&self) -> usize {
        self.batches_fetched
    }
}
