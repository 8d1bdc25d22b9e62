//! Access to the Notion workspace.
//!
//! The payroll pipeline talks to the store only through the [`WorkspaceApi`]
//! trait: query a database, retrieve a page, create a page, update a page.

#[cfg(test)]
pub(crate) mod canned;
mod client;
mod filter;
mod memory;
mod page;
mod paginator;
mod request;
mod response;

pub use client::{NOTION_VERSION, NotionClient, WorkspaceApi};
pub use filter::{Condition, PropertyFilter, QueryFilter};
pub use memory::{MemoryWorkspace, RequestCounts};
pub use page::{
    Page, date_value, number_value, optional_number_value, parse_calendar_date, relation_value,
    status_value, title_value,
};
pub use paginator::Paginator;
pub use request::{CreatePageRequest, DatabaseQuery, MAX_PAGE_SIZE, Parent, UpdatePageRequest};
pub use response::{ApiErrorBody, QueryResponse, api_error};
