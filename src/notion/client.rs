//! HTTP client for the Notion API.
//!
//! [`WorkspaceApi`] is the seam between the payroll pipeline and the remote
//! store. [`NotionClient`] implements it over HTTPS with `reqwest`; the
//! in-memory workspace implements it for tests.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{ENV_API_KEY, Settings};
use crate::error::{SyncError, SyncResult};

use super::page::Page;
use super::request::{CreatePageRequest, DatabaseQuery, UpdatePageRequest};
use super::response::{QueryResponse, api_error};

/// API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// The four record operations the payroll job needs from the workspace.
#[allow(async_fn_in_trait)]
pub trait WorkspaceApi {
    /// Fetches one page of rows from a database.
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> SyncResult<QueryResponse>;

    /// Fetches a single page by id.
    async fn retrieve_page(&self, page_id: &str) -> SyncResult<Page>;

    /// Creates a page and returns it with its assigned id.
    async fn create_page(&self, request: &CreatePageRequest) -> SyncResult<Page>;

    /// Overwrites some properties of a page and returns the updated page.
    async fn update_page(&self, page_id: &str, request: &UpdatePageRequest) -> SyncResult<Page>;
}

/// Notion API client authenticated with an integration token.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    base_url: String,
}

impl NotionClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use shift_payroll::notion::NotionClient;
    ///
    /// let client = NotionClient::new("secret_abc", "https://api.notion.com/v1", Duration::from_secs(30))?;
    /// # Ok::<(), shift_payroll::error::SyncError>(())
    /// ```
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> SyncResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            SyncError::InvalidEnv {
                name: ENV_API_KEY.to_string(),
                message: "token contains characters not allowed in a header".to_string(),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert("Notion-Version", HeaderValue::from_static(NOTION_VERSION));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from loaded settings.
    pub fn from_settings(settings: &Settings) -> SyncResult<Self> {
        Self::new(&settings.api_key, &settings.api_url, settings.timeout)
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends a request and decodes a successful JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, context: &str) -> SyncResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| SyncError::Decode {
            context: context.to_string(),
            message: e.to_string(),
        })
    }
}

impl WorkspaceApi for NotionClient {
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> SyncResult<QueryResponse> {
        let request = self
            .http
            .post(self.url(&format!("databases/{}/query", database_id)))
            .json(query);
        let response: QueryResponse = self.send(request, "database query response").await?;
        debug!(
            database_id = %database_id,
            results = response.results.len(),
            has_more = response.has_more,
            "Queried database"
        );
        Ok(response)
    }

    async fn retrieve_page(&self, page_id: &str) -> SyncResult<Page> {
        let request = self.http.get(self.url(&format!("pages/{}", page_id)));
        self.send(request, "page").await
    }

    async fn create_page(&self, request: &CreatePageRequest) -> SyncResult<Page> {
        let request = self.http.post(self.url("pages")).json(request);
        self.send(request, "created page").await
    }

    async fn update_page(&self, page_id: &str, request: &UpdatePageRequest) -> SyncResult<Page> {
        let request = self
            .http
            .patch(self.url(&format!("pages/{}", page_id)))
            .json(request);
        self.send(request, "updated page").await
    }
}
