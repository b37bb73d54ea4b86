//! HTTP client for the Gutendex catalog API

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::catalog::models::{Book, BookPage, SearchResult};
use crate::catalog::params::{QueryEncoding, SearchParams};
use crate::error::CatalogError;

pub const DEFAULT_BASE_URL: &str = "https://gutendex.com/books";

const USER_AGENT: &str = concat!("gutenctl/", env!("CARGO_PKG_VERSION"));

/// Settings used to construct a [`CatalogClient`]
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Books endpoint, e.g. `https://gutendex.com/books`
    pub base_url: String,
    /// Defaults to `gutenctl/<version>`
    pub user_agent: Option<String>,
    /// Whole-request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    pub query_encoding: QueryEncoding,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            timeout: None,
            query_encoding: QueryEncoding::default(),
        }
    }
}

/// Stateless client: every call is one GET followed by one JSON decode.
/// No retries, no caching.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    query_encoding: QueryEncoding,
}

impl CatalogClient {
    pub fn new(config: CatalogClientConfig) -> Result<Self, CatalogError> {
        let user_agent = config.user_agent.as_deref().unwrap_or(USER_AGENT);
        let builder = reqwest::Client::builder().user_agent(user_agent);
        let builder = if let Some(timeout) = config.timeout {
            builder.timeout(timeout)
        } else {
            builder
        };

        debug!(
            base_url = %config.base_url,
            user_agent,
            timeout = ?config.timeout,
            "building catalog HTTP client"
        );

        let http = builder.build().map_err(|e| {
            error!(error = %e, "failed to build catalog HTTP client");
            CatalogError::Client(e)
        })?;

        Ok(Self::with_http_client(http, config))
    }

    /// Use a caller-built transport. Its timeouts, proxies and headers apply
    /// as-is; `user_agent` and `timeout` from `config` are ignored.
    pub fn with_http_client(http: reqwest::Client, config: CatalogClientConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            query_encoding: config.query_encoding,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL a search with these parameters is sent to
    pub fn search_url(&self, params: &SearchParams) -> String {
        let query = params.to_query(self.query_encoding);
        if query.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, query)
        }
    }

    /// Run a search and return the page exactly as the service sent it.
    pub async fn search_books(&self, params: &SearchParams) -> Result<BookPage, CatalogError> {
        let url = self.search_url(params);
        self.fetch_page(&url).await
    }

    /// Fetch the page behind a `next`/`previous` cursor. The cursor is used verbatim.
    pub async fn fetch_cursor(&self, cursor: &str) -> Result<BookPage, CatalogError> {
        self.fetch_page(cursor).await
    }

    /// Look up a single book by its catalog id.
    pub async fn find_book_by_id(&self, id: u64) -> Result<Book, CatalogError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.get(&url).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!(id, "book not found in catalog");
            return Err(CatalogError::NotFound { id });
        }
        if !status.is_success() {
            error!(id, status = status.as_u16(), "catalog lookup failed");
            return Err(CatalogError::Request {
                status: status.as_u16(),
            });
        }

        let book: Book = decode(response).await?;
        debug!(id = book.id, title = %book.title, "decoded book");
        Ok(book)
    }

    /// [`search_books`](Self::search_books) reshaped into books plus page cursors.
    pub async fn search_with_pagination(
        &self,
        params: &SearchParams,
    ) -> Result<SearchResult, CatalogError> {
        self.search_books(params).await.map(SearchResult::from)
    }

    async fn fetch_page(&self, url: &str) -> Result<BookPage, CatalogError> {
        let response = self.get(url).await?;
        let status = response.status();

        if !status.is_success() {
            error!(url, status = status.as_u16(), "catalog search failed");
            return Err(CatalogError::Request {
                status: status.as_u16(),
            });
        }

        let page: BookPage = decode(response).await?;
        debug!(
            count = page.count,
            results = page.results.len(),
            has_next = page.next.is_some(),
            "decoded search page"
        );
        Ok(page)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, CatalogError> {
        debug!(url, "requesting catalog");
        self.http.get(url).send().await.map_err(|e| {
            error!(url, error = %e, "failed to send request to catalog");
            CatalogError::Transport(e)
        })
    }
}

/// Read the body in full and decode it; a body that is not the expected
/// JSON shape is a decode error, never a partially filled record.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CatalogError> {
    let body = response.text().await.map_err(|e| {
        error!(error = %e, "failed to read catalog response body");
        CatalogError::Transport(e)
    })?;

    serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, "failed to parse catalog response");
        CatalogError::Decode(e)
    })
}
