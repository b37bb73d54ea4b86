//! Client for the Project Gutenberg catalog served by Gutendex.
//!
//! [`CatalogClient`] builds queries from [`SearchParams`], issues one GET per
//! call and decodes the JSON body into [`Book`] records.
//!
//! ```no_run
//! # async fn demo() -> Result<(), gutenctl::CatalogError> {
//! use gutenctl::{CatalogClient, CatalogClientConfig, SearchParams, SortOrder};
//!
//! let client = CatalogClient::new(CatalogClientConfig::default())?;
//! let params = SearchParams::new().search("dickens").sort(SortOrder::Popular);
//! let result = client.search_with_pagination(&params).await?;
//! for book in &result.books {
//!     println!("{} {}", book.id, book.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{
    Author, Book, BookPage, CatalogClient, CatalogClientConfig, CopyrightFilter, QueryEncoding,
    SearchParams, SearchResult, SortOrder, DEFAULT_BASE_URL,
};
pub use error::CatalogError;
