mod client;
mod models;
mod params;

pub use client::{CatalogClient, CatalogClientConfig, DEFAULT_BASE_URL};
pub use models::{Author, Book, BookPage, SearchResult};
pub use params::{CopyrightFilter, QueryEncoding, SearchParams, SortOrder};
