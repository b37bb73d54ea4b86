//! Records returned by the catalog service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Author or translator entry attached to a book
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

/// A single catalog record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub authors: Vec<Author>,
    /// An explicit `null` decodes the same as a missing key and is re-encoded as missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summaries: Option<Vec<String>>,
    pub subjects: Vec<String>,
    pub bookshelves: Vec<String>,
    pub languages: Vec<String>,
    /// `None` when the service does not know the copyright status
    pub copyright: Option<bool>,
    pub download_count: u64,
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translators: Option<Vec<String>>,
    /// MIME type to download URL
    pub formats: BTreeMap<String, String>,
}

impl Book {
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn format_url(&self, mime_type: &str) -> Option<&str> {
        self.formats.get(mime_type).map(String::as_str)
    }
}

/// One page of search results as sent by the service.
///
/// `next` and `previous` are opaque cursor URLs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Book>,
}

/// Pagination-shaped view of a [`BookPage`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub books: Vec<Book>,
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
}

impl From<BookPage> for SearchResult {
    fn from(page: BookPage) -> Self {
        SearchResult {
            books: page.results,
            next_page: page.next,
            previous_page: page.previous,
        }
    }
}
