//! Search parameters and query-string construction

use clap::ValueEnum;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Bytes `encodeURIComponent` escapes: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Result ordering understood by the catalog service
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
    Popular,
}

impl SortOrder {
    /// Value sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
            SortOrder::Popular => "popular",
        }
    }
}

/// Copyright filter: known-true, known-false, or books whose status is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CopyrightFilter {
    #[value(name = "true")]
    Copyrighted,
    #[value(name = "false")]
    PublicDomain,
    #[value(name = "null")]
    Unknown,
}

impl CopyrightFilter {
    /// Value sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyrightFilter::Copyrighted => "true",
            CopyrightFilter::PublicDomain => "false",
            CopyrightFilter::Unknown => "null",
        }
    }
}

impl From<Option<bool>> for CopyrightFilter {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => CopyrightFilter::Copyrighted,
            Some(false) => CopyrightFilter::PublicDomain,
            None => CopyrightFilter::Unknown,
        }
    }
}

/// How search parameters are attached to the endpoint URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// `?languages=en%2Cfr&page=2`
    #[default]
    Direct,
    /// Legacy format: the whole form-encoded query packed into one `search=` value
    Nested,
}

/// Optional filters for a catalog search. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub search: Option<String>,
    pub languages: Option<Vec<String>>,
    pub topic: Option<String>,
    pub sort: Option<SortOrder>,
    pub author_year_start: Option<i32>,
    pub author_year_end: Option<i32>,
    pub copyright: Option<CopyrightFilter>,
    pub page: Option<u32>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn author_years(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.author_year_start = start;
        self.author_year_end = end;
        self
    }

    pub fn copyright(mut self, copyright: CopyrightFilter) -> Self {
        self.copyright = Some(copyright);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Ordered (name, value) pairs for every field that is set.
    ///
    /// Empty strings and empty language lists are treated as unset.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(languages) = self.languages.as_ref().filter(|l| !l.is_empty()) {
            pairs.push(("languages", languages.join(",")));
        }
        if let Some(topic) = self.topic.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("topic", topic.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(start) = self.author_year_start {
            pairs.push(("author_year_start", start.to_string()));
        }
        if let Some(end) = self.author_year_end {
            pairs.push(("author_year_end", end.to_string()));
        }
        if let Some(copyright) = self.copyright {
            pairs.push(("copyright", copyright.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }

        pairs
    }

    /// Percent-encoded query string (no leading `?`) in the requested encoding.
    ///
    /// Returns an empty string when no field is set, in either encoding.
    pub fn to_query(&self, encoding: QueryEncoding) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }

        match encoding {
            QueryEncoding::Direct => pairs
                .iter()
                .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&"),
            QueryEncoding::Nested => {
                let inner = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(pairs.iter().map(|(name, value)| (*name, value.as_str())))
                    .finish();
                format!("search={}", encode_uri_component(&inner))
            }
        }
    }
}

fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
