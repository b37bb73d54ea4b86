//! Error type for catalog operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The service answered a search with a non-success status
    #[error("catalog request failed with status {status}")]
    Request { status: u16 },
    /// The service answered a lookup with 404
    #[error("book {id} not found in catalog")]
    NotFound { id: u64 },
    #[error("failed to reach catalog service")]
    Transport(#[source] reqwest::Error),
    #[error("failed to decode catalog response")]
    Decode(#[source] serde_json::Error),
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl CatalogError {
    /// HTTP status reported by the service, if the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Request { status } => Some(*status),
            CatalogError::NotFound { .. } => Some(404),
            CatalogError::Transport(e) => e.status().map(|s| s.as_u16()),
            CatalogError::Decode(_) | CatalogError::Client(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
