use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use gutenctl::{CatalogClientConfig, QueryEncoding, SortOrder, DEFAULT_BASE_URL};

/// Application configuration loaded from ~/.config/gutenctl/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchDefaults,
}

/// Connection settings for the catalog service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overrides the default `gutenctl/<version>` user agent
    pub user_agent: Option<String>,

    /// Request timeout in seconds (no timeout if unset)
    pub timeout_secs: Option<u64>,

    /// "direct" or "nested" (legacy single `search=` parameter)
    #[serde(default)]
    pub query_encoding: QueryEncoding,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: None,
            timeout_secs: None,
            query_encoding: QueryEncoding::default(),
        }
    }
}

/// Defaults applied to `search` when the matching flag is not given
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchDefaults {
    #[serde(default)]
    pub languages: Vec<String>,
    pub sort: Option<SortOrder>,
}

impl Config {
    /// Load from an explicit path, or the default path when none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()?),
        }
    }

    /// Load configuration from a specific path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("gutenctl").join("config.toml"))
    }

    pub fn client_config(&self) -> CatalogClientConfig {
        CatalogClientConfig {
            base_url: self.catalog.base_url.clone(),
            user_agent: self.catalog.user_agent.clone(),
            timeout: self.catalog.timeout_secs.map(Duration::from_secs),
            query_encoding: self.catalog.query_encoding,
        }
    }

    /// Languages to filter by, with CLI values taking precedence
    pub fn languages(&self, cli_override: &[String]) -> Vec<String> {
        if cli_override.is_empty() {
            self.search.languages.clone()
        } else {
            cli_override.to_vec()
        }
    }

    /// Sort order, with CLI override taking precedence
    pub fn sort(&self, cli_override: Option<SortOrder>) -> Option<SortOrder> {
        cli_override.or(self.search.sort)
    }
}
