//! Configuration file handling
//!
//! Settings come from an optional TOML file (`apismoke.toml`), overridden by
//! CLI flags, and are finalized into the immutable [`RequestContext`] shared
//! by every scenario. Nothing mutates the context once the run starts.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::{Error, Result};

/// Target the suite was written against: the reqres demo API.
pub const DEFAULT_BASE_URI: &str = "https://reqres.in/api";

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "apismoke.toml";

/// File-level configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URI every scenario path is appended to
    #[serde(default = "default_base_uri")]
    pub base_uri: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification (test environments only)
    #[serde(default)]
    pub insecure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_uri: default_base_uri(),
            timeout_secs: default_timeout_secs(),
            insecure: false,
        }
    }
}

fn default_base_uri() -> String {
    DEFAULT_BASE_URI.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Config {
    /// Load configuration from a file.
    ///
    /// With an explicit path the file must exist. Without one,
    /// `apismoke.toml` in the working directory is used if present,
    /// otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Validate and freeze the configuration into the shared request context
    pub fn into_context(self) -> Result<RequestContext> {
        RequestContext::new(
            &self.base_uri,
            Duration::from_secs(self.timeout_secs),
            self.insecure,
        )
    }
}

/// Shared, read-only request configuration.
///
/// Built once before any scenario runs and handed to the runner by value;
/// scenarios only ever read it. Request bodies are always sent as
/// `application/json`.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Base URI every scenario path is appended to (no trailing slash)
    pub base_uri: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Skip TLS certificate verification (test environments only)
    pub insecure: bool,
}

impl RequestContext {
    /// Validate a base URI and timeout into a context
    pub fn new(base_uri: &str, timeout: Duration, insecure: bool) -> Result<Self> {
        let trimmed = base_uri.trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed).map_err(|e| Error::BaseUri {
            uri: base_uri.to_string(),
            error: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::BaseUri {
                uri: base_uri.to_string(),
                error: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if timeout.is_zero() {
            return Err(Error::Config(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(Self {
            base_uri: trimmed.to_string(),
            timeout,
            insecure,
        })
    }

    /// Absolute URL for a scenario path (which may carry a query string)
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_uri, path.trim_start_matches('/'))
    }
}
