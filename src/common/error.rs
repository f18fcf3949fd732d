//! Error types for the smoke suite
//!
//! Failures split into transport problems (the request never produced a
//! usable response) and assertion problems (the response arrived but did not
//! match the scenario's expectations). Reports keep the two apart so
//! infrastructure noise is not mistaken for fixture drift.

use std::time::Duration;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the smoke suite
#[derive(Error, Debug)]
pub enum Error {
    // === Transport errors ===
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {}s", timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    #[error("failed to read response body from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // === Assertion errors ===
    #[error("expected status {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    #[error("expected body exactly {expected:?}, got {actual:?}")]
    BodyMismatch { expected: String, actual: String },

    #[error("field `{path}`: expected {expected}, got {actual}")]
    FieldMismatch {
        path: String,
        expected: serde_json::Value,
        actual: serde_json::Value,
    },

    #[error("field `{path}`: expected {expected} elements, got {actual}")]
    LengthMismatch {
        path: String,
        expected: usize,
        actual: usize,
    },

    #[error("field `{path}`: expected an array, got {actual}")]
    NotAnArray {
        path: String,
        actual: serde_json::Value,
    },

    #[error("field `{path}` is null or empty")]
    FieldEmpty { path: String },

    // === Extraction errors ===
    #[error("field `{path}` not found in response body")]
    FieldMissing { path: String },

    #[error("response body is not valid JSON: {source}")]
    BodyNotJson {
        #[source]
        source: serde_json::Error,
    },

    // === Configuration errors ===
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read config file '{path}': {error}")]
    ConfigRead { path: String, error: String },

    #[error("invalid config file '{path}': {error}")]
    ConfigParse { path: String, error: String },

    #[error("invalid base URI '{uri}': {error}")]
    BaseUri { uri: String, error: String },

    // === Suite outcome ===
    #[error("{failed} of {total} scenarios failed")]
    SuiteFailed { failed: usize, total: usize },
}

/// Coarse classification of a scenario failure, used by the suite report.
///
/// Extraction problems (missing field paths, unparseable bodies) count as
/// assertion failures: the response arrived but was not what the scenario
/// declared it should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a usable response
    Transport,
    /// The response did not satisfy the scenario's expectations
    Assertion,
}

impl Error {
    /// Classify a scenario failure for reporting.
    ///
    /// Only meaningful for errors produced while running a scenario;
    /// configuration errors abort the run before any request is sent.
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Transport { .. } | Error::Timeout { .. } | Error::BodyRead { .. } => {
                FailureKind::Transport
            }
            _ => FailureKind::Assertion,
        }
    }
}
