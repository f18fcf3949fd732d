//! HTTP transport
//!
//! Builds one `reqwest` client from the shared [`RequestContext`] and
//! executes a single scenario request per call. Transport problems (connect,
//! DNS, TLS, timeout) surface as their own error variants so the report can
//! keep them apart from assertion failures.

use std::time::Instant;

use reqwest::header::CONTENT_TYPE;

use crate::common::{Error, RequestContext, Result};
use crate::scenario::Scenario;

/// Response data a scenario's checks run against.
///
/// Produced for exactly one request and consumed by that scenario's checks
/// only; nothing is cached across scenarios.
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    /// HTTP status code
    pub status: u16,
    /// Raw response body text
    pub body: String,
}

impl ResponseRecord {
    /// Parse the body as JSON, on demand
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body).map_err(|source| Error::BodyNotJson { source })
    }
}

/// HTTP executor shared by all scenarios
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    context: RequestContext,
}

impl ApiClient {
    /// Build a client from the shared request context.
    ///
    /// `insecure` disables TLS certificate verification; that is an
    /// environment-specific exception and always logs a warning.
    pub fn new(context: RequestContext) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(context.timeout);
        if context.insecure {
            tracing::warn!(base_uri = %context.base_uri, "TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, context })
    }

    /// The context this client was built from
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Execute one scenario request and collect its response.
    ///
    /// One outbound round trip, no retries. The body, when present, goes out
    /// as `application/json`: structured bodies are serialized here, raw
    /// bodies pass through verbatim.
    pub async fn execute(&self, scenario: &Scenario) -> Result<ResponseRecord> {
        let url = self.context.url_for(&scenario.path);

        let mut request = self.client.request(scenario.method.into(), &url);
        if let Some(body) = &scenario.body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_text());
        }

        tracing::debug!(method = %scenario.method, %url, "sending request");
        let started = Instant::now();

        let response = request
            .send()
            .await
            .map_err(|source| classify_send_error(&url, &self.context, source))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|source| Error::BodyRead {
            url: url.clone(),
            source,
        })?;

        tracing::debug!(
            status,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );
        tracing::trace!(%body, "response body");

        Ok(ResponseRecord { status, body })
    }
}

fn classify_send_error(url: &str, context: &RequestContext, source: reqwest::Error) -> Error {
    if source.is_timeout() {
        Error::Timeout {
            url: url.to_string(),
            timeout: context.timeout,
        }
    } else {
        Error::Transport {
            url: url.to_string(),
            source,
        }
    }
}
