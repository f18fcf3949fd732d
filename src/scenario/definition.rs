//! Scenario and check types
//!
//! A scenario is one complete request/expectation pair: the request to send
//! and the checks its response must satisfy. Scenarios are built once at
//! suite-definition time via the builder methods and never mutated.

use serde_json::Value;
use std::fmt::{self, Display};

/// HTTP methods the suite uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        write!(f, "{label}")
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request body attached to a scenario
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Structured value, serialized to JSON text at send time
    Json(Value),
    /// Pre-rendered text, sent verbatim
    Raw(String),
}

impl RequestBody {
    /// Render the body to the text that goes on the wire
    pub fn to_text(&self) -> String {
        match self {
            RequestBody::Json(value) => value.to_string(),
            RequestBody::Raw(text) => text.clone(),
        }
    }
}

/// One response check, evaluated after the status check
#[derive(Debug, Clone)]
pub enum Check {
    /// Value at the dotted path equals the expected JSON value
    FieldEquals { path: String, expected: Value },
    /// Value at the dotted path exists and is non-empty
    FieldPresent { path: String },
    /// Array at the dotted path has exactly this many elements
    FieldLen { path: String, expected: usize },
    /// Raw response body matches this text exactly
    BodyEquals { expected: String },
}

/// One complete request/expectation pair under test
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Name used in reports
    pub name: String,
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URI; may carry a query string
    pub path: String,
    /// Optional request body, sent as application/json
    pub body: Option<RequestBody>,
    /// Expected HTTP status code, matched exactly (defaults to 200)
    pub expected_status: u16,
    /// Ordered checks against the response body
    pub checks: Vec<Check>,
}

impl Scenario {
    fn new(name: &str, method: Method, path: &str) -> Self {
        Self {
            name: name.to_string(),
            method,
            path: path.to_string(),
            body: None,
            expected_status: 200,
            checks: Vec::new(),
        }
    }

    /// Start a GET scenario
    pub fn get(name: &str, path: &str) -> Self {
        Self::new(name, Method::Get, path)
    }

    /// Start a POST scenario
    pub fn post(name: &str, path: &str) -> Self {
        Self::new(name, Method::Post, path)
    }

    /// Start a PATCH scenario
    pub fn patch(name: &str, path: &str) -> Self {
        Self::new(name, Method::Patch, path)
    }

    /// Start a DELETE scenario
    pub fn delete(name: &str, path: &str) -> Self {
        Self::new(name, Method::Delete, path)
    }

    /// Attach a structured JSON body
    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attach a body sent verbatim
    pub fn raw_body(mut self, body: &str) -> Self {
        self.body = Some(RequestBody::Raw(body.to_string()));
        self
    }

    /// Expect this exact status code
    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Expect the value at `path` to equal `expected`
    pub fn expect_field(mut self, path: &str, expected: Value) -> Self {
        self.checks.push(Check::FieldEquals {
            path: path.to_string(),
            expected,
        });
        self
    }

    /// Expect the value at `path` to exist and be non-empty
    pub fn expect_present(mut self, path: &str) -> Self {
        self.checks.push(Check::FieldPresent {
            path: path.to_string(),
        });
        self
    }

    /// Expect the array at `path` to have exactly `expected` elements
    pub fn expect_len(mut self, path: &str, expected: usize) -> Self {
        self.checks.push(Check::FieldLen {
            path: path.to_string(),
            expected,
        });
        self
    }

    /// Expect the raw response body to match `body` exactly
    pub fn expect_body(mut self, body: &str) -> Self {
        self.checks.push(Check::BodyEquals {
            expected: body.to_string(),
        });
        self
    }

    /// Request line ("GET users?page=2") used in reports and listings
    pub fn request_line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}
