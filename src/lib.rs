//! Scenario-driven smoke tests for the reqres.in demo REST API
//!
//! The suite is a fixed table of request/expectation pairs executed against
//! one base endpoint: each scenario is a single round trip whose response
//! must match an exact status code and, where declared, body fields or a
//! literal body. Outcomes aggregate into one pass/fail exit.

pub mod cli;
pub mod commands;
pub mod common;
pub mod http;
pub mod runner;
pub mod scenario;

// Re-export commonly used types for tests
pub use common::{Config, Error, FailureKind, RequestContext, Result};
pub use http::{ApiClient, ResponseRecord};
pub use runner::{run_suite, ScenarioOutcome, SuiteReport};
pub use scenario::{scenarios, Check, Method, RequestBody, Scenario};
