//! Scenario definitions
//!
//! [`definition`] holds the request/expectation types and builders;
//! [`suite`] holds the fixed reqres table.

mod definition;
mod suite;

pub use definition::{Check, Method, RequestBody, Scenario};
pub use suite::scenarios;
