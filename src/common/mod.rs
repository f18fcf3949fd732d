//! Shared configuration, error, and logging plumbing

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, RequestContext};
pub use error::{Error, FailureKind, Result};
