//! Logging and tracing configuration
//!
//! User-facing results go to stdout via the reporter; tracing output goes to
//! stderr so piping the report stays clean.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing for the CLI.
///
/// Controlled by the `RUST_LOG` environment variable. Default level is INFO
/// for this crate, WARN for dependencies. Request/response diagnostics are
/// logged at debug and trace.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("apismoke=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
