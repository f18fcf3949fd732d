//! CLI command definitions
//!
//! Defines the clap commands for the smoke suite binary.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scenario suite against the target API
    Run {
        /// Path to a TOML config file (default: ./apismoke.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Base URI scenario paths are appended to
        #[arg(long)]
        base_uri: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Skip TLS certificate verification (test environments only)
        #[arg(long)]
        insecure: bool,

        /// Only run scenarios whose name contains this substring
        #[arg(long)]
        filter: Option<String>,

        /// Maximum scenarios in flight (1 = strictly sequential)
        #[arg(long, default_value = "1")]
        jobs: usize,
    },

    /// List the scenarios in the suite without sending any requests
    List,
}
