//! CLI command handling
//!
//! Builds the request context from config file and flags, selects scenarios,
//! runs the suite, and maps the aggregate result onto the process exit
//! status.

use colored::Colorize;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::runner;
use crate::scenario;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            base_uri,
            timeout_secs,
            insecure,
            filter,
            jobs,
        } => {
            let mut config = Config::load(config.as_deref())?;
            if let Some(base_uri) = base_uri {
                config.base_uri = base_uri;
            }
            if let Some(secs) = timeout_secs {
                config.timeout_secs = secs;
            }
            if insecure {
                config.insecure = true;
            }
            let context = config.into_context()?;

            let mut scenarios = scenario::scenarios();
            if let Some(filter) = &filter {
                scenarios.retain(|s| s.name.contains(filter.as_str()));
                if scenarios.is_empty() {
                    return Err(Error::Config(format!(
                        "no scenario name contains '{filter}'"
                    )));
                }
            }

            println!(
                "\n{} {}",
                "Running:".blue().bold(),
                format!("{} scenarios against {}", scenarios.len(), context.base_uri)
                    .white()
                    .bold()
            );

            let report = runner::run_suite(context, scenarios, jobs).await?;
            report.print_summary();
            report.into_result()
        }

        Commands::List => {
            for scenario in scenario::scenarios() {
                println!(
                    "{:<28} {}",
                    scenario.name,
                    scenario.request_line().dimmed()
                );
            }
            Ok(())
        }
    }
}
