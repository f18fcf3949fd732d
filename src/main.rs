//! apismoke - scenario smoke tests for the reqres.in demo API
//!
//! Sends a fixed suite of requests against one base endpoint and checks
//! status codes and body fields, exiting nonzero when any scenario fails.

use apismoke::common::logging;
use apismoke::{cli, commands::Commands};
use clap::Parser;

#[derive(Parser)]
#[command(name = "apismoke", about = "Scenario smoke tests for REST APIs")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
