//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `public_ip_report` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - HTTP client initialization
//! - Printing the report
//!
//! All lookup logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use public_ip_report::initialization::{init_client, init_logger_with};
use public_ip_report::{render_result, run_lookup_with, Config, Endpoints};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone().map(Into::into);
    let log_format = config.log_format.clone();
    init_logger_with(log_level, log_format).context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    // Notices print as they happen; a failed self-lookup prints one line and still exits 0
    let outcome = run_lookup_with(&client, &Endpoints::default(), |notice| {
        println!("{}", notice)
    })
    .await;
    print!("{}", render_result(&outcome));

    Ok(())
}
