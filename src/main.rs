//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the report as JSON on stdout
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use page_audit::initialization::init_logger_with;
use page_audit::{run_audit, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_audit(&opt).await {
        Ok(report) => {
            let json = if opt.compact {
                serde_json::to_string(&report)
            } else {
                serde_json::to_string_pretty(&report)
            }
            .context("Failed to serialize report")?;
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("page_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
