//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ads_insight` library that handles:
//! - Command-line argument parsing
//! - Settings file loading
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use ads_insight::app::print_insights_summary;
use ads_insight::initialization::init_logger_with;
use ads_insight::{load_settings, run_extraction, Opt, RunError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let settings = match load_settings(&opt.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{} {}", "Fatal error:".red().bold(), e);
            process::exit(1);
        }
    };
    let config = opt.into_config(settings);

    match run_extraction(config).await {
        Ok(report) => {
            if let Some(path) = &report.ads_path {
                println!("{} {}", "Saved ads to".green(), path.display());
            }
            if let Some(path) = &report.insights_path {
                println!("{} {}", "Saved insights to".green(), path.display());
            }
            if let Some(insights) = &report.insights {
                print_insights_summary(insights);
            }
            println!(
                "{} ({:.1}s)",
                "Done.".green().bold(),
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            if let Some(RunError::NoInput { .. }) = e.downcast_ref::<RunError>() {
                eprintln!("{}", e.to_string().red().bold());
            } else {
                eprintln!("{} {:#}", "Fatal error:".red().bold(), e);
            }
            process::exit(1);
        }
    }
}
