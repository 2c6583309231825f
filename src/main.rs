//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report output (text or JSON) and optional JSON export
//! - Exit codes: 0 when a report was produced, 1 when the analysis failed,
//!   2 for invalid options
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_audit::config::Cli;
use seo_audit::initialization::init_logger_with;
use seo_audit::report::{export_json, serialize};
use seo_audit::{render, render_text, run_analysis, Config, FetchError, OutputFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::from(Cli::parse());

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("seo_audit: {e}");
        process::exit(2);
    }

    if !config.color {
        colored::control::set_override(false);
    }

    let analysis = match run_analysis(&config).await {
        Ok(analysis) => analysis,
        Err(e) => {
            log::error!("{e:#}");
            match e.downcast_ref::<FetchError>() {
                Some(fetch_error) => eprintln!("{}", fetch_error.user_message()),
                None => eprintln!("seo_audit error: {e:#}"),
            }
            process::exit(1);
        }
    };

    if let Some(path) = &config.output {
        if let Err(e) = export_json(&analysis.report, path) {
            eprintln!("seo_audit error: {e}");
            process::exit(1);
        }
    }

    match config.output_format {
        OutputFormat::Json => {
            println!("{}", serialize(&analysis.report)?);
        }
        OutputFormat::Text => {
            println!("SEO analysis of {}", analysis.final_url);
            if analysis.final_url != analysis.requested_url {
                println!("(redirected from {})", analysis.requested_url);
            }
            if analysis.truncated {
                println!("(page body was truncated before analysis)");
            }
            println!();
            print!("{}", render_text(&render(&analysis.report)));
            if let Some(path) = &config.output {
                println!();
                println!("Report saved to {}", path.display());
            }
        }
    }

    Ok(())
}
