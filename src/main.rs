//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `friction_scan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use strum::IntoEnumIterator;

use friction_scan::initialization::{init_http_client, init_logger_with};
use friction_scan::{Config, FrictionType, ScanSession, LIKELY_SPA_MESSAGE, NO_FRICTION_MESSAGE};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let client = init_http_client(&config).context("Failed to build HTTP client")?;

    let url = config.url.clone();
    let as_json = config.json;
    let mut session = ScanSession::new(config, client);
    session.start_scan(&url).await;

    // A session that never left idle means the URL was rejected up front
    if session.scanned_url().is_none() {
        eprintln!("friction_scan error: '{url}' is not a scannable http(s) URL");
        process::exit(2);
    }

    if let Some(message) = session.scan_error() {
        // The two zero-point outcomes are informational, not failures
        if message == NO_FRICTION_MESSAGE || message == LIKELY_SPA_MESSAGE {
            println!("{message}");
            return Ok(());
        }
        eprintln!("friction_scan error: {message}");
        process::exit(1);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(session.points())?);
        return Ok(());
    }

    let stats = session.stats();
    println!(
        "Found {} friction point{} on {}",
        stats.total,
        if stats.total == 1 { "" } else { "s" },
        session.scanned_url().unwrap_or_default()
    );
    for kind in FrictionType::iter() {
        let count = session.points().iter().filter(|p| p.kind == kind).count();
        if count > 0 {
            println!("  {kind}: {count}");
        }
    }
    println!();
    for point in session.points() {
        println!("[{}] {}", point.kind, point.selector);
        println!("    {}", point.element_html);
        println!("    {}", point.intent_question);
    }

    Ok(())
}
