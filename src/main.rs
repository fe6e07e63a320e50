//! # page_harvest
//!
//! Scrapes a registered site starting at a URL and writes the records to a
//! dated JSON snapshot.
//!
//! ## Usage
//!
//! ```sh
//! page_harvest [SITE] [URL]
//! ```

use clap::Parser;
use page_harvest::cli::Cli;
use page_harvest::fetch::FetchConfig;
use page_harvest::orchestrator::{FAILURE_NOTICE, Orchestrator};
use page_harvest::outputs::JsonStore;
use page_harvest::registry::Registry;
use page_harvest::scrapers::{QuotesConfig, QuotesExtractor};
use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let fetch_config = FetchConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        ..FetchConfig::default()
    };
    let quotes_config = QuotesConfig {
        max_pages: args.max_pages,
        ..QuotesConfig::default()
    };
    let quotes = QuotesExtractor::with_http(quotes_config, &fetch_config)?;

    let mut registry = Registry::new();
    registry.register("quotes", || quotes)?;

    let mut orchestrator = Orchestrator::new(registry, JsonStore::new(&args.output_dir));

    let code = match orchestrator.run(&args.site, &args.url) {
        Ok(Some(outcome)) => {
            println!("{}", outcome.notice());
            if outcome.is_failure() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Ok(None) => {
            println!("{FAILURE_NOTICE}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to write snapshot");
            println!("{FAILURE_NOTICE}");
            ExitCode::FAILURE
        }
    };

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(code)
}
