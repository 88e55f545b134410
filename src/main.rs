//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `rmp_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use rmp_lookup::initialization::{init_client, init_logger_with};
use rmp_lookup::{encode_school_id, format, run_search, Config, Endpoints, SearchRequest};

// Exit codes: 0 success (including zero matches), 1 lookup failure,
// 2 usage error (clap's standard, also used for a blank name).
const EXIT_LOOKUP_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // A blank name is a usage error, caught before any network activity.
    if config.query.trim().is_empty() {
        eprintln!("error: the professor name must not be empty");
        process::exit(EXIT_USAGE);
    }

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let request = SearchRequest::new(
        config.query.clone(),
        encode_school_id(config.school_id.as_deref()),
    );

    match run_search(&client, &Endpoints::default(), &request).await {
        Ok(records) => {
            if let Some((top, rest)) = records.split_first() {
                println!("{}", format::format_summary(top));
                if !rest.is_empty() {
                    println!();
                    println!("Other matches:");
                    for record in rest {
                        println!("  {}", format::format_compact(record));
                    }
                }
            } else {
                println!("No matches for \"{}\"", request.query);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("rmp_lookup error: {e}");
            process::exit(EXIT_LOOKUP_FAILURE);
        }
    }
}
