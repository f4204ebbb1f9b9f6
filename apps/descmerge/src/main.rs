//! # descmerge
//!
//! Command-line front end for the descmerge-core reconciler.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 apps/descmerge (THE BINARY)                  │
//! │                                                              │
//! │  ┌─────────────┐    ┌──────────────┐    ┌────────────────┐   │
//! │  │    CLI      │    │   Sources    │    │     Config     │   │
//! │  │   (clap)    │    │ (.gz / .pb)  │    │    (toml)      │   │
//! │  └──────┬──────┘    └──────┬───────┘    └───────┬────────┘   │
//! │         └──────────────────┼────────────────────┘            │
//! │                            ▼                                 │
//! │                   ┌────────────────┐                         │
//! │                   │ descmerge-core │                         │
//! │                   │  (THE LOGIC)   │                         │
//! │                   └────────────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Merge and write the canonical set
//! descmerge reconcile -l legacy/ -m api.pb -m deps.pb -o merged.pb
//!
//! # Inspect
//! descmerge list -l legacy/ -m api.pb
//! descmerge hash -l legacy/ -m api.pb
//! descmerge diff --left old.pb --right merged.pb
//! ```

mod cli;
mod config;
mod sources;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries command output.
///
/// DESCMERGE_LOG_FORMAT=json enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("DESCMERGE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "descmerge=debug,descmerge_core=debug"
    } else {
        "descmerge=info,descmerge_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
