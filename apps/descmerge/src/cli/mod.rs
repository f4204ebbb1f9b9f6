//! # descmerge CLI Module
//!
//! ## Available Commands
//!
//! - `reconcile` - Merge both registries and write the encoded set
//! - `list` - Print the reconciled file names in order
//! - `hash` - Print the BLAKE3 digest of the reconciled set
//! - `diff` - Compare two encoded descriptor sets

mod commands;

use crate::config::load_config;
use clap::{Args, Parser, Subcommand};
use descmerge_core::MergeError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// descmerge - protobuf descriptor registry reconciler
///
/// Merges a legacy registry of gzip-compressed descriptors with a modern
/// registry of FileDescriptorSets into one sorted, deduplicated set.
#[derive(Parser, Debug)]
#[command(name = "descmerge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the two registries are loaded from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory of gzip-compressed legacy descriptors (`*.gz`, read in file-name order)
    #[arg(short = 'l', long)]
    pub legacy_dir: Option<PathBuf>,

    /// Binary FileDescriptorSet file for the modern registry (repeatable)
    #[arg(short = 'm', long = "modern")]
    pub modern: Vec<PathBuf>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile both registries into one FileDescriptorSet
    Reconcile {
        #[command(flatten)]
        sources: SourceArgs,

        /// Write the encoded FileDescriptorSet to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List reconciled file names in order
    List {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Compute BLAKE3 cryptographic hash of the reconciled set
    Hash {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Compare two encoded FileDescriptorSet files
    Diff {
        /// Old set
        #[arg(long)]
        left: PathBuf,

        /// New set
        #[arg(long)]
        right: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), MergeError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Reconcile { sources, output } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_reconcile(&sources, &config, output.as_deref(), json_mode)
        }
        Commands::List { sources } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_list(&sources, &config, json_mode)
        }
        Commands::Hash { sources } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_hash(&sources, &config, json_mode)
        }
        Commands::Diff { left, right } => cmd_diff(&left, &right, json_mode),
    }
}
