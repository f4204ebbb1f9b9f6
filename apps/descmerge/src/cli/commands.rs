//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::SourceArgs;
use crate::sources::{load_legacy_dir, load_modern_files, read_input, validate_output_path};
use descmerge_core::{
    BlobRegistry, DescriptorSet, MergeError, ReconcileConfig, Reconciled, Reconciler,
    canonical_crypto_hash, diff_sets,
};
use std::path::Path;

/// Maximum size of an encoded set given to `diff` (256 MB).
const MAX_DIFF_FILE_SIZE: u64 = 256 * 1024 * 1024;

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Load both registries and reconcile them.
pub fn run_sources(sources: &SourceArgs, config: &ReconcileConfig) -> Result<Reconciled, MergeError> {
    let legacy = match &sources.legacy_dir {
        Some(dir) => load_legacy_dir(dir)?,
        None => BlobRegistry::new(),
    };
    let modern = load_modern_files(&sources.modern)?;

    Reconciler::new(config.clone()).run(&legacy, &modern)
}

// =============================================================================
// RECONCILE COMMAND
// =============================================================================

/// Reconcile and optionally write the encoded set.
pub fn cmd_reconcile(
    sources: &SourceArgs,
    config: &ReconcileConfig,
    output: Option<&Path>,
    json_mode: bool,
) -> Result<(), MergeError> {
    let Reconciled { set, stats } = run_sources(sources, config)?;

    let written = match output {
        Some(path) => {
            let target = validate_output_path(path)?;
            let bytes = set.encode_to_vec();
            std::fs::write(&target, &bytes).map_err(|e| {
                MergeError::IoError(format!("Write '{}': {}", target.display(), e))
            })?;
            tracing::info!(path = %target.display(), bytes = bytes.len(), "wrote descriptor set");
            Some(target)
        }
        None => None,
    };

    if json_mode {
        print_json(&serde_json::json!({
            "stats": stats,
            "output": written.as_ref().map(|p| p.to_string_lossy()),
        }));
        return Ok(());
    }

    println!("Descriptor Set Reconciled");
    println!("=========================");
    println!("Files:            {}", stats.total);
    println!("From legacy:      {}", stats.legacy_accepted);
    println!("From modern:      {}", stats.modern_added);
    println!("Legacy excluded:  {}", stats.legacy_excluded);
    println!("Legacy repeats:   {}", stats.legacy_duplicates);
    println!("Modern shadowed:  {}", stats.modern_skipped);
    if let Some(path) = written {
        println!();
        println!("Written to: {:?}", path);
    }

    Ok(())
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// Print reconciled names in order.
pub fn cmd_list(
    sources: &SourceArgs,
    config: &ReconcileConfig,
    json_mode: bool,
) -> Result<(), MergeError> {
    let Reconciled { set, .. } = run_sources(sources, config)?;

    if json_mode {
        let names: Vec<&str> = set.names().collect();
        print_json(&serde_json::json!({ "files": names }));
        return Ok(());
    }

    for name in set.names() {
        println!("{}", name);
    }
    Ok(())
}

// =============================================================================
// HASH COMMAND
// =============================================================================

/// Print the BLAKE3 digest of the encoded set.
pub fn cmd_hash(
    sources: &SourceArgs,
    config: &ReconcileConfig,
    json_mode: bool,
) -> Result<(), MergeError> {
    let Reconciled { set, .. } = run_sources(sources, config)?;
    let hash = canonical_crypto_hash(&set);

    if json_mode {
        print_json(&serde_json::json!({
            "algorithm": "blake3",
            "files": set.len(),
            "hash": hash,
        }));
        return Ok(());
    }

    println!("{}", hash);
    Ok(())
}

// =============================================================================
// DIFF COMMAND
// =============================================================================

/// Load an encoded set from disk.
pub fn load_set(path: &Path) -> Result<DescriptorSet, MergeError> {
    let bytes = read_input(path, MAX_DIFF_FILE_SIZE)?;
    DescriptorSet::decode(&bytes).map_err(|e| e.context(path.display()))
}

/// Compare two encoded sets.
pub fn cmd_diff(left: &Path, right: &Path, json_mode: bool) -> Result<(), MergeError> {
    let diff = diff_sets(&load_set(left)?, &load_set(right)?);

    if json_mode {
        print_json(&serde_json::json!(diff));
        return Ok(());
    }

    if diff.is_empty() {
        println!("Descriptor sets are identical");
        return Ok(());
    }
    for name in &diff.added {
        println!("+ {}", name);
    }
    for name in &diff.removed {
        println!("- {}", name);
    }
    for name in &diff.changed {
        println!("~ {}", name);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
