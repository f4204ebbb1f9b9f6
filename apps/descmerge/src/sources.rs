//! # Registry Sources
//!
//! Populates the core's in-memory registries from disk:
//! - legacy: every `*.gz` file of a directory, in file-name order
//! - modern: one or more binary `FileDescriptorSet` files (`protoc -o` output)
//!
//! Every input file is path-checked and size-checked before it is read.

use descmerge_core::{BlobRegistry, FileRegistry, MergeError};
use prost::Message;
use prost_types::FileDescriptorSet;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a single legacy blob file (16 MB).
const MAX_LEGACY_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Maximum size of a FileDescriptorSet input (256 MB).
///
/// Sets built with `--include_imports` for large APIs can be sizeable.
const MAX_SET_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Extension identifying legacy blob files.
const LEGACY_EXTENSION: &str = "gz";

// =============================================================================
// PATH VALIDATION
// =============================================================================

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), MergeError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| MergeError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(MergeError::IoError(format!(
            "File '{}' is {} bytes, exceeding maximum allowed {} bytes",
            path.display(),
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve an input path and ensure it names a regular file.
pub fn validate_file_path(path: &Path) -> Result<PathBuf, MergeError> {
    // Canonicalize resolves "..", symlinks, and validates existence
    let canonical = path.canonicalize().map_err(|e| {
        MergeError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(MergeError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Resolve an output path: its parent directory must already exist.
pub fn validate_output_path(path: &Path) -> Result<PathBuf, MergeError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        MergeError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(MergeError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| MergeError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

/// Read a validated input file, bounded by `max_size`.
pub fn read_input(path: &Path, max_size: u64) -> Result<Vec<u8>, MergeError> {
    let validated = validate_file_path(path)?;
    validate_file_size(&validated, max_size)?;
    std::fs::read(&validated)
        .map_err(|e| MergeError::IoError(format!("Read '{}': {}", path.display(), e)))
}

// =============================================================================
// LEGACY REGISTRY
// =============================================================================

/// Load every `*.gz` file in `dir` into a legacy registry.
///
/// Blobs are registered in file-name order so runs are reproducible. Blob
/// contents are not inspected here; a corrupt blob fails reconciliation.
pub fn load_legacy_dir(dir: &Path) -> Result<BlobRegistry, MergeError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        MergeError::IoError(format!("Cannot read legacy directory '{}': {}", dir.display(), e))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| MergeError::IoError(format!("Read '{}': {}", dir.display(), e)))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == LEGACY_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut registry = BlobRegistry::new();
    for path in &paths {
        registry.register(read_input(path, MAX_LEGACY_FILE_SIZE)?);
    }

    tracing::info!(dir = %dir.display(), blobs = registry.len(), "loaded legacy registry");
    Ok(registry)
}

// =============================================================================
// MODERN REGISTRY
// =============================================================================

/// Add every file of an encoded `FileDescriptorSet` to `registry`.
///
/// Sets built with `--include_imports` repeat shared imports; a file already
/// registered with identical bytes is skipped, a conflicting one is an error.
fn register_set_bytes(registry: &mut FileRegistry, bytes: &[u8]) -> Result<usize, MergeError> {
    let set =
        FileDescriptorSet::decode(bytes).map_err(|e| MergeError::Deserialization(e.to_string()))?;

    let mut added = 0;
    for descriptor in &set.file {
        let raw = descriptor.encode_to_vec();
        if registry
            .get(descriptor.name())
            .is_some_and(|existing| existing.raw() == raw.as_slice())
        {
            tracing::debug!(path = descriptor.name(), "identical file already registered");
            continue;
        }
        registry.register(raw)?;
        added += 1;
    }
    Ok(added)
}

/// Load one or more encoded `FileDescriptorSet` files into a modern registry.
pub fn load_modern_files(paths: &[PathBuf]) -> Result<FileRegistry, MergeError> {
    let mut registry = FileRegistry::new();

    for path in paths {
        let bytes = read_input(path, MAX_SET_FILE_SIZE)?;
        let added = register_set_bytes(&mut registry, &bytes)
            .map_err(|e| e.context(path.display()))?;
        tracing::debug!(path = %path.display(), added, "loaded descriptor set");
    }

    tracing::info!(files = registry.len(), "loaded modern registry");
    Ok(registry)
}
