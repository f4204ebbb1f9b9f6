//! # Configuration Loading
//!
//! Reads an optional TOML file into a [`ReconcileConfig`]. No file means the
//! built-in defaults.

use descmerge_core::{MergeError, ReconcileConfig};
use std::path::Path;

/// Parse and validate a TOML configuration document.
pub fn parse_config(text: &str) -> Result<ReconcileConfig, MergeError> {
    let config: ReconcileConfig =
        toml::from_str(text).map_err(|e| MergeError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load the configuration from `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ReconcileConfig, MergeError> {
    let Some(path) = path else {
        return Ok(ReconcileConfig::default());
    };

    let text = std::fs::read_to_string(path).map_err(|e| {
        MergeError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
    })?;
    let config = parse_config(&text).map_err(|e| e.context(path.display()))?;

    tracing::debug!(
        path = %path.display(),
        excluded = config.exclusion.len(),
        "loaded configuration"
    );
    Ok(config)
}
