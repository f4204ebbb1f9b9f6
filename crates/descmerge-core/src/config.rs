//! # Reconciler Configuration
//!
//! Runtime knobs for a reconciliation run. Parsing from a file happens in the
//! app layer; this module only defines the shape, the defaults and validation.

use crate::{ExclusionPolicy, MergeError, primitives::MAX_DECOMPRESSED_SIZE};
use serde::{Deserialize, Serialize};

/// Configuration for [`Reconciler`](crate::Reconciler).
///
/// Every field has a default, so an empty config file is valid:
///
/// ```toml
/// max_decompressed_size = 67108864
///
/// [exclusion]
/// names = ["gogo.proto", "descriptor.proto"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReconcileConfig {
    /// Legacy names never emitted from the legacy registry.
    pub exclusion: ExclusionPolicy,

    /// Upper bound on the decompressed size of one legacy blob, in bytes.
    pub max_decompressed_size: usize,
}

impl ReconcileConfig {
    /// Reject configurations that cannot decode anything.
    pub fn validate(&self) -> Result<(), MergeError> {
        if self.max_decompressed_size == 0 {
            return Err(MergeError::Config(
                "max_decompressed_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            exclusion: ExclusionPolicy::default(),
            max_decompressed_size: MAX_DECOMPRESSED_SIZE,
        }
    }
}
