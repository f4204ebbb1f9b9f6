//! # Reconciler
//!
//! The single linear pipeline:
//!
//! ```text
//! legacy blobs ──► LegacyDecoder ──► accepted + SeenNames
//!                                          │
//! modern files ──► walk_modern(seen) ──► added
//!                                          │
//!                     accepted ++ added ──► sort by name ──► DescriptorSet
//! ```
//!
//! No deduplication happens at the concatenation step: uniqueness comes from
//! the decoder's seen tracking and the walker skipping seen paths.

use crate::decoder::LegacyDecoder;
use crate::registry::{LegacyRegistry, ModernRegistry};
use crate::walker::walk_modern;
use crate::{DescriptorSet, MergeError, ReconcileConfig};
use serde::Serialize;
use tracing::info;

/// Counters describing where the reconciled descriptors came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    /// Legacy descriptors kept.
    pub legacy_accepted: usize,
    /// Legacy descriptors dropped by the exclusion policy.
    pub legacy_excluded: usize,
    /// Legacy descriptors dropped as repeats of an earlier legacy entry.
    pub legacy_duplicates: usize,
    /// Modern descriptors added because legacy did not provide them.
    pub modern_added: usize,
    /// Modern descriptors skipped because legacy already provided them.
    pub modern_skipped: usize,
    /// Size of the reconciled set.
    pub total: usize,
}

/// A reconciled set together with its provenance counters.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub set: DescriptorSet,
    pub stats: ReconcileStats,
}

/// Runs reconciliation under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    #[must_use]
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Merge both registries into one sorted, deduplicated set.
    ///
    /// All-or-nothing: any decode or conversion failure returns an error and
    /// no set.
    pub fn run<L, M>(&self, legacy: &L, modern: &M) -> Result<Reconciled, MergeError>
    where
        L: LegacyRegistry,
        M: ModernRegistry,
    {
        self.config.validate()?;

        let decoded = LegacyDecoder::new(&self.config.exclusion, self.config.max_decompressed_size)
            .decode(legacy)?;
        let walk = walk_modern(modern, &decoded.seen)?;

        let mut stats = ReconcileStats {
            legacy_accepted: decoded.accepted.len(),
            legacy_excluded: decoded.excluded,
            legacy_duplicates: decoded.duplicates,
            modern_added: walk.added.len(),
            modern_skipped: walk.skipped,
            total: 0,
        };

        let mut combined = decoded.accepted;
        combined.extend(walk.added);
        let set = DescriptorSet::from_files(combined)?;
        stats.total = set.len();

        info!(
            total = stats.total,
            legacy = stats.legacy_accepted,
            modern = stats.modern_added,
            excluded = stats.legacy_excluded,
            "reconciled descriptor set"
        );

        Ok(Reconciled { set, stats })
    }
}

/// Reconcile two registries with the default configuration.
pub fn reconcile<L, M>(legacy: &L, modern: &M) -> Result<DescriptorSet, MergeError>
where
    L: LegacyRegistry,
    M: ModernRegistry,
{
    Reconciler::default().run(legacy, modern).map(|r| r.set)
}
