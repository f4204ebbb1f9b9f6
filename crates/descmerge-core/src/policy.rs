//! # Exclusion Policy
//!
//! Names the legacy decoder must never emit.
//!
//! Exclusion filters the *source*, not the *content*: an excluded legacy entry
//! is dropped without being marked as seen, so the modern registry's copy of the
//! same file can still surface in the reconciled set.

use crate::primitives::LEGACY_BOOTSTRAP_EXCLUSIONS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A fixed set of legacy file names to drop during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExclusionPolicy {
    names: BTreeSet<String>,
}

impl ExclusionPolicy {
    /// The policy that works around the legacy bootstrap double registration.
    ///
    /// See [`LEGACY_BOOTSTRAP_EXCLUSIONS`] for why each name is listed.
    #[must_use]
    pub fn legacy_bootstrap() -> Self {
        Self::from_names(LEGACY_BOOTSTRAP_EXCLUSIONS)
    }

    /// A policy that excludes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Build a policy from an explicit list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a legacy entry with this name must be dropped.
    #[must_use]
    pub fn excludes(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Excluded names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::legacy_bootstrap()
    }
}
