//! # Modern Registry Walker
//!
//! Enumerates the modern registry to exhaustion and converts every file whose
//! path the legacy decoder has not already materialized.
//!
//! A file object is malformed, and the walk fails with `Conversion`, when:
//! - its converted descriptor is named differently from its path
//! - the registry yields its path more than once

use crate::registry::{FileObject, ModernRegistry};
use crate::{Descriptor, MergeError, SeenNames};
use std::collections::BTreeSet;
use tracing::debug;

/// Output of a modern registry walk.
#[derive(Debug, Clone, Default)]
pub struct ModernWalk {
    /// Net-new descriptors, in the registry's enumeration order.
    pub added: Vec<Descriptor>,
    /// Files skipped because the legacy registry already provided them.
    pub skipped: usize,
}

/// Walk `registry`, converting files not present in `seen`.
///
/// The registry is never mutated. A conversion failure aborts the walk.
pub fn walk_modern<M: ModernRegistry>(
    registry: &M,
    seen: &SeenNames,
) -> Result<ModernWalk, MergeError> {
    let mut out = ModernWalk::default();
    let mut visited = BTreeSet::new();

    for file in registry.files() {
        let path = file.path();
        if !visited.insert(path.to_string()) {
            return Err(MergeError::Conversion(format!(
                "{}: enumerated more than once",
                path
            )));
        }
        if seen.contains(path) {
            debug!(path, "modern descriptor already provided by legacy registry");
            out.skipped += 1;
            continue;
        }

        let descriptor = file.to_descriptor_proto()?;
        if descriptor.name() != path {
            return Err(MergeError::Conversion(format!(
                "{}: descriptor is named {:?}",
                path,
                descriptor.name()
            )));
        }
        out.added.push(descriptor);
    }

    Ok(out)
}
