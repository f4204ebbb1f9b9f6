//! In-memory legacy registry: an append-only list of gzip blobs.

use super::LegacyRegistry;
use crate::{Descriptor, MergeError, codec};

/// Ordered, append-only store of compressed descriptor blobs.
///
/// Blobs are stored as given; nothing is decoded until reconciliation, so a
/// corrupt blob is only detected (and fatal) at that point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobRegistry {
    blobs: Vec<Vec<u8>>,
}

impl BlobRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a compressed blob.
    pub fn register(&mut self, blob: impl Into<Vec<u8>>) {
        self.blobs.push(blob.into());
    }

    /// Encode, compress and append a descriptor.
    pub fn register_descriptor(&mut self, descriptor: &Descriptor) -> Result<(), MergeError> {
        let blob = codec::compress_descriptor(descriptor)?;
        self.register(blob);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl LegacyRegistry for BlobRegistry {
    fn compressed_files(&self) -> impl Iterator<Item = &[u8]> {
        self.blobs.iter().map(Vec::as_slice)
    }
}

impl FromIterator<Vec<u8>> for BlobRegistry {
    fn from_iter<I: IntoIterator<Item = Vec<u8>>>(iter: I) -> Self {
        Self {
            blobs: iter.into_iter().collect(),
        }
    }
}
