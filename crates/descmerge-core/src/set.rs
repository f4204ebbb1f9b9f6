//! # Descriptor Set
//!
//! The reconciled output: descriptors unique by name, sorted strictly
//! ascending by name.
//!
//! Sorting uses byte-wise `str` ordering, so the result does not depend on the
//! order registries happened to be populated in. Consumers diff and hash the
//! encoded set, which makes this a correctness requirement rather than a
//! presentation choice.

use crate::{Descriptor, MergeError};
use prost::Message;
use prost_types::FileDescriptorSet;

/// Sort descriptors ascending by name.
pub fn sort_by_name(files: &mut [Descriptor]) {
    files.sort_by(|a, b| a.name().cmp(b.name()));
}

/// A sorted, name-deduplicated `FileDescriptorSet`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorSet {
    inner: FileDescriptorSet,
}

impl DescriptorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary descriptors, rejecting repeated names.
    pub fn from_files(mut files: Vec<Descriptor>) -> Result<Self, MergeError> {
        sort_by_name(&mut files);
        if let Some(w) = files.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(MergeError::Deserialization(format!(
                "duplicate file name in descriptor set: {}",
                w[0].name()
            )));
        }
        Ok(Self {
            inner: FileDescriptorSet { file: files },
        })
    }

    /// Decode an encoded `FileDescriptorSet`.
    pub fn decode(bytes: &[u8]) -> Result<Self, MergeError> {
        let set = FileDescriptorSet::decode(bytes)
            .map_err(|e| MergeError::Deserialization(e.to_string()))?;
        Self::from_files(set.file)
    }

    /// Encode as a protobuf `FileDescriptorSet`.
    ///
    /// Equal sets always encode to identical bytes.
    #[must_use]
    pub fn encode_to_vec(&self) -> Vec<u8> {
        self.inner.encode_to_vec()
    }

    #[must_use]
    pub fn as_proto(&self) -> &FileDescriptorSet {
        &self.inner
    }

    #[must_use]
    pub fn into_proto(self) -> FileDescriptorSet {
        self.inner
    }

    /// Look up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.inner
            .file
            .binary_search_by(|d| d.name().cmp(name))
            .ok()
            .and_then(|idx| self.inner.file.get(idx))
    }

    /// File names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.file.iter().map(|d| d.name())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.inner.file.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.file.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.file.is_empty()
    }
}

impl<'a> IntoIterator for &'a DescriptorSet {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compute a BLAKE3 digest of the encoded set.
///
/// Returns the hash as a hex string (64 characters).
///
/// # Requires
///
/// This function is only available with the `crypto-hash` feature enabled.
#[cfg(feature = "crypto-hash")]
#[must_use]
pub fn canonical_crypto_hash(set: &DescriptorSet) -> String {
    blake3::hash(&set.encode_to_vec()).to_hex().to_string()
}
