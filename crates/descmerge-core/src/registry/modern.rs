//! In-memory modern registry: wire-encoded files indexed by path.
//!
//! Mirrors how generated code registers files: each file is handed over as its
//! raw `FileDescriptorProto` bytes under a path, and is only converted to a
//! descriptor value when someone asks for it.

use super::{FileObject, ModernRegistry};
use crate::{Descriptor, MergeError, codec};
use prost::Message;
use prost_types::FileDescriptorSet;
use std::collections::BTreeMap;

/// One file held by a [`FileRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFile {
    path: String,
    raw: Vec<u8>,
}

impl RegisteredFile {
    /// The raw wire bytes as registered.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

impl FileObject for RegisteredFile {
    fn path(&self) -> &str {
        &self.path
    }

    fn to_descriptor_proto(&self) -> Result<Descriptor, MergeError> {
        let descriptor = Descriptor::decode(self.raw.as_slice())
            .map_err(|e| MergeError::Conversion(format!("{}: {}", self.path, e)))?;
        if descriptor.name() != self.path {
            return Err(MergeError::Conversion(format!(
                "{}: descriptor is named {:?}",
                self.path,
                descriptor.name()
            )));
        }
        Ok(descriptor)
    }
}

/// Append-only store of files, indexed by path.
///
/// Enumeration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    files: Vec<RegisteredFile>,
    by_path: BTreeMap<String, usize>,
}

impl FileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file from its wire bytes, taking the path from its name.
    pub fn register(&mut self, raw: impl Into<Vec<u8>>) -> Result<(), MergeError> {
        let raw = raw.into();
        let path = codec::decode_descriptor(&raw)?.name().to_string();
        self.register_raw(path, raw)
    }

    /// Register wire bytes under an explicit path without decoding them.
    ///
    /// Malformed bytes are accepted here and surface as a conversion error
    /// during reconciliation.
    pub fn register_raw(
        &mut self,
        path: impl Into<String>,
        raw: impl Into<Vec<u8>>,
    ) -> Result<(), MergeError> {
        let path = path.into();
        if self.by_path.contains_key(&path) {
            return Err(MergeError::AlreadyRegistered(path));
        }
        self.by_path.insert(path.clone(), self.files.len());
        self.files.push(RegisteredFile {
            path,
            raw: raw.into(),
        });
        Ok(())
    }

    /// Register a descriptor value.
    pub fn register_descriptor(&mut self, descriptor: &Descriptor) -> Result<(), MergeError> {
        self.register(descriptor.encode_to_vec())
    }

    /// Register every file of a `FileDescriptorSet`, in order.
    ///
    /// Returns the number of files registered.
    pub fn register_set(&mut self, set: &FileDescriptorSet) -> Result<usize, MergeError> {
        for descriptor in &set.file {
            self.register_descriptor(descriptor)?;
        }
        Ok(set.file.len())
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RegisteredFile> {
        self.by_path.get(path).and_then(|&idx| self.files.get(idx))
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ModernRegistry for FileRegistry {
    type File = RegisteredFile;

    fn files(&self) -> impl Iterator<Item = &RegisteredFile> {
        self.files.iter()
    }
}
