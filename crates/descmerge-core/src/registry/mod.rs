//! # Descriptor Registries
//!
//! The two sources of truth the reconciler reads from, modelled as injectable
//! read-only collaborators instead of process-wide globals:
//!
//! - [`LegacyRegistry`]: an ordered sequence of gzip-compressed, wire-encoded
//!   descriptors, as produced by the older code-generation path.
//! - [`ModernRegistry`]: an enumerable store of file objects indexed by path,
//!   each convertible to a [`Descriptor`].
//!
//! In-memory implementations live in [`legacy`] and [`modern`]. Callers with
//! registries populated some other way implement the traits directly.

pub mod legacy;
pub mod modern;

use crate::{Descriptor, MergeError};

pub use legacy::BlobRegistry;
pub use modern::{FileRegistry, RegisteredFile};

/// Read access to the legacy compressed-descriptor registry.
pub trait LegacyRegistry {
    /// Every registered compressed blob, in registration order.
    fn compressed_files(&self) -> impl Iterator<Item = &[u8]>;
}

/// A file held by the modern registry.
pub trait FileObject {
    /// The path the file was registered under.
    fn path(&self) -> &str;

    /// Convert to the canonical descriptor representation.
    ///
    /// Returns `MergeError::Conversion` if the object is malformed.
    fn to_descriptor_proto(&self) -> Result<Descriptor, MergeError>;
}

/// Read access to the modern descriptor registry.
pub trait ModernRegistry {
    type File: FileObject;

    /// Every registered file, each exactly once.
    ///
    /// The order is the registry's own; the reconciler sorts its output.
    fn files(&self) -> impl Iterator<Item = &Self::File>;
}
