//! # Core Type Definitions
//!
//! This module contains the shared vocabulary of the reconciler:
//! - The descriptor representation (`Descriptor`)
//! - The per-run set of already materialized names (`SeenNames`)
//! - Error types (`MergeError`)
//!
//! ## Determinism Guarantees
//!
//! - `SeenNames` is a `BTreeSet`, never a hash set
//! - Descriptors are compared and ordered by name using byte-wise `str` ordering

use std::collections::BTreeSet;
use thiserror::Error;

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// A single schema file description.
///
/// Identified by its `name` (the file path, e.g. `cosmos/bank/v1/tx.proto`).
/// The remaining fields are treated as an opaque body.
pub type Descriptor = prost_types::FileDescriptorProto;

/// Names already materialized by the legacy decoder during one run.
pub type SeenNames = BTreeSet<String>;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while reconciling descriptor registries.
///
/// - No silent failures
/// - Any decode error aborts the whole run; there is no partial result
#[derive(Debug, Error)]
pub enum MergeError {
    /// A compressed blob is corrupt or uses an unsupported format.
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// A decompressed stream could not be fully consumed.
    #[error("Read error: {0}")]
    Read(String),

    /// Bytes do not parse as a descriptor under the protobuf wire encoding.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// A modern registry object could not be converted to a descriptor.
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Encoding a descriptor failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A file path was registered twice in an append-only registry.
    #[error("File already registered: {0}")]
    AlreadyRegistered(String),

    /// The reconciler configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl MergeError {
    /// Prefix the error message with where it happened, keeping the kind.
    #[must_use]
    pub fn context(self, at: impl std::fmt::Display) -> Self {
        match self {
            Self::Decompression(m) => Self::Decompression(format!("{}: {}", at, m)),
            Self::Read(m) => Self::Read(format!("{}: {}", at, m)),
            Self::Deserialization(m) => Self::Deserialization(format!("{}: {}", at, m)),
            Self::Conversion(m) => Self::Conversion(format!("{}: {}", at, m)),
            Self::Serialization(m) => Self::Serialization(format!("{}: {}", at, m)),
            Self::AlreadyRegistered(m) => Self::AlreadyRegistered(format!("{}: {}", at, m)),
            Self::Config(m) => Self::Config(format!("{}: {}", at, m)),
            Self::IoError(m) => Self::IoError(format!("{}: {}", at, m)),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_keeps_error_kind() {
        let err = MergeError::Read("unexpected end of file".to_string()).context("legacy blob 3");
        assert!(matches!(err, MergeError::Read(ref m) if m == "legacy blob 3: unexpected end of file"));
    }

    #[test]
    fn error_display_names_kind() {
        let err = MergeError::Decompression("invalid gzip header".to_string());
        assert_eq!(err.to_string(), "Decompression error: invalid gzip header");
    }

    #[test]
    fn seen_names_iterate_sorted() {
        let mut seen = SeenNames::new();
        seen.insert("b.proto".to_string());
        seen.insert("B.proto".to_string());
        seen.insert("a.proto".to_string());

        let names: Vec<_> = seen.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["B.proto", "a.proto", "b.proto"]);
    }
}
