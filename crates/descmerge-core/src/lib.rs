//! # descmerge-core
//!
//! The deterministic descriptor-set reconciler - THE LOGIC.
//!
//! Merges two independently maintained protobuf descriptor registries into one
//! canonical `FileDescriptorSet`:
//! - a legacy registry of gzip-compressed, wire-encoded `FileDescriptorProto`s
//! - a modern registry of file objects indexed by path
//!
//! The result contains every file exactly once, sorted by name, or the whole
//! run fails. There is no partial result.
//!
//! ## Precedence
//!
//! - A name present in both registries comes from the legacy registry.
//! - A legacy name named by the [`ExclusionPolicy`] is dropped and NOT marked
//!   as seen, so the modern registry's copy of it is used instead.
//!
//! ## Architectural Constraints
//!
//! - No async, no network, no filesystem access (pure Rust)
//! - Registries are injected through [`LegacyRegistry`] and [`ModernRegistry`]
//! - Output order depends only on file names, never on registration order
//!
//! ## Example
//!
//! ```
//! use descmerge_core::{BlobRegistry, Descriptor, FileRegistry, reconcile};
//!
//! let file = |name: &str| Descriptor {
//!     name: Some(name.to_string()),
//!     ..Descriptor::default()
//! };
//!
//! let mut legacy = BlobRegistry::new();
//! legacy.register_descriptor(&file("b.proto"))?;
//! let mut modern = FileRegistry::new();
//! modern.register_descriptor(&file("a.proto"))?;
//!
//! let set = reconcile(&legacy, &modern)?;
//! assert_eq!(set.names().collect::<Vec<_>>(), ["a.proto", "b.proto"]);
//! # Ok::<(), descmerge_core::MergeError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod codec;
pub mod config;
pub mod decoder;
pub mod diff;
pub mod policy;
pub mod primitives;
pub mod reconcile;
pub mod registry;
pub mod set;
pub mod types;
pub mod walker;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Descriptor, MergeError, SeenNames};

// =============================================================================
// RE-EXPORTS: Registries
// =============================================================================

pub use registry::{
    BlobRegistry, FileObject, FileRegistry, LegacyRegistry, ModernRegistry, RegisteredFile,
};

// =============================================================================
// RE-EXPORTS: Pipeline
// =============================================================================

pub use config::ReconcileConfig;
pub use decoder::{LegacyDecode, LegacyDecoder};
pub use diff::{SetDiff, diff_sets};
pub use policy::ExclusionPolicy;
pub use reconcile::{ReconcileStats, Reconciled, Reconciler, reconcile};
#[cfg(feature = "crypto-hash")]
pub use set::canonical_crypto_hash;
pub use set::{DescriptorSet, sort_by_name};
pub use walker::{ModernWalk, walk_modern};
