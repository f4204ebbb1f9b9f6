//! # Fixed Primitives
//!
//! Hardcoded constants for the reconciler: gzip framing and default limits.
//! These are compiled into the binary; runtime overrides go through
//! [`ReconcileConfig`](crate::ReconcileConfig).

/// Magic bytes at the start of every gzip member (RFC 1952).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Compression method byte for deflate, the only method gzip defines.
pub const GZIP_METHOD_DEFLATE: u8 = 8;

/// Length of the fixed part of a gzip member header.
pub const GZIP_HEADER_LEN: usize = 10;

/// Default upper bound on the decompressed size of a single legacy blob.
///
/// A descriptor file is rarely more than a few hundred KB. 64 MB leaves ample
/// room while stopping a corrupted or hostile blob from exhausting memory.
pub const MAX_DECOMPRESSED_SIZE: usize = 64 * 1024 * 1024; // 64 MB

/// Legacy names that are never emitted from the legacy registry.
///
/// The legacy bootstrap path registers `gogo.proto` twice. `descriptor.proto`
/// has been excluded alongside it for as long as this list has existed, with no
/// recorded reason; it is kept so output stays identical, and is a candidate
/// for reassessment.
pub const LEGACY_BOOTSTRAP_EXCLUSIONS: [&str; 2] = ["gogo.proto", "descriptor.proto"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_magic_correct() {
        assert_eq!(GZIP_MAGIC, [0x1f, 0x8b]);
    }

    #[test]
    fn bootstrap_exclusions_are_exactly_two() {
        assert_eq!(LEGACY_BOOTSTRAP_EXCLUSIONS.len(), 2);
        assert!(LEGACY_BOOTSTRAP_EXCLUSIONS.contains(&"gogo.proto"));
        assert!(LEGACY_BOOTSTRAP_EXCLUSIONS.contains(&"descriptor.proto"));
    }
}
