//! # Legacy Descriptor Decoder
//!
//! Turns the legacy registry's compressed blobs into descriptors and records
//! which names are now materialized.
//!
//! Per blob, in registration order:
//! 1. gunzip and read fully (bounded by the configured size limit)
//! 2. decode as a `FileDescriptorProto`
//! 3. drop it if the exclusion policy names it, WITHOUT marking it seen
//! 4. drop it if an earlier blob already produced the same name
//! 5. otherwise keep it and mark the name seen
//!
//! The first failing blob aborts decoding; nothing decoded so far is returned.

use crate::registry::LegacyRegistry;
use crate::{Descriptor, ExclusionPolicy, MergeError, SeenNames, codec};
use tracing::debug;

/// Output of a successful legacy decode.
#[derive(Debug, Clone, Default)]
pub struct LegacyDecode {
    /// Accepted descriptors in registration order.
    pub accepted: Vec<Descriptor>,
    /// Names of the accepted descriptors.
    pub seen: SeenNames,
    /// Blobs dropped by the exclusion policy.
    pub excluded: usize,
    /// Blobs dropped because their name was already accepted.
    pub duplicates: usize,
}

/// Decodes legacy blobs under an exclusion policy.
#[derive(Debug, Clone, Copy)]
pub struct LegacyDecoder<'a> {
    policy: &'a ExclusionPolicy,
    max_decompressed_size: usize,
}

impl<'a> LegacyDecoder<'a> {
    #[must_use]
    pub fn new(policy: &'a ExclusionPolicy, max_decompressed_size: usize) -> Self {
        Self {
            policy,
            max_decompressed_size,
        }
    }

    /// Decode every blob of a legacy registry.
    pub fn decode<L: LegacyRegistry>(&self, registry: &L) -> Result<LegacyDecode, MergeError> {
        self.decode_blobs(registry.compressed_files())
    }

    /// Decode an ordered sequence of blobs.
    pub fn decode_blobs<'b, I>(&self, blobs: I) -> Result<LegacyDecode, MergeError>
    where
        I: IntoIterator<Item = &'b [u8]>,
    {
        let mut out = LegacyDecode::default();

        for (index, blob) in blobs.into_iter().enumerate() {
            let descriptor = codec::decompress_descriptor(blob, self.max_decompressed_size)
                .map_err(|e| e.context(format_args!("legacy blob {}", index)))?;
            let name = descriptor.name();

            if self.policy.excludes(name) {
                debug!(index, name, "legacy descriptor excluded by policy");
                out.excluded += 1;
                continue;
            }
            if out.seen.contains(name) {
                debug!(index, name, "legacy descriptor registered twice, keeping first");
                out.duplicates += 1;
                continue;
            }

            out.seen.insert(name.to_string());
            out.accepted.push(descriptor);
        }

        Ok(out)
    }
}
