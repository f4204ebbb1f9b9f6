//! # Descriptor Codec
//!
//! Byte-level transformations between descriptors and the two encodings the
//! registries use:
//! - protobuf wire encoding of `FileDescriptorProto` (modern registry)
//! - the same bytes wrapped in gzip (legacy registry)
//!
//! Pure transformations only, no file I/O.
//!
//! ## Error mapping
//!
//! | Failure                                   | Error             |
//! |-------------------------------------------|-------------------|
//! | bad gzip header, corrupt deflate, bad CRC | `Decompression`   |
//! | truncated stream, size limit exceeded     | `Read`            |
//! | bytes are not a descriptor, missing name  | `Deserialization` |

use crate::primitives::{GZIP_HEADER_LEN, GZIP_MAGIC, GZIP_METHOD_DEFLATE};
use crate::{Descriptor, MergeError};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use prost::Message;
use std::io::{ErrorKind, Read, Write};

// =============================================================================
// GZIP
// =============================================================================

/// Check the fixed gzip header before handing bytes to the decoder.
fn check_gzip_header(blob: &[u8]) -> Result<(), MergeError> {
    if blob.len() < GZIP_HEADER_LEN {
        return Err(MergeError::Decompression(format!(
            "blob too short for a gzip header: {} bytes",
            blob.len()
        )));
    }
    if blob[0..2] != GZIP_MAGIC {
        return Err(MergeError::Decompression("invalid gzip header".to_string()));
    }
    if blob[2] != GZIP_METHOD_DEFLATE {
        return Err(MergeError::Decompression(format!(
            "unsupported gzip compression method: {}",
            blob[2]
        )));
    }
    Ok(())
}

fn map_read_error(e: std::io::Error) -> MergeError {
    match e.kind() {
        ErrorKind::InvalidInput | ErrorKind::InvalidData => {
            MergeError::Decompression(e.to_string())
        }
        _ => MergeError::Read(e.to_string()),
    }
}

/// Decompress a gzip blob fully into memory.
///
/// Concatenated gzip members are read as one stream. Output beyond `limit`
/// bytes is an error rather than a silent truncation.
pub fn inflate(blob: &[u8], limit: usize) -> Result<Vec<u8>, MergeError> {
    check_gzip_header(blob)?;

    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut out = Vec::new();
    MultiGzDecoder::new(blob)
        .take(cap)
        .read_to_end(&mut out)
        .map_err(map_read_error)?;

    if out.len() > limit {
        return Err(MergeError::Read(format!(
            "decompressed size exceeds maximum allowed {} bytes",
            limit
        )));
    }
    Ok(out)
}

/// Gzip arbitrary bytes with the default compression level.
pub fn deflate(bytes: &[u8]) -> Result<Vec<u8>, MergeError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(bytes)
        .map_err(|e| MergeError::Serialization(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| MergeError::Serialization(e.to_string()))
}

// =============================================================================
// DESCRIPTOR WIRE FORMAT
// =============================================================================

/// Parse a `FileDescriptorProto` from protobuf wire bytes.
///
/// A descriptor with no `name` field cannot be reconciled and is rejected
/// here. An explicitly empty name is a name like any other and is accepted.
pub fn decode_descriptor(bytes: &[u8]) -> Result<Descriptor, MergeError> {
    let descriptor =
        Descriptor::decode(bytes).map_err(|e| MergeError::Deserialization(e.to_string()))?;
    if descriptor.name.is_none() {
        return Err(MergeError::Deserialization(
            "file descriptor has no name".to_string(),
        ));
    }
    Ok(descriptor)
}

/// Encode and gzip a descriptor the way the legacy registry stores it.
pub fn compress_descriptor(descriptor: &Descriptor) -> Result<Vec<u8>, MergeError> {
    deflate(&descriptor.encode_to_vec())
}

/// Inverse of [`compress_descriptor`].
pub fn decompress_descriptor(blob: &[u8], limit: usize) -> Result<Descriptor, MergeError> {
    let bytes = inflate(blob, limit)?;
    decode_descriptor(&bytes)
}

// =============================================================================
// TESTS
// =============================================================================
