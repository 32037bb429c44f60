//! pcmplib - Rust codec for the PCMP texture container format
//!
//! This crate provides a pure Rust implementation of the PCMP compression
//! scheme, an LZSS-family format used by texture containers on a console
//! game. It reproduces the original tool's output byte-for-byte: the same
//! greedy match selection, the same control-byte/token interleaving, the
//! same fixed 32-byte header, and the same 2048-byte sector padding.
//!
//! # Features
//!
//! - Decompression with permissive handling of malformed headers (advisory
//!   size fields are clamped, out-of-range back-references zero-fill)
//! - Compression with a 4096-byte sliding window and 3..18-byte matches
//! - Container framing: header codec and sector-alignment padding
//! - Injectable progress reporting for large inputs
//!
//! # Example - Round trip
//!
//! ```
//! let data = b"the quick brown fox jumps over the lazy dog";
//! let container = pcmplib::compress_bytes(data);
//! assert_eq!(container.len() % 2048, 0);
//!
//! let restored = pcmplib::decompress_bytes(&container)?;
//! assert_eq!(restored, data);
//! # Ok::<(), pcmplib::PcmpError>(())
//! ```
//!
//! # Example - Decompressing a file
//!
//! ```no_run
//! let file = std::fs::read("texture.pcmp")?;
//! let raw = pcmplib::decompress_bytes(&file)?;
//! std::fs::write("texture.bin", raw)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod common;
pub mod compress;
pub mod decompress;
pub mod error;
pub mod header;
pub mod padding;
pub mod token;

pub use common::{
    PcmpError, Result, FILE_ALIGNMENT, HEADER_SIZE, MAX_MATCH_LENGTH, MAX_WINDOW_SIZE,
    MIN_MATCH_LENGTH, SIGNATURE,
};
pub use compress::{
    compress_container, compress_container_with_progress, compress_stream,
    compress_stream_with_progress,
};
pub use decompress::{decompress_container, decompress_stream};
pub use header::ContainerHeader;
pub use padding::{pad_to_alignment, padded_len};
pub use token::{Token, TokenReader, TokenWriter};

/// Compress raw bytes into a complete PCMP container.
///
/// The result includes the 32-byte header and trailing sector padding; its
/// length is always a multiple of 2048.
pub fn compress_bytes(data: &[u8]) -> Vec<u8> {
    compress::compress_container(data)
}

/// Decompress a PCMP container back to the original raw bytes.
///
/// `file` must start with the 32-byte header; trailing sector padding is
/// ignored.
pub fn decompress_bytes(file: &[u8]) -> Result<Vec<u8>> {
    decompress::decompress_container(file)
}
