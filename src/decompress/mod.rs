//! PCMP decompression
//!
//! Parses the container framing and decodes the embedded token stream back
//! to the original raw bytes.

mod decoder;

pub use decoder::decompress_stream;

use crate::common::{Result, HEADER_SIZE};
use crate::header::ContainerHeader;

/// Decompress a complete PCMP container (header, stream, padding)
pub fn decompress_container(file: &[u8]) -> Result<Vec<u8>> {
    let header = ContainerHeader::parse(file)?;

    if header.compressed_size == 0 && header.uncompressed_size == 0 {
        return Ok(Vec::new());
    }

    let stream = &file[HEADER_SIZE..HEADER_SIZE + header.compressed_size as usize];
    decompress_stream(stream, header.uncompressed_size)
}
