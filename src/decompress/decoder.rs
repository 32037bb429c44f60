//! LZSS decoder loop
//!
//! Reconstructs raw bytes from a token stream, appending to the output until
//! the declared uncompressed size is reached. Copy tokens source each byte
//! from the output produced so far, one at a time, so references that
//! overlap their own destination expand into runs.
//!
//! A copy whose offset reaches back past the start of the output substitutes
//! a zero byte for every out-of-range position. The original decoding
//! environment ran against a zero-initialized window, and real files depend
//! on that, so it is not an error here.

use crate::common::{PcmpError, Result};
use crate::token::{Token, TokenReader};

/// Decode a PCMP token stream into `target_size` raw bytes.
///
/// Decoding stops the moment the output is full, even mid-control-byte or
/// mid-copy. An empty stream is only valid for a zero target.
pub fn decompress_stream(stream: &[u8], target_size: u32) -> Result<Vec<u8>> {
    if stream.is_empty() {
        if target_size > 0 {
            return Err(PcmpError::EmptyStream(target_size));
        }
        return Ok(Vec::new());
    }

    let target = target_size as usize;
    let mut out = Vec::with_capacity(target);
    let mut reader = TokenReader::new(stream);

    while out.len() < target {
        match reader.next_token()? {
            Token::Literal(byte) => out.push(byte),
            Token::Copy { offset, length } => {
                let offset = offset as usize;
                for _ in 0..length {
                    if out.len() >= target {
                        break;
                    }
                    let byte = if offset > out.len() {
                        0
                    } else {
                        out[out.len() - offset]
                    };
                    out.push(byte);
                }
            }
        }
    }

    if out.len() != target {
        log::warn!(
            "decoded {} bytes but the header declared {}, stream may be truncated or corrupted",
            out.len(),
            target
        );
    }

    Ok(out)
}
