//! Common types and constants for the PCMP codec
//!
//! This module defines the format constants, the error type, and the Result
//! alias used by both the compression and decompression paths.

use thiserror::Error;

/// Container signature, first four bytes of every PCMP file
pub const SIGNATURE: [u8; 4] = *b"PCMP";

/// Size of the fixed container header; the token stream starts here
pub const HEADER_SIZE: usize = 0x20;

/// Byte offset of the little-endian uncompressed size field
pub const UNCOMPRESSED_SIZE_OFFSET: usize = 0x14;

/// Byte offset of the little-endian compressed-stream size field
pub const COMPRESSED_SIZE_OFFSET: usize = 0x18;

/// Maximum backward distance a copy token can reach
pub const MAX_WINDOW_SIZE: usize = 4096;

/// Maximum number of bytes a single copy token can produce
pub const MAX_MATCH_LENGTH: usize = 18;

/// Minimum match length worth encoding as a copy token
pub const MIN_MATCH_LENGTH: usize = 3;

/// Containers are zero-padded to a multiple of this sector size
pub const FILE_ALIGNMENT: usize = 2048;

/// Error type for PCMP operations
#[derive(Debug, Error)]
pub enum PcmpError {
    /// Input shorter than the fixed 32-byte header
    #[error("file too short for PCMP header: {0} bytes (need {HEADER_SIZE})")]
    TooShort(usize),

    /// First four bytes are not the PCMP signature
    #[error("'PCMP' signature not found (got {0:02X?})")]
    InvalidSignature([u8; 4]),

    /// Stream has no bytes but the header declares a non-zero output size
    #[error("compressed stream is empty but {0} uncompressed bytes are declared")]
    EmptyStream(u32),

    /// Stream ended where the next control byte was expected
    #[error("compressed stream ended prematurely")]
    PrematureEnd,

    /// Fewer than two bytes remained for a signaled copy token
    #[error("premature end of stream while reading copy token")]
    PrematureEndDuringCopy,

    /// No byte remained for a signaled literal token
    #[error("premature end of stream while reading literal")]
    PrematureEndDuringLiteral,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for PCMP operations
pub type Result<T> = std::result::Result<T, PcmpError>;
