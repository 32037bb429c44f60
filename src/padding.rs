//! Sector alignment padding
//!
//! PCMP containers live on optical-media images whose sectors are 2048
//! bytes, so the file is zero-padded up to the next sector boundary. A
//! container holding nothing but the 32-byte header still occupies one full
//! sector.

use crate::common::FILE_ALIGNMENT;

/// Length `len` rounds up to when padded to the sector boundary
pub fn padded_len(len: usize) -> usize {
    match len % FILE_ALIGNMENT {
        0 => len,
        remainder => len + (FILE_ALIGNMENT - remainder),
    }
}

/// Append zero bytes until the buffer length is a multiple of the sector size
pub fn pad_to_alignment(buf: &mut Vec<u8>) {
    buf.resize(padded_len(buf.len()), 0);
}
