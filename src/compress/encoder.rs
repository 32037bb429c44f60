//! LZSS encoder loop
//!
//! Walks a cursor over the input, asks the match finder for a back-reference
//! at each position, and emits copy or literal tokens through the
//! [`TokenWriter`](crate::token::TokenWriter). The output grows as needed;
//! encoding cannot fail.

use super::matcher::find_match;
use crate::common::{MAX_MATCH_LENGTH, MAX_WINDOW_SIZE};
use crate::token::TokenWriter;

/// Compress raw bytes into a PCMP token stream.
///
/// An empty input produces an empty stream with no control byte.
pub fn compress_stream(data: &[u8]) -> Vec<u8> {
    compress_stream_with_progress(data, |_, _| {})
}

/// Compress raw bytes, reporting progress through `progress`.
///
/// The callback receives `(bytes_processed, total_bytes)` and is invoked at
/// whole-percent steps plus once at completion. It is purely diagnostic and
/// has no effect on the produced stream.
pub fn compress_stream_with_progress<F>(data: &[u8], mut progress: F) -> Vec<u8>
where
    F: FnMut(usize, usize),
{
    if data.is_empty() {
        return Vec::new();
    }

    let mut writer = TokenWriter::new();
    let mut pos = 0;
    let mut last_percent = 0;

    while pos < data.len() {
        let window = pos.min(MAX_WINDOW_SIZE);
        let max_length = (data.len() - pos).min(MAX_MATCH_LENGTH);

        match find_match(data, pos, window, max_length) {
            Some(m) => {
                writer.push_copy(m.offset as u16, m.length as u8);
                pos += m.length;
            }
            None => {
                writer.push_literal(data[pos]);
                pos += 1;
            }
        }

        let percent = pos * 100 / data.len();
        if percent > last_percent {
            last_percent = percent;
            progress(pos, data.len());
        }
    }

    writer.finish()
}
