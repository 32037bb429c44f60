//! Bounded sliding-window match search
//!
//! Finds the back-reference the encoder emits at a given input position.
//! Selection policy: the longest match wins, and on equal length the
//! occurrence nearest the cursor (smallest offset) wins. Candidate starts
//! are scanned nearest-first and the best is only replaced by a strictly
//! longer match, which realizes exactly that policy in one pass. The policy
//! determines the exact compressed bytes, so it must not be reordered.
//!
//! A match may run past the cursor into the bytes it is about to encode
//! (offset smaller than length); the decoder copies byte-at-a-time, so such
//! self-overlapping references expand into runs.

use crate::common::MIN_MATCH_LENGTH;

/// A back-reference found in the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Distance backward from the current position
    pub offset: usize,
    /// Number of bytes matched
    pub length: usize,
}

/// Search for the best back-reference for the bytes starting at `pos`.
///
/// The searchable span is the `min(max_window, pos)` bytes preceding `pos`;
/// match lengths are capped at `min(max_length, remaining input)`. Returns
/// `None` when the span is too short to hold a minimum-length pattern or
/// nothing of minimum length occurs in it.
pub fn find_match(
    input: &[u8],
    pos: usize,
    max_window: usize,
    max_length: usize,
) -> Option<Match> {
    let remaining = input.len() - pos;
    let max_length = max_length.min(remaining);
    if max_length < MIN_MATCH_LENGTH {
        return None;
    }

    let window = max_window.min(pos);
    if window < MIN_MATCH_LENGTH {
        return None;
    }
    let window_start = pos - window;

    let mut best: Option<Match> = None;
    for start in (window_start..pos).rev() {
        if input[start] != input[pos] {
            continue;
        }

        let mut length = 1;
        while length < max_length && input[start + length] == input[pos + length] {
            length += 1;
        }

        if length >= MIN_MATCH_LENGTH && best.is_none_or(|b| length > b.length) {
            best = Some(Match {
                offset: pos - start,
                length,
            });
            if length == max_length {
                break;
            }
        }
    }

    best
}
