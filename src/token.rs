//! Bitstream token codec shared by the encoder and decoder
//!
//! The compressed stream interleaves 8-bit control bytes with token
//! payloads. Each control byte covers up to 8 tokens, MSB first: a set bit
//! marks a 2-byte copy token, a clear bit a 1-byte literal.
//!
//! A copy token packs a 12-bit backward offset and a 4-bit length across two
//! bytes: `encoded = ((offset - 1) << 4) | ((length - 3) & 0xF)`, stored
//! little-endian, so the offset's low nibble sits in the high nibble of the
//! first byte.
//!
//! One quirk of the original tool is load-bearing: when the 8th bit of a
//! control byte is assigned, the next control-byte slot is reserved (writer)
//! or read (reader) immediately, *before* that 8th token's payload. The 8th
//! payload of every full group therefore trails the next group's control
//! byte on the wire. Both sides here reproduce that ordering exactly.

use crate::common::{PcmpError, Result, MAX_MATCH_LENGTH, MAX_WINDOW_SIZE, MIN_MATCH_LENGTH};

/// A single decoded token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// One raw byte, copied through verbatim
    Literal(u8),
    /// Back-reference into already-produced output
    Copy {
        /// Distance backward from the current output position, 1..=4096
        offset: u16,
        /// Number of bytes to copy, 3..=18
        length: u8,
    },
}

/// Pack a copy token's offset and length into its 2-byte wire form
pub fn pack_copy(offset: u16, length: u8) -> [u8; 2] {
    debug_assert!((1..=MAX_WINDOW_SIZE as u16).contains(&offset));
    debug_assert!((MIN_MATCH_LENGTH as u8..=MAX_MATCH_LENGTH as u8).contains(&length));

    let encoded = ((offset - 1) << 4) | ((length as u16 - 3) & 0x0F);
    [(encoded & 0xFF) as u8, (encoded >> 8) as u8]
}

/// Unpack a copy token's 2-byte wire form into (offset, length)
pub fn unpack_copy(b0: u8, b1: u8) -> (u16, u8) {
    let offset = ((b0 as u16 >> 4) | ((b1 as u16) << 4)) + 1;
    let length = (b0 & 0x0F) + 3;
    (offset, length)
}

/// Serializes tokens into the control-byte/payload interleaving
#[derive(Debug)]
pub struct TokenWriter {
    out: Vec<u8>,
    flag_pos: usize,
    flag: u8,
    bit_count: u8,
}

impl TokenWriter {
    /// Create a writer with the first control-byte slot reserved
    pub fn new() -> Self {
        Self {
            out: vec![0],
            flag_pos: 0,
            flag: 0,
            bit_count: 0,
        }
    }

    fn begin_token(&mut self, is_copy: bool) {
        if is_copy {
            self.flag |= 1 << (7 - self.bit_count);
        }
        self.bit_count += 1;

        // Group complete: patch the pending control byte and reserve the
        // next slot now, ahead of the current token's payload.
        if self.bit_count == 8 {
            self.out[self.flag_pos] = self.flag;
            self.flag = 0;
            self.bit_count = 0;
            self.flag_pos = self.out.len();
            self.out.push(0);
        }
    }

    /// Append a literal token
    pub fn push_literal(&mut self, byte: u8) {
        self.begin_token(false);
        self.out.push(byte);
    }

    /// Append a copy token
    pub fn push_copy(&mut self, offset: u16, length: u8) {
        self.begin_token(true);
        let [b0, b1] = pack_copy(offset, length);
        self.out.push(b0);
        self.out.push(b1);
    }

    /// Patch the final (possibly partial) control byte and return the stream
    pub fn finish(mut self) -> Vec<u8> {
        self.out[self.flag_pos] = self.flag;
        self.out
    }
}

impl Default for TokenWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserializes tokens from the control-byte/payload interleaving
#[derive(Debug)]
pub struct TokenReader<'a> {
    stream: &'a [u8],
    pos: usize,
    control: u8,
    bits_left: u8,
}

impl<'a> TokenReader<'a> {
    /// Create a reader over a non-empty token stream.
    ///
    /// The first control byte is consumed up front; callers must check for
    /// an empty stream before constructing a reader.
    pub fn new(stream: &'a [u8]) -> Self {
        debug_assert!(!stream.is_empty());
        Self {
            stream,
            pos: 1,
            control: stream[0],
            bits_left: 8,
        }
    }

    /// Read the next token from the stream
    pub fn next_token(&mut self) -> Result<Token> {
        let is_copy = self.control & 0x80 != 0;
        self.control <<= 1;
        self.bits_left -= 1;

        if self.bits_left == 0 {
            if self.pos >= self.stream.len() {
                return Err(PcmpError::PrematureEnd);
            }
            self.control = self.stream[self.pos];
            self.pos += 1;
            self.bits_left = 8;
        }

        if is_copy {
            if self.pos + 1 >= self.stream.len() {
                return Err(PcmpError::PrematureEndDuringCopy);
            }
            let (offset, length) = unpack_copy(self.stream[self.pos], self.stream[self.pos + 1]);
            self.pos += 2;
            Ok(Token::Copy { offset, length })
        } else {
            if self.pos >= self.stream.len() {
                return Err(PcmpError::PrematureEndDuringLiteral);
            }
            let byte = self.stream[self.pos];
            self.pos += 1;
            Ok(Token::Literal(byte))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_word_layout() {
        assert_eq!(pack_copy(1, 3), [0x00, 0x00]);
        assert_eq!(pack_copy(1, 7), [0x04, 0x00]);
        assert_eq!(pack_copy(3, 3), [0x20, 0x00]);
        assert_eq!(pack_copy(4096, 18), [0xFF, 0xFF]);

        assert_eq!(unpack_copy(0x00, 0x00), (1, 3));
        assert_eq!(unpack_copy(0x04, 0x00), (1, 7));
        assert_eq!(unpack_copy(0xFF, 0xFF), (4096, 18));
    }

    #[test]
    fn test_copy_word_round_trip() {
        for offset in [1u16, 2, 15, 16, 255, 256, 4095, 4096] {
            for length in 3u8..=18 {
                let [b0, b1] = pack_copy(offset, length);
                assert_eq!(unpack_copy(b0, b1), (offset, length));
            }
        }
    }

    #[test]
    fn test_writer_partial_group() {
        let mut writer = TokenWriter::new();
        writer.push_literal(b'A');
        writer.push_literal(b'B');
        writer.push_copy(1, 3);

        // Bits: 0, 0, 1 -> 0b00100000
        assert_eq!(writer.finish(), vec![0x20, b'A', b'B', 0x00, 0x00]);
    }

    #[test]
    fn test_writer_full_group_reserves_next_slot_before_payload() {
        let mut writer = TokenWriter::new();
        for b in b"ABCDEFGH" {
            writer.push_literal(*b);
        }
        let stream = writer.finish();

        // The 8th payload ('H') lands after the second control byte.
        assert_eq!(
            stream,
            vec![0x00, b'A', b'B', b'C', b'D', b'E', b'F', b'G', 0x00, b'H']
        );
    }

    #[test]
    fn test_reader_matches_writer() {
        let mut writer = TokenWriter::new();
        let tokens = [
            Token::Literal(0x11),
            Token::Copy { offset: 5, length: 4 },
            Token::Literal(0x22),
            Token::Literal(0x33),
            Token::Copy { offset: 4096, length: 18 },
            Token::Literal(0x44),
            Token::Copy { offset: 1, length: 3 },
            Token::Literal(0x55),
            Token::Literal(0x66),
        ];
        for token in tokens {
            match token {
                Token::Literal(b) => writer.push_literal(b),
                Token::Copy { offset, length } => writer.push_copy(offset, length),
            }
        }
        let stream = writer.finish();

        let mut reader = TokenReader::new(&stream);
        for expected in tokens {
            assert_eq!(reader.next_token().unwrap(), expected);
        }
    }

    #[test]
    fn test_reader_premature_end_on_control_refresh() {
        // One control byte and seven literal payloads; consuming the 8th bit
        // forces a control refresh with nothing left to read.
        let mut stream = vec![0x00];
        stream.extend_from_slice(&[0xAB; 7]);

        let mut reader = TokenReader::new(&stream);
        for _ in 0..7 {
            reader.next_token().unwrap();
        }
        assert!(matches!(
            reader.next_token().unwrap_err(),
            PcmpError::PrematureEnd
        ));
    }

    #[test]
    fn test_reader_premature_end_during_copy() {
        let stream = [0x80, 0x04];
        let mut reader = TokenReader::new(&stream);
        assert!(matches!(
            reader.next_token().unwrap_err(),
            PcmpError::PrematureEndDuringCopy
        ));
    }

    #[test]
    fn test_reader_premature_end_during_literal() {
        let stream = [0x00];
        let mut reader = TokenReader::new(&stream);
        assert!(matches!(
            reader.next_token().unwrap_err(),
            PcmpError::PrematureEndDuringLiteral
        ));
    }
}
