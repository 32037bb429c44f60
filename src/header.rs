//! PCMP container header codec
//!
//! The container starts with a fixed 32-byte record: the ASCII signature
//! "PCMP" at offset 0, the uncompressed size (LE32) at 0x14, the
//! compressed-stream size (LE32) at 0x18, and zeros everywhere else. The
//! token stream begins immediately after the header.
//!
//! The declared compressed-stream size is advisory. Real files exist with a
//! zero or oversized field, so parsing clamps it to the bytes actually
//! present after the header and logs a warning instead of failing.

use crate::common::{
    PcmpError, Result, COMPRESSED_SIZE_OFFSET, HEADER_SIZE, SIGNATURE, UNCOMPRESSED_SIZE_OFFSET,
};

/// Parsed PCMP container header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Size of the original data in bytes
    pub uncompressed_size: u32,
    /// Size of the compressed token stream in bytes
    pub compressed_size: u32,
}

fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

impl ContainerHeader {
    /// Create a header value from the two size fields
    pub fn new(uncompressed_size: u32, compressed_size: u32) -> Self {
        Self {
            uncompressed_size,
            compressed_size,
        }
    }

    /// Parse the header at the start of `file`.
    ///
    /// `file` must be the whole container, not just the 32 header bytes: the
    /// compressed-size field is validated against the bytes that actually
    /// follow the header and clamped when it is zero or out of bounds.
    pub fn parse(file: &[u8]) -> Result<Self> {
        if file.len() < HEADER_SIZE {
            return Err(PcmpError::TooShort(file.len()));
        }
        if file[..4] != SIGNATURE {
            return Err(PcmpError::InvalidSignature([
                file[0], file[1], file[2], file[3],
            ]));
        }

        let uncompressed_size = read_u32_le(file, UNCOMPRESSED_SIZE_OFFSET);
        let mut compressed_size = read_u32_le(file, COMPRESSED_SIZE_OFFSET);

        let remaining = (file.len() - HEADER_SIZE) as u32;
        if compressed_size == 0 || compressed_size > remaining {
            log::warn!(
                "declared compressed-stream size {} is invalid or exceeds file bounds, \
                 using remaining {} bytes",
                compressed_size,
                remaining
            );
            compressed_size = remaining;
        }

        Ok(Self {
            uncompressed_size,
            compressed_size,
        })
    }

    /// Serialize the header into its fixed 32-byte layout
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut header = [0u8; HEADER_SIZE];
        header[..4].copy_from_slice(&SIGNATURE);
        header[UNCOMPRESSED_SIZE_OFFSET..UNCOMPRESSED_SIZE_OFFSET + 4]
            .copy_from_slice(&self.uncompressed_size.to_le_bytes());
        header[COMPRESSED_SIZE_OFFSET..COMPRESSED_SIZE_OFFSET + 4]
            .copy_from_slice(&self.compressed_size.to_le_bytes());
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_layout() {
        let header = ContainerHeader::new(10, 6).to_bytes();
        assert_eq!(&header[..4], b"PCMP");
        assert_eq!(&header[0x14..0x18], &[0x0A, 0x00, 0x00, 0x00]);
        assert_eq!(&header[0x18..0x1C], &[0x06, 0x00, 0x00, 0x00]);
        for (i, &b) in header.iter().enumerate() {
            if !(0..4).contains(&i) && !(0x14..0x1C).contains(&i) {
                assert_eq!(b, 0, "byte {i:#x} should be zero");
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        let mut file = ContainerHeader::new(1000, 4).to_bytes().to_vec();
        file.extend_from_slice(&[0xAA; 4]);

        let parsed = ContainerHeader::parse(&file).unwrap();
        assert_eq!(parsed.uncompressed_size, 1000);
        assert_eq!(parsed.compressed_size, 4);
    }

    #[test]
    fn test_too_short() {
        let err = ContainerHeader::parse(&[0u8; 31]).unwrap_err();
        assert!(matches!(err, PcmpError::TooShort(31)));
    }

    #[test]
    fn test_invalid_signature() {
        let mut file = [0u8; 64];
        file[..4].copy_from_slice(b"TXB4");
        let err = ContainerHeader::parse(&file).unwrap_err();
        assert!(matches!(err, PcmpError::InvalidSignature(sig) if &sig == b"TXB4"));
    }

    #[test]
    fn test_clamp_zero_compressed_size() {
        let mut file = ContainerHeader::new(16, 0).to_bytes().to_vec();
        file.extend_from_slice(&[0x11; 8]);

        let parsed = ContainerHeader::parse(&file).unwrap();
        assert_eq!(parsed.compressed_size, 8);
    }

    #[test]
    fn test_clamp_oversized_compressed_size() {
        let mut file = ContainerHeader::new(16, 9999).to_bytes().to_vec();
        file.extend_from_slice(&[0x11; 8]);

        let parsed = ContainerHeader::parse(&file).unwrap();
        assert_eq!(parsed.compressed_size, 8);
    }

    #[test]
    fn test_header_only_file_clamps_to_zero_stream() {
        let file = ContainerHeader::new(0, 0).to_bytes();
        let parsed = ContainerHeader::parse(&file).unwrap();
        assert_eq!(parsed.uncompressed_size, 0);
        assert_eq!(parsed.compressed_size, 0);
    }
}
