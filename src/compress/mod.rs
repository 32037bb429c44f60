//! PCMP compression
//!
//! Turns raw bytes into a complete PCMP container: LZSS token stream,
//! 32-byte header, and trailing zero padding to the 2048-byte sector
//! boundary.

mod encoder;
mod matcher;

pub use encoder::{compress_stream, compress_stream_with_progress};
pub use matcher::{find_match, Match};

use crate::header::ContainerHeader;
use crate::padding::pad_to_alignment;

/// Compress raw bytes into a full, sector-aligned PCMP container
pub fn compress_container(data: &[u8]) -> Vec<u8> {
    compress_container_with_progress(data, |_, _| {})
}

/// Compress raw bytes into a container, reporting encoder progress
pub fn compress_container_with_progress<F>(data: &[u8], progress: F) -> Vec<u8>
where
    F: FnMut(usize, usize),
{
    let stream = compress_stream_with_progress(data, progress);

    let header = ContainerHeader::new(data.len() as u32, stream.len() as u32);
    let mut container = header.to_bytes().to_vec();
    container.extend_from_slice(&stream);
    pad_to_alignment(&mut container);
    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{FILE_ALIGNMENT, HEADER_SIZE};

    #[test]
    fn test_container_is_sector_aligned() {
        for size in [0usize, 1, 100, 3000, 5000] {
            let data = vec![0x5A; size];
            let container = compress_container(&data);
            assert_eq!(container.len() % FILE_ALIGNMENT, 0, "input size {size}");
        }
    }

    #[test]
    fn test_empty_input_container() {
        let container = compress_container(&[]);
        assert_eq!(container.len(), FILE_ALIGNMENT);
        assert_eq!(&container[..4], b"PCMP");
        assert!(container[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_header_declares_stream_size() {
        let data = [0x41; 10];
        let container = compress_container(&data);

        let header = ContainerHeader::parse(&container).unwrap();
        assert_eq!(header.uncompressed_size, 10);
        // Clamping does not kick in: the declared size is non-zero and the
        // padding keeps the file larger than header + stream.
        let declared =
            u32::from_le_bytes([container[0x18], container[0x19], container[0x1A], container[0x1B]]);
        assert_eq!(declared, 6);
        assert_eq!(&container[HEADER_SIZE..HEADER_SIZE + 6], &[0x10, 0x41, 0x41, 0x41, 0x04, 0x00]);
    }
}
