//! CRC32 checksum engine
//!
//! Thin wrapper around `crc32fast` (IEEE polynomial). The forge only needs
//! two things from it:
//! - the checksum of a whole buffer
//! - the checksum of a buffer continued from a previously finalised value
//!
//! `crc32fast` applies the bitwise-complement convention internally, so a
//! finalised checksum can be fed straight back in as the starting state of
//! the next segment.

use crc32fast::Hasher;

/// Computes a CRC32 checksum over the provided data.
///
/// This function is deterministic: the same input always produces the same output.
///
/// # Arguments
///
/// * `data` - The bytes to compute the checksum over
///
/// # Returns
///
/// A 32-bit CRC32 checksum value
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Continues a checksum over `data`, starting from a finalised `state`.
///
/// `continue_checksum(compute_checksum(a), b) == compute_checksum(a ‖ b)`.
#[inline]
pub fn continue_checksum(state: u32, data: &[u8]) -> u32 {
    let mut hasher = Hasher::new_with_initial(state);
    hasher.update(data);
    hasher.finalize()
}

/// Verifies that the computed checksum matches the expected checksum.
pub fn verify_checksum(data: &[u8], expected: u32) -> bool {
    compute_checksum(data) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_deterministic() {
        let data = b"test data for checksum verification";
        let checksum1 = compute_checksum(data);
        let checksum2 = compute_checksum(data);
        assert_eq!(checksum1, checksum2, "Checksum must be deterministic");
    }

    #[test]
    fn test_checksum_known_vector() {
        // Standard CRC32/IEEE check value
        assert_eq!(compute_checksum(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_empty_data_checksum_is_zero() {
        assert_eq!(compute_checksum(&[]), 0);
    }

    #[test]
    fn test_continue_matches_whole_buffer() {
        let head = b"original file contents";
        let tail = b"He-he-he\x01\x02\x03\x04";

        let mut whole = head.to_vec();
        whole.extend_from_slice(tail);

        let state = compute_checksum(head);
        assert_eq!(continue_checksum(state, tail), compute_checksum(&whole));
    }

    #[test]
    fn test_continue_from_empty_state() {
        let data = b"payload";
        assert_eq!(continue_checksum(0, data), compute_checksum(data));
    }

    #[test]
    fn test_continue_with_no_data_is_identity() {
        let state = compute_checksum(b"prefix");
        assert_eq!(continue_checksum(state, &[]), state);
    }

    #[test]
    fn test_checksum_detects_single_bit_flip() {
        let mut data = vec![0x00, 0x01, 0x02, 0x03, 0x04];
        let original_checksum = compute_checksum(&data);

        data[2] ^= 0x01;
        let corrupted_checksum = compute_checksum(&data);

        assert_ne!(
            original_checksum, corrupted_checksum,
            "Single bit flip must change checksum"
        );
    }

    #[test]
    fn test_verify_checksum() {
        let data = b"payload to verify";
        let checksum = compute_checksum(data);
        assert!(verify_checksum(data, checksum));
        assert!(!verify_checksum(data, checksum ^ 1));
    }
}
