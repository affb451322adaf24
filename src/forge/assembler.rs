//! Buffer assembly
//!
//! Builds the fixed part of the forged buffer (`original ‖ injection`) and
//! the two checksums the search needs:
//! - `target`: CRC32 of the original bytes alone
//! - `base_state`: CRC32 of the prefix, the point trial checksums continue from

use crate::checksum::{compute_checksum, continue_checksum};

use super::tables::advance_word;

/// Number of salt bytes appended after the injection.
pub const SALT_LEN: usize = 4;

/// The fixed inputs of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgePlan {
    prefix: Vec<u8>,
    original_len: usize,
    target: u32,
    base_state: u32,
}

impl ForgePlan {
    /// Assemble the prefix and checksums for `original` followed by `injection`.
    pub fn assemble(original: &[u8], injection: &[u8]) -> Self {
        let mut prefix = Vec::with_capacity(original.len() + injection.len() + SALT_LEN);
        prefix.extend_from_slice(original);
        prefix.extend_from_slice(injection);

        let target = compute_checksum(original);
        // Continue from the original's checksum rather than rehashing it.
        let base_state = continue_checksum(target, injection);

        Self {
            prefix,
            original_len: original.len(),
            target,
            base_state,
        }
    }

    /// `original ‖ injection`
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    pub fn original(&self) -> &[u8] {
        &self.prefix[..self.original_len]
    }

    pub fn injection(&self) -> &[u8] {
        &self.prefix[self.original_len..]
    }

    /// Checksum the forged buffer must reproduce.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Running checksum after the prefix.
    pub fn base_state(&self) -> u32 {
        self.base_state
    }

    /// Length of any buffer produced by [`ForgePlan::finish`].
    pub fn forged_len(&self) -> usize {
        self.prefix.len() + SALT_LEN
    }

    /// Checksum of the prefix followed by `salt`.
    ///
    /// Equal to `continue_checksum(base_state, &encode_salt(salt))`, computed
    /// with four table lookups.
    #[inline]
    pub fn trial(&self, salt: u32) -> u32 {
        !advance_word(!self.base_state, salt)
    }

    /// `prefix ‖ salt` as a new buffer.
    pub fn finish(&self, salt: u32) -> Vec<u8> {
        let mut forged = Vec::with_capacity(self.forged_len());
        forged.extend_from_slice(&self.prefix);
        forged.extend_from_slice(&encode_salt(salt));
        forged
    }
}

/// Salt byte order is little-endian.
#[inline]
pub fn encode_salt(salt: u32) -> [u8; SALT_LEN] {
    salt.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_prefix() {
        let plan = ForgePlan::assemble(b"hello", b"He-he-he");
        assert_eq!(plan.prefix(), b"helloHe-he-he");
        assert_eq!(plan.original(), b"hello");
        assert_eq!(plan.injection(), b"He-he-he");
        assert_eq!(plan.forged_len(), 17);
    }

    #[test]
    fn test_assemble_checksums() {
        let plan = ForgePlan::assemble(b"hello", b"He-he-he");
        assert_eq!(plan.target(), compute_checksum(b"hello"));
        assert_eq!(plan.base_state(), compute_checksum(b"helloHe-he-he"));
    }

    #[test]
    fn test_assemble_empty_inputs() {
        let plan = ForgePlan::assemble(&[], &[]);
        assert!(plan.prefix().is_empty());
        assert_eq!(plan.target(), 0);
        assert_eq!(plan.base_state(), 0);
        assert_eq!(plan.forged_len(), SALT_LEN);
    }

    #[test]
    fn test_trial_matches_full_checksum() {
        let plan = ForgePlan::assemble(b"some file", b"payload");
        let salt = 0xDEAD_BEEF;
        assert_eq!(plan.trial(salt), compute_checksum(&plan.finish(salt)));
    }

    #[test]
    fn test_trial_agrees_with_checksum_engine() {
        let plan = ForgePlan::assemble(b"\x89PNG\r\n", b"He-he-he");
        let mut salt = 0x1234_5678u32;
        for _ in 0..10_000 {
            let expected = continue_checksum(plan.base_state(), &encode_salt(salt));
            assert_eq!(plan.trial(salt), expected, "salt {:#x}", salt);
            salt = salt.wrapping_mul(0x9E37_79B9).wrapping_add(1);
        }
    }

    #[test]
    fn test_finish_appends_little_endian_salt() {
        let plan = ForgePlan::assemble(b"ab", b"c");
        let forged = plan.finish(0x0403_0201);
        assert_eq!(forged, b"abc\x01\x02\x03\x04");
    }
}
