//! CRC32/IEEE lookup tables for the 4-byte salt
//!
//! - `TABLE`: the byte-at-a-time table
//! - `REVERSE`: maps a table entry's top byte back to its index
//! - `SLICE`: slice-by-4 tables, so one salt costs four lookups
//!
//! Registers here are raw (not complemented): `reg = !checksum`.

const POLY: u32 = 0xEDB8_8320;

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { POLY ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

const fn build_reverse_table(table: &[u32; 256]) -> [u8; 256] {
    let mut reverse = [0u8; 256];
    let mut n = 0;
    while n < 256 {
        reverse[(table[n] >> 24) as usize] = n as u8;
        n += 1;
    }
    reverse
}

/// `SLICE[k][n]` is the register after byte `n` followed by `k` zero bytes.
const fn build_slice_tables(table: &[u32; 256]) -> [[u32; 256]; 4] {
    let mut slice = [[0u32; 256]; 4];
    let mut n = 0;
    while n < 256 {
        slice[0][n] = table[n];
        let mut k = 1;
        while k < 4 {
            let prev = slice[k - 1][n];
            slice[k][n] = (prev >> 8) ^ table[(prev & 0xff) as usize];
            k += 1;
        }
        n += 1;
    }
    slice
}

pub(super) static TABLE: [u32; 256] = build_table();
pub(super) static REVERSE: [u8; 256] = build_reverse_table(&build_table());
static SLICE: [[u32; 256]; 4] = build_slice_tables(&build_table());

/// Advance a raw register over the four little-endian bytes of `word`.
#[inline]
pub(super) fn advance_word(reg: u32, word: u32) -> u32 {
    let x = reg ^ word;
    SLICE[3][(x & 0xff) as usize]
        ^ SLICE[2][((x >> 8) & 0xff) as usize]
        ^ SLICE[1][((x >> 16) & 0xff) as usize]
        ^ SLICE[0][(x >> 24) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::{compute_checksum, continue_checksum};

    #[test]
    fn test_table_matches_reference_entries() {
        assert_eq!(TABLE[0], 0);
        assert_eq!(TABLE[1], 0x7707_3096);
        assert_eq!(TABLE[255], 0x2D02_EF8D);
    }

    #[test]
    fn test_top_bytes_are_distinct() {
        let mut seen = [false; 256];
        for entry in TABLE.iter() {
            let top = (entry >> 24) as usize;
            assert!(!seen[top]);
            seen[top] = true;
        }
    }

    #[test]
    fn test_reverse_inverts_top_byte() {
        for n in 0..256usize {
            assert_eq!(REVERSE[(TABLE[n] >> 24) as usize] as usize, n);
        }
    }

    #[test]
    fn test_advance_word_matches_crc32fast() {
        for state in [0, 1, 0xFFFF_FFFF, compute_checksum(b"helloHe-he-he")] {
            for word in [0, 1, 0x0403_0201, 0x9aaa_a6db, u32::MAX, 0x8000_0000] {
                let expected = continue_checksum(state, &word.to_le_bytes());
                assert_eq!(!advance_word(!state, word), expected);
            }
        }
    }
}
