//! Closed-form salt solver
//!
//! CRC32 over a fixed prefix is an invertible function of the next four
//! bytes, so the winning salt can also be computed directly by running the
//! register backwards from the target. The search does not depend on this;
//! it serves as an independent oracle for checking search results.
//!
//! Each entry of the IEEE table has a distinct top byte, which is what makes
//! a single backward step unambiguous.

use super::tables::{REVERSE, TABLE};

/// The unique salt `s` with `continue_checksum(base_state, &s.to_le_bytes()) == target`.
pub fn solve_salt(base_state: u32, target: u32) -> u32 {
    let mut reg = !target;
    for _ in 0..4 {
        let idx = REVERSE[(reg >> 24) as usize];
        reg = ((reg ^ TABLE[idx as usize]) << 8) | u32::from(idx);
    }
    reg ^ !base_state
}
