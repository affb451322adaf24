//! Search space partitioning
//!
//! Splits a window of the 32-bit salt domain into contiguous ranges, one per
//! worker. Boundaries are evenly spaced:
//!
//! ```text
//! boundary[i] = start + len * i / K,   range[i] = [boundary[i], boundary[i+1])
//! ```
//!
//! so the ranges tile the window exactly: no gap, no overlap.

use std::fmt;

/// Size of the salt domain (every `u32` value).
pub const SALT_DOMAIN: u64 = 1 << 32;

/// Half-open interval `[start, end)` of salt values.
///
/// Bounds are `u64` so that the end of the full domain (`2^32`) fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaltRange {
    pub start: u64,
    pub end: u64,
}

impl SaltRange {
    /// Create a range `[start, end)`.
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// The full salt domain `[0, 2^32)`.
    pub const fn full() -> Self {
        Self::new(0, SALT_DOMAIN)
    }

    /// Number of salts in the range.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, salt: u32) -> bool {
        let salt = u64::from(salt);
        self.start <= salt && salt < self.end
    }

    /// Salts in ascending order.
    ///
    /// Values are clamped to the 32-bit domain.
    pub fn salts(&self) -> impl Iterator<Item = u32> {
        let end = self.end.min(SALT_DOMAIN);
        let start = self.start.min(end);
        (start..end).map(|s| s as u32)
    }
}

impl fmt::Display for SaltRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}, {:#x})", self.start, self.end)
    }
}

/// Partition `window` into at most `workers` contiguous ranges.
///
/// `workers == 0` is treated as 1. Empty ranges (more workers than salts)
/// are dropped; the remaining ranges still cover `window` exactly.
pub fn partition(workers: usize, window: SaltRange) -> Vec<SaltRange> {
    let k = workers.max(1) as u128;
    let start = window.start as u128;
    let len = window.len() as u128;

    let boundary = |i: u128| -> u64 { (start + len * i / k) as u64 };

    (0..k)
        .map(|i| SaltRange::new(boundary(i), boundary(i + 1)))
        .filter(|range| !range.is_empty())
        .collect()
}
