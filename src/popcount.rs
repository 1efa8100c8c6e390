//! Table-driven population count (Hamming weight).
//!
//! # Overview
//! The weight of a 32-bit or 64-bit value is computed by slicing it into
//! 16-bit halves/quarters and summing precomputed counts from a lookup
//! table with one entry per 16-bit pattern.
//!
//! # Amortization
//! Building the table walks all 65 536 patterns once. It is built lazily
//! behind a [`OnceLock`] and reused for the rest of the process; rebuilding
//! it per call would cost more than the naive bit loop it replaces. A
//! stateless [`build_table`] is also available for callers that prefer to
//! own their table.

use std::sync::OnceLock;

/// One `u8` count per 16-bit pattern (maximum count is 16).
pub const TABLE_SIZE: usize = 1 << 16;

static TABLE: OnceLock<Vec<u8>> = OnceLock::new();

/// Build the 16-bit popcount table.
///
/// Each entry is computed with an iterative test-and-shift loop; the table
/// itself is what makes the per-call lookups O(1).
pub fn build_table() -> Vec<u8> {
    let mut table = vec![0u8; TABLE_SIZE];
    for (pattern, entry) in table.iter_mut().enumerate() {
        let mut x = pattern;
        let mut count = 0u8;
        while x != 0 {
            count += (x & 1) as u8;
            x >>= 1;
        }
        *entry = count;
    }
    table
}

#[inline]
fn table() -> &'static [u8] {
    TABLE.get_or_init(build_table)
}

/// Count the set bits of a 32-bit value.
///
/// Sums the table entries for the low and high 16-bit slices.
///
/// # Example
/// ```
/// # use datacalc::popcount::hamming_weight32;
/// assert_eq!(hamming_weight32(0), 0);
/// assert_eq!(hamming_weight32(u32::MAX), 32);
/// ```
#[inline]
pub fn hamming_weight32(x: u32) -> u32 {
    let t = table();
    u32::from(t[(x & 0xFFFF) as usize]) + u32::from(t[(x >> 16) as usize])
}

/// Count the set bits of a 64-bit value.
///
/// Sums the table entries for the four 16-bit slices.
#[inline]
pub fn hamming_weight64(x: u64) -> u32 {
    let t = table();
    u32::from(t[(x & 0xFFFF) as usize])
        + u32::from(t[((x >> 16) & 0xFFFF) as usize])
        + u32::from(t[((x >> 32) & 0xFFFF) as usize])
        + u32::from(t[(x >> 48) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_match_builtin() {
        let table = build_table();
        assert_eq!(table.len(), TABLE_SIZE);
        for pattern in 0..TABLE_SIZE {
            assert_eq!(u32::from(table[pattern]), (pattern as u16).count_ones());
        }
    }

    #[test]
    fn weight32_boundaries() {
        assert_eq!(hamming_weight32(0), 0);
        assert_eq!(hamming_weight32(u32::MAX), 32);
        assert_eq!(hamming_weight32(1), 1);
        assert_eq!(hamming_weight32(1 << 31), 1);
        assert_eq!(hamming_weight32(0xFFFF_0000), 16);
    }

    #[test]
    fn weight64_boundaries() {
        assert_eq!(hamming_weight64(0), 0);
        assert_eq!(hamming_weight64(u64::MAX), 64);
        assert_eq!(hamming_weight64(1 << 63), 1);
        assert_eq!(hamming_weight64(0x0000_FFFF_0000_FFFF), 32);
    }

    #[test]
    fn weights_match_builtin_popcount() {
        let samples32 = [0u32, 1, 0xDEAD_BEEF, 0x8000_0001, 12345, u32::MAX - 1];
        for x in samples32 {
            assert_eq!(hamming_weight32(x), x.count_ones());
        }
        let samples64 = [0u64, 1, 0xDEAD_BEEF_CAFE_F00D, 1 << 40, u64::MAX - 1];
        for x in samples64 {
            assert_eq!(hamming_weight64(x), x.count_ones());
        }
    }
}
