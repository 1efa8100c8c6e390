//! Sequence distance metrics.
//!
//! This module implements two families of sequence comparison measures:
//!
//! 1. **Edit (Levenshtein) distance**: Minimum number of single-element
//!    insertions, deletions, or substitutions to transform one sequence into
//!    another. Available as a bottom-up dynamic program (scalar or full-grid
//!    result) and as a top-down memoized recursion.
//!
//! 2. **Hamming distance**: Number of differing positions between two
//!    equal-length strings, or between the bit patterns of two integers.
//!    The integer form is provided in three equivalent control-flow shapes.

/// Compute the edit distance between two sequences.
///
/// # Algorithm
/// Classic bottom-up dynamic program over a `(len a + 1) x (len b + 1)` grid.
/// Row 0 and column 0 are the index ramps `0..=len` (distance from the empty
/// sequence). Each inner cell takes the minimum of:
/// - `grid[i-1][j] + 1` (delete from `a`)
/// - `grid[i][j-1] + 1` (insert into `a`)
/// - `grid[i-1][j-1] + cost` (substitute; cost 0 when elements match)
///
/// The result is the bottom-right cell.
///
/// # Example
/// ```
/// # use datacalc::distances::edit_distance;
/// let a: Vec<char> = "Paints".chars().collect();
/// let b: Vec<char> = "ants".chars().collect();
/// assert_eq!(edit_distance(&a, &b), 2);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    edit_distance_matrix(a, b)[a.len()][b.len()]
}

/// Compute the full edit-distance grid between two sequences.
///
/// Same recurrence as [`edit_distance`], but returns the entire
/// `(len a + 1) x (len b + 1)` grid for inspection. Every cell `[i][j]`
/// holds the distance between the first `i` elements of `a` and the first
/// `j` elements of `b`, so `grid[i][j] >= |i - j|` everywhere.
pub fn edit_distance_matrix<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let mut grid = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in grid.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in grid[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            grid[i][j] = min3(
                grid[i - 1][j] + 1,
                grid[i][j - 1] + 1,
                grid[i - 1][j - 1] + cost,
            );
        }
    }

    grid
}

#[inline]
fn min3(a: usize, b: usize, c: usize) -> usize {
    a.min(b).min(c)
}

/// Memoization cache for [`edit_distance_memoized`].
///
/// Keyed by `(remaining length of a, remaining length of b)`. Cells are
/// `Option<usize>` so a legitimately computed distance of 0 is
/// distinguishable from "never computed"; a flat zero-initialized grid
/// cannot make that distinction and silently recomputes.
///
/// Allocate one per top-level call with [`MemoCache::new`] and pass it by
/// mutable reference; reuse across calls is only valid for the same pair of
/// sequences.
#[derive(Debug, Clone)]
pub struct MemoCache {
    cells: Vec<Option<usize>>,
    cols: usize,
}

impl MemoCache {
    /// Create an all-unset cache sized for sequences of length `a_len` and
    /// `b_len`.
    pub fn new(a_len: usize, b_len: usize) -> Self {
        MemoCache {
            cells: vec![None; (a_len + 1) * (b_len + 1)],
            cols: b_len + 1,
        }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = Some(value);
    }
}

/// Compute the edit distance by top-down recursion on suffixes.
///
/// Agrees with [`edit_distance`] for all inputs. The recursion works on
/// index pairs, never materializing sub-slices, and stores every solved
/// subproblem in `cache` under `(remaining a, remaining b)` before
/// returning. Without the cache the recursion is exponential.
///
/// Recursion depth is bounded by `a.len() + b.len()`; callers with very
/// large sequences should prefer the bottom-up form.
pub fn edit_distance_memoized<T: PartialEq>(a: &[T], b: &[T], cache: &mut MemoCache) -> usize {
    fn walk<T: PartialEq>(a: &[T], b: &[T], i: usize, j: usize, cache: &mut MemoCache) -> usize {
        // Base cases: one suffix is empty, distance is the other's length.
        let rem_a = a.len() - i;
        let rem_b = b.len() - j;
        if rem_a == 0 {
            return rem_b;
        }
        if rem_b == 0 {
            return rem_a;
        }

        if let Some(hit) = cache.get(rem_a, rem_b) {
            return hit;
        }

        let cost = usize::from(a[i] != b[j]);
        let result = min3(
            walk(a, b, i + 1, j, cache) + 1,
            walk(a, b, i, j + 1, cache) + 1,
            walk(a, b, i + 1, j + 1, cache) + cost,
        );

        cache.set(rem_a, rem_b, result);
        result
    }

    walk(a, b, 0, 0, cache)
}

/// Compute the Hamming distance between two equal-length strings.
///
/// Counts the positions where the two strings hold different characters.
///
/// Strings of unequal length are incomparable under the Hamming metric; the
/// documented contract is to return the `usize::MAX` sentinel rather than
/// fail, and callers test against that sentinel.
///
/// # Example
/// ```
/// # use datacalc::distances::hamming_dist_str;
/// assert_eq!(hamming_dist_str("ABCDHFGF", "ABCDEFO9"), 3);
/// assert_eq!(hamming_dist_str("ABC", "ABCD"), usize::MAX);
/// ```
pub fn hamming_dist_str(left: &str, right: &str) -> usize {
    if left.chars().count() != right.chars().count() {
        return usize::MAX;
    }
    left.chars()
        .zip(right.chars())
        .filter(|(l, r)| l != r)
        .count()
}

/// Strategy selector for [`hamming_dist_algo`].
///
/// All three strategies produce identical output for every pair of inputs;
/// they differ only in control-flow shape.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HammingAlgorithm {
    /// XOR, then a test-and-shift loop until the remainder is zero.
    Iterative,
    /// Tail recursion on the shifted remainder, summing the low bits.
    RecursiveShift,
    /// Recursion threading an explicit running counter per frame.
    RecursiveCount,
}

impl HammingAlgorithm {
    /// Parse a strategy tag. Unknown tags yield `None`; the `-1` sentinel
    /// contract for unrecognized tags lives in [`hamming_dist_tagged`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "iterative" => Some(HammingAlgorithm::Iterative),
            "recursive-shift" => Some(HammingAlgorithm::RecursiveShift),
            "recursive-count" => Some(HammingAlgorithm::RecursiveCount),
            _ => None,
        }
    }
}

/// Compute the Hamming distance between the bit patterns of two integers.
///
/// XORs the inputs (two's-complement pattern, so negatives are well
/// defined) and counts the set bits of the result with the selected
/// strategy.
///
/// # Example
/// ```
/// # use datacalc::distances::{hamming_dist_algo, HammingAlgorithm};
/// assert_eq!(hamming_dist_algo(-995, -48, HammingAlgorithm::Iterative), 7);
/// ```
pub fn hamming_dist_algo(left: i32, right: i32, algorithm: HammingAlgorithm) -> u32 {
    // Unsigned reinterpretation keeps the shift logical; an arithmetic
    // shift on a negative XOR would never reach zero.
    let xor = (left ^ right) as u32;
    match algorithm {
        HammingAlgorithm::Iterative => count_bits_iterative(xor),
        HammingAlgorithm::RecursiveShift => count_bits_recursive_shift(xor),
        HammingAlgorithm::RecursiveCount => count_bits_recursive_count(xor, 0),
    }
}

/// Tag-dispatched form of [`hamming_dist_algo`].
///
/// An unrecognized strategy tag yields the documented `-1` sentinel.
pub fn hamming_dist_tagged(left: i32, right: i32, tag: &str) -> i64 {
    match HammingAlgorithm::from_tag(tag) {
        Some(algorithm) => i64::from(hamming_dist_algo(left, right, algorithm)),
        None => -1,
    }
}

fn count_bits_iterative(mut x: u32) -> u32 {
    let mut count = 0;
    while x != 0 {
        count += x & 1;
        x >>= 1;
    }
    count
}

fn count_bits_recursive_shift(x: u32) -> u32 {
    if x == 0 {
        0
    } else {
        (x & 1) + count_bits_recursive_shift(x >> 1)
    }
}

fn count_bits_recursive_count(x: u32, count: u32) -> u32 {
    if x == 0 {
        count
    } else {
        count_bits_recursive_count(x >> 1, count + (x & 1))
    }
}
