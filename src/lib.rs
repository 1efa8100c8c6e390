//! Crate root: lightweight module orchestration and public re-exports.
//!
//! Modules:
//! - `distances`: edit distance (bottom-up, full-grid, memoized) and Hamming
//!   distance over strings and integer bit patterns.
//! - `popcount`: table-driven Hamming weight for 32/64-bit values.
//! - `matrix`: dense/jagged transpose, lazy vector product, sequential and
//!   data-parallel matrix product, column-wise extremum reduction.
//! - `tree`: random binary-tree generation (injected RNG) and level-order
//!   height measurement.
//!
//! All three components are independent leaves consumed directly by
//! callers; none depends on another, and every operation is a pure,
//! synchronous computation over caller-owned data.

pub mod distances;
pub mod matrix;
pub mod popcount;
pub mod tree;

// Re-export frequently used types & functions
pub use distances::{
    HammingAlgorithm, MemoCache, edit_distance, edit_distance_matrix, edit_distance_memoized,
    hamming_dist_algo, hamming_dist_str, hamming_dist_tagged,
};
pub use matrix::{
    ShapeError, columnwise_extreme, matrix_product, par_matrix_product, transpose,
    transpose_jagged, vector_product,
};
pub use popcount::{hamming_weight32, hamming_weight64};
pub use tree::{TreeNode, generate, height};
