//! Randomized binary-tree generation and height measurement.
//!
//! Generation draws once per prospective node from a caller-supplied RNG,
//! so tests can seed it and concurrent callers each hold their own
//! generator instead of racing on a shared one.

use rand::Rng;
use std::collections::VecDeque;

/// A binary tree node owning its children.
///
/// No parent back-reference, so the structure is a tree by construction and
/// never cyclic. A node with both children absent is a leaf; the whole tree
/// is dropped when the root goes out of scope.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// A leaf node (both children absent).
    pub fn leaf() -> Box<TreeNode> {
        Box::default()
    }
}

/// Generate a random binary tree.
///
/// At each prospective node an independent uniform [0, 1) draw is compared
/// against `density`, the per-branch survival probability: a draw at or
/// above `density` leaves the branch empty. A surviving node recurses into
/// both children with `depth - 1` while `depth > 0`, so `depth` is a hard
/// ceiling on the height in edges of the result.
///
/// The shape is a random variable, but the extremes are deterministic:
/// `density = 0.0` always yields an empty tree, and `density = 1.0` always
/// yields the complete binary tree of height `depth`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, density: f64, depth: u32) -> Option<Box<TreeNode>> {
    if rng.random::<f64>() >= density {
        return None;
    }

    let (left, right) = if depth > 0 {
        (
            generate(rng, density, depth - 1),
            generate(rng, density, depth - 1),
        )
    } else {
        (None, None)
    };

    Some(Box::new(TreeNode { left, right }))
}

/// Measure the height of a tree in edges.
///
/// # Algorithm
/// Level-order traversal: drain the queued nodes of the current level,
/// enqueue each node's present children, and bump the level counter once
/// the level is exhausted. Height in edges is the level count minus one;
/// an empty tree has height 0.
pub fn height(root: Option<&TreeNode>) -> usize {
    let Some(root) = root else {
        return 0;
    };

    let mut queue: VecDeque<&TreeNode> = VecDeque::from([root]);
    let mut levels = 0usize;

    while !queue.is_empty() {
        for _ in 0..queue.len() {
            let node = queue.pop_front().expect("level not yet drained");
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        levels += 1;
    }

    levels - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_density_is_always_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        for depth in [1, 3, 10] {
            assert!(generate(&mut rng, 0.0, depth).is_none());
        }
    }

    #[test]
    fn full_density_builds_complete_tree() {
        let mut rng = StdRng::seed_from_u64(7);
        let root = generate(&mut rng, 1.0, 5).expect("density 1 always yields a root");
        assert_eq!(height(Some(&root)), 5);
        assert_eq!(count_nodes(&root), (1 << 6) - 1);
    }

    #[test]
    fn full_density_depth_zero_is_single_leaf() {
        let mut rng = StdRng::seed_from_u64(7);
        let root = generate(&mut rng, 1.0, 0).unwrap();
        assert!(root.left.is_none() && root.right.is_none());
        assert_eq!(height(Some(&root)), 0);
    }

    #[test]
    fn depth_bounds_random_shapes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            if let Some(root) = generate(&mut rng, 0.7, 6) {
                assert!(height(Some(&root)) <= 6);
            }
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        assert_eq!(generate(&mut a, 0.6, 8), generate(&mut b, 0.6, 8));
    }

    #[test]
    fn height_of_empty_and_hand_built_trees() {
        assert_eq!(height(None), 0);
        assert_eq!(height(Some(&TreeNode::leaf())), 0);

        // Left spine of 4 nodes: 3 edges.
        let spine = TreeNode {
            left: Some(Box::new(TreeNode {
                left: Some(Box::new(TreeNode {
                    left: Some(TreeNode::leaf()),
                    right: None,
                })),
                right: None,
            })),
            right: Some(TreeNode::leaf()),
        };
        assert_eq!(height(Some(&spine)), 3);
    }

    fn count_nodes(node: &TreeNode) -> usize {
        1 + node.left.as_deref().map_or(0, count_nodes)
            + node.right.as_deref().map_or(0, count_nodes)
    }
}
