//! Builds a height-balanced tree from values that are already sorted.
//!
//! The middle value becomes the root and each half becomes a subtree, so the recursion is only
//! `O(lg N)` deep. The input is trusted: a strictly increasing sequence gives a valid BST, anything
//! else gives a tree with the same shape that [`is_valid_bst`][crate::is_valid_bst] will reject.
//!
//! # Examples
//!
//! ```
//! use bst_tools::{balanced, build, is_valid_bst};
//!
//! let skewed = build(&[1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(skewed.height(), 7);
//!
//! let sorted: Vec<_> = skewed.inorder().copied().collect();
//! let tree = balanced::from_sorted(&sorted);
//!
//! assert_eq!(tree.to_string(), "4 2 1 3 6 5 7");
//! assert_eq!(tree.height(), 3);
//! assert!(is_valid_bst(&tree));
//! ```

use crate::tree::{Node, Tree};

/// Builds a balanced tree holding `sorted` in in-order position.
pub fn from_sorted<T>(sorted: &[T]) -> Tree<T>
where
    T: Clone,
{
    Tree::from_root(fill(sorted))
}

fn fill<T: Clone>(xs: &[T]) -> Option<Box<Node<T>>> {
    if xs.is_empty() {
        return None;
    }

    let mid = xs.len() / 2;
    Some(Box::new(Node::with_children(
        xs[mid].clone(),
        fill(&xs[..mid]),
        fill(&xs[mid + 1..]),
    )))
}
