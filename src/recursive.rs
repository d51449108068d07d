//! The pre-order rebuild written as plain recursion: one call per subtree, all calls sharing a
//! single cursor into the input. Easier to follow than [`builder`][crate::builder] but it recurses
//! once per level, so a long skewed input can exhaust the stack.
//!
//! # Examples
//!
//! ```
//! use bst_tools::{build, recursive};
//!
//! let xs = [10, 5, 1, 7, 15, 12, 20];
//! assert_eq!(recursive::build(&xs), build(&xs));
//! ```

use crate::interval::Interval;
use crate::tree::{Node, Tree};

/// Builds a tree from a pre-order sequence with no bounds on the values.
pub fn build<T>(preorder: &[T]) -> Tree<T>
where
    T: Ord + Clone,
{
    let mut index = 0;
    Tree::from_root(construct(preorder, &mut index, Interval::unbounded()))
}

/// Builds the subtree whose values lie in `interval`, starting at `preorder[*index]`. The cursor
/// is only advanced past values that become nodes.
fn construct<'a, T>(
    preorder: &'a [T],
    index: &mut usize,
    interval: Interval<'a, T>,
) -> Option<Box<Node<T>>>
where
    T: Ord + Clone,
{
    let candidate = preorder.get(*index)?;
    if !interval.contains(candidate) {
        return None;
    }
    *index += 1;

    // Left must be built first: it consumes the values that come right after this one.
    let left = construct(preorder, index, interval.below(candidate));
    let right = construct(preorder, index, interval.above(candidate));

    Some(Box::new(Node::with_children(candidate.clone(), left, right)))
}
