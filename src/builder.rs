//! Rebuilds a BST from its pre-order traversal.
//!
//! Each value either becomes the next node or belongs to some ancestor's other subtree. Which one
//! is decided by an open interval: a subtree may only hold values strictly between the bounds its
//! ancestors impose, so no subtree sizes have to be known up front.
//!
//! The descent is driven by an explicit worklist rather than recursion, so a skewed input (an
//! ascending sequence produces a single chain) never grows the call stack. The result is
//! identical to [`recursive::build`][crate::recursive::build].
//!
//! # Examples
//!
//! ```
//! use bst_tools::builder::{build, Builder};
//! use bst_tools::BuildError;
//!
//! let tree = build(&[10, 5, 1, 7, 15, 12, 20]);
//! assert_eq!(tree.to_string(), "10 5 1 7 15 12 20");
//!
//! // `3` can't come after `5`'s right subtree started, so it is silently dropped...
//! assert_eq!(build(&[5, 7, 3]).to_string(), "5 7");
//!
//! // ...unless we ask to be told.
//! assert_eq!(
//!     Builder::new().try_build(&[5, 7, 3]),
//!     Err(BuildError::Truncated { consumed: 2, len: 3 })
//! );
//! ```

use crate::error::BuildError;
use crate::interval::Interval;
use crate::tree::{Node, Tree};

/// Builds a tree from a pre-order sequence with no bounds on the values.
///
/// Values that don't fit where the sequence puts them are left out rather than reported; see
/// [`Builder::try_build`] for the strict version.
///
/// With no bounds the type's extremes are ordinary values: `i32::MIN` and `i32::MAX` are placed
/// like any other number. To treat them as excluded sentinels instead, set them as open bounds on
/// a [`Builder`].
///
/// # Examples
///
/// ```
/// use bst_tools::{build, Builder};
///
/// let xs = [0, i32::MIN, i32::MAX];
/// assert_eq!(build(&xs).to_string(), "0 -2147483648 2147483647");
///
/// let sentinels = Builder::new().lower_bound(i32::MIN).upper_bound(i32::MAX);
/// assert_eq!(sentinels.build(&xs).to_string(), "0");
/// ```
pub fn build<T>(preorder: &[T]) -> Tree<T>
where
    T: Ord + Clone,
{
    Builder::new().build(preorder)
}

/// Configures how a pre-order sequence is turned into a tree. By default the values are
/// unbounded; [`lower_bound`][Builder::lower_bound] and [`upper_bound`][Builder::upper_bound]
/// restrict the whole tree to an open interval.
///
/// # Examples
///
/// ```
/// use bst_tools::Builder;
///
/// // Only values strictly between 0 and 100 are accepted, so the tree stops at 100.
/// let tree = Builder::new().lower_bound(0).upper_bound(100).build(&[50, 25, 75, 100, 60]);
///
/// assert_eq!(tree.to_string(), "50 25 75");
/// ```
#[derive(Debug, Clone)]
pub struct Builder<T> {
    lower: Option<T>,
    upper: Option<T>,
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a freshly made node gets attached.
#[derive(Clone, Copy)]
enum Slot {
    Root,
    Left(usize),
    Right(usize),
}

/// Child links of a node that is still being built. Nodes are created in the order their values
/// are consumed, so a node's position in the arena is also the position of its value in the
/// input.
#[derive(Default)]
struct Links {
    left: Option<usize>,
    right: Option<usize>,
}

impl<T> Builder<T> {
    /// A builder with no bounds.
    pub fn new() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Every value in the tree must be strictly greater than `lower`.
    pub fn lower_bound(mut self, lower: T) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Every value in the tree must be strictly less than `upper`.
    pub fn upper_bound(mut self, upper: T) -> Self {
        self.upper = Some(upper);
        self
    }

    fn interval(&self) -> Interval<'_, T> {
        Interval::new(self.lower.as_ref(), self.upper.as_ref())
    }
}

impl<T> Builder<T>
where
    T: Ord + Clone,
{
    /// Builds a tree from a pre-order sequence. Never fails: values that don't fit are left out,
    /// along with everything after the first one that doesn't fit anywhere.
    pub fn build(&self, preorder: &[T]) -> Tree<T> {
        let (tree, consumed) = self.assemble(preorder);
        if consumed < preorder.len() {
            tracing::debug!(
                consumed,
                len = preorder.len(),
                "pre-order sequence truncated"
            );
        }
        tree
    }

    /// Builds a tree from a pre-order sequence, failing unless every value was placed. That is
    /// the case exactly when the sequence is the pre-order traversal of a strict BST whose values
    /// all lie within the configured bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_tools::{BuildError, Builder};
    ///
    /// let builder = Builder::new();
    /// assert!(builder.try_build(&["banana", "apple", "orange"]).is_ok());
    ///
    /// // Duplicates are never placed.
    /// assert_eq!(
    ///     builder.try_build(&["banana", "banana"]),
    ///     Err(BuildError::Truncated { consumed: 1, len: 2 })
    /// );
    ///
    /// assert_eq!(
    ///     Builder::new().lower_bound(9).upper_bound(1).try_build(&[]),
    ///     Err(BuildError::EmptyInterval)
    /// );
    /// ```
    pub fn try_build(&self, preorder: &[T]) -> Result<Tree<T>, BuildError> {
        if self.interval().is_empty() {
            return Err(BuildError::EmptyInterval);
        }

        match self.assemble(preorder) {
            (tree, consumed) if consumed == preorder.len() => Ok(tree),
            (_, consumed) => Err(BuildError::Truncated {
                consumed,
                len: preorder.len(),
            }),
        }
    }

    /// Does the actual work, returning the tree and how many leading values went into it.
    ///
    /// The first pass decides the shape, recording links in an arena indexed by input position.
    /// Each pending subtree is a task carrying its slot and its interval; popping the left task
    /// before the right one consumes the input in the same order the recursive descent would.
    /// The second pass boxes the nodes up from the back since children always come after their
    /// parent in pre-order.
    fn assemble(&self, preorder: &[T]) -> (Tree<T>, usize) {
        let mut links: Vec<Links> = Vec::new();
        let mut tasks = vec![(Slot::Root, self.interval())];

        while let Some((slot, interval)) = tasks.pop() {
            let index = links.len();
            let candidate = match preorder.get(index) {
                Some(candidate) => candidate,
                // Every pending subtree is empty once the input runs out.
                None => break,
            };
            if !interval.contains(candidate) {
                // Belongs to an ancestor's other subtree. Leave it for the next task.
                continue;
            }

            links.push(Links::default());
            match slot {
                Slot::Root => {}
                Slot::Left(parent) => links[parent].left = Some(index),
                Slot::Right(parent) => links[parent].right = Some(index),
            }

            tasks.push((Slot::Right(index), interval.above(candidate)));
            tasks.push((Slot::Left(index), interval.below(candidate)));
        }

        let consumed = links.len();
        let mut built: Vec<Option<Box<Node<T>>>> = Vec::with_capacity(consumed);
        built.resize_with(consumed, || None);

        for (index, link) in links.iter().enumerate().rev() {
            let left = link.left.and_then(|child| built[child].take());
            let right = link.right.and_then(|child| built[child].take());
            built[index] = Some(Box::new(Node::with_children(
                preorder[index].clone(),
                left,
                right,
            )));
        }

        let root = built.first_mut().and_then(Option::take);
        (Tree::from_root(root), consumed)
    }
}
