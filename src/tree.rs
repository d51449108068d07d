use std::fmt;

use crate::iter::{Inorder, Preorder};

/// A binary tree that is either empty or owns a single root [`Node`]. Nothing here enforces the
/// BST ordering: trees coming out of [`build`][crate::build] satisfy it by construction, trees put
/// together by hand can be checked with [`is_valid_bst`][crate::is_valid_bst].
///
/// # Examples
///
/// ```
/// use bst_tools::{Node, Tree};
///
/// let tree = Tree::from(Node::new(2).with_left(Node::new(1)).with_right(Node::new(3)));
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2, &3]);
/// ```
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Node<T>> for Tree<T> {
    fn from(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    pub(crate) fn from_root(root: Option<Box<Node<T>>>) -> Self {
        Self { root }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Mutable access to the root node, if the tree isn't empty.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Iterates over the values visiting each node before its left subtree and its left subtree
    /// before its right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root())
    }

    /// Iterates over the values visiting each node's left subtree, then the node, then its right
    /// subtree. For a valid BST this yields the values in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// Structural equality: same shape and equal values in the same places. Compared with an
/// explicit stack so arbitrarily deep trees don't overflow.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.root(), other.root())];

        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    if a.value != b.value {
                        return false;
                    }
                    stack.push((a.right(), b.right()));
                    stack.push((a.left(), b.left()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

/// Writes the values in pre-order separated by single spaces.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.preorder().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Lists the values in pre-order with `_` for every missing child, which pins down the shape.
/// Walked with an explicit stack so a degenerate chain formats like any other tree.
fn debug_subtree<T: fmt::Debug>(
    root: Option<&Node<T>>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut list = f.debug_list();
    let mut stack = vec![root];

    while let Some(slot) = stack.pop() {
        match slot {
            None => {
                list.entry(&format_args!("_"));
            }
            Some(node) => {
                list.entry(node.value());
                stack.push(node.right());
                stack.push(node.left());
            }
        }
    }

    list.finish()
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tree ")?;
        debug_subtree(self.root(), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Node ")?;
        debug_subtree(Some(self), f)
    }
}

/// A `Node` holds one value and exclusively owns up to two children. There are no parent
/// pointers.
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Drop for Node<T> {
    // Unlinks the subtree onto a heap stack first so a long chain is freed one node at a time
    // instead of recursing once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> =
            self.left.take().into_iter().chain(self.right.take()).collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given value and no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn with_children(
        value: T,
        left: Option<Box<Node<T>>>,
        right: Option<Box<Node<T>>>,
    ) -> Self {
        Self { value, left, right }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Mutable access to the left child, if any.
    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child, if any.
    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Replaces the left subtree, handing back the previous one.
    pub fn set_left(&mut self, left: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.left, left.map(Box::new)).map(|old| *old)
    }

    /// Replaces the right subtree, handing back the previous one.
    pub fn set_right(&mut self, right: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.right, right.map(Box::new)).map(|old| *old)
    }

    /// Returns this node with the given left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_tools::Node;
    ///
    /// let node = Node::new("banana").with_left(Node::new("apple"));
    ///
    /// assert_eq!(node.left().map(|left| *left.value()), Some("apple"));
    /// assert!(node.right().is_none());
    /// ```
    pub fn with_left(mut self, left: Node<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Returns this node with the given right subtree.
    pub fn with_right(mut self, right: Node<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }
}
