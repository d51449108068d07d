//! Checks the BST ordering of an arbitrary tree.
//!
//! A binary tree is a BST exactly when its in-order traversal is strictly increasing, so the
//! check walks the tree in-order, keeping only the previously visited value, and stops at the
//! first step that doesn't go up. The walk keeps its own stack of node references (see
//! [`Inorder`][crate::iter::Inorder]), so trees of any height can be checked.
//!
//! # Examples
//!
//! ```
//! use bst_tools::{find_violation, is_valid_bst, Node, Tree};
//!
//! let valid = Tree::from(Node::new(2).with_left(Node::new(1)).with_right(Node::new(3)));
//! assert!(is_valid_bst(&valid));
//!
//! // 3 sits in the right subtree of 5.
//! let invalid = Tree::from(
//!     Node::new(5)
//!         .with_left(Node::new(1))
//!         .with_right(Node::new(4).with_left(Node::new(3)).with_right(Node::new(6))),
//! );
//! assert!(!is_valid_bst(&invalid));
//!
//! let violation = find_violation(&invalid).unwrap();
//! assert_eq!((violation.previous, violation.current), (&5, &3));
//! ```

use crate::tree::Tree;

/// Two neighbors in the in-order walk that are out of order: `current` was visited right after
/// `previous` but isn't strictly greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation<'a, T> {
    /// The value visited first.
    pub previous: &'a T,
    /// The value visited next, which is less than or equal to `previous`.
    pub current: &'a T,
}

/// Whether the tree satisfies the strict BST ordering. An empty tree does.
pub fn is_valid_bst<T>(tree: &Tree<T>) -> bool
where
    T: Ord,
{
    find_violation(tree).is_none()
}

/// Finds the first pair of in-order neighbors that aren't strictly increasing, if any.
pub fn find_violation<T>(tree: &Tree<T>) -> Option<Violation<'_, T>>
where
    T: Ord,
{
    let mut values = tree.inorder();
    let mut previous = values.next()?;

    for (position, current) in values.enumerate() {
        if current <= previous {
            tracing::trace!(
                position = position + 1,
                "in-order walk is not strictly increasing"
            );
            return Some(Violation { previous, current });
        }
        previous = current;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    #[test]
    fn empty_and_single() {
        assert!(is_valid_bst(&Tree::<i32>::new()));
        assert!(is_valid_bst(&Tree::from(Node::new(7))));
    }

    #[test]
    fn equal_child_is_rejected() {
        let right_dup = Tree::from(Node::new(5).with_right(Node::new(5)));
        let left_dup = Tree::from(Node::new(5).with_left(Node::new(5)));

        assert!(!is_valid_bst(&right_dup));
        assert!(!is_valid_bst(&left_dup));
        assert_eq!(
            find_violation(&right_dup),
            Some(Violation {
                previous: &5,
                current: &5
            })
        );
    }

    #[test]
    fn deep_descendant_violation_is_caught() {
        crate::test::init_test_logging();

        // Locally every parent/child pair looks fine, but 12 is in 10's left subtree.
        let tree = Tree::from(
            Node::new(10)
                .with_left(Node::new(5).with_right(Node::new(12)))
                .with_right(Node::new(15)),
        );

        assert!(!is_valid_bst(&tree));
        assert_eq!(
            find_violation(&tree),
            Some(Violation {
                previous: &12,
                current: &10
            })
        );
    }

    #[test]
    fn reports_first_violation_only() {
        let tree = Tree::from(
            Node::new("grape")
                .with_left(Node::new("kiwi"))
                .with_right(Node::new("apple")),
        );

        let violation = find_violation(&tree).unwrap();
        assert_eq!(violation.previous, &"kiwi");
        assert_eq!(violation.current, &"grape");
    }

    #[test]
    fn same_answer_twice() {
        let tree = Tree::from(Node::new(2).with_left(Node::new(3)));
        assert_eq!(is_valid_bst(&tree), is_valid_bst(&tree));
        assert!(!is_valid_bst(&tree));
    }

    #[test]
    fn deep_left_chain() {
        let mut root: Option<Node<u32>> = None;
        for x in 0..100_000 {
            let mut node = Node::new(x);
            node.set_left(root);
            root = Some(node);
        }
        let mut tree = root.map(Tree::from).unwrap_or_default();
        assert!(is_valid_bst(&tree));

        // Break the bottom of the chain.
        let mut node = tree.root_mut().unwrap();
        while node.left().is_some() {
            node = node.left_mut().unwrap();
        }
        node.set_right(Some(Node::new(0)));

        assert!(!is_valid_bst(&tree));
    }

    #[test]
    fn trees_are_shareable_across_threads() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Tree<String>>();

        let xs: Vec<u32> = (0..10_000).collect();
        let tree = crate::build(&xs);
        let broken = Tree::from(Node::new(5).with_right(Node::new(5)));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| (is_valid_bst(&tree), is_valid_bst(&broken))))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), (true, false));
            }
        });
    }

    mod quicktests {
        use super::*;
        use crate::test::quick::Shaped;

        quickcheck::quickcheck! {
            fn agrees_with_strictly_increasing_inorder(shaped: Shaped<i8>) -> bool {
                let tree = shaped.grow();
                let values: Vec<_> = tree.inorder().collect();
                let increasing = values.windows(2).all(|w| w[0] < w[1]);

                is_valid_bst(&tree) == increasing
            }
        }

        quickcheck::quickcheck! {
            fn violation_is_a_descending_step(shaped: Shaped<i8>) -> bool {
                let tree = shaped.grow();
                match find_violation(&tree) {
                    None => true,
                    Some(v) => {
                        let values: Vec<_> = tree.inorder().collect();
                        let first_bad = values.windows(2).find(|w| w[1] <= w[0]);
                        v.current <= v.previous && first_bad == Some(&[v.previous, v.current][..])
                    }
                }
            }
        }
    }
}
