//! This crate builds and checks Binary Search Trees (BSTs) over any totally
//! ordered value type.
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively using the notion of a `Node`. A `Node` stores
//! a value and owns zero, one or two child `Node`s. The invariants are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value strictly less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value strictly greater than its own value.
//!
//! Duplicate values anywhere in the tree break these invariants.
//!
//! ## What's here
//!
//! - [`builder`] reconstructs a tree from its pre-order traversal by narrowing an
//!   open interval of allowed values as it descends. [`recursive`] does the same
//!   with plain recursion.
//! - [`validate`] walks a tree in-order with an explicit stack and checks that the
//!   values strictly increase.
//! - [`balanced`] builds a balanced tree from an already sorted sequence.
//!
//! # Examples
//!
//! ```
//! use bst_tools::{build, is_valid_bst};
//!
//! let tree = build(&[10, 5, 1, 7, 15, 12, 20]);
//!
//! assert_eq!(tree.to_string(), "10 5 1 7 15 12 20");
//! assert!(is_valid_bst(&tree));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod builder;
mod error;
mod interval;
pub mod iter;
pub mod recursive;
mod tree;
pub mod validate;

#[cfg(test)]
mod test;

pub use builder::{build, Builder};
pub use error::BuildError;
pub use tree::{Node, Tree};
pub use validate::{find_violation, is_valid_bst, Violation};
