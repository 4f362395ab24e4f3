//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over keys,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! and look up stored keys. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` stores a key and will sometimes have child
//! `Node`s. The invariants of the BST in this crate are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than or equal to its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Equal keys are allowed and are sent left, so the tree happily stores
//! duplicates.
//!
//! Finding the minimum takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). This tree does nothing
//! clever to limit its height: inserting keys in sorted order produces a tree
//! whose height equals the number of keys. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree. See [`traverse`] for that and the other two depth-first
//! orders.
//!
//! ```
//! use plain_bst::{Order, Tree};
//!
//! let tree: Tree<_> = [4, 2, 1, 3, 6, 5].into_iter().collect();
//!
//! assert_eq!(tree.count(), 6);
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.render(Order::InOrder, " "), "1 2 3 4 5 6");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traverse;
pub mod tree;

pub use error::{Result, TreeError};
pub use traverse::{InOrder, Order, PostOrder, PreOrder, Traverse};
pub use tree::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
