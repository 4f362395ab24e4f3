//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Each traversal borrows the tree and keeps an explicit stack of the nodes it
//! still has to visit, so walking a tree never recurses no matter how tall it
//! is. The stack holds at most `height` entries for [`InOrder`] and
//! [`PostOrder`] and at most `height + 1` for [`PreOrder`].
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Order, Tree};
//!
//! let tree: Tree<_> = [4, 2, 1, 3, 6, 5].into_iter().collect();
//!
//! assert!(tree.in_order().eq(&[1, 2, 3, 4, 5, 6]));
//! assert!(tree.pre_order().eq(&[4, 2, 1, 3, 6, 5]));
//! assert!(tree.post_order().eq(&[1, 3, 2, 5, 6, 4]));
//!
//! // Or pick the order at runtime.
//! let order: Order = "post".parse().unwrap();
//! assert!(tree.traverse(order).eq(tree.post_order()));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::TreeError;
use crate::tree::Node;

/// The three depth-first orders a tree can be walked in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields keys in sorted order.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

impl Order {
    /// Every order, in the order they're usually taught.
    pub const ALL: [Order; 3] = [Order::InOrder, Order::PreOrder, Order::PostOrder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::InOrder => "in-order",
            Order::PreOrder => "pre-order",
            Order::PostOrder => "post-order",
        };
        f.write_str(name)
    }
}

impl FromStr for Order {
    type Err = TreeError;

    /// Accepts `in-order`, `inOrder` and `in` (and likewise for `pre`/`post`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in-order" | "inorder" | "in" => Ok(Order::InOrder),
            "pre-order" | "preorder" | "pre" => Ok(Order::PreOrder),
            "post-order" | "postorder" | "post" => Ok(Order::PostOrder),
            _ => Err(TreeError::UnknownOrder(s.to_string())),
        }
    }
}

/// Iterator over a tree's keys in sorted (left, node, right) order.
///
/// Created by [`Tree::in_order`][crate::Tree::in_order].
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

/// Iterator over a tree's keys in (node, left, right) order.
///
/// Created by [`Tree::pre_order`][crate::Tree::pre_order].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// Iterator over a tree's keys in (left, right, node) order.
///
/// Created by [`Tree::post_order`][crate::Tree::post_order].
pub struct PostOrder<'a, K> {
    /// Each node is paired with whether its children have already been pushed.
    /// A node is yielded the second time it reaches the top of the stack.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}

/// A traversal whose [`Order`] was chosen at runtime.
///
/// Created by [`Tree::traverse`][crate::Tree::traverse].
pub enum Traverse<'a, K> {
    /// See [`InOrder`].
    InOrder(InOrder<'a, K>),
    /// See [`PreOrder`].
    PreOrder(PreOrder<'a, K>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<'a, K>),
}

impl<'a, K> Traverse<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        match order {
            Order::InOrder => Self::InOrder(InOrder::new(root)),
            Order::PreOrder => Self::PreOrder(PreOrder::new(root)),
            Order::PostOrder => Self::PostOrder(PostOrder::new(root)),
        }
    }
}

impl<'a, K> Iterator for Traverse<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::InOrder(iter) => iter.next(),
            Self::PreOrder(iter) => iter.next(),
            Self::PostOrder(iter) => iter.next(),
        }
    }
}

impl<K> FusedIterator for Traverse<'_, K> {}
