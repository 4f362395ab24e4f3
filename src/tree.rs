//! An unbalanced BST storing only keys. Equal keys are allowed and always go
//! to the left, so the tree behaves like a sorted multiset.
//!
//! Every operation walks the tree with a cursor or an explicit stack rather
//! than recursing, so even a completely degenerate tree (built from sorted
//! input) can be queried and dropped without running out of call stack.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.min(), None);
//! assert_eq!(tree.count(), 0);
//!
//! for key in [4, 2, 1, 3, 6, 5] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.count(), 6);
//! assert!(tree.in_order().eq(&[1, 2, 3, 4, 5, 6]));
//!
//! // Duplicates are kept.
//! tree.insert(4);
//! assert_eq!(tree.count(), 7);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::traverse::{InOrder, Order, PostOrder, PreOrder, Traverse};

/// A child slot. Either empty or the exclusive owner of a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of keys. It never rebalances so its shape is entirely
/// decided by the order keys are inserted in.
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The derived drop would recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    // Copies node by node, pairing each source node with the empty slot its
    // copy goes into.
    fn clone(&self) -> Self {
        let mut cloned = Tree::new();
        {
            let mut stack: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
            if let Some(root) = self.root.as_deref() {
                stack.push((root, &mut cloned.root));
            }
            while let Some((source, slot)) = stack.pop() {
                let copy = slot.insert(Node::new_boxed(source.key.clone()));
                let Node { left, right, .. } = &mut **copy;
                if let Some(source_left) = source.left.as_deref() {
                    stack.push((source_left, left));
                }
                if let Some(source_right) = source.right.as_deref() {
                    stack.push((source_right, right));
                }
            }
        }
        cloned
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if nothing has been inserted into the tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` into the tree. A key equal to one already in the tree is
    /// placed in that node's left subtree, so duplicates are kept and
    /// [`in_order`](Self::in_order) still yields them in non-decreasing order.
    ///
    /// The new node always ends up in a previously empty slot; no existing node
    /// moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.count(), 3);
    /// assert!(tree.in_order().eq(&[5, 5, 5]));
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut depth = 0usize;
        let mut tied = false;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            if cfg!(debug_assertions) {
                node.assert_children_ordered();
            }

            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    tied = true;
                    &mut node.left
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        trace!(target: "plain_bst::tree", depth, tied, "inserting key");
        *slot = Some(Node::new_boxed(key));
    }

    /// Inserts `key` and returns the tree, for building trees in a single
    /// expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::new().with(2).with(1).with(3);
    ///
    /// assert!(tree.pre_order().eq(&[2, 1, 3]));
    /// ```
    pub fn with(mut self, key: K) -> Self
    where
        K: Ord,
    {
        self.insert(key);
        self
    }

    /// Like [`insert`](Self::insert) but for keys that are only partially
    /// ordered. If `key` can't be compared with a key on its way down, the tree
    /// is left untouched and [`TreeError::Incomparable`] is returned.
    ///
    /// Note that a tree of a single incomparable key (say, `NaN`) accepts it as
    /// the root but then rejects every later key.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.try_insert(1.5).unwrap();
    ///
    /// assert_eq!(tree.try_insert(f64::NAN), Err(TreeError::Incomparable));
    /// assert_eq!(tree.count(), 1);
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<()>
    where
        K: PartialOrd,
    {
        let mut depth = 0usize;
        let mut tied = false;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.partial_cmp(&node.key) {
                Some(Ordering::Less) => &mut node.left,
                Some(Ordering::Equal) => {
                    tied = true;
                    &mut node.left
                }
                Some(Ordering::Greater) => &mut node.right,
                None => {
                    debug!(target: "plain_bst::tree", depth, "rejecting incomparable key");
                    return Err(TreeError::Incomparable);
                }
            };
            depth += 1;
        }

        trace!(target: "plain_bst::tree", depth, tied, "inserting key");
        *slot = Some(Node::new_boxed(key));
        Ok(())
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty.
    ///
    /// This follows left children from the root, so it takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(3);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key in the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Returns the number of nodes in the tree. Every inserted key gets its own
    /// node, so this is also the number of successful inserts.
    pub fn count(&self) -> usize {
        self.pre_order().count()
    }

    /// Returns the number of levels on the longest path from the root to a
    /// leaf. An empty tree has height 0 and a lone root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// // Sorted input degenerates into a linked list.
    /// let tree: Tree<_> = (0..10).collect();
    /// assert_eq!(tree.height(), 10);
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left.as_deref().into_iter().chain(n.right.as_deref()))
                .collect();
        }
        height
    }

    /// Returns `true` if some node holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Iterates over the keys in non-decreasing order (left, node, right).
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref())
    }

    /// Iterates over the keys parent-first (node, left, right).
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root.as_deref())
    }

    /// Iterates over the keys children-first (left, right, node).
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root.as_deref())
    }

    /// Iterates over the keys in the given [`Order`].
    pub fn traverse(&self, order: Order) -> Traverse<'_, K> {
        Traverse::new(self.root.as_deref(), order)
    }

    /// Renders the keys in the given order joined by `separator`. An empty
    /// tree renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Order, Tree};
    ///
    /// let tree: Tree<_> = [4, 2, 1, 3, 6, 5].into_iter().collect();
    ///
    /// assert_eq!(tree.render(Order::InOrder, ", "), "1, 2, 3, 4, 5, 6");
    /// assert_eq!(tree.render(Order::PostOrder, " "), "1 3 2 5 6 4");
    /// ```
    pub fn render(&self, order: Order, separator: &str) -> String
    where
        K: fmt::Display,
    {
        let mut out = String::new();
        for (i, key) in self.traverse(order).enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&key.to_string());
        }
        out
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    /// Checks this node against its direct children. Only run in debug builds.
    fn assert_children_ordered(&self)
    where
        K: Ord,
    {
        if let Some(left) = self.left.as_deref() {
            assert!(left.key <= self.key);
        }
        if let Some(right) = self.right.as_deref() {
            assert!(right.key > self.key);
        }
    }
}
