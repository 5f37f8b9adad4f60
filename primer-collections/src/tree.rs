//! Owned binary tree with level-order traversal.
//!
//! Each node owns its two subtrees outright, so there is no sharing and no
//! cycles. Depths count from 1 at the root; an empty tree has height 0.
//!
//! Two level-order walks are provided:
//!
//! - [`BinaryTree::level_order`] visits depth 1, then depth 2, and so on,
//!   descending from the root for each level, left subtree first.
//! - [`BinaryTree::level_order_queue`] visits the same sequence in one pass
//!   with a FIFO of pending nodes.
//!
//! Both are lazy: nothing is visited until the iterator is advanced.

use std::collections::VecDeque;

use core::fmt;

/// A tree node owning its children.
///
/// The derived `Clone`, `PartialEq` and `Drop` recurse once per level. Deep
/// trees should be held in a [`BinaryTree`], whose versions are iterative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// The stored value.
    pub value: T,
    /// Left subtree.
    pub left: Option<Box<TreeNode<T>>>,
    /// Right subtree.
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Creates a node with no children.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the given subtrees.
    pub fn new(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replaces the left subtree.
    pub fn with_left(mut self, left: TreeNode<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces the right subtree.
    pub fn with_right(mut self, right: TreeNode<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    fn children(&self) -> impl Iterator<Item = &TreeNode<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

/// Binary tree rooted at an optional node.
///
/// # Example
///
/// ```
/// use primer_collections::{BinaryTree, TreeNode};
///
/// //        1
/// //      /   \
/// //     2     3
/// //    / \
/// //   4   5
/// let tree = BinaryTree::from_root(TreeNode::new(
///     1,
///     Some(TreeNode::new(2, Some(TreeNode::leaf(4)), Some(TreeNode::leaf(5)))),
///     Some(TreeNode::leaf(3)),
/// ));
///
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
/// assert_eq!(tree.level(3).copied().collect::<Vec<_>>(), [4, 5]);
/// ```
pub struct BinaryTree<T> {
    root: Option<Box<TreeNode<T>>>,
}

impl<T> BinaryTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a tree rooted at `root`.
    pub fn from_root(root: TreeNode<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes.
    pub fn len(&self) -> usize {
        self.level_order_queue().count()
    }

    /// Returns the number of levels: 0 when empty, otherwise
    /// `1 + max(height(left), height(right))`.
    pub fn height(&self) -> usize {
        fn height<T>(node: Option<&TreeNode<T>>) -> usize {
            match node {
                None => 0,
                Some(node) => 1 + height(node.left.as_deref()).max(height(node.right.as_deref())),
            }
        }
        height(self.root())
    }

    /// Iterates over the nodes at `depth` (root is 1), left to right.
    ///
    /// Depth 0 or a depth past [`height`](Self::height) yields nothing.
    pub fn level(&self, depth: usize) -> Level<'_, T> {
        Level::new(self.root(), depth)
    }

    /// Iterates level by level, left to right within each level.
    ///
    /// Each level is a fresh descent from the root, so a full walk costs
    /// O(n * height).
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            root: self.root(),
            height: self.height(),
            depth: 0,
            level: Level::new(None, 0),
        }
    }

    /// Iterates in level order with a queue of pending nodes. O(n).
    pub fn level_order_queue(&self) -> LevelOrderQueue<'_, T> {
        LevelOrderQueue {
            queue: self.root().into_iter().collect(),
        }
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Inserts `value` by binary-search-tree ordering: smaller values go
    /// left, larger go right.
    ///
    /// Returns `false` and leaves the tree unchanged if an equal value is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                core::cmp::Ordering::Less => &mut node.left,
                core::cmp::Ordering::Greater => &mut node.right,
                core::cmp::Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(TreeNode::leaf(value)));
        true
    }

    /// Returns `true` if `value` is present, assuming binary-search-tree
    /// ordering.
    pub fn contains(&self, value: &T) -> bool {
        let mut cur = self.root();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                core::cmp::Ordering::Less => node.left.as_deref(),
                core::cmp::Ordering::Greater => node.right.as_deref(),
                core::cmp::Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

// Teardown is iterative: recursive drops would nest as deep as the tree.
impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for BinaryTree<T> {
    /// Copies the tree without recursion.
    ///
    /// Records every node in pre-order with which children it has, then
    /// rebuilds from the back: at each node its left subtree is on top of the
    /// stack and its right subtree just below.
    fn clone(&self) -> Self {
        let mut preorder = Vec::new();
        let mut pending: Vec<&TreeNode<T>> = self.root().into_iter().collect();
        while let Some(node) = pending.pop() {
            preorder.push((node.value.clone(), node.left.is_some(), node.right.is_some()));
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }

        let mut built: Vec<Box<TreeNode<T>>> = Vec::new();
        for (value, has_left, has_right) in preorder.into_iter().rev() {
            let left = if has_left { built.pop() } else { None };
            let right = if has_right { built.pop() } else { None };
            built.push(Box::new(TreeNode { value, left, right }));
        }
        Self { root: built.pop() }
    }
}

impl<T: PartialEq> PartialEq for BinaryTree<T> {
    /// Compares shape and values pairwise without recursion.
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root(), other.root())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value => {
                    pending.push((a.left.as_deref(), b.left.as_deref()));
                    pending.push((a.right.as_deref(), b.right.as_deref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for BinaryTree<T> {}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("height", &self.height())
            .field("level_order", &self.level_order().collect::<Vec<_>>())
            .finish()
    }
}

/// Renders level order, space separated.
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.level_order_queue().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Nodes at one depth, left to right. See [`BinaryTree::level`].
pub struct Level<'a, T> {
    /// Nodes still to expand, paired with their depth. Right is pushed before
    /// left so the left subtree is explored first.
    stack: Vec<(&'a TreeNode<T>, usize)>,
    depth: usize,
}

impl<'a, T> Level<'a, T> {
    fn new(root: Option<&'a TreeNode<T>>, depth: usize) -> Self {
        let stack = if depth == 0 {
            Vec::new()
        } else {
            root.map(|node| (node, 1)).into_iter().collect()
        };
        Self { stack, depth }
    }
}

impl<'a, T> Iterator for Level<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            if depth == self.depth {
                return Some(&node.value);
            }
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, depth + 1));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, depth + 1));
            }
        }
        None
    }
}

/// Level-by-level walk. See [`BinaryTree::level_order`].
pub struct LevelOrder<'a, T> {
    root: Option<&'a TreeNode<T>>,
    height: usize,
    depth: usize,
    level: Level<'a, T>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.level.next() {
                return Some(value);
            }
            if self.depth >= self.height {
                return None;
            }
            self.depth += 1;
            self.level = Level::new(self.root, self.depth);
        }
    }
}

/// Queue-driven level-order walk. See [`BinaryTree::level_order_queue`].
pub struct LevelOrderQueue<'a, T> {
    queue: VecDeque<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for LevelOrderQueue<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //          1
    //        /   \
    //       2     3
    //      / \     \
    //     4   5     6
    //        /
    //       7
    fn sample() -> BinaryTree<i32> {
        BinaryTree::from_root(
            TreeNode::leaf(1)
                .with_left(
                    TreeNode::leaf(2)
                        .with_left(TreeNode::leaf(4))
                        .with_right(TreeNode::leaf(5).with_left(TreeNode::leaf(7))),
                )
                .with_right(TreeNode::leaf(3).with_right(TreeNode::leaf(6))),
        )
    }

    fn collect<'a>(iter: impl Iterator<Item = &'a i32>) -> Vec<i32> {
        iter.copied().collect()
    }

    #[test]
    fn empty_tree() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.level_order().count(), 0);
        assert_eq!(tree.level_order_queue().count(), 0);
        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn height_counts_levels() {
        assert_eq!(sample().height(), 4);
        assert_eq!(BinaryTree::from_root(TreeNode::leaf(0)).height(), 1);
    }

    #[test]
    fn single_levels() {
        let tree = sample();
        assert_eq!(collect(tree.level(1)), [1]);
        assert_eq!(collect(tree.level(2)), [2, 3]);
        assert_eq!(collect(tree.level(3)), [4, 5, 6]);
        assert_eq!(collect(tree.level(4)), [7]);
        assert_eq!(tree.level(5).count(), 0);
        assert_eq!(tree.level(0).count(), 0);
    }

    #[test]
    fn level_order_matches_queue_variant() {
        let tree = sample();
        let expected = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(collect(tree.level_order()), expected);
        assert_eq!(collect(tree.level_order_queue()), expected);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn level_order_is_lazy() {
        let tree = sample();
        let mut walk = tree.level_order();
        assert_eq!(walk.next(), Some(&1));
        assert_eq!(walk.next(), Some(&2));
        drop(walk);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn bst_insert_and_contains() {
        let mut tree = BinaryTree::new();
        for v in [50, 30, 70, 20, 40, 60, 80] {
            assert!(tree.insert(v));
        }
        assert!(!tree.insert(40));

        assert!(tree.contains(&60));
        assert!(!tree.contains(&65));
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.to_string(), "50 30 70 20 40 60 80");
    }

    #[test]
    fn degenerate_tree_drops_without_recursion() {
        let tree: BinaryTree<u32> = (0..10_000).collect();
        assert_eq!(tree.len(), 10_000);
        drop(tree);
    }

    #[test]
    fn degenerate_tree_clones_and_compares_without_recursion() {
        let tree: BinaryTree<u32> = (0..5_000).collect();
        let copy = tree.clone();
        assert!(copy == tree);
        assert_eq!(copy.len(), 5_000);

        let other: BinaryTree<u32> = (0..4_999).chain([5_000]).collect();
        assert!(other != tree);
    }

    #[test]
    fn clone_keeps_shape() {
        let tree = BinaryTree::from_root(TreeNode::new(
            1,
            Some(TreeNode::leaf(2).with_right(TreeNode::leaf(4))),
            Some(TreeNode::leaf(3)),
        ));
        let copy = tree.clone();
        assert_eq!(copy.root(), tree.root());
        assert_eq!(copy.level_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);

        let mirrored = BinaryTree::from_root(TreeNode::new(
            1,
            Some(TreeNode::leaf(2).with_left(TreeNode::leaf(4))),
            Some(TreeNode::leaf(3)),
        ));
        assert!(mirrored != tree);
        assert!(BinaryTree::<i32>::new() == BinaryTree::new());
    }
}
