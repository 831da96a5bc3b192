//! A link based BST. Each node owns its children through a `Box` so re-linking the tree during
//! deletion is a matter of moving boxes between `Option` slots.
//!
//! The tree never balances itself. Inserting sorted data builds a tree shaped like a linked list
//! and [`Tree::rebalance`] has to be called explicitly to bring the height back down.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Equal items are kept, each in its own node.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing an item returns it.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{Error, Result};
use crate::node::{self, Link, Node};
use crate::traversal::{Inorder, IntoIter, Levelorder, Postorder, Preorder};

/// An unbalanced Binary Search Tree storing items ordered by their own value.
///
/// Items that compare less than a node live in its left subtree and items that compare greater
/// or equal live in its right subtree. Duplicates are allowed.
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of items stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Potentially finds the stored item equal to `item`. If no node holds an equal item, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3), Some(&3));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut link = self.root();
        while let Some(node) = link {
            link = match item.cmp(&node.data) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(&node.data),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Returns `true` if an item equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Adds `item` to the tree. Items equal to an existing item are placed in its right subtree.
    ///
    /// No balancing happens here: adding items in sorted order produces a tree whose height is
    /// its length minus one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..5 {
    ///     tree.add(x);
    /// }
    ///
    /// assert_eq!(tree.len(), 5);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if item < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Removes one item equal to `item` from the tree and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no stored item is equal to `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::error::Error;
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(Error::NotFound));
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&3, &8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: Ord,
    {
        let slot = Self::slot_of(&mut self.root, item).ok_or(Error::NotFound)?;
        let removed = Self::unlink(slot).ok_or(Error::NotFound)?;
        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the stored item equal to `item` with `new_item` and returns the old item. If
    /// nothing equal to `item` is stored, `new_item` is dropped and `None` is returned.
    ///
    /// The tree is not re-sorted. `new_item` must order the same way `item` did relative to the
    /// rest of the tree or later searches may miss items.
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut link = self.root.as_deref_mut();
        while let Some(node) = link {
            link = match item.cmp(&node.data) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal => return Some(mem::replace(&mut node.data, new_item)),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        node::dismantle(self.root.take());
        self.size = 0;
    }

    /// Gets the height of this tree: the number of edges on the longest path from the root to a
    /// leaf. A single node has height `0` and an empty tree has height `-1`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Returns `true` if the height is within twice the optimal height, that is
    /// `height < 2 * log2(n + 1)`.
    ///
    /// This is a global approximation, not a per node check like an AVL tree has.
    pub fn is_balanced(&self) -> bool {
        let n = self.iter().count();
        (self.height() as f64) < 2.0 * ((n + 1) as f64).log2()
    }

    /// Returns every stored item in `low..=high` in ascending order.
    ///
    /// This walks the whole tree. If `low > high` nothing is returned.
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .filter(|item| low <= *item && *item <= high)
            .collect()
    }

    /// Rebuilds the tree so its height is close to `log2(len)`.
    ///
    /// The items are sorted and re-added starting with the median. After each midpoint the upper
    /// half is placed before the lower half.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = (0..7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let height_before = self.height();
        let mut items: Vec<T> = mem::take(self).into_iter().collect();
        items.sort();

        let mut items: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let end = items.len() + 1;
        self.place_midpoints(&mut items, 0, end);

        log::debug!(
            "rebalanced {} items: height {} -> {}",
            self.size,
            height_before,
            self.height()
        );

        if cfg!(debug_assertions) {
            let mut inorder = self.inorder();
            if let Some(mut previous) = inorder.next() {
                for item in inorder {
                    assert!(previous <= item, "rebalance broke the BST ordering");
                    previous = item;
                }
            }
        }
    }

    /// Returns the smallest stored item strictly greater than `item`, if there is one. `item`
    /// doesn't have to be stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [10, 3, 14, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&7), Some(&10));
    /// assert_eq!(tree.successor(&8), Some(&10));
    /// assert_eq!(tree.successor(&14), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut best: Option<&T> = None;
        let mut link = self.root();
        while let Some(node) = link {
            if node.data > *item {
                // Anything closer to `item` must be in the left subtree.
                best = Some(match best {
                    Some(b) if *b < node.data => b,
                    _ => &node.data,
                });
                link = node.left();
            } else {
                link = node.right();
            }
        }
        best
    }

    /// Returns the largest stored item strictly less than `item`, if there is one. `item`
    /// doesn't have to be stored in the tree.
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut best: Option<&T> = None;
        let mut link = self.root();
        while let Some(node) = link {
            if node.data < *item {
                best = Some(match best {
                    Some(b) if *b > node.data => b,
                    _ => &node.data,
                });
                link = node.right();
            } else {
                link = node.left();
            }
        }
        best
    }

    /// Iterates over the items in the default (preorder) order.
    pub fn iter(&self) -> Preorder<'_, T> {
        Preorder::new(self.root())
    }

    /// Iterates over the items visiting each node before its left then right subtrees.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root())
    }

    /// Iterates over the items in non-decreasing order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root())
    }

    /// Iterates over the items visiting both subtrees of a node before the node itself.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root())
    }

    /// Iterates over the items one depth at a time, left to right within a depth.
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder::new(self.root(), self.height())
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the slot holding the first node on the search path whose item equals `item`.
    fn slot_of<'a>(mut slot: &'a mut Link<T>, item: &T) -> Option<&'a mut Link<T>>
    where
        T: Ord,
    {
        loop {
            let ordering = item.cmp(&slot.as_deref()?.data);
            if ordering == Ordering::Equal {
                return Some(slot);
            }
            slot = match slot {
                Some(node) => {
                    if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                }
                None => return None,
            };
        }
    }

    /// Detaches the node in `slot`, repairing the tree underneath it, and returns its item.
    fn unlink(slot: &mut Link<T>) -> Option<T> {
        let mut current = slot.take()?;
        match (current.left.is_some(), current.right.is_some()) {
            (true, true) => {
                log::trace!("removing node with two children");
                let removed = Self::lift_max_in_left_subtree(&mut current);
                *slot = Some(current);
                removed
            }
            (false, _) => {
                log::trace!("removing node with no left child");
                let Node { data, right, .. } = *current;
                *slot = right;
                Some(data)
            }
            (true, false) => {
                log::trace!("removing node with no right child");
                let Node { data, left, .. } = *current;
                *slot = left;
                Some(data)
            }
        }
    }

    /// Replaces the item in `top` with the largest item of its left subtree, splicing the node
    /// that held it out of the tree, and returns `top`'s old item. Returns `None` and leaves
    /// `top` alone if it has no left subtree.
    fn lift_max_in_left_subtree(top: &mut Node<T>) -> Option<T> {
        let slot = Self::max_slot(&mut top.left);
        let max = slot.take()?;
        let Node { data, left, .. } = *max;
        // The max has no right child so its left subtree takes its place. When the max is
        // `top.left` itself this attaches straight to `top`.
        *slot = left;
        Some(mem::replace(&mut top.data, data))
    }

    /// Follows right links from `slot` and returns the slot holding the rightmost node.
    fn max_slot(mut slot: &mut Link<T>) -> &mut Link<T> {
        while slot.as_ref().is_some_and(|n| n.right.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.right;
            }
        }
        slot
    }

    /// Adds the items in the open range of positions `(start, end)`, where position `p` holds
    /// `items[p - 1]`, starting with the midpoint.
    fn place_midpoints(&mut self, items: &mut [Option<T>], start: usize, end: usize)
    where
        T: Ord,
    {
        if start + 1 >= end {
            return;
        }
        let middle = (start + end) / 2;
        if let Some(item) = items[middle - 1].take() {
            self.add(item);
        }
        self.place_midpoints(items, middle, end);
        self.place_midpoints(items, start, middle);
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        // Children are copied before their parent (postorder) so that each new node can take
        // its already built subtrees off the `built` stack, right subtree on top.
        let mut pending: Vec<(&Node<T>, bool)> =
            self.root().map(|n| (n, false)).into_iter().collect();
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        while let Some((node, expanded)) = pending.pop() {
            if !expanded {
                pending.push((node, true));
                pending.extend(node.right().map(|n| (n, false)));
                pending.extend(node.left().map(|n| (n, false)));
                continue;
            }
            let mut copy = Node::new_boxed(node.data.clone());
            if node.right.is_some() {
                copy.right = built.pop();
            }
            if node.left.is_some() {
                copy.left = built.pop();
            }
            built.push(copy);
        }
        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    /// Trees are equal when they hold equal items in the same shape.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    /// Draws the tree rotated a quarter turn counterclockwise: the root is in the left column,
    /// right subtrees are above their parent and left subtrees below. Every level of depth
    /// indents an item by one `"| "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut link = self.root();
        let mut depth = 0;
        loop {
            while let Some(node) = link {
                stack.push((node, depth));
                link = node.right();
                depth += 1;
            }
            let Some((node, node_depth)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(node_depth), node.data)?;
            link = node.left();
            depth = node_depth + 1;
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take())
    }
}
