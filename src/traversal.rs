//! Iterators over the items of a [`Tree`][crate::linked::Tree].
//!
//! Every traversal keeps its own explicit stack instead of recursing so that walking a
//! degenerate tree (for example one built from sorted input) can't overflow the call stack.
//! None of them hold a snapshot: each one walks the live nodes, and asking the tree for a new
//! traversal starts over from the root.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Preorder traversal: a node, then its left subtree, then its right subtree.
///
/// This is also the default iteration order of a tree.
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.data)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

/// Inorder traversal: a node's left subtree, then the node, then its right subtree. On a valid
/// tree this yields the items in non-decreasing order.
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut inorder = Self { stack: Vec::new() };
        inorder.push_left_spine(root);
        inorder
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.data)
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

/// Postorder traversal: a node's left subtree, then its right subtree, then the node.
pub struct Postorder<'a, T> {
    /// Each node is pushed twice: once unexpanded and, after its children have been scheduled,
    /// once more marked as ready to be visited.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.data);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}

/// Level order (breadth first) traversal: all nodes at depth 0, then depth 1, and so on, each
/// level from left to right.
///
/// Each level is produced by its own descent from the root that stops at the target depth, so
/// the whole walk costs `O(n * height)`.
pub struct Levelorder<'a, T> {
    root: Option<&'a Node<T>>,
    /// The depth currently being emitted.
    level: usize,
    /// The depth of the deepest node. Once `level` passes it we're done.
    deepest: usize,
    stack: Vec<(&'a Node<T>, usize)>,
}

impl<'a, T> Levelorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, height: isize) -> Self {
        Self {
            root,
            level: 0,
            deepest: height.max(0) as usize,
            stack: root.map(|n| (n, 0)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.root?;
        loop {
            match self.stack.pop() {
                Some((node, depth)) if depth == self.level => return Some(&node.data),
                Some((node, depth)) => {
                    self.stack.extend(node.right().map(|n| (n, depth + 1)));
                    self.stack.extend(node.left().map(|n| (n, depth + 1)));
                }
                None => {
                    if self.level >= self.deepest {
                        self.root = None;
                        return None;
                    }
                    self.level += 1;
                    self.stack.push((root, 0));
                }
            }
        }
    }
}

impl<T> FusedIterator for Levelorder<'_, T> {}

/// An owning preorder iterator returned by [`Tree::into_iter`][crate::linked::Tree].
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let (left, right) = node.take_children();
        self.stack.extend(right);
        self.stack.extend(left);
        Some(node.data)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Nodes still on the stack own whole subtrees. Dropping them through `next` keeps it
        // from recursing.
        for _ in self.by_ref() {}
    }
}
