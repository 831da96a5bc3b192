//! This crate exposes a link based Binary Search Tree (BST) storing single,
//! totally ordered items, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an item and
//! may have up to two child `Node`s. The most important invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have an
//!    item less than its own item.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have an
//!    item greater than or equal to its own item.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! items in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The tree in [`linked`] doesn't
//! balance itself as it changes, so adding items in sorted order produces a
//! tree of height `O(N)`. Calling [`linked::Tree::rebalance`] rebuilds it with a
//! height of `O(lg N)`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod linked;
mod node;
pub mod traversal;
