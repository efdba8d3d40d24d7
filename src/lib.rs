//! An unbalanced Binary Search Tree (BST) over totally ordered keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! owns up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! ## No balancing
//!
//! Despite the crate name, nodes carry no color and no height and the tree
//! never rebalances itself. [`Tree::rotate_left`] and [`Tree::rotate_right`]
//! are mechanical primitives a caller may invoke; nothing in this crate
//! decides when. Inserting keys in ascending order therefore builds a tree
//! whose height equals its size.
//!
//! ## Ownership
//!
//! Every mutating operation consumes the [`Tree`] and returns the tree that
//! replaces it. Insertion, deletion and rotation may change which node is
//! the root so the returned value is the tree from then on.
//!
//! ```
//! use rbtree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [10, 0, 20, 40, 100, 0] {
//!     let (new_tree, _inserted) = tree.insert(key);
//!     tree = new_tree;
//! }
//!
//! let mut keys = Vec::new();
//! tree.in_order(|key| keys.push(*key));
//! assert_eq!(keys, [0, 10, 20, 40, 100]);
//! ```
//!
//! ## Concurrency
//!
//! Nothing here synchronizes. A `Tree` is a plain owned value: callers that
//! share one between threads must provide their own exclusion (e.g. a
//! `Mutex<Tree<K>>`) or hand out clones as snapshots.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
mod traverse;
mod tree;

pub use node::Node;
pub use traverse::Order;
pub use tree::Tree;
