use std::cmp;

use tracing::{debug, trace};

use crate::tree::Tree;

/// A `Node` holds one key and owns its two children, either of which may be
/// a [`Leaf`][Tree::Leaf]. Outside the crate a `Node` is read-only: it can
/// be inspected and walked but never rewired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    pub(crate) left: Tree<K>,
    pub(crate) right: Tree<K>,
}

impl<K> Node<K> {
    /// Construct a new childless `Node` with the given `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: Tree::Leaf,
            right: Tree::Leaf,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, if present.
    pub fn left(&self) -> Option<&Self> {
        self.left.root()
    }

    /// The right child, if present.
    pub fn right(&self) -> Option<&Self> {
        self.right.root()
    }

    /// Whether this node has a left child.
    pub fn has_left(&self) -> bool {
        !self.left.is_empty()
    }

    /// Whether this node has a right child.
    pub fn has_right(&self) -> bool {
        !self.right.is_empty()
    }

    /// The leftmost node of the subtree rooted here.
    pub fn min(&self) -> &Self {
        match self.left() {
            Some(left) => left.min(),
            None => self,
        }
    }

    /// The rightmost node of the subtree rooted here.
    pub fn max(&self) -> &Self {
        match self.right() {
            Some(right) => right.max(),
            None => self,
        }
    }

    /// Descends from this node towards `key`.
    pub fn find(&self, key: &K) -> Option<&Self>
    where
        K: cmp::Ord,
    {
        match key.cmp(&self.key) {
            cmp::Ordering::Less => self.left().and_then(|n| n.find(key)),
            cmp::Ordering::Equal => Some(self),
            cmp::Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    /// Inserts into the subtree rooted here. The returned node is always
    /// `self`: insertion only ever attaches a new leaf.
    pub(crate) fn insert(mut self: Box<Self>, key: K) -> (Box<Self>, bool)
    where
        K: cmp::Ord,
    {
        let inserted = match key.cmp(&self.key) {
            cmp::Ordering::Less => {
                let (left, inserted) = self.left.take().insert(key);
                self.left = left;
                inserted
            }
            cmp::Ordering::Equal => {
                trace!("rejected duplicate key");
                false
            }
            cmp::Ordering::Greater => {
                let (right, inserted) = self.right.take().insert(key);
                self.right = right;
                inserted
            }
        };

        (self, inserted)
    }

    pub(crate) fn delete(mut self: Box<Self>, key: &K) -> (Tree<K>, bool)
    where
        K: cmp::Ord + Clone,
    {
        match key.cmp(&self.key) {
            cmp::Ordering::Less => {
                let (left, deleted) = self.left.take().delete(key);
                self.left = left;
                (Tree::Node(self), deleted)
            }
            cmp::Ordering::Equal => (self.destroy(), true),
            cmp::Ordering::Greater => {
                let (right, deleted) = self.right.take().delete(key);
                self.right = right;
                (Tree::Node(self), deleted)
            }
        }
    }

    /// Removes this node's key from the subtree and returns what replaces
    /// it.
    ///
    /// With two children the node survives and takes over the key of its
    /// in-order successor (the minimum of the right subtree), which is then
    /// deleted from the right subtree. Otherwise the lone child, or nothing,
    /// takes this node's place.
    ///
    /// ## Panics
    ///
    /// If the successor cannot be deleted from the right subtree. That can
    /// only happen when the ordering invariant is already broken.
    fn destroy(mut self: Box<Self>) -> Tree<K>
    where
        K: cmp::Ord + Clone,
    {
        match (&self.left, &self.right) {
            (Tree::Node(_), Tree::Node(right)) => {
                let successor = right.min().key.clone();
                self.key = successor.clone();

                let (right, deleted) = self.right.take().delete(&successor);
                if !deleted {
                    unreachable!("inconsistent tree state: successor missing from right subtree");
                }
                self.right = right;
                debug!("replaced two-child node's key with its in-order successor");

                Tree::Node(self)
            }
            (Tree::Node(_), Tree::Leaf) => self.left.take(),
            (Tree::Leaf, _) => self.right.take(),
        }
    }

    /// Rotate self to the left. This moves the right child up vertically and self down
    /// vertically. It must only be called when there _is_ a right child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root (i.e. "self")           new_root
    ///    /     \                          /     \
    ///   x    new_root     rotate ->   old_root   z
    ///         /  \                     /  \
    ///        y    z                   x    y
    /// ```
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.right.take() {
            Tree::Node(n) => n,
            Tree::Leaf => panic!("Rotate left => right child"),
        };

        self.right = new_root.left.take();
        new_root.left = Tree::Node(self);
        debug!("rotated subtree left");

        new_root
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. It must only be called when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root (i.e. "self")        new_root
    ///       /     \                      /     \
    ///    new_root  z     rotate ->      x    old_root
    ///     / \                                  /  \
    ///    x   y                                y    z
    /// ```
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.left.take() {
            Tree::Node(n) => n,
            Tree::Leaf => panic!("Rotate right => left child"),
        };

        self.left = new_root.right.take();
        new_root.right = Tree::Node(self);
        debug!("rotated subtree right");

        new_root
    }
}
