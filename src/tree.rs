use std::mem;

use tracing::trace;

use crate::node::Node;

/// A Binary Search Tree. This can be used for inserting, finding, deleting
/// and rotating keys. An empty tree is a [`Leaf`][Tree::Leaf] and every
/// operation accepts one.
///
/// Operations that change the tree's shape take `self` and hand back the
/// tree that replaces it.
///
/// # Examples
///
/// ```
/// use rbtree::Tree;
///
/// let tree = Tree::new();
///
/// // Nothing in here yet.
/// assert!(tree.find(&1).is_none());
///
/// let (tree, inserted) = tree.insert(1);
/// assert!(inserted);
/// assert_eq!(tree.find(&1).map(|n| *n.key()), Some(1));
///
/// // Duplicates are rejected and the tree is left as it was.
/// let (tree, inserted) = tree.insert(1);
/// assert!(!inserted);
///
/// let (tree, deleted) = tree.delete(&1);
/// assert!(deleted);
/// assert!(tree.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<K> {
    /// A marker for the empty slot at the bottom of a subtree.
    Leaf,
    /// An owned `Node` with a key and two children (which are both `Tree`s).
    Node(Box<Node<K>>),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n.as_ref()),
        }
    }

    /// Moves the subtree out, leaving a `Leaf` in its place.
    pub(crate) fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// The node holding the smallest key, or `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Tree;
    ///
    /// let (tree, _) = Tree::new().insert(2);
    /// let (tree, _) = tree.insert(1);
    ///
    /// assert_eq!(tree.min().map(|n| *n.key()), Some(1));
    /// assert!(Tree::<i32>::new().min().is_none());
    /// ```
    pub fn min(&self) -> Option<&Node<K>> {
        self.root().map(Node::min)
    }

    /// The node holding the largest key, or `None` for an empty tree.
    pub fn max(&self) -> Option<&Node<K>> {
        self.root().map(Node::max)
    }

    /// Potentially finds the node holding the given key. If no node has the
    /// key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Tree;
    ///
    /// let (tree, _) = Tree::new().insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|n| n.find(key))
    }

    /// Inserts the key, returning the new tree and whether the key was
    /// added. A key that is already present is left alone and `false` is
    /// returned. No rebalancing happens.
    #[must_use = "the returned tree replaces this one"]
    pub fn insert(self, key: K) -> (Self, bool)
    where
        K: Ord,
    {
        match self {
            Self::Leaf => (Self::Node(Node::new_boxed(key)), true),
            Self::Node(n) => {
                let (n, inserted) = n.insert(key);
                (Self::Node(n), inserted)
            }
        }
    }

    /// Deletes the node holding the key, returning the new tree and whether
    /// anything was removed. Deleting a missing key returns the tree
    /// unchanged with `false`.
    ///
    /// A node with two children is kept in place and takes the key of its
    /// in-order successor, which is then deleted from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 4, 3, 5] {
    ///     tree = tree.insert(key).0;
    /// }
    ///
    /// let (tree, deleted) = tree.delete(&4);
    /// assert!(deleted);
    ///
    /// let mut keys = Vec::new();
    /// tree.in_order(|key| keys.push(*key));
    /// assert_eq!(keys, [1, 2, 3, 5]);
    /// ```
    #[must_use = "the returned tree replaces this one"]
    pub fn delete(self, key: &K) -> (Self, bool)
    where
        K: Ord + Clone,
    {
        match self {
            Self::Leaf => {
                trace!("key not found for deletion");
                (Self::Leaf, false)
            }
            Self::Node(n) => n.delete(key),
        }
    }

    /// Rotates the root to the left, lifting its right child into its place.
    /// The in-order sequence of keys is unchanged.
    ///
    /// # Panics
    ///
    /// When the tree is empty or the root has no right child.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [3, 2, 5, 4, 7] {
    ///     tree = tree.insert(key).0;
    /// }
    ///
    /// let tree = tree.rotate_left();
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(5));
    /// ```
    #[must_use = "the returned tree replaces this one"]
    pub fn rotate_left(self) -> Self {
        match self {
            Self::Leaf => panic!("Cannot rotate an empty tree."),
            Self::Node(n) => Self::Node(n.rotate_left()),
        }
    }

    /// Rotates the root to the right, lifting its left child into its place.
    /// The in-order sequence of keys is unchanged.
    ///
    /// # Panics
    ///
    /// When the tree is empty or the root has no left child.
    #[must_use = "the returned tree replaces this one"]
    pub fn rotate_right(self) -> Self {
        match self {
            Self::Leaf => panic!("Cannot rotate an empty tree."),
            Self::Node(n) => Self::Node(n.rotate_right()),
        }
    }
}
