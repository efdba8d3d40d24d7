//! Depth-first traversals. Each walk pushes every key present at call time
//! into a caller-supplied sink exactly once, recursing only as deep as the
//! tree is tall. Nothing is collected along the way.

use crate::tree::Tree;

/// The three canonical depth-first visit orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Keys come out
    /// ascending.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// Left subtree, then the right subtree, then the node.
    PostOrder,
}

impl<K> Tree<K> {
    /// Visits every key in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for key in [3, 2, 5, 4, 7] {
    ///     tree = tree.insert(key).0;
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.walk(Order::PostOrder, |key| keys.push(*key));
    /// assert_eq!(keys, [2, 4, 7, 5, 3]);
    /// ```
    pub fn walk<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&K),
    {
        match order {
            Order::InOrder => self.in_order_with(&mut visit),
            Order::PreOrder => self.pre_order_with(&mut visit),
            Order::PostOrder => self.post_order_with(&mut visit),
        }
    }

    /// Visits every key in ascending order.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        self.in_order_with(&mut visit)
    }

    /// Visits each node before either of its subtrees.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        self.pre_order_with(&mut visit)
    }

    /// Visits each node after both of its subtrees.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        self.post_order_with(&mut visit)
    }

    fn in_order_with<F>(&self, visit: &mut F)
    where
        F: FnMut(&K),
    {
        if let Tree::Node(n) = self {
            n.left.in_order_with(visit);
            visit(n.key());
            n.right.in_order_with(visit);
        }
    }

    fn pre_order_with<F>(&self, visit: &mut F)
    where
        F: FnMut(&K),
    {
        if let Tree::Node(n) = self {
            visit(n.key());
            n.left.pre_order_with(visit);
            n.right.pre_order_with(visit);
        }
    }

    fn post_order_with<F>(&self, visit: &mut F)
    where
        F: FnMut(&K),
    {
        if let Tree::Node(n) = self {
            n.left.post_order_with(visit);
            n.right.post_order_with(visit);
            visit(n.key());
        }
    }
}
