//! Traversal.
//!
//! Mirrors `rb_walk.c`.  The visitor receives each record with its
//! depth and may stop the walk early by returning
//! [`ControlFlow::Break`], which the C original had no protocol for.

use std::ops::ControlFlow;

use crate::forest::RbForest;
use crate::types::{NodeId, Traversal};

impl<T> RbForest<T> {
    /// Depth-first traversal of order `order`, visiting every record
    /// once as `visit(data, depth)`.
    ///
    /// Returns `Break` if the visitor stopped the walk.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of range.
    pub fn walk<F>(&self, order: usize, traversal: Traversal, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        self.check_order(order);
        self.walk_node(self.roots[order], order, traversal, 0, &mut visit)
    }

    fn walk_node<F>(
        &self,
        n: NodeId,
        o: usize,
        traversal: Traversal,
        depth: usize,
        visit: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        if n.is_nil() {
            return ControlFlow::Continue(());
        }
        match traversal {
            Traversal::Preorder => {
                visit(self.node_data(n, o), depth)?;
                self.walk_node(self.left(n, o), o, traversal, depth + 1, visit)?;
                self.walk_node(self.right(n, o), o, traversal, depth + 1, visit)?;
            }
            Traversal::Inorder => {
                self.walk_node(self.left(n, o), o, traversal, depth + 1, visit)?;
                visit(self.node_data(n, o), depth)?;
                self.walk_node(self.right(n, o), o, traversal, depth + 1, visit)?;
            }
            Traversal::Postorder => {
                self.walk_node(self.left(n, o), o, traversal, depth + 1, visit)?;
                self.walk_node(self.right(n, o), o, traversal, depth + 1, visit)?;
                visit(self.node_data(n, o), depth)?;
            }
        }
        ControlFlow::Continue(())
    }

    /// In-order iterator over order `order`'s records.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of range.
    pub fn iter(&self, order: usize) -> Iter<'_, T> {
        self.check_order(order);
        Iter {
            forest: self,
            order,
            curr: self.first_in_order(order),
        }
    }
}

/// In-order iterator returned by [`RbForest::iter`].
pub struct Iter<'a, T> {
    forest: &'a RbForest<T>,
    order: usize,
    curr: NodeId,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.curr.is_nil() {
            return None;
        }
        let out = self.forest.node_data(self.curr, self.order);
        self.curr = self.forest.next_in_order(self.curr, self.order);
        Some(out)
    }
}
