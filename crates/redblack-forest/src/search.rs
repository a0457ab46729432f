//! Read-only traversal primitives: search, extreme, neighbor.
//!
//! Mirrors `rb_search.c` and `rb_extreme.c`.  All of these return
//! [`Cursor`] values instead of setting the C original's tree-embedded
//! "current node".

use crate::forest::RbForest;
use crate::types::{Cursor, NodeId, Sense};

impl<T> RbForest<T> {
    /// Find a record equal to `key` under order `order`.
    ///
    /// With duplicates present this finds the topmost equal node, not
    /// necessarily the first inserted.  Read-only; tree shape is never
    /// altered.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of range.
    pub fn search(&self, order: usize, key: &T) -> Option<Cursor> {
        self.check_order(order);
        let mut curr = self.roots[order];
        while !curr.is_nil() {
            let cmp = self.compare(order, key, self.node_data(curr, order));
            if cmp == 0 {
                return Some(Cursor { node: curr, order });
            }
            curr = if cmp < 0 {
                self.left(curr, order)
            } else {
                self.right(curr, order)
            };
        }
        None
    }

    /// Smallest (`Sense::Min`) or largest (`Sense::Max`) record under
    /// `order`, or `None` on an empty tree.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of range.
    pub fn extreme(&self, order: usize, sense: Sense) -> Option<Cursor> {
        self.check_order(order);
        let mut curr = self.roots[order];
        if curr.is_nil() {
            return None;
        }
        loop {
            let next = match sense {
                Sense::Min => self.left(curr, order),
                Sense::Max => self.right(curr, order),
            };
            if next.is_nil() {
                return Some(Cursor { node: curr, order });
            }
            curr = next;
        }
    }

    /// `bu_rb_min` shorthand.
    pub fn min(&self, order: usize) -> Option<Cursor> {
        self.extreme(order, Sense::Min)
    }

    /// `bu_rb_max` shorthand.
    pub fn max(&self, order: usize) -> Option<Cursor> {
        self.extreme(order, Sense::Max)
    }

    /// Predecessor (`Sense::Min`) or successor (`Sense::Max`) of the
    /// cursor position in its order, or `None` at the extreme.
    pub fn neighbor(&self, cursor: Cursor, sense: Sense) -> Option<Cursor> {
        let o = cursor.order;
        self.check_order(o);
        let next = match sense {
            Sense::Max => self.next_in_order(cursor.node, o),
            Sense::Min => self.prev_in_order(cursor.node, o),
        };
        if next.is_nil() {
            None
        } else {
            Some(Cursor { node: next, order: o })
        }
    }

    /// `bu_rb_pred` shorthand.
    pub fn pred(&self, cursor: Cursor) -> Option<Cursor> {
        self.neighbor(cursor, Sense::Min)
    }

    /// `bu_rb_succ` shorthand.
    pub fn succ(&self, cursor: Cursor) -> Option<Cursor> {
        self.neighbor(cursor, Sense::Max)
    }

    /// Leftmost node of order `o`, or nil on an empty tree.
    pub(crate) fn first_in_order(&self, o: usize) -> NodeId {
        let mut curr = self.roots[o];
        if curr.is_nil() {
            return NodeId::NIL;
        }
        while !self.left(curr, o).is_nil() {
            curr = self.left(curr, o);
        }
        curr
    }

    /// In-order successor of `n` in order `o`, or nil at the maximum.
    pub(crate) fn next_in_order(&self, n: NodeId, o: usize) -> NodeId {
        let r = self.right(n, o);
        if !r.is_nil() {
            let mut curr = r;
            while !self.left(curr, o).is_nil() {
                curr = self.left(curr, o);
            }
            return curr;
        }
        let mut curr = n;
        let mut p = self.parent(n, o);
        while !p.is_nil() && self.right(p, o) == curr {
            curr = p;
            p = self.parent(p, o);
        }
        p
    }

    /// In-order predecessor of `n` in order `o`, or nil at the minimum.
    pub(crate) fn prev_in_order(&self, n: NodeId, o: usize) -> NodeId {
        let l = self.left(n, o);
        if !l.is_nil() {
            let mut curr = l;
            while !self.right(curr, o).is_nil() {
                curr = self.right(curr, o);
            }
            return curr;
        }
        let mut curr = n;
        let mut p = self.parent(n, o);
        while !p.is_nil() && self.left(p, o) == curr {
            curr = p;
            p = self.parent(p, o);
        }
        p
    }
}
