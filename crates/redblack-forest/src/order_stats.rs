//! Order statistics: select and rank.
//!
//! Mirrors `rb_order_stats.c`.  The C original recomputed subtree sizes
//! with a full walk on every query; here sizes are maintained
//! incrementally by rotations, insert and delete, so both queries are
//! O(log n).

use crate::forest::RbForest;
use crate::types::Cursor;

impl<T> RbForest<T> {
    /// The record of rank `k` (1-indexed) under `order`.
    ///
    /// Returns `None` when `k` is outside `[1, len]`.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of range.
    pub fn select(&self, order: usize, k: usize) -> Option<Cursor> {
        self.check_order(order);
        if k == 0 || k > self.len() {
            return None;
        }
        let mut n = self.roots[order];
        let mut k = k as u32;
        loop {
            let rank = self.size(self.left(n, order), order) + 1;
            if k == rank {
                return Some(Cursor { node: n, order });
            }
            if k < rank {
                n = self.left(n, order);
            } else {
                k -= rank;
                n = self.right(n, order);
            }
        }
    }

    /// Rank (1-indexed in-order position) of the cursor's record in its
    /// order.
    pub fn rank(&self, cursor: Cursor) -> usize {
        let o = cursor.order;
        self.check_order(o);
        let mut n = cursor.node;
        let mut rank = self.size(self.left(n, o), o) as usize + 1;
        loop {
            let p = self.parent(n, o);
            if p.is_nil() {
                return rank;
            }
            if self.right(p, o) == n {
                rank += self.size(self.left(p, o), o) as usize + 1;
            }
            n = p;
        }
    }
}
