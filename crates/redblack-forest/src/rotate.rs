//! Rotation engine.
//!
//! Mirrors `rb_rotate.c`: the classic O(1) pointer-surgery rotations,
//! restricted to one order's links.  Colors and other orders are never
//! touched; subtree sizes are repaired in place so the order-statistic
//! queries stay O(log n).

use crate::forest::RbForest;
use crate::types::NodeId;

impl<T> RbForest<T> {
    /// Rotate the subtree at `x` leftward in order `o`.
    ///
    /// `x` must have a non-nil right child in that order.
    pub(crate) fn rotate_left(&mut self, x: NodeId, o: usize) {
        let y = self.right(x, o);
        debug_assert!(!y.is_nil(), "left rotation needs a right child");
        let x_size = self.size(x, o);

        let beta = self.left(y, o);
        self.set_right(x, o, beta);
        if !beta.is_nil() {
            self.set_parent(beta, o, x);
        }

        let p = self.parent(x, o);
        self.set_parent(y, o, p);
        if p.is_nil() {
            self.roots[o] = y;
        } else if self.left(p, o) == x {
            self.set_left(p, o, y);
        } else {
            self.set_right(p, o, y);
        }

        self.set_left(y, o, x);
        self.set_parent(x, o, y);

        // y now roots the subtree x rooted; only x's size shrinks
        self.set_size(y, o, x_size);
        let s = self.size(self.left(x, o), o) + self.size(self.right(x, o), o) + 1;
        self.set_size(x, o, s);
    }

    /// Rotate the subtree at `y` rightward in order `o`.
    ///
    /// `y` must have a non-nil left child in that order.
    pub(crate) fn rotate_right(&mut self, y: NodeId, o: usize) {
        let x = self.left(y, o);
        debug_assert!(!x.is_nil(), "right rotation needs a left child");
        let y_size = self.size(y, o);

        let beta = self.right(x, o);
        self.set_left(y, o, beta);
        if !beta.is_nil() {
            self.set_parent(beta, o, y);
        }

        let p = self.parent(y, o);
        self.set_parent(x, o, p);
        if p.is_nil() {
            self.roots[o] = x;
        } else if self.left(p, o) == y {
            self.set_left(p, o, x);
        } else {
            self.set_right(p, o, x);
        }

        self.set_right(x, o, y);
        self.set_parent(y, o, x);

        self.set_size(x, o, y_size);
        let s = self.size(self.left(y, o), o) + self.size(self.right(y, o), o) + 1;
        self.set_size(y, o, s);
    }
}
