//! Deletion engine.
//!
//! Mirrors `rb_delete.c`, the hairiest part of the C original.  The
//! package is spliced out of every order in turn; each order picks its
//! own victim node `y` (the target itself, or its in-order successor
//! under that order's comparator when it has two children), splices it,
//! and if `y` was black runs the four-case delete fixup.
//!
//! When `y` is the successor, the target node stays in the tree and
//! adopts `y`'s package for that order — the original's
//! package-redirection scheme.  Physical nodes carry a count of orders
//! still using them and return to the free list at zero.

use crate::forest::RbForest;
use crate::types::{NodeId, PackageId, RbError};

impl<T> RbForest<T> {
    /// Remove the record behind `pkg` from every order and return its
    /// data.
    ///
    /// A stale or already-removed handle yields [`RbError::NotFound`]
    /// and leaves the tree untouched.
    pub fn remove(&mut self, pkg: PackageId) -> Result<T, RbError> {
        let idx = pkg.0 as usize;
        if idx >= self.packages.len() || self.packages[idx].data.is_none() {
            return Err(RbError::NotFound);
        }

        // Snapshot the per-order nodes up front: splicing order k must
        // not chase pointers that order k+1 still needs.
        let snapshot: Vec<NodeId> = self.packages[idx].nodes.to_vec();
        for (o, &n) in snapshot.iter().enumerate() {
            self.delete_in_order(n, o);
        }

        self.len -= 1;
        Ok(self.free_package(pkg))
    }

    /// Splice the node carrying the doomed package out of order `o`.
    fn delete_in_order(&mut self, z: NodeId, o: usize) {
        // y: the node physically unlinked; z itself unless z has two
        // children, then z's successor under this order's comparator.
        let y = if self.left(z, o).is_nil() || self.right(z, o).is_nil() {
            z
        } else {
            let mut s = self.right(z, o);
            while !self.left(s, o).is_nil() {
                s = self.left(s, o);
            }
            s
        };

        // y has at most one child; x replaces it (possibly the sentinel).
        let x = if !self.left(y, o).is_nil() {
            self.left(y, o)
        } else {
            self.right(y, o)
        };

        // Every ancestor of y loses one descendant.
        let mut up = self.parent(y, o);
        while !up.is_nil() {
            let s = self.size(up, o);
            self.set_size(up, o, s - 1);
            up = self.parent(up, o);
        }

        let yp = self.parent(y, o);
        // The sentinel's parent is set on purpose: the fixup walks up
        // from x even when x is nil.
        self.set_parent(x, o, yp);
        if yp.is_nil() {
            self.roots[o] = x;
        } else if self.left(yp, o) == y {
            self.set_left(yp, o, x);
        } else {
            self.set_right(yp, o, x);
        }

        let y_was_black = self.is_black(y, o);

        if y != z {
            // z survives and takes over y's package for this order; the
            // keys are in-order neighbors, so the BST property holds.
            let moved: PackageId = self.pkg_of(y, o);
            self.set_pkg(z, o, moved);
            self.packages[moved.0 as usize].nodes[o] = z;
        }

        if y_was_black {
            self.delete_fixup(x, o);
        }

        let node = &mut self.nodes[y.0 as usize];
        node.refs -= 1;
        if node.refs == 0 {
            self.free_node(y);
        }
    }

    /// Restore the red-black properties of order `o` after removing a
    /// black node, starting from its replacement `x`.  The four classic
    /// sibling cases of CLRS ch. 13, as in the C original.
    fn delete_fixup(&mut self, mut x: NodeId, o: usize) {
        while x != self.roots[o] && self.is_black(x, o) {
            let p = self.parent(x, o);
            if self.left(p, o) == x {
                let mut w = self.right(p, o);
                if !self.is_black(w, o) {
                    // red sibling: rotate it above, exposing a black one
                    self.set_black(w, o, true);
                    self.set_black(p, o, false);
                    self.rotate_left(p, o);
                    w = self.right(p, o);
                }
                if self.is_black(self.left(w, o), o) && self.is_black(self.right(w, o), o) {
                    // both nephews black: push the deficit up
                    self.set_black(w, o, false);
                    x = p;
                } else {
                    if self.is_black(self.right(w, o), o) {
                        // near nephew red: rotate it into the far slot
                        let wl = self.left(w, o);
                        self.set_black(wl, o, true);
                        self.set_black(w, o, false);
                        self.rotate_right(w, o);
                        w = self.right(p, o);
                    }
                    let p_black = self.is_black(p, o);
                    self.set_black(w, o, p_black);
                    self.set_black(p, o, true);
                    let wr = self.right(w, o);
                    self.set_black(wr, o, true);
                    self.rotate_left(p, o);
                    x = self.roots[o];
                }
            } else {
                let mut w = self.left(p, o);
                if !self.is_black(w, o) {
                    self.set_black(w, o, true);
                    self.set_black(p, o, false);
                    self.rotate_right(p, o);
                    w = self.left(p, o);
                }
                if self.is_black(self.left(w, o), o) && self.is_black(self.right(w, o), o) {
                    self.set_black(w, o, false);
                    x = p;
                } else {
                    if self.is_black(self.left(w, o), o) {
                        let wr = self.right(w, o);
                        self.set_black(wr, o, true);
                        self.set_black(w, o, false);
                        self.rotate_left(w, o);
                        w = self.left(p, o);
                    }
                    let p_black = self.is_black(p, o);
                    self.set_black(w, o, p_black);
                    self.set_black(p, o, true);
                    let wl = self.left(w, o);
                    self.set_black(wl, o, true);
                    self.rotate_right(p, o);
                    x = self.roots[o];
                }
            }
        }
        self.set_black(x, o, true);
    }
}
