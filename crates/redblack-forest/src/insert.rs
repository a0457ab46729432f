//! Insertion engine.
//!
//! Mirrors `rb_insert.c`: one package and one node are allocated, then
//! the node is linked into every order's tree with the standard BST
//! descent followed by the recolor/rotate fixup.  An empty tree takes
//! the fast path of installing the node as the black root of every
//! order with no fixup.
//!
//! Tie policy: a comparison of 0 routes **right**, so equal keys keep
//! their insertion order in an in-order walk.

use crate::forest::RbForest;
use crate::types::{NodeId, PackageId, RbError};

/// Outcome of a successful [`RbForest::insert`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Insertion {
    /// Handle to the stored record.
    pub package: PackageId,
    /// Number of orders in which an equal key was already present.
    pub matches: usize,
}

impl<T> RbForest<T> {
    /// Store `data`, indexing it under every order at once.
    ///
    /// Returns the record's handle together with the number of orders
    /// that already held an equal key.  If any of those orders has
    /// uniqueness enforcement enabled, nothing is inserted and
    /// [`RbError::Duplicate`] names the offending order.
    pub fn insert(&mut self, data: T) -> Result<Insertion, RbError> {
        let nm = self.num_orders();

        // Match scan before any mutation, so a uniqueness rejection
        // leaves the tree untouched.
        let mut matches = 0;
        for o in 0..nm {
            if self.descent_has_match(o, &data) {
                if self.uniq[o] {
                    return Err(RbError::Duplicate { order: o });
                }
                matches += 1;
            }
        }

        let pkg = self.alloc_package(data);
        if nm == 0 {
            self.len += 1;
            return Ok(Insertion {
                package: pkg,
                matches,
            });
        }

        let n = self.alloc_node(pkg);
        for o in 0..nm {
            self.packages[pkg.0 as usize].nodes[o] = n;
        }

        if self.len == 0 {
            // Empty tree: the node becomes the black root of every
            // order; the generic path and its fixups are unnecessary.
            for o in 0..nm {
                self.roots[o] = n;
                self.set_black(n, o, true);
            }
        } else {
            for o in 0..nm {
                self.insert_in_order(n, o);
            }
        }

        self.len += 1;
        Ok(Insertion {
            package: pkg,
            matches,
        })
    }

    /// Whether the insert descent in order `o` would meet an equal key.
    ///
    /// Descent is deterministic, so the run of equal keys always lies in
    /// the subtree being descended; a zero comparison happens iff an
    /// equal key exists.
    fn descent_has_match(&self, o: usize, key: &T) -> bool {
        let mut curr = self.roots[o];
        while !curr.is_nil() {
            let cmp = self.compare(o, key, self.node_data(curr, o));
            if cmp == 0 {
                return true;
            }
            curr = if cmp < 0 {
                self.left(curr, o)
            } else {
                self.right(curr, o)
            };
        }
        false
    }

    /// BST-insert `n` into order `o`'s non-empty tree, then fix up.
    fn insert_in_order(&mut self, n: NodeId, o: usize) {
        // Immutable descent first; ancestor sizes are bumped afterwards
        // so the comparator borrow never overlaps arena mutation.
        let mut path: Vec<NodeId> = Vec::new();
        let (parent, went_left) = {
            let key = self.node_data(n, o);
            let mut curr = self.roots[o];
            let mut parent = NodeId::NIL;
            let mut went_left = false;
            while !curr.is_nil() {
                path.push(curr);
                parent = curr;
                went_left = self.compare(o, key, self.node_data(curr, o)) < 0;
                curr = if went_left {
                    self.left(curr, o)
                } else {
                    self.right(curr, o)
                };
            }
            (parent, went_left)
        };

        for &v in &path {
            let s = self.size(v, o);
            self.set_size(v, o, s + 1);
        }

        self.set_parent(n, o, parent);
        if went_left {
            self.set_left(parent, o, n);
        } else {
            self.set_right(parent, o, n);
        }

        self.insert_fixup(n, o);
    }

    /// Restore the red-black properties of order `o` after linking the
    /// red node `n`.  The parent/grandparent/uncle loop of CLRS ch. 13,
    /// as in the C original.
    fn insert_fixup(&mut self, mut n: NodeId, o: usize) {
        while !self.is_black(self.parent(n, o), o) {
            let p = self.parent(n, o);
            let g = self.parent(p, o);
            if self.left(g, o) == p {
                let u = self.right(g, o);
                if !self.is_black(u, o) {
                    self.set_black(p, o, true);
                    self.set_black(u, o, true);
                    self.set_black(g, o, false);
                    n = g;
                } else {
                    if self.right(p, o) == n {
                        n = p;
                        self.rotate_left(n, o);
                    }
                    let p = self.parent(n, o);
                    let g = self.parent(p, o);
                    self.set_black(p, o, true);
                    self.set_black(g, o, false);
                    self.rotate_right(g, o);
                }
            } else {
                let u = self.left(g, o);
                if !self.is_black(u, o) {
                    self.set_black(p, o, true);
                    self.set_black(u, o, true);
                    self.set_black(g, o, false);
                    n = g;
                } else {
                    if self.left(p, o) == n {
                        n = p;
                        self.rotate_right(n, o);
                    }
                    let p = self.parent(n, o);
                    let g = self.parent(p, o);
                    self.set_black(p, o, true);
                    self.set_black(g, o, false);
                    self.rotate_left(g, o);
                }
            }
        }
        let root = self.roots[o];
        self.set_black(root, o, true);
    }
}
