//! Diagnostics: debug printers and the invariant checker.
//!
//! Mirrors `rb_diag.c` (`bu_rb_diagnose_tree` / `bu_rb_summarize_tree`);
//! the printed format is free text for humans, not a stable contract.

use std::fmt::Debug;

use crate::forest::RbForest;
use crate::types::NodeId;

impl<T> RbForest<T> {
    /// One-line-per-order statistics summary.
    pub fn summarize(&self) -> String {
        let mut out = format!(
            "{}: {} packages, {} orders\n",
            self.description(),
            self.len(),
            self.num_orders()
        );
        for o in 0..self.num_orders() {
            let root = self.roots[o];
            if root.is_nil() {
                out.push_str(&format!("order {o}: root=∅\n"));
                continue;
            }
            // black-height down the left spine
            let mut bh = 0;
            let mut curr = root;
            while !curr.is_nil() {
                if self.is_black(curr, o) {
                    bh += 1;
                }
                curr = self.left(curr, o);
            }
            out.push_str(&format!(
                "order {o}: root=Node[{}], black-height={bh}\n",
                root.0
            ));
        }
        out
    }

    /// Recursive dump of order `order`'s tree.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of range.
    pub fn diagnose(&self, order: usize) -> String
    where
        T: Debug,
    {
        self.check_order(order);
        self.print_node(self.roots[order], order, "")
    }

    fn print_node(&self, n: NodeId, o: usize, tab: &str) -> String
    where
        T: Debug,
    {
        if n.is_nil() {
            return "∅".to_string();
        }
        let color = if self.is_black(n, o) { "black" } else { "red" };
        let left = self.print_node(self.left(n, o), o, &format!("{tab}  "));
        let right = self.print_node(self.right(n, o), o, &format!("{tab}  "));
        format!(
            "Node[{}] {color} sz={} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
            n.0,
            self.size(n, o),
            self.node_data(n, o)
        )
    }

    /// Verify every structural invariant of the tree.
    ///
    /// Checks, for every order: root is black and parentless, parent
    /// links are consistent, no red node has a red child, every
    /// root-to-nil path has the same black-height, recorded subtree
    /// sizes are exact, the in-order sequence is non-decreasing under
    /// that order's comparator, and package back-pointers agree.  Then
    /// checks that all orders index the same package set and that the
    /// live package census matches `len`.
    pub fn assert_valid(&self) -> Result<(), String> {
        let live = self
            .packages
            .iter()
            .filter(|p| p.data.is_some())
            .count();
        if live != self.len() {
            return Err(format!(
                "Live package count {live} does not match len {}",
                self.len()
            ));
        }

        let mut first_set: Vec<u32> = Vec::new();
        for o in 0..self.num_orders() {
            let root = self.roots[o];
            if root.is_nil() {
                if self.len() != 0 {
                    return Err(format!("Order {o} is empty but len is {}", self.len()));
                }
                continue;
            }
            if !self.parent(root, o).is_nil() {
                return Err("Root has parent".to_string());
            }
            if !self.is_black(root, o) {
                return Err("Root is not black".to_string());
            }

            let (_, count) = self.check_subtree(root, o)?;
            if count as usize != self.len() {
                return Err(format!(
                    "Order {o} holds {count} nodes but len is {}",
                    self.len()
                ));
            }

            let mut set: Vec<u32> = Vec::with_capacity(count as usize);
            let mut prev = NodeId::NIL;
            let mut curr = self.first_in_order(o);
            while !curr.is_nil() {
                let pkg = self.pkg_of(curr, o);
                if self.packages[pkg.0 as usize].nodes[o] != curr {
                    return Err("Package back-pointer mismatch".to_string());
                }
                set.push(pkg.0);
                if !prev.is_nil()
                    && self.compare(o, self.node_data(prev, o), self.node_data(curr, o)) > 0
                {
                    return Err("Node order violated".to_string());
                }
                prev = curr;
                curr = self.next_in_order(curr, o);
            }

            set.sort_unstable();
            if o == 0 {
                first_set = set;
            } else if set != first_set {
                return Err(format!("Package sets differ between orders 0 and {o}"));
            }
        }

        Ok(())
    }

    /// Returns (black-height, node count) of the subtree at `n`.
    fn check_subtree(&self, n: NodeId, o: usize) -> Result<(u32, u32), String> {
        if n.is_nil() {
            return Ok((0, 0));
        }

        let l = self.left(n, o);
        let r = self.right(n, o);
        if !l.is_nil() && self.parent(l, o) != n {
            return Err("Broken parent link on left child".to_string());
        }
        if !r.is_nil() && self.parent(r, o) != n {
            return Err("Broken parent link on right child".to_string());
        }

        if !self.is_black(n, o) {
            if !l.is_nil() && !self.is_black(l, o) {
                return Err("Red node has red left child".to_string());
            }
            if !r.is_nil() && !self.is_black(r, o) {
                return Err("Red node has red right child".to_string());
            }
        }

        let (lh, lc) = self.check_subtree(l, o)?;
        let (rh, rc) = self.check_subtree(r, o)?;
        if lh != rh {
            return Err("Black height mismatch".to_string());
        }

        let count = lc + rc + 1;
        if self.size(n, o) != count {
            return Err(format!(
                "Subtree at Node[{}] has {count} nodes but records size {}",
                n.0,
                self.size(n, o)
            ));
        }

        Ok((lh + u32::from(self.is_black(n, o)), count))
    }
}
