//! The tree itself: creation, configuration, handle lookup, teardown.
//!
//! Mirrors `rb_create.c` and `rb_free.c`.  The C teardown walked
//! intrusive lists of all nodes and packages; here the arenas own every
//! slot, so `Drop` is trivial and `clear` just resets them.

use crate::node::{sentinel, Node, Package};
use crate::types::{Cursor, NodeId, OrderFn, PackageId};

/// A set of records indexed simultaneously under several linear orders.
///
/// Each order is one comparison function supplied at creation; every
/// order's internal tree is a red-black tree over the same records.
/// Records are owned by the tree and handed back on [`remove`].
///
/// Not thread-safe for shared mutation; all mutating operations take
/// `&mut self` and queries `&self`, so the borrow checker enforces the
/// single-writer discipline the C original left to convention.
///
/// [`remove`]: RbForest::remove
pub struct RbForest<T> {
    description: String,
    pub(crate) order: Vec<OrderFn<T>>,
    pub(crate) uniq: Vec<bool>,
    /// Root of each order's tree; the sentinel when that order is empty.
    pub(crate) roots: Vec<NodeId>,
    /// Node arena; slot 0 is the shared nil sentinel.
    pub(crate) nodes: Vec<Node>,
    pub(crate) packages: Vec<Package<T>>,
    free_nodes: Vec<NodeId>,
    free_packages: Vec<PackageId>,
    pub(crate) len: usize,
}

impl<T> RbForest<T> {
    /// Create a tree indexed under `order.len()` simultaneous orders.
    ///
    /// `description` is a free-text label used only by diagnostics.
    pub fn new(description: impl Into<String>, order: Vec<OrderFn<T>>) -> Self {
        let nm = order.len();
        Self {
            description: description.into(),
            uniq: vec![false; nm],
            roots: vec![NodeId::NIL; nm],
            nodes: vec![sentinel(nm)],
            packages: Vec::new(),
            free_nodes: Vec::new(),
            free_packages: Vec::new(),
            len: 0,
            order,
        }
    }

    /// Convenience constructor for the common single-order case.
    ///
    /// Mirrors `bu_rb_create1`.
    pub fn single(
        description: impl Into<String>,
        order: impl Fn(&T, &T) -> i32 + 'static,
    ) -> Self {
        Self::new(description, vec![Box::new(order)])
    }

    /// The diagnostic label supplied at creation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of simultaneous orders.
    pub fn num_orders(&self) -> usize {
        self.order.len()
    }

    /// Number of records currently stored (`rbt_nm_nodes`).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Enable or disable uniqueness enforcement for one order.
    ///
    /// While enabled, an insert that finds an equal key in this order is
    /// rejected.  Mirrors `bu_rb_uniq_on` / `bu_rb_uniq_off`.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of range.
    pub fn set_uniq(&mut self, order: usize, on: bool) {
        self.check_order(order);
        self.uniq[order] = on;
    }

    /// Enable or disable uniqueness enforcement for every order.
    ///
    /// Mirrors `bu_rb_uniq_all_on` / `bu_rb_uniq_all_off`.
    pub fn set_uniq_all(&mut self, on: bool) {
        for flag in &mut self.uniq {
            *flag = on;
        }
    }

    /// Whether uniqueness is enforced for `order`.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of range.
    pub fn is_uniq(&self, order: usize) -> bool {
        self.check_order(order);
        self.uniq[order]
    }

    /// Data of a live record, or `None` for a stale handle.
    pub fn get(&self, pkg: PackageId) -> Option<&T> {
        self.packages.get(pkg.0 as usize)?.data.as_ref()
    }

    /// Data at a cursor position.
    pub fn data(&self, cursor: Cursor) -> &T {
        self.check_order(cursor.order);
        self.node_data(cursor.node, cursor.order)
    }

    /// Handle of the record at a cursor position.
    pub fn package(&self, cursor: Cursor) -> PackageId {
        self.check_order(cursor.order);
        self.pkg_of(cursor.node, cursor.order)
    }

    /// Remove every record, dropping the stored data.
    ///
    /// Mirrors `bu_rb_free`; retaining the data is spelled `remove` in
    /// this port, since the tree owns its records.
    pub fn clear(&mut self) {
        let nm = self.num_orders();
        self.nodes.clear();
        self.nodes.push(sentinel(nm));
        self.packages.clear();
        self.free_nodes.clear();
        self.free_packages.clear();
        for root in &mut self.roots {
            *root = NodeId::NIL;
        }
        self.len = 0;
    }

    #[inline]
    pub(crate) fn compare(&self, o: usize, a: &T, b: &T) -> i32 {
        (self.order[o])(a, b)
    }

    #[inline]
    pub(crate) fn check_order(&self, order: usize) {
        assert!(
            order < self.num_orders(),
            "order index {order} out of range (tree has {} orders)",
            self.num_orders()
        );
    }

    pub(crate) fn alloc_package(&mut self, data: T) -> PackageId {
        let nm = self.num_orders();
        let slot = Package {
            data: Some(data),
            nodes: vec![NodeId::NIL; nm].into_boxed_slice(),
        };
        match self.free_packages.pop() {
            Some(id) => {
                self.packages[id.0 as usize] = slot;
                id
            }
            None => {
                self.packages.push(slot);
                PackageId((self.packages.len() - 1) as u32)
            }
        }
    }

    pub(crate) fn free_package(&mut self, pkg: PackageId) -> T {
        let data = self.packages[pkg.0 as usize]
            .data
            .take()
            .expect("freeing live package");
        self.free_packages.push(pkg);
        data
    }

    /// Allocate a node carrying `pkg` in every order: red, size 1, all
    /// links nil, reference count equal to the number of orders.
    pub(crate) fn alloc_node(&mut self, pkg: PackageId) -> NodeId {
        let nm = self.num_orders();
        let link = crate::node::OrderLink {
            parent: NodeId::NIL,
            left: NodeId::NIL,
            right: NodeId::NIL,
            black: false,
            size: 1,
            pkg,
        };
        let node = Node {
            links: vec![link; nm].into_boxed_slice(),
            refs: nm as u32,
        };
        match self.free_nodes.pop() {
            Some(id) => {
                self.nodes[id.0 as usize] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId((self.nodes.len() - 1) as u32)
            }
        }
    }

    pub(crate) fn free_node(&mut self, n: NodeId) {
        self.free_nodes.push(n);
    }
}
