//! Arena slot structures and link accessors.
//!
//! Mirrors `bu_rb_node` and `bu_rb_package` from `bu.h`.  The C structs
//! hold per-order arrays of raw pointers (`rbn_parent`, `rbn_left`,
//! `rbn_right`, `rbn_color`, `rbn_size`, `rbn_package`); here each node
//! holds one [`OrderLink`] per order, and all "pointers" are arena
//! indices.

use crate::forest::RbForest;
use crate::types::{NodeId, PackageId};

/// Package index marking "no package" (used only by the sentinel).
pub(crate) const NO_PKG: PackageId = PackageId(u32::MAX);

/// Structural links of one node in one order's tree.
#[derive(Clone, Debug)]
pub(crate) struct OrderLink {
    pub parent: NodeId,
    pub left: NodeId,
    pub right: NodeId,
    /// `true` = black, `false` = red.
    pub black: bool,
    /// 1 + size(left) + size(right) in this order; 0 on the sentinel.
    pub size: u32,
    /// Package this node carries in this order.  Initially the same for
    /// every order; deletions shuffle packages among surviving nodes.
    pub pkg: PackageId,
}

/// One node slot: a structural shell participating in every order's tree.
pub(crate) struct Node {
    pub links: Box<[OrderLink]>,
    /// Orders still holding this node in their tree (`rbn_pkg_refs`).
    /// The slot is returned to the free list when this reaches zero.
    pub refs: u32,
}

/// One package slot: the logical record shared by all orders.
pub(crate) struct Package<T> {
    /// `None` marks a slot on the package free list.
    pub data: Option<T>,
    /// Node carrying this package, per order (`rbp_node`).
    pub nodes: Box<[NodeId]>,
}

/// Build the shared nil sentinel for a tree with `nm_orders` orders.
pub(crate) fn sentinel(nm_orders: usize) -> Node {
    let link = OrderLink {
        parent: NodeId::NIL,
        left: NodeId::NIL,
        right: NodeId::NIL,
        black: true,
        size: 0,
        pkg: NO_PKG,
    };
    Node {
        links: vec![link; nm_orders].into_boxed_slice(),
        refs: 0,
    }
}

impl<T> RbForest<T> {
    #[inline]
    pub(crate) fn parent(&self, n: NodeId, o: usize) -> NodeId {
        self.nodes[n.0 as usize].links[o].parent
    }

    #[inline]
    pub(crate) fn left(&self, n: NodeId, o: usize) -> NodeId {
        self.nodes[n.0 as usize].links[o].left
    }

    #[inline]
    pub(crate) fn right(&self, n: NodeId, o: usize) -> NodeId {
        self.nodes[n.0 as usize].links[o].right
    }

    #[inline]
    pub(crate) fn is_black(&self, n: NodeId, o: usize) -> bool {
        self.nodes[n.0 as usize].links[o].black
    }

    #[inline]
    pub(crate) fn size(&self, n: NodeId, o: usize) -> u32 {
        self.nodes[n.0 as usize].links[o].size
    }

    #[inline]
    pub(crate) fn pkg_of(&self, n: NodeId, o: usize) -> PackageId {
        self.nodes[n.0 as usize].links[o].pkg
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, n: NodeId, o: usize, v: NodeId) {
        self.nodes[n.0 as usize].links[o].parent = v;
    }

    #[inline]
    pub(crate) fn set_left(&mut self, n: NodeId, o: usize, v: NodeId) {
        self.nodes[n.0 as usize].links[o].left = v;
    }

    #[inline]
    pub(crate) fn set_right(&mut self, n: NodeId, o: usize, v: NodeId) {
        self.nodes[n.0 as usize].links[o].right = v;
    }

    #[inline]
    pub(crate) fn set_black(&mut self, n: NodeId, o: usize, v: bool) {
        self.nodes[n.0 as usize].links[o].black = v;
    }

    #[inline]
    pub(crate) fn set_size(&mut self, n: NodeId, o: usize, v: u32) {
        self.nodes[n.0 as usize].links[o].size = v;
    }

    #[inline]
    pub(crate) fn set_pkg(&mut self, n: NodeId, o: usize, v: PackageId) {
        self.nodes[n.0 as usize].links[o].pkg = v;
    }

    /// Data of the package `n` carries in order `o`.
    #[inline]
    pub(crate) fn node_data(&self, n: NodeId, o: usize) -> &T {
        let pkg = self.pkg_of(n, o);
        self.packages[pkg.0 as usize]
            .data
            .as_ref()
            .expect("node references live package")
    }
}
