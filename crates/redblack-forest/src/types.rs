//! Shared type definitions.
//!
//! Mirrors the public surface of the rb section of `bu.h`: the `SENSE_*`
//! and `PREORDER`/`INORDER`/`POSTORDER` constants become enums, the
//! comparison-function pointer becomes [`OrderFn`], and the implicit
//! "current node" of the C API becomes an explicit [`Cursor`] value.

use thiserror::Error;

/// Index of a node slot in a tree's node arena.
///
/// Slot 0 is the shared nil sentinel, black in every order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const NIL: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == 0
    }
}

/// Stable handle to a record stored in an [`RbForest`](crate::RbForest).
///
/// Returned by `insert` and consumed by `remove`.  A handle is
/// invalidated once the record is removed; its slot may later be reused
/// by a new record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PackageId(pub(crate) u32);

/// Comparison function for one order.
///
/// Must implement a total order over the record type: negative for
/// "less", zero for "equal", positive for "greater".
pub type OrderFn<T> = Box<dyn Fn(&T, &T) -> i32>;

/// Direction argument for `extreme` and `neighbor`.
///
/// Mirrors `SENSE_MIN` / `SENSE_MAX` in `bu.h`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sense {
    Min,
    Max,
}

/// Depth-first traversal kinds accepted by `walk`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Traversal {
    Preorder,
    Inorder,
    Postorder,
}

/// A position in one order's tree.
///
/// Queries (`search`, `extreme`, `select`) return cursors; `neighbor`
/// and `rank` take them back.  This replaces the tree-embedded
/// "current node" of the C API with a value the caller threads
/// explicitly, so read-only queries need only `&self`.
///
/// A cursor is invalidated by `remove` and `clear`; using a stale one
/// yields unspecified (but memory-safe) results, like any stale index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cursor {
    pub(crate) node: NodeId,
    pub(crate) order: usize,
}

impl Cursor {
    /// The order this cursor was obtained under.
    pub fn order(&self) -> usize {
        self.order
    }
}

/// Recoverable error conditions.
///
/// Precondition violations (an order index out of range, a sense enum
/// that cannot exist in Rust) are caller bugs and panic instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RbError {
    /// The package handle does not refer to a live record.
    #[error("package not found")]
    NotFound,
    /// An order with uniqueness enforcement already holds an equal key.
    #[error("duplicate key in unique order {order}")]
    Duplicate { order: usize },
}
