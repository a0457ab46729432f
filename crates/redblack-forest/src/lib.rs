//! Rust port of the red-black tree package from BRL-CAD's `libbu`
//! (the `bu_rb_*` family).
//!
//! A single collection of records is indexed simultaneously under several
//! independent linear orders (comparison functions).  Each record appears
//! once per order in the internal structure, but all of its per-order node
//! instances share one logical *package* holding the single copy of the
//! data.  Every order's tree is a red-black tree, so lookups, inserts,
//! deletes and rank/select queries are O(log n) in every order at once.
//!
//! Instead of raw pointers (as in the C original), all "pointers" are
//! `u32` indices into tree-owned arenas, with slot 0 of the node arena
//! reserved for the shared nil sentinel.
//!
//! # Module layout
//!
//! | Module | Upstream file | Contents |
//! |--------|---------------|----------|
//! | `types` | `bu.h` | [`Cursor`], [`PackageId`], [`Sense`], [`Traversal`], [`RbError`] |
//! | `node` | `bu.h` (`bu_rb_node` / `bu_rb_package`) | arena slot structs, link accessors |
//! | `forest` | `rb_create.c` / `rb_free.c` | [`RbForest`] creation, uniqueness flags, teardown |
//! | `rotate` | `rb_rotate.c` | per-order left/right rotations |
//! | `insert` | `rb_insert.c` | package insert into all orders, insert fixup |
//! | `delete` | `rb_delete.c` | per-order splice, delete fixup, package reclamation |
//! | `search` | `rb_search.c` / `rb_extreme.c` | search, extreme, neighbor |
//! | `order_stats` | `rb_order_stats.c` | select, rank |
//! | `walk` | `rb_walk.c` | pre/in/post-order traversal, in-order iterator |
//! | `diag` | `rb_diag.c` | debug printers, invariant checker |

mod delete;
mod diag;
mod forest;
mod insert;
mod node;
mod order_stats;
mod rotate;
mod search;
mod types;
mod walk;

pub use forest::RbForest;
pub use insert::Insertion;
pub use types::{Cursor, OrderFn, PackageId, RbError, Sense, Traversal};
pub use walk::Iter;
