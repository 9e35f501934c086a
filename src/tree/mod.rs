//! Unbalanced binary search tree map.
//!
//! This module provides [`BstMap`], a mutable ordered map whose entries live
//! in a binary search tree of uniquely owned nodes.
//!
//! # Structure
//!
//! The map itself is a thin facade: it owns an optional root node and handles
//! the empty case. All real work (insertion, lookup, counting, depth
//! measurement, in-order flattening and rendering) is done by the nodes,
//! descending through their children one key comparison at a time.
//! Insertion descends in a loop; the read-only walks recurse.
//!
//! ```text
//!            (5, e)
//!           /      \
//!       (3, c)    (8, h)
//!       /    \
//!   (1, a)  (4, d)
//! ```
//!
//! Every key in a left subtree is strictly less than its parent's key and
//! every key in a right subtree is strictly greater, so an in-order walk
//! visits entries in ascending key order.
//!
//! # Depth
//!
//! The shape of the tree depends only on insertion order. Random insertion
//! order gives an expected depth of O(log N); sorted insertion order gives a
//! chain of depth N.
//!
//! ```rust
//! use bstmap::tree::BstMap;
//!
//! let chain: BstMap<i32, ()> = (0..10).map(|key| (key, ())).collect();
//! assert_eq!(chain.max_depth(), 10);
//!
//! let bushy: BstMap<i32, ()> = [4, 2, 6, 1, 3, 5, 7]
//!     .into_iter()
//!     .map(|key| (key, ()))
//!     .collect();
//! assert_eq!(bushy.max_depth(), 3);
//! ```

mod iter;
mod map;
mod node;

pub use iter::BstMapIntoIterator;
pub use iter::BstMapIterMut;
pub use iter::BstMapIterator;
pub use map::BstMap;
