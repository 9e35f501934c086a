//! # bstmap
//!
//! An ordered map backed by an unbalanced binary search tree.
//!
//! ## Overview
//!
//! [`BstMap`] stores key-value pairs in a plain binary search tree. Every
//! operation walks the tree from the root, following key
//! comparisons, so the cost of a lookup or insertion is proportional to the
//! depth of the tree. No rebalancing is ever performed: inserting keys in
//! sorted order produces a degenerate chain whose depth equals its size.
//!
//! - Insertion and update in place ([`BstMap::put`], [`BstMap::insert`])
//! - Point lookup ([`BstMap::get`], [`BstMap::get_mut`])
//! - Size and depth introspection ([`BstMap::size`], [`BstMap::max_depth`])
//! - Ordered enumeration ([`BstMap::as_list`], [`BstMap::iter`])
//! - A compact textual rendering via [`std::fmt::Display`]
//!
//! There is no removal operation.
//!
//! ## Example
//!
//! ```rust
//! use bstmap::prelude::*;
//!
//! let mut map = BstMap::new();
//! map.put(5, "e");
//! map.put(3, "c");
//! map.put(8, "h");
//!
//! assert_eq!(map.get(&3), Some(&"c"));
//! assert_eq!(map.get(&4), None);
//! assert_eq!(map.size(), 3);
//! assert_eq!(map.max_depth(), 2);
//! assert_eq!(map.to_string(), "{ (3, c) (5, e) (8, h) }");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use bstmap::prelude::*;
///
/// let map: BstMap<i32, i32> = BstMap::new();
/// assert!(map.is_empty());
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;

pub use tree::BstMap;
