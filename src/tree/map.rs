//! The public map facade.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::iter::{BstMapIntoIterator, BstMapIterMut, BstMapIterator};
use super::node::{Link, Node};

// =============================================================================
// BstMap Definition
// =============================================================================

/// An ordered map backed by an unbalanced binary search tree.
///
/// Keys must implement `Ord`; values are unconstrained. The map owns an
/// optional root node and forwards every non-trivial operation to it, so the
/// only logic living here is the handling of the empty map.
///
/// # Time Complexity
///
/// With `D` the current depth of the tree (between `log2(N)` and `N`):
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `new`              | O(1)       |
/// | `put` / `insert`   | O(D)       |
/// | `get` / `get_mut`  | O(D)       |
/// | `size`             | O(N)       |
/// | `max_depth`        | O(N)       |
/// | `as_list` / `iter` | O(N)       |
/// | `is_empty`         | O(1)       |
///
/// # Recursion Depth
///
/// `get`, `get_mut`, `size`, `max_depth`, `min`, `max`, `as_list` and the
/// `Display` rendering recurse once per level, so their stack use grows with
/// `D`. A degenerate chain of a few thousand entries can exhaust a small
/// thread stack (such as the 2 MiB default of spawned threads) in an
/// unoptimized build. `put`, `insert`, `clone`, the iterators and `Drop` walk
/// the tree with loops and explicit stacks and are safe at any depth.
///
/// # Examples
///
/// ```rust
/// use bstmap::BstMap;
///
/// let mut map = BstMap::new();
/// for (key, value) in [(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d")] {
///     map.put(key, value);
/// }
///
/// assert_eq!(map.size(), 5);
/// assert_eq!(map.get(&4), Some(&"d"));
/// assert_eq!(map.to_string(), "{ (1, a) (3, c) (4, d) (5, e) (8, h) }");
/// ```
pub struct BstMap<K, V> {
    /// Root node; `None` exactly when the map is empty
    root: Link<K, V>,
}

static_assertions::assert_impl_all!(BstMap<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(BstMapIterator<'static, i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(BstMapIntoIterator<String, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(BstMap<std::rc::Rc<i32>, i32>: Send, Sync);

impl<K, V> BstMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let map: BstMap<i32, String> = BstMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.to_string(), "{ }");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of entries in the map.
    ///
    /// The count is recomputed by visiting every node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.put("a", 1);
    /// map.put("b", 2);
    /// map.put("a", 3);
    /// assert_eq!(map.size(), 2);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty map has depth 0 and a single entry has depth 1. Inserting
    /// `n` keys in increasing order yields depth `n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.max_depth(), 0);
    /// for key in 1..=4 {
    ///     map.put(key, ());
    /// }
    /// assert_eq!(map.max_depth(), 4);
    /// ```
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.root.as_deref().map_or(0, Node::max_depth)
    }

    /// Returns every entry in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let map: BstMap<i32, &str> = [(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
    /// assert_eq!(map.as_list(), vec![(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// ```
    #[must_use]
    pub fn as_list(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.as_list(&mut entries);
        }
        entries
    }

    /// Consumes the map and returns its entries in ascending key order.
    #[must_use]
    pub fn into_list(self) -> Vec<(K, V)> {
        self.into_iter().collect()
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root.as_deref().map(Node::min)
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.root.as_deref().map(Node::max)
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let map: BstMap<i32, i32> = [(3, 30), (1, 10), (2, 20)].into_iter().collect();
    /// let keys: Vec<i32> = map.iter().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> BstMapIterator<'_, K, V> {
        BstMapIterator::new(self.root.as_deref())
    }

    /// Returns an iterator over keys and mutable values in ascending key order.
    pub fn iter_mut(&mut self) -> BstMapIterMut<'_, K, V> {
        BstMapIterMut::new(self.root.as_deref_mut())
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let map: BstMap<i32, i32> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
    /// let sum: i32 = map.values().sum();
    /// assert_eq!(sum, 60);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable values in key order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.iter_mut().map(|(_, value)| value)
    }

    /// Returns a reference to the value stored under `key`, or `None` when
    /// the key is absent.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    /// A stored value is never confused with absence: a map of `Option`s
    /// answers `Some(&None)` for a key holding `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.put("hello".to_string(), 42);
    ///
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_deref()?.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.put(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&1), Some(&11));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_deref_mut()?.get_mut(key)
    }

    /// Returns `true` if the map contains a value for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Stores `value` under `key`.
    ///
    /// An existing value for the same key is overwritten in place; otherwise
    /// a new leaf is attached where the search for `key` ends. The first
    /// `put` into an empty map creates the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.put(1, "one");
    /// map.put(1, "ONE");
    ///
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// assert_eq!(map.size(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    /// Stores `value` under `key` and returns the value it replaced, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert(7, "seven"), None);
    /// assert_eq!(map.insert(7, "SEVEN"), Some("seven"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.root.as_deref_mut() {
            Some(root) => root.put(key, value),
            None => {
                self.root = Some(Box::new(Node::leaf(key, value)));
                None
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for BstMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for BstMap<K, V> {
    /// Copies every entry into a tree of the same shape.
    fn clone(&self) -> Self {
        Self {
            root: Node::duplicate(self.root.as_deref()),
        }
    }
}

impl<K, V> Drop for BstMap<K, V> {
    fn drop(&mut self) {
        Node::release(self.root.take().into_iter().collect());
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BstMap<K, V> {
    /// Builds a map by inserting the pairs in iteration order.
    ///
    /// Later pairs overwrite earlier ones with the same key. Sorted input
    /// produces a chain whose depth equals its size.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for BstMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> IntoIterator for BstMap<K, V> {
    type Item = (K, V);
    type IntoIter = BstMapIntoIterator<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        BstMapIntoIterator::new(self.root.take())
    }
}

impl<'a, K, V> IntoIterator for &'a BstMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = BstMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut BstMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = BstMapIterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Two maps are equal when they hold the same entries, whatever the shape of
/// their trees.
impl<K: PartialEq, V: PartialEq> PartialEq for BstMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for BstMap<K, V> {}

/// Hashes the number of entries, then each entry in key order, so that equal
/// maps hash equally regardless of insertion order.
impl<K: Hash, V: Hash> Hash for BstMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BstMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the map as `{ (k1, v1) (k2, v2) ... }` in ascending key order, or
/// `{ }` when empty.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for BstMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => write!(formatter, "{{ }}"),
            Some(root) => write!(formatter, "{{ {root}}}"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_root_is_absent_until_first_put() {
        let mut map = BstMap::new();
        assert!(map.root.is_none());
        map.put(1, "one");
        assert!(map.root.is_some());
    }

    #[rstest]
    fn test_first_put_creates_leaf_root() {
        let mut map = BstMap::new();
        map.put(5, "e");
        let root = map.root.as_deref().expect("root");
        assert_eq!(root.key, 5);
        assert!(root.left.is_none() && root.right.is_none());
    }

    #[rstest]
    fn test_later_puts_keep_the_root() {
        let mut map = BstMap::new();
        map.put(5, "e");
        map.put(3, "c");
        map.put(8, "h");
        assert_eq!(map.root.as_ref().map(|root| root.key), Some(5));
    }

    #[rstest]
    fn test_empty_map_operations_are_total() {
        let mut map: BstMap<i32, String> = BstMap::new();
        assert_eq!(map.size(), 0);
        assert_eq!(map.max_depth(), 0);
        assert!(map.as_list().is_empty());
        assert_eq!(map.get(&1), None);
        assert_eq!(map.get_mut(&1), None);
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
        assert_eq!(map.to_string(), "{ }");
        assert_eq!(format!("{map:?}"), "{}");
    }

    #[rstest]
    fn test_drop_releases_long_chain_without_recursing() {
        let mut map = BstMap::new();
        map.root = Some(Box::new(Node::leaf(0, ())));
        let mut tail = map.root.as_deref_mut().expect("root");
        for key in 1..200_000 {
            tail.right = Some(Box::new(Node::leaf(key, ())));
            tail = tail.right.as_deref_mut().expect("just attached");
        }
        drop(map);
    }

    #[rstest]
    fn test_sorted_puts_build_a_long_chain() {
        let mut map = BstMap::new();
        for key in 0..8_000 {
            map.put(key, key * 2);
        }

        assert_eq!(map.iter().count(), 8_000);
        assert_eq!(map.iter().last(), Some((&7_999, &15_998)));
        assert_eq!(map.insert(7_999, 0), Some(15_998));
        assert_eq!(map.insert(8_000, 1), None);
        assert_eq!(map.iter().last(), Some((&8_000, &1)));
    }

    #[rstest]
    fn test_clone_copies_long_chain_without_recursing() {
        let mut map = BstMap::new();
        map.root = Some(Box::new(Node::leaf(0, 0)));
        let mut tail = map.root.as_deref_mut().expect("root");
        for key in 1..200_000 {
            tail.right = Some(Box::new(Node::leaf(key, key)));
            tail = tail.right.as_deref_mut().expect("just attached");
        }

        let copy = map.clone();
        assert!(copy.iter().eq(map.iter()));
    }

    #[rstest]
    fn test_clone_keeps_tree_shape() {
        let original: BstMap<i32, &str> = [(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d")]
            .into_iter()
            .collect();
        let copy = original.clone();

        assert_eq!(copy.max_depth(), original.max_depth());
        assert_eq!(copy.root.as_ref().map(|root| root.key), Some(5));
        assert_eq!(copy.to_string(), original.to_string());
    }

    #[rstest]
    fn test_clone_is_independent() {
        let mut original: BstMap<i32, String> =
            (1..=3).map(|key| (key, key.to_string())).collect();
        let copy = original.clone();
        original.put(2, "two".to_string());

        assert_eq!(original.get(&2), Some(&"two".to_string()));
        assert_eq!(copy.get(&2), Some(&"2".to_string()));
    }
}
