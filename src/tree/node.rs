//! Tree nodes and the recursive algorithms that operate on them.

use std::borrow::Borrow;
use std::cmp::{Ordering, max};
use std::fmt;
use std::mem;

// =============================================================================
// Node Definition
// =============================================================================

/// A child slot: either empty or the sole owner of a subtree.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// One key-value pair together with the subtree below it.
///
/// Every key reachable through `left` is strictly less than `key` and every
/// key reachable through `right` is strictly greater. Nodes are only ever
/// created by [`Node::put`], which preserves that ordering.
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a node with no children.
    pub(super) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Number of nodes in this subtree, this one included.
    pub(super) fn count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Self::count)
            + self.right.as_deref().map_or(0, Self::count)
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// A leaf has depth 1.
    pub(super) fn max_depth(&self) -> usize {
        1 + max(
            self.left.as_deref().map_or(0, Self::max_depth),
            self.right.as_deref().map_or(0, Self::max_depth),
        )
    }

    /// Appends every entry of this subtree to `entries` in ascending key order.
    ///
    /// The same vector is threaded through the whole traversal, so each node
    /// lands in it exactly once.
    pub(super) fn as_list<'a>(&'a self, entries: &mut Vec<(&'a K, &'a V)>) {
        if let Some(left) = self.left.as_deref() {
            left.as_list(entries);
        }
        entries.push((&self.key, &self.value));
        if let Some(right) = self.right.as_deref() {
            right.as_list(entries);
        }
    }

    /// The entry with the smallest key in this subtree.
    pub(super) fn min(&self) -> (&K, &V) {
        self.left
            .as_deref()
            .map_or((&self.key, &self.value), Self::min)
    }

    /// The entry with the largest key in this subtree.
    pub(super) fn max(&self) -> (&K, &V) {
        self.right
            .as_deref()
            .map_or((&self.key, &self.value), Self::max)
    }

    /// Looks up the value stored under `key` in this subtree.
    pub(super) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(self.key.borrow()) {
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_deref()?.get(key),
            Ordering::Less => self.left.as_deref()?.get(key),
        }
    }

    /// Mutable counterpart of [`Node::get`].
    pub(super) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(self.key.borrow()) {
            Ordering::Equal => Some(&mut self.value),
            Ordering::Greater => self.right.as_deref_mut()?.get_mut(key),
            Ordering::Less => self.left.as_deref_mut()?.get_mut(key),
        }
    }

    /// Releases a forest of subtrees one node at a time.
    ///
    /// Dropping a `Box<Node>` directly recurses once per level, which a long
    /// chain can turn into a stack overflow.
    pub(super) fn release(mut pending: Vec<Box<Self>>) {
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Inserts `key` into this subtree, or overwrites its value in place.
    ///
    /// Returns the previous value when the key was already present. New keys
    /// are attached as a leaf in the first empty child slot on their search
    /// path. The descent is a loop over child slots, so sorted insertion into
    /// a long chain uses constant stack.
    pub(super) fn put(&mut self, key: K, value: V) -> Option<V> {
        match key.cmp(&self.key) {
            Ordering::Equal => Some(mem::replace(&mut self.value, value)),
            Ordering::Greater => Self::put_into(&mut self.right, key, value),
            Ordering::Less => Self::put_into(&mut self.left, key, value),
        }
    }

    fn put_into(mut slot: &mut Link<K, V>, key: K, value: V) -> Option<V> {
        while let Some(node) = slot {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
                Ordering::Greater => slot = &mut node.right,
                Ordering::Less => slot = &mut node.left,
            }
        }
        *slot = Some(Box::new(Self::leaf(key, value)));
        None
    }
}

/// Pending work of [`Node::duplicate`].
enum Step<'a, K, V> {
    Visit(Option<&'a Node<K, V>>),
    Build(&'a Node<K, V>),
}

impl<K: Clone, V: Clone> Node<K, V> {
    /// Deep-copies a subtree, keeping its exact shape.
    ///
    /// Subtrees are copied bottom-up from an explicit stack: both children of
    /// a node are finished before the node itself is built.
    pub(super) fn duplicate(root: Option<&Self>) -> Link<K, V> {
        let mut steps = vec![Step::Visit(root)];
        let mut built: Vec<Link<K, V>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(None) => built.push(None),
                Step::Visit(Some(node)) => {
                    steps.push(Step::Build(node));
                    steps.push(Step::Visit(node.right.as_deref()));
                    steps.push(Step::Visit(node.left.as_deref()));
                }
                Step::Build(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Self {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }
        built.pop().flatten()
    }
}

/// Renders this subtree in key order as `(key, value) ` groups.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for Node<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(left) = self.left.as_deref() {
            write!(formatter, "{left}")?;
        }
        write!(formatter, "({}, {}) ", self.key, self.value)?;
        if let Some(right) = self.right.as_deref() {
            write!(formatter, "{right}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
