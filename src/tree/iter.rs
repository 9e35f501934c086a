//! In-order iterators over a [`BstMap`](super::BstMap).
//!
//! All three iterators keep an explicit stack holding the path of pending
//! ancestors, so they never hold more than `max_depth` entries at once and
//! never recurse.

use std::iter::FusedIterator;

use super::node::{Link, Node};

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over key-value pairs of a [`BstMap`](super::BstMap), in
/// ascending key order.
pub struct BstMapIterator<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> BstMapIterator<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut iterator = Self { stack: Vec::new() };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for BstMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<K, V> FusedIterator for BstMapIterator<'_, K, V> {}

impl<K, V> Clone for BstMapIterator<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

// =============================================================================
// Mutable Iterator
// =============================================================================

type Pending<'a, K, V> = (&'a K, &'a mut V, Option<&'a mut Node<K, V>>);

/// An iterator over keys and mutable values of a [`BstMap`](super::BstMap),
/// in ascending key order.
///
/// Each visited node is split into its key, its value and its right subtree
/// as soon as it is reached, so no two live borrows ever overlap.
pub struct BstMapIterMut<'a, K, V> {
    stack: Vec<Pending<'a, K, V>>,
}

impl<'a, K, V> BstMapIterMut<'a, K, V> {
    pub(super) fn new(root: Option<&'a mut Node<K, V>>) -> Self {
        let mut iterator = Self { stack: Vec::new() };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: Option<&'a mut Node<K, V>>) {
        while let Some(node) = link {
            let Node {
                key,
                value,
                left,
                right,
            } = node;
            let key: &'a K = key;
            self.stack.push((key, value, right.as_deref_mut()));
            link = left.as_deref_mut();
        }
    }
}

impl<'a, K, V> Iterator for BstMapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value, right) = self.stack.pop()?;
        self.push_left_spine(right);
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<K, V> FusedIterator for BstMapIterMut<'_, K, V> {}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over key-value pairs of a [`BstMap`](super::BstMap), in
/// ascending key order.
///
/// Nodes sitting on the stack have already had their left subtree detached.
pub struct BstMapIntoIterator<K, V> {
    stack: Vec<Box<Node<K, V>>>,
}

impl<K, V> BstMapIntoIterator<K, V> {
    pub(super) fn new(root: Link<K, V>) -> Self {
        let mut iterator = Self { stack: Vec::new() };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for BstMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node {
            key, value, right, ..
        } = *node;
        self.push_left_spine(right);
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<K, V> FusedIterator for BstMapIntoIterator<K, V> {}

impl<K, V> Drop for BstMapIntoIterator<K, V> {
    fn drop(&mut self) {
        Node::release(std::mem::take(&mut self.stack));
    }
}
