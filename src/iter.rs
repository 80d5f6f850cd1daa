//! Depth-first view iterators over a trie, plus the collection traits built
//! on them.
//!
//! Traversal is pre-order with an explicit stack of children iterators and a
//! single push/pop parts buffer, so each emitted key is reconstructed without
//! storing parts per node. Every iterator is finite, independent of its
//! siblings, and cheap to clone mid-flight.

use crate::keys::{FromParts, Part};
use crate::node::Node;
use crate::order::{ChildMap, Order};
use crate::trie::{PartBuf, Trie};

type Children<'a, P, V, O> =
    <<O as Order>::Map<P, Node<P, V, O>> as ChildMap<P, Node<P, V, O>>>::Iter<'a>;

type ChildrenInto<P, V, O> =
    <<O as Order>::Map<P, Node<P, V, O>> as ChildMap<P, Node<P, V, O>>>::IntoIter;

/// Pre-order walk over a subtree. After each [`Walk::advance`] the parts
/// buffer spells out the full key of the value just produced.
struct Walk<'a, P: Part, V, O: Order> {
    pending: Option<&'a Node<P, V, O>>,
    stack: Vec<Children<'a, P, V, O>>,
    parts: PartBuf<P>,
}

impl<'a, P: Part, V, O: Order> Walk<'a, P, V, O> {
    fn new(start: Option<&'a Node<P, V, O>>, parts: PartBuf<P>) -> Self {
        Walk {
            pending: start,
            stack: Vec::new(),
            parts,
        }
    }

    /// Steps to the next value-bearing node.
    fn advance(&mut self) -> Option<&'a V> {
        loop {
            if let Some(node) = self.pending.take() {
                self.stack.push(node.children.iter());
                if let Some(value) = node.value.as_ref() {
                    return Some(value);
                }
            }
            match self.stack.last_mut()?.next() {
                Some((part, child)) => {
                    self.parts.push(part.clone());
                    self.pending = Some(child);
                }
                None => {
                    self.stack.pop();
                    // The root frame of the walk has no part of its own.
                    if !self.stack.is_empty() {
                        self.parts.pop();
                    }
                }
            }
        }
    }

    fn parts(&self) -> &[P] {
        &self.parts
    }
}

impl<'a, P: Part, V, O: Order> Clone for Walk<'a, P, V, O> {
    fn clone(&self) -> Self {
        Walk {
            pending: self.pending,
            stack: self.stack.clone(),
            parts: self.parts.clone(),
        }
    }
}

/// Borrowing iterator over `(key, &value)` items. Created by [`Trie::iter`]
/// and [`Trie::iter_prefix`].
pub struct Iter<'a, K: FromParts, V, O: Order> {
    walk: Walk<'a, K::Part, V, O>,
}

impl<'a, K: FromParts, V, O: Order> Iter<'a, K, V, O> {
    pub(crate) fn new(start: Option<&'a Node<K::Part, V, O>>, parts: PartBuf<K::Part>) -> Self {
        Iter {
            walk: Walk::new(start, parts),
        }
    }
}

impl<'a, K: FromParts, V, O: Order> Iterator for Iter<'a, K, V, O> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.walk.advance()?;
        Some((K::from_parts(self.walk.parts()), value))
    }
}

impl<'a, K: FromParts, V, O: Order> Clone for Iter<'a, K, V, O> {
    fn clone(&self) -> Self {
        Iter {
            walk: self.walk.clone(),
        }
    }
}

/// Borrowing iterator over keys. Created by [`Trie::keys`] and
/// [`Trie::keys_prefix`].
pub struct Keys<'a, K: FromParts, V, O: Order> {
    walk: Walk<'a, K::Part, V, O>,
}

impl<'a, K: FromParts, V, O: Order> Keys<'a, K, V, O> {
    pub(crate) fn new(start: Option<&'a Node<K::Part, V, O>>, parts: PartBuf<K::Part>) -> Self {
        Keys {
            walk: Walk::new(start, parts),
        }
    }
}

impl<'a, K: FromParts, V, O: Order> Iterator for Keys<'a, K, V, O> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.walk.advance()?;
        Some(K::from_parts(self.walk.parts()))
    }
}

impl<'a, K: FromParts, V, O: Order> Clone for Keys<'a, K, V, O> {
    fn clone(&self) -> Self {
        Keys {
            walk: self.walk.clone(),
        }
    }
}

/// Borrowing iterator over values. Created by [`Trie::values`] and
/// [`Trie::values_prefix`].
pub struct Values<'a, P: Part, V, O: Order> {
    walk: Walk<'a, P, V, O>,
}

impl<'a, P: Part, V, O: Order> Values<'a, P, V, O> {
    pub(crate) fn new(start: Option<&'a Node<P, V, O>>) -> Self {
        Values {
            walk: Walk::new(start, PartBuf::new()),
        }
    }
}

impl<'a, P: Part, V, O: Order> Iterator for Values<'a, P, V, O> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.walk.advance()
    }
}

impl<'a, P: Part, V, O: Order> Clone for Values<'a, P, V, O> {
    fn clone(&self) -> Self {
        Values {
            walk: self.walk.clone(),
        }
    }
}

/// Owning pre-order iterator, consuming the trie.
pub struct IntoIter<K: FromParts, V, O: Order> {
    pending: Option<Node<K::Part, V, O>>,
    stack: Vec<ChildrenInto<K::Part, V, O>>,
    parts: PartBuf<K::Part>,
}

impl<K: FromParts, V, O: Order> Iterator for IntoIter<K, V, O> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        loop {
            if let Some(node) = self.pending.take() {
                let Node { value, children } = node;
                self.stack.push(children.into_pairs());
                if let Some(value) = value {
                    return Some((K::from_parts(&self.parts), value));
                }
            }
            match self.stack.last_mut()?.next() {
                Some((part, child)) => {
                    self.parts.push(part);
                    self.pending = Some(child);
                }
                None => {
                    self.stack.pop();
                    if !self.stack.is_empty() {
                        self.parts.pop();
                    }
                }
            }
        }
    }
}

impl<K: FromParts, V, O: Order> IntoIterator for Trie<K, V, O> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, O>;

    fn into_iter(self) -> IntoIter<K, V, O> {
        IntoIter {
            pending: Some(self.root),
            stack: Vec::new(),
            parts: PartBuf::new(),
        }
    }
}

impl<'a, K: FromParts, V, O: Order> IntoIterator for &'a Trie<K, V, O> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V, O>;

    fn into_iter(self) -> Iter<'a, K, V, O> {
        self.iter()
    }
}

impl<K: FromParts, V, O: Order> FromIterator<(K, V)> for Trie<K, V, O> {
    /// Builds a trie from `(key, value)` pairs; the last write wins on
    /// duplicate keys.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: FromParts, V, O: Order> Extend<(K, V)> for Trie<K, V, O> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
