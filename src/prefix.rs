//! Probe-direction iterators: stored keys that are prefixes of a probe key.
//!
//! Each walks the probe path from the root one part at a time, stopping at
//! the first missing child, and yields matches in increasing key length.

use crate::keys::{FromParts, Part};
use crate::node::Node;
use crate::order::{ChildMap, Order};
use crate::trie::{INLINE_PARTS, PartBuf};

type ProbeParts<P> = smallvec::IntoIter<[P; INLINE_PARTS]>;

/// Iterator over `(key, &value)` for every stored key that is a prefix of
/// the probe. Created by [`crate::Trie::prefix_items`].
pub struct PrefixItems<'a, K: FromParts, V, O: Order> {
    node: Option<&'a Node<K::Part, V, O>>,
    probe: ProbeParts<K::Part>,
    taken: PartBuf<K::Part>,
}

impl<'a, K: FromParts, V, O: Order> PrefixItems<'a, K, V, O> {
    pub(crate) fn new(root: &'a Node<K::Part, V, O>, probe: PartBuf<K::Part>) -> Self {
        PrefixItems {
            node: Some(root),
            probe: probe.into_iter(),
            taken: PartBuf::new(),
        }
    }
}

impl<'a, K: FromParts, V, O: Order> Iterator for PrefixItems<'a, K, V, O> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.node.take()?;
            let depth = self.taken.len();
            // Line up the next node on the probe path before yielding.
            if let Some(part) = self.probe.next() {
                if let Some(child) = node.children.get(&part) {
                    self.taken.push(part);
                    self.node = Some(child);
                }
            }
            if let Some(value) = node.value.as_ref() {
                return Some((K::from_parts(&self.taken[..depth]), value));
            }
        }
    }
}

impl<'a, K: FromParts, V, O: Order> Clone for PrefixItems<'a, K, V, O> {
    fn clone(&self) -> Self {
        PrefixItems {
            node: self.node,
            probe: self.probe.clone(),
            taken: self.taken.clone(),
        }
    }
}

/// Iterator over every stored key that is a prefix of the probe, shortest
/// first. Created by [`crate::Trie::prefixes`].
pub struct Prefixes<'a, K: FromParts, V, O: Order> {
    items: PrefixItems<'a, K, V, O>,
}

impl<'a, K: FromParts, V, O: Order> Prefixes<'a, K, V, O> {
    pub(crate) fn new(root: &'a Node<K::Part, V, O>, probe: PartBuf<K::Part>) -> Self {
        Prefixes {
            items: PrefixItems::new(root, probe),
        }
    }
}

impl<'a, K: FromParts, V, O: Order> Iterator for Prefixes<'a, K, V, O> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.items.next().map(|(key, _)| key)
    }
}

impl<'a, K: FromParts, V, O: Order> Clone for Prefixes<'a, K, V, O> {
    fn clone(&self) -> Self {
        Prefixes {
            items: self.items.clone(),
        }
    }
}

/// Iterator over the values stored at prefixes of the probe. Walks without a
/// parts buffer since no key is reconstructed. Created by
/// [`crate::Trie::prefix_values`].
pub struct PrefixValues<'a, P: Part, V, O: Order> {
    node: Option<&'a Node<P, V, O>>,
    probe: ProbeParts<P>,
}

impl<'a, P: Part, V, O: Order> PrefixValues<'a, P, V, O> {
    pub(crate) fn new(root: &'a Node<P, V, O>, probe: PartBuf<P>) -> Self {
        PrefixValues {
            node: Some(root),
            probe: probe.into_iter(),
        }
    }
}

impl<'a, P: Part, V, O: Order> Iterator for PrefixValues<'a, P, V, O> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        loop {
            let node = self.node.take()?;
            if let Some(part) = self.probe.next() {
                self.node = node.children.get(&part);
            }
            if let Some(value) = node.value.as_ref() {
                return Some(value);
            }
        }
    }
}

impl<'a, P: Part, V, O: Order> Clone for PrefixValues<'a, P, V, O> {
    fn clone(&self) -> Self {
        PrefixValues {
            node: self.node,
            probe: self.probe.clone(),
        }
    }
}
