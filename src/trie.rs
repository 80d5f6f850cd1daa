use std::borrow::Borrow;
use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

use crate::iter::{Iter, Keys, Values};
use crate::keys::{FromParts, Key};
use crate::node::Node;
use crate::order::{ChildMap, Lexicographic, Order, Unordered};
use crate::prefix::{PrefixItems, PrefixValues, Prefixes};

/// Part buffers spill to the heap past this depth.
pub(crate) const INLINE_PARTS: usize = 8;

pub(crate) type PartBuf<P> = SmallVec<[P; INLINE_PARTS]>;

/// A mapping from sequence keys to values, stored as a prefix tree: all keys
/// sharing a prefix share a path from the root.
///
/// Beyond the usual map operations, a trie answers two prefix-oriented
/// queries without scanning the whole map: everything stored *under* a
/// prefix ([`Trie::iter_prefix`] and friends), and every stored key that *is*
/// a prefix of a probe key ([`Trie::prefixes`], [`Trie::longest_prefix`] and
/// friends).
///
/// The key type `K` supplies both decomposition into parts and reassembly
/// ([`FromParts`]); the `O` parameter picks the children container for every
/// node ([`Order`]), which decides whether bulk views come out sorted. See
/// [`SortedTrie`], [`StringTrie`] and [`SortedStringTrie`] for the stock
/// combinations.
///
/// ```
/// use seqtrie::StringTrie;
///
/// let mut trie = StringTrie::new();
/// trie.insert("ab".to_owned(), 1);
/// trie.insert("abc".to_owned(), 2);
///
/// assert_eq!(trie.get("ab"), Some(&1));
/// assert_eq!(trie.longest_prefix_value("abcde"), Some(&2));
/// ```
pub struct Trie<K: FromParts, V, O: Order = Unordered> {
    pub(crate) root: Node<K::Part, V, O>,
}

/// A trie whose bulk views iterate in lexicographic key order.
pub type SortedTrie<K, V> = Trie<K, V, Lexicographic>;

/// A trie over string keys, decomposed into `char` parts.
pub type StringTrie<V> = Trie<String, V, Unordered>;

/// A string-keyed trie whose bulk views iterate in lexicographic order.
pub type SortedStringTrie<V> = Trie<String, V, Lexicographic>;

impl<K: FromParts, V, O: Order> Trie<K, V, O> {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Trie { root: Node::new() }
    }

    /// Creates a trie mapping every key in `keys` to a clone of `value`.
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        let mut trie = Trie::new();
        for key in keys {
            trie.insert(key, value.clone());
        }
        trie
    }

    /// The node at the empty-key prefix, owning the entire tree.
    pub fn root(&self) -> &Node<K::Part, V, O> {
        &self.root
    }

    /// Number of stored keys. Computed by walking the tree.
    pub fn len(&self) -> usize {
        self.root.size(false)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_expendable()
    }

    /// Total number of nodes, including valueless interior ones. Stays equal
    /// to the node count of a freshly built trie with the same contents,
    /// since mutators prune dead nodes eagerly.
    pub fn node_count(&self) -> usize {
        self.root.size(true)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.root = Node::new();
    }

    /// Returns the value at `key`, or `None` if the path breaks or ends on a
    /// valueless interior node.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        self.root.descend(key.parts())?.value.as_ref()
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        self.root.descend_mut(key.parts())?.value.as_mut()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts `value` at `key`, creating interior nodes for every missing
    /// part along the path. Returns the value previously stored there.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut node = &mut self.root;
        for part in key.parts() {
            node = node.children.or_insert_with(part, Node::new);
        }
        node.value.replace(value)
    }

    /// Removes and returns the value at `key`, pruning any nodes left with
    /// neither value nor children on the way back up. When the key is
    /// missing, returns `None` without touching the tree.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        let mut parts = key.parts();
        Self::remove_in(&mut self.root, &mut parts)
    }

    fn remove_in(
        node: &mut Node<K::Part, V, O>,
        parts: &mut impl Iterator<Item = K::Part>,
    ) -> Option<V> {
        let Some(part) = parts.next() else {
            return node.value.take();
        };
        let child = node.children.get_mut(&part)?;
        let removed = Self::remove_in(child, parts)?;
        if child.is_expendable() {
            node.children.remove(&part);
        }
        Some(removed)
    }

    /// Lazy view of all `(key, value)` items, in the children-ordering of
    /// this trie's [`Order`] strategy. Each call starts an independent
    /// traversal.
    pub fn iter(&self) -> Iter<'_, K, V, O> {
        Iter::new(Some(&self.root), PartBuf::new())
    }

    pub fn keys(&self) -> Keys<'_, K, V, O> {
        Keys::new(Some(&self.root), PartBuf::new())
    }

    pub fn values(&self) -> Values<'_, K::Part, V, O> {
        Values::new(Some(&self.root))
    }

    /// Like [`Trie::iter`], restricted to keys starting with `prefix`. A
    /// prefix leading nowhere yields an empty view, not an error.
    pub fn iter_prefix<Q>(&self, prefix: &Q) -> Iter<'_, K, V, O>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        let (node, parts) = self.subtree(prefix);
        Iter::new(node, parts)
    }

    pub fn keys_prefix<Q>(&self, prefix: &Q) -> Keys<'_, K, V, O>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        let (node, parts) = self.subtree(prefix);
        Keys::new(node, parts)
    }

    pub fn values_prefix<Q>(&self, prefix: &Q) -> Values<'_, K::Part, V, O>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        let (node, _) = self.subtree(prefix);
        Values::new(node)
    }

    /// Follows `prefix` down from the root, accumulating the consumed parts.
    /// A broken path means the restricted views are empty.
    fn subtree<Q>(&self, prefix: &Q) -> (Option<&Node<K::Part, V, O>>, PartBuf<K::Part>)
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        let mut parts = PartBuf::new();
        let mut node = &self.root;
        for part in prefix.parts() {
            match node.children.get(&part) {
                Some(child) => {
                    parts.push(part);
                    node = child;
                }
                None => return (None, parts),
            }
        }
        (Some(node), parts)
    }

    /// Lazy view of every stored key that is a prefix of `probe`, shortest
    /// first. The empty key comes first when it holds a value.
    pub fn prefixes<Q>(&self, probe: &Q) -> Prefixes<'_, K, V, O>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        Prefixes::new(&self.root, probe.parts().collect())
    }

    /// Like [`Trie::prefixes`], yielding `(key, value)` items.
    pub fn prefix_items<Q>(&self, probe: &Q) -> PrefixItems<'_, K, V, O>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        PrefixItems::new(&self.root, probe.parts().collect())
    }

    /// Like [`Trie::prefixes`], yielding only the values.
    pub fn prefix_values<Q>(&self, probe: &Q) -> PrefixValues<'_, K::Part, V, O>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        PrefixValues::new(&self.root, probe.parts().collect())
    }

    /// The longest stored key that is a prefix of `probe`, with its value.
    ///
    /// `None` when no prefix of `probe` is stored; pair it with
    /// [`Option::unwrap_or`] to supply a fallback.
    pub fn longest_prefix_item<Q>(&self, probe: &Q) -> Option<(K, &V)>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        let mut parts: PartBuf<K::Part> = PartBuf::new();
        let mut node = &self.root;
        let mut best = node.value.as_ref().map(|value| (0, value));
        for part in probe.parts() {
            match node.children.get(&part) {
                Some(child) => {
                    parts.push(part);
                    node = child;
                    if let Some(value) = node.value.as_ref() {
                        best = Some((parts.len(), value));
                    }
                }
                None => break,
            }
        }
        best.map(|(len, value)| (K::from_parts(&parts[..len]), value))
    }

    /// The longest stored key that is a prefix of `probe`.
    pub fn longest_prefix<Q>(&self, probe: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        self.longest_prefix_item(probe).map(|(key, _)| key)
    }

    /// The value of the longest stored key that is a prefix of `probe`.
    pub fn longest_prefix_value<Q>(&self, probe: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Key<Part = K::Part> + ?Sized,
    {
        let mut node = &self.root;
        let mut best = node.value.as_ref();
        for part in probe.parts() {
            match node.children.get(&part) {
                Some(child) => {
                    node = child;
                    best = node.value.as_ref().or(best);
                }
                None => break,
            }
        }
        best
    }
}

impl<K: FromParts, V, O: Order> Default for Trie<K, V, O> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<K: FromParts, V: Clone, O: Order> Clone for Trie<K, V, O> {
    /// Deep copy: the clone shares no nodes with the original, so mutating
    /// either leaves the other untouched.
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
        }
    }
}

impl<K: FromParts, V: PartialEq, O: Order> PartialEq for Trie<K, V, O> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<K: FromParts, V: Eq, O: Order> Eq for Trie<K, V, O> {}

impl<K: FromParts + fmt::Debug, V: fmt::Debug, O: Order> fmt::Debug for Trie<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, O, Q> Index<&Q> for Trie<K, V, O>
where
    K: FromParts + Borrow<Q>,
    O: Order,
    Q: Key<Part = K::Part> + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present in the trie.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found in trie")
    }
}
