use std::collections::{BTreeMap, HashMap, btree_map, hash_map};

use crate::keys::Part;

/// The children mapping owned by every trie node.
///
/// Only the operations the trie algorithms actually need; implemented by the
/// two std maps the [`Order`] strategies choose between.
pub trait ChildMap<P: Part, T>: Default {
    type Iter<'a>: Iterator<Item = (&'a P, &'a T)> + Clone
    where
        Self: 'a,
        P: 'a,
        T: 'a;
    type IntoIter: Iterator<Item = (P, T)>;

    fn get(&self, part: &P) -> Option<&T>;
    fn get_mut(&mut self, part: &P) -> Option<&mut T>;
    fn insert(&mut self, part: P, child: T) -> Option<T>;
    /// Insert-if-absent, returning the child at `part`.
    fn or_insert_with(&mut self, part: P, child: impl FnOnce() -> T) -> &mut T;
    fn remove(&mut self, part: &P) -> Option<T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn iter(&self) -> Self::Iter<'_>;
    fn into_pairs(self) -> Self::IntoIter;
}

/// Child-ordering strategy. Picks the children container used by every node,
/// which in turn fixes the iteration order of every bulk view.
pub trait Order {
    type Map<P: Part, T>: ChildMap<P, T>;
}

/// Hash-based children; bulk views iterate in no particular order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unordered;

/// Sorted children; bulk views iterate in lexicographic key order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lexicographic;

impl Order for Unordered {
    type Map<P: Part, T> = HashMap<P, T>;
}

impl Order for Lexicographic {
    type Map<P: Part, T> = BTreeMap<P, T>;
}

impl<P: Part, T> ChildMap<P, T> for HashMap<P, T> {
    type Iter<'a>
        = hash_map::Iter<'a, P, T>
    where
        Self: 'a,
        P: 'a,
        T: 'a;
    type IntoIter = hash_map::IntoIter<P, T>;

    fn get(&self, part: &P) -> Option<&T> {
        HashMap::get(self, part)
    }

    fn get_mut(&mut self, part: &P) -> Option<&mut T> {
        HashMap::get_mut(self, part)
    }

    fn insert(&mut self, part: P, child: T) -> Option<T> {
        HashMap::insert(self, part, child)
    }

    fn or_insert_with(&mut self, part: P, child: impl FnOnce() -> T) -> &mut T {
        self.entry(part).or_insert_with(child)
    }

    fn remove(&mut self, part: &P) -> Option<T> {
        HashMap::remove(self, part)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn into_pairs(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<P: Part, T> ChildMap<P, T> for BTreeMap<P, T> {
    type Iter<'a>
        = btree_map::Iter<'a, P, T>
    where
        Self: 'a,
        P: 'a,
        T: 'a;
    type IntoIter = btree_map::IntoIter<P, T>;

    fn get(&self, part: &P) -> Option<&T> {
        BTreeMap::get(self, part)
    }

    fn get_mut(&mut self, part: &P) -> Option<&mut T> {
        BTreeMap::get_mut(self, part)
    }

    fn insert(&mut self, part: P, child: T) -> Option<T> {
        BTreeMap::insert(self, part, child)
    }

    fn or_insert_with(&mut self, part: P, child: impl FnOnce() -> T) -> &mut T {
        self.entry(part).or_insert_with(child)
    }

    fn remove(&mut self, part: &P) -> Option<T> {
        BTreeMap::remove(self, part)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }

    fn into_pairs(self) -> Self::IntoIter {
        self.into_iter()
    }
}
