use std::hash::Hash;

/// One element of a decomposed key.
///
/// Parts are required to be both hashable and ordered so that the same key
/// types work under every child-ordering strategy.
pub trait Part: Clone + Eq + Hash + Ord {}

impl<T: Clone + Eq + Hash + Ord> Part for T {}

/// A key that decomposes into a finite sequence of [`Part`]s.
///
/// Implemented for both owned and borrowed forms (`String`/`str`,
/// `Vec<P>`/`[P]`) so that lookups can take unsized probe keys.
pub trait Key {
    type Part: Part;

    /// The parts of this key, in order. The empty sequence is a legal key.
    fn parts(&self) -> impl Iterator<Item = Self::Part> + '_;
}

/// An owned key that can be reassembled from accumulated parts.
///
/// Reassembly must invert [`Key::parts`]: decomposing a key and feeding the
/// parts back through [`FromParts::from_parts`] yields an equal key.
pub trait FromParts: Key + Sized {
    fn from_parts(parts: &[Self::Part]) -> Self;
}

impl Key for str {
    type Part = char;

    fn parts(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl Key for String {
    type Part = char;

    fn parts(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl FromParts for String {
    fn from_parts(parts: &[char]) -> Self {
        parts.iter().collect()
    }
}

impl<P: Part> Key for [P] {
    type Part = P;

    fn parts(&self) -> impl Iterator<Item = P> + '_ {
        self.iter().cloned()
    }
}

impl<P: Part> Key for Vec<P> {
    type Part = P;

    fn parts(&self) -> impl Iterator<Item = P> + '_ {
        self.iter().cloned()
    }
}

impl<P: Part> FromParts for Vec<P> {
    fn from_parts(parts: &[P]) -> Self {
        parts.to_vec()
    }
}
