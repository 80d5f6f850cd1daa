use std::fmt;

use crate::keys::Part;
use crate::order::{ChildMap, Order};

/// A single trie cell: an optional stored value plus a mapping from key
/// parts to owned child nodes.
///
/// Outside of the root, a node always holds a value, has children, or both;
/// mutators prune any node left with neither.
pub struct Node<P: Part, V, O: Order> {
    pub(crate) value: Option<V>,
    pub(crate) children: O::Map<P, Self>,
}

impl<P: Part, V, O: Order> Node<P, V, O> {
    pub(crate) fn new() -> Self {
        Node {
            value: None,
            children: Default::default(),
        }
    }

    /// The value stored at this node, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Number of nodes in the subtree rooted here, counting only
    /// value-bearing nodes unless `internal` is set.
    pub fn size(&self, internal: bool) -> usize {
        usize::from(self.value.is_some() || internal)
            + self
                .children
                .iter()
                .map(|(_, child)| child.size(internal))
                .sum::<usize>()
    }

    /// Follow `parts` downward, stopping at the first missing child.
    pub(crate) fn descend(&self, parts: impl IntoIterator<Item = P>) -> Option<&Self> {
        let mut node = self;
        for part in parts {
            node = node.children.get(&part)?;
        }
        Some(node)
    }

    pub(crate) fn descend_mut(&mut self, parts: impl IntoIterator<Item = P>) -> Option<&mut Self> {
        let mut node = self;
        for part in parts {
            node = node.children.get_mut(&part)?;
        }
        Some(node)
    }

    /// A non-root node in this state is dead weight and gets pruned.
    pub(crate) fn is_expendable(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

impl<P: Part, V, O: Order> Default for Node<P, V, O> {
    fn default() -> Self {
        Node::new()
    }
}

impl<P: Part, V: Clone, O: Order> Clone for Node<P, V, O> {
    fn clone(&self) -> Self {
        let mut children: O::Map<P, Self> = Default::default();
        for (part, child) in self.children.iter() {
            children.insert(part.clone(), child.clone());
        }
        Node {
            value: self.value.clone(),
            children,
        }
    }
}

impl<P: Part, V: PartialEq, O: Order> PartialEq for Node<P, V, O> {
    /// Structural equality; the ordering of children is irrelevant.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .all(|(part, child)| other.children.get(part).is_some_and(|o| child == o))
    }
}

impl<P: Part, V: Eq, O: Order> Eq for Node<P, V, O> {}

impl<P: Part + fmt::Debug, V: fmt::Debug, O: Order> fmt::Debug for Node<P, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, ", self.value)?;
        f.debug_map().entries(self.children.iter()).finish()?;
        write!(f, ")")
    }
}
