//! Serialization behind the `serde` feature.
//!
//! Every node reduces to the pair `(value, children)`, with children encoded
//! as a map of part to child node; a trie is the pair at its root. Input is
//! trusted on the way back in, so no structural invariants are re-checked.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::keys::{FromParts, Part};
use crate::node::Node;
use crate::order::{ChildMap, Order};
use crate::trie::Trie;

impl<P, V, O> Serialize for Node<P, V, O>
where
    P: Part + Serialize,
    V: Serialize,
    O: Order,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.value)?;
        pair.serialize_element(&Edges::<P, V, O>(&self.children))?;
        pair.end()
    }
}

struct Edges<'a, P: Part, V, O: Order>(&'a <O as Order>::Map<P, Node<P, V, O>>);

impl<'a, P, V, O> Serialize for Edges<'a, P, V, O>
where
    P: Part + Serialize,
    V: Serialize,
    O: Order,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (part, child) in self.0.iter() {
            map.serialize_entry(part, child)?;
        }
        map.end()
    }
}

impl<'de, P, V, O> Deserialize<'de> for Node<P, V, O>
where
    P: Part + Deserialize<'de>,
    V: Deserialize<'de>,
    O: Order,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeVisitor<P, V, O>(PhantomData<(P, V, O)>);

        impl<'de, P, V, O> Visitor<'de> for NodeVisitor<P, V, O>
        where
            P: Part + Deserialize<'de>,
            V: Deserialize<'de>,
            O: Order,
        {
            type Value = Node<P, V, O>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a (value, children) pair")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let value: Option<V> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let children = seq
                    .next_element_seed(EdgesSeed::<P, V, O>(PhantomData))?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Node { value, children })
            }
        }

        deserializer.deserialize_tuple(2, NodeVisitor(PhantomData))
    }
}

struct EdgesSeed<P, V, O>(PhantomData<(P, V, O)>);

impl<'de, P, V, O> DeserializeSeed<'de> for EdgesSeed<P, V, O>
where
    P: Part + Deserialize<'de>,
    V: Deserialize<'de>,
    O: Order,
{
    type Value = <O as Order>::Map<P, Node<P, V, O>>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(EdgesVisitor::<P, V, O>(PhantomData))
    }
}

struct EdgesVisitor<P, V, O>(PhantomData<(P, V, O)>);

impl<'de, P, V, O> Visitor<'de> for EdgesVisitor<P, V, O>
where
    P: Part + Deserialize<'de>,
    V: Deserialize<'de>,
    O: Order,
{
    type Value = <O as Order>::Map<P, Node<P, V, O>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a children mapping")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut children: <O as Order>::Map<P, Node<P, V, O>> = Default::default();
        while let Some((part, child)) = access.next_entry()? {
            children.insert(part, child);
        }
        Ok(children)
    }
}

impl<K, V, O> Serialize for Trie<K, V, O>
where
    K: FromParts,
    K::Part: Serialize,
    V: Serialize,
    O: Order,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de, K, V, O> Deserialize<'de> for Trie<K, V, O>
where
    K: FromParts,
    K::Part: Deserialize<'de>,
    V: Deserialize<'de>,
    O: Order,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Trie {
            root: Node::deserialize(deserializer)?,
        })
    }
}
