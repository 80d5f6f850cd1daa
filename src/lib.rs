//! Tries (prefix trees) as mappings over sequence keys.
//!
//! A trie stores keys that decompose into sequences of parts (the characters
//! of a string, the elements of a `Vec`) so that all keys sharing a prefix
//! share a path from the root. On top of the usual mapping operations this
//! makes two families of queries cheap: everything stored *under* a given
//! prefix, and every stored key that *is* a prefix of a given probe key.
//!
//! Two strategy axes compose into four trie flavors without touching the
//! algorithms: how a key is rebuilt from its parts ([`FromParts`]) and how
//! each node orders its children ([`Order`]). [`Trie`] is the generic
//! unordered flavor; [`SortedTrie`], [`StringTrie`] and [`SortedStringTrie`]
//! fill in the other corners.
//!
//! ```
//! use seqtrie::SortedStringTrie;
//!
//! let mut trie = SortedStringTrie::new();
//! for (rank, word) in ["an", "ant", "all", "allot", "alloy"].into_iter().enumerate() {
//!     trie.insert(word.to_owned(), rank);
//! }
//!
//! assert_eq!(trie.keys_prefix("al").collect::<Vec<_>>(), ["all", "allot", "alloy"]);
//! assert_eq!(trie.longest_prefix("antonym"), Some("ant".to_owned()));
//! assert_eq!(trie.prefixes("antonym").collect::<Vec<_>>(), ["an", "ant"]);
//! ```

pub mod iter;
mod keys;
mod node;
mod order;
pub mod prefix;
mod repr;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(test)]
mod test;
mod trie;

pub use keys::{FromParts, Key, Part};
pub use node::Node;
pub use order::{ChildMap, Lexicographic, Order, Unordered};
pub use repr::ParseError;
pub use trie::{SortedStringTrie, SortedTrie, StringTrie, Trie};
