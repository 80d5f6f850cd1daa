use itertools::Itertools;

use super::*;

const WORDS: [(&str, i32); 9] = [
    ("an", 0),
    ("ant", 1),
    ("all", 2),
    ("allot", 3),
    ("alloy", 4),
    ("aloe", 5),
    ("are", 6),
    ("ate", 7),
    ("be", 8),
];

const SORTED: [(&str, i32); 9] = [
    ("all", 2),
    ("allot", 3),
    ("alloy", 4),
    ("aloe", 5),
    ("an", 0),
    ("ant", 1),
    ("are", 6),
    ("ate", 7),
    ("be", 8),
];

fn sorted_words() -> SortedStringTrie<i32> {
    WORDS
        .iter()
        .map(|&(word, rank)| (word.to_owned(), rank))
        .collect()
}

fn unsorted_words() -> StringTrie<i32> {
    WORDS
        .iter()
        .map(|&(word, rank)| (word.to_owned(), rank))
        .collect()
}

#[test]
fn insert_get_contains() {
    let trie = sorted_words();
    assert_eq!(trie.len(), WORDS.len());
    for &(word, rank) in &WORDS {
        assert!(trie.contains_key(word));
        assert_eq!(trie.get(word), Some(&rank));
    }
}

#[test]
fn get_misses() {
    let trie = sorted_words();
    // interior node without a value
    assert_eq!(trie.get("al"), None);
    // path breaks mid-key
    assert_eq!(trie.get("ants"), None);
    assert_eq!(trie.get("zebra"), None);
    // empty key, no value at the root
    assert_eq!(trie.get(""), None);
    assert!(!trie.contains_key("al"));
}

#[test]
fn insert_overwrites() {
    let mut trie = sorted_words();
    assert_eq!(trie.insert("an".to_owned(), 40), Some(0));
    assert_eq!(trie.get("an"), Some(&40));
    assert_eq!(trie.len(), WORDS.len());
}

#[test]
fn get_mut_updates() {
    let mut trie = sorted_words();
    *trie.get_mut("be").unwrap() = 80;
    assert_eq!(trie.get("be"), Some(&80));
    assert_eq!(trie.get_mut("bee"), None);
}

#[test]
fn index_present() {
    let trie = sorted_words();
    assert_eq!(trie["ant"], 1);
}

#[test]
#[should_panic(expected = "key not found")]
fn index_missing_panics() {
    let trie = sorted_words();
    let _ = trie["alumni"];
}

#[test]
fn node_count_counts_interior_nodes() {
    // 16 distinct non-empty prefixes across the word set, plus the root.
    assert_eq!(sorted_words().node_count(), 17);
    assert_eq!(SortedStringTrie::<i32>::new().node_count(), 1);
}

#[test]
fn remove_returns_and_prunes() {
    let mut trie = sorted_words();
    assert_eq!(trie.remove("allot"), Some(3));
    assert_eq!(trie.get("allot"), None);
    assert_eq!(trie.get("alloy"), Some(&4));

    let rebuilt: SortedStringTrie<i32> = WORDS
        .iter()
        .filter(|&&(word, _)| word != "allot")
        .map(|&(word, rank)| (word.to_owned(), rank))
        .collect();
    assert_eq!(trie, rebuilt);
    assert_eq!(trie.node_count(), rebuilt.node_count());

    // "alloy" gone too; the now-dead "allo" chain must unwind up to "all"
    assert_eq!(trie.remove("alloy"), Some(4));
    assert_eq!(trie.node_count(), 14);
    assert_eq!(trie.get("all"), Some(&2));
}

#[test]
fn remove_prefix_key_keeps_descendants() {
    let mut trie = sorted_words();
    assert_eq!(trie.remove("an"), Some(0));
    assert_eq!(trie.get("an"), None);
    assert_eq!(trie.get("ant"), Some(&1));
}

#[test]
fn remove_missing_leaves_trie_untouched() {
    let mut trie = sorted_words();
    let nodes = trie.node_count();
    assert_eq!(trie.remove("alumni"), None);
    assert_eq!(trie.remove("al"), None);
    assert_eq!(trie.remove(""), None);
    assert_eq!(trie.node_count(), nodes);
    assert_eq!(trie, sorted_words());
}

#[test]
fn remove_everything() {
    let mut trie = sorted_words();
    for &(word, rank) in &WORDS {
        assert_eq!(trie.remove(word), Some(rank));
    }
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
}

#[test]
fn clear_empties() {
    let mut trie = sorted_words();
    trie.clear();
    assert_eq!(trie.len(), 0);
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
    for &(word, _) in &WORDS {
        assert_eq!(trie.get(word), None);
    }
}

#[test]
fn sorted_iteration_order() {
    let trie = sorted_words();
    let items = trie
        .iter()
        .map(|(key, &rank)| (key, rank))
        .collect_vec();
    let expected = SORTED
        .iter()
        .map(|&(word, rank)| (word.to_owned(), rank))
        .collect_vec();
    assert_eq!(items, expected);
    assert_eq!(trie.keys().collect_vec(), SORTED.map(|(word, _)| word));
    assert_eq!(
        trie.values().copied().collect_vec(),
        SORTED.map(|(_, rank)| rank)
    );
}

#[test]
fn unordered_views_have_the_same_contents() {
    let trie = unsorted_words();
    let items = trie
        .iter()
        .map(|(key, &rank)| (key, rank))
        .sorted()
        .collect_vec();
    let expected = WORDS
        .iter()
        .map(|&(word, rank)| (word.to_owned(), rank))
        .sorted()
        .collect_vec();
    assert_eq!(items, expected);
    assert_eq!(trie.values().count(), WORDS.len());
}

#[test]
fn prefix_restricted_views() {
    let trie = sorted_words();
    assert_eq!(
        trie.keys_prefix("al").collect_vec(),
        ["all", "allot", "alloy", "aloe"]
    );
    assert_eq!(trie.values_prefix("al").copied().collect_vec(), [2, 3, 4, 5]);
    assert_eq!(trie.keys_prefix("are").collect_vec(), ["are"]);
    // a prefix leading nowhere is an empty view, not an error
    assert_eq!(trie.keys_prefix("ann").count(), 0);
    assert_eq!(trie.iter_prefix("zzz").count(), 0);
    // the empty prefix is the unrestricted view
    assert_eq!(
        trie.iter_prefix("").collect_vec(),
        trie.iter().collect_vec()
    );
}

#[test]
fn prefix_view_consistency() {
    let trie = sorted_words();
    for prefix in ["al", "are", "ann", "a", ""] {
        let items = trie.iter_prefix(prefix).collect_vec();
        let zipped = trie
            .keys_prefix(prefix)
            .zip(trie.values_prefix(prefix))
            .collect_vec();
        assert_eq!(items, zipped);
        for (key, _) in items {
            assert!(key.starts_with(prefix));
        }
    }
}

#[test]
fn prefixes_of_probe() {
    let trie = sorted_words();
    assert_eq!(trie.prefixes("antonym").collect_vec(), ["an", "ant"]);
    assert_eq!(trie.prefixes("are").collect_vec(), ["are"]);
    assert_eq!(trie.prefixes("alumni").count(), 0);
    assert_eq!(trie.prefix_values("antonym").copied().collect_vec(), [0, 1]);
    assert_eq!(
        trie.prefix_items("antonym").collect_vec(),
        [("an".to_owned(), &0), ("ant".to_owned(), &1)]
    );
    assert_eq!(trie.prefix_items("are").collect_vec(), [("are".to_owned(), &6)]);
}

#[test]
fn longest_prefix_family() {
    let trie = sorted_words();
    assert_eq!(trie.longest_prefix("antonym"), Some("ant".to_owned()));
    assert_eq!(trie.longest_prefix("are"), Some("are".to_owned()));
    assert_eq!(trie.longest_prefix("alla"), Some("all".to_owned()));
    assert_eq!(trie.longest_prefix("allo"), Some("all".to_owned()));
    assert_eq!(trie.longest_prefix("alumni"), None);

    assert_eq!(trie.longest_prefix_value("antonym"), Some(&1));
    assert_eq!(trie.longest_prefix_value("allo"), Some(&2));
    assert_eq!(trie.longest_prefix_value("alumni"), None);
    // a caller-supplied fallback, including a falsy one, is honored
    assert_eq!(trie.longest_prefix_value("alumni").copied().unwrap_or(-1), -1);
    assert_eq!(trie.longest_prefix_value("linux").copied().unwrap_or(0), 0);

    assert_eq!(
        trie.longest_prefix_item("antonym"),
        Some(("ant".to_owned(), &1))
    );
    assert_eq!(trie.longest_prefix_item("are"), Some(("are".to_owned(), &6)));
    assert_eq!(trie.longest_prefix_item("alumni"), None);
}

#[test]
fn empty_key() {
    let mut trie = sorted_words();
    trie.insert(String::new(), 99);
    assert_eq!(trie.len(), WORDS.len() + 1);
    assert_eq!(trie.get(""), Some(&99));
    // first out of any unrestricted view
    assert_eq!(trie.iter().next(), Some((String::new(), &99)));
    // and the fallback answer for probes sharing no other prefix
    assert_eq!(trie.longest_prefix("zebra"), Some(String::new()));
    assert_eq!(trie.prefixes("an").collect_vec(), ["", "an"]);

    assert_eq!(trie.remove(""), Some(99));
    assert_eq!(trie, sorted_words());
}

#[test]
fn clone_is_independent() {
    let mut original = sorted_words();
    let mut copy = original.clone();
    assert_eq!(original, copy);

    original.insert("ants".to_owned(), 9);
    copy.remove("an");
    assert_eq!(original.get("an"), Some(&0));
    assert_eq!(original.get("ants"), Some(&9));
    assert_eq!(copy.get("ants"), None);
    assert_eq!(copy.get("an"), None);
}

#[test]
fn equality_ignores_insertion_order() {
    let forward: StringTrie<i32> = WORDS
        .iter()
        .map(|&(word, rank)| (word.to_owned(), rank))
        .collect();
    let backward: StringTrie<i32> = WORDS
        .iter()
        .rev()
        .map(|&(word, rank)| (word.to_owned(), rank))
        .collect();
    assert_eq!(forward, backward);
    assert_ne!(forward, StringTrie::new());
}

#[test]
fn from_keys_shares_one_value() {
    let trie =
        SortedStringTrie::from_keys(WORDS.iter().map(|&(word, _)| word.to_owned()), 7);
    assert_eq!(trie.len(), WORDS.len());
    assert!(trie.values().all(|&value| value == 7));
}

#[test]
fn last_write_wins() {
    let trie: StringTrie<i32> =
        [("a".to_owned(), 1), ("a".to_owned(), 2)].into_iter().collect();
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.get("a"), Some(&2));
}

#[test]
fn generic_sequence_keys() {
    let mut trie: SortedTrie<Vec<u8>, &str> = SortedTrie::new();
    trie.insert(vec![1, 2, 3], "deep");
    trie.insert(vec![1], "shallow");
    trie.insert(vec![2], "other");

    assert_eq!(trie.get([1, 2, 3].as_slice()), Some(&"deep"));
    assert_eq!(trie.get([1, 2].as_slice()), None);
    assert_eq!(trie.longest_prefix([1, 2].as_slice()), Some(vec![1]));
    assert_eq!(
        trie.keys_prefix([1].as_slice()).collect_vec(),
        [vec![1], vec![1, 2, 3]]
    );
    assert_eq!(trie.remove([2].as_slice()), Some("other"));
    assert_eq!(trie.len(), 2);
}

#[test]
fn iterators_are_independent_and_cloneable() {
    let trie = sorted_words();
    let mut walker = trie.keys();
    walker.next();
    walker.next();
    let forked = walker.clone().collect_vec();
    assert_eq!(walker.collect_vec(), forked);
    // a fresh call restarts from the top
    assert_eq!(trie.keys().count(), WORDS.len());
}

#[test]
fn owning_iteration() {
    let pairs = sorted_words().into_iter().collect_vec();
    let expected = SORTED
        .iter()
        .map(|&(word, rank)| (word.to_owned(), rank))
        .collect_vec();
    assert_eq!(pairs, expected);
}

#[test]
fn display_shape() {
    let mut trie = SortedStringTrie::new();
    assert_eq!(trie.to_string(), "{}");
    trie.insert("a".to_owned(), 1);
    trie.insert("ab".to_owned(), 2);
    assert_eq!(trie.to_string(), r#"{"a": 1, "ab": 2}"#);
}

#[test]
fn display_parse_round_trip() {
    let trie = sorted_words();
    let parsed: SortedStringTrie<i32> = trie.to_string().parse().unwrap();
    assert_eq!(parsed, trie);

    let mut awkward = SortedStringTrie::new();
    awkward.insert("quo\"te\\slash".to_owned(), 1);
    awkward.insert(String::new(), 2);
    let parsed: SortedStringTrie<i32> = awkward.to_string().parse().unwrap();
    assert_eq!(parsed, awkward);
}

#[test]
fn parse_failures() {
    assert_eq!(
        "".parse::<SortedStringTrie<i32>>().unwrap_err(),
        ParseError::Expected {
            expected: "'{'",
            at: 0
        }
    );
    assert_eq!(
        r#"{"a" 1}"#.parse::<SortedStringTrie<i32>>().unwrap_err(),
        ParseError::Expected {
            expected: "':'",
            at: 5
        }
    );
    assert_eq!(
        r#"{"a"#.parse::<SortedStringTrie<i32>>().unwrap_err(),
        ParseError::UnterminatedKey { at: 1 }
    );
    assert!(matches!(
        r#"{"a": x}"#.parse::<SortedStringTrie<i32>>().unwrap_err(),
        ParseError::Value { at: 5, .. }
    ));
    assert!(matches!(
        "{} trailing".parse::<SortedStringTrie<i32>>().unwrap_err(),
        ParseError::Expected {
            expected: "end of input",
            ..
        }
    ));
}

#[cfg(feature = "serde")]
mod serialization {
    use super::*;

    #[test]
    fn empty_trie_is_a_value_children_pair() {
        let trie: StringTrie<i32> = StringTrie::new();
        assert_eq!(serde_json::to_string(&trie).unwrap(), "[null,{}]");
    }

    #[test]
    fn round_trip_preserves_contents() {
        let trie = sorted_words();
        let json = serde_json::to_string(&trie).unwrap();
        let back: SortedStringTrie<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trie);
        assert_eq!(back.node_count(), trie.node_count());
    }

    #[test]
    fn round_trip_generic_keys() {
        let trie: SortedTrie<Vec<u8>, String> = [
            (vec![1, 2], "a".to_owned()),
            (vec![1], "b".to_owned()),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&trie).unwrap();
        let back: SortedTrie<Vec<u8>, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trie);
    }
}
