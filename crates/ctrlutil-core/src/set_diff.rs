//! Set difference over key-value records.
//!
//! ```text
//! x ∈ A ∖ B  ⟺  x ∈ A ∧ x ∉ B
//! ```
//!
//! The result holds every entry of `A` whose key is absent from `B`. Keys
//! that appear only in `B` have no effect, and values of `B` are never
//! looked at. The result is rebuilt from `A`'s iteration order, so ordered
//! maps stay ordered.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Anything that can answer whether a key is present.
///
/// This is the only capability `set_diff` needs from its second operand.
pub trait KeySet<K: ?Sized> {
    fn contains_key(&self, key: &K) -> bool;
}

impl<K: ?Sized, T: KeySet<K> + ?Sized> KeySet<K> for &T {
    fn contains_key(&self, key: &K) -> bool {
        (**self).contains_key(key)
    }
}

impl<K, V, S> KeySet<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl<K: Ord, V> KeySet<K> for BTreeMap<K, V> {
    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }
}

impl<K, S> KeySet<K> for HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K: Ord> KeySet<K> for BTreeSet<K> {
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl KeySet<String> for serde_json::Map<String, serde_json::Value> {
    fn contains_key(&self, key: &String) -> bool {
        serde_json::Map::contains_key(self, key.as_str())
    }
}

// Linear scan; meant for short literal key lists.
impl<K: PartialEq> KeySet<K> for [K] {
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }
}

/// Returns `a` without the keys of `b`.
///
/// Neither input is modified; surviving keys and values are cloned into a
/// fresh map of the same type as `a`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use ctrlutil_core::set_diff;
///
/// let a = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// let b = BTreeMap::from([("b", 99)]);
///
/// assert_eq!(set_diff(&a, &b), BTreeMap::from([("a", 1), ("c", 3)]));
/// ```
pub fn set_diff<'a, M, K, V, B>(a: &'a M, b: &B) -> M
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    M: FromIterator<(K, V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    B: KeySet<K> + ?Sized,
{
    let mut left_len = 0usize;
    let result = a
        .into_iter()
        .inspect(|_| left_len += 1)
        .filter(|(key, _)| !b.contains_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    tracing::trace!(op = "set_diff", left_len, "set difference computed");
    result
}

/// Consuming variant of [`set_diff`]: surviving entries are moved, not cloned.
pub fn set_diff_owned<M, K, V, B>(a: M, b: &B) -> M
where
    M: IntoIterator<Item = (K, V)> + FromIterator<(K, V)>,
    B: KeySet<K> + ?Sized,
{
    a.into_iter()
        .filter(|(key, _)| !b.contains_key(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_removes_shared_keys_and_keeps_left_values() {
        let a = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let b = BTreeMap::from([("b", 99)]);

        let result = set_diff(&a, &b);

        assert_eq!(result, BTreeMap::from([("a", 1), ("c", 3)]));
        // Inputs untouched
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_empty_left_gives_empty() {
        let a: HashMap<&str, i32> = HashMap::new();
        let b = HashMap::from([("x", 1)]);
        assert!(set_diff(&a, &b).is_empty());
    }

    #[test]
    fn test_empty_right_gives_copy() {
        let a = HashMap::from([("x", 1), ("y", 2)]);
        let b: HashMap<&str, i32> = HashMap::new();
        assert_eq!(set_diff(&a, &b), a);
    }

    #[test]
    fn test_self_difference_is_empty() {
        let a = HashMap::from([("x", 1), ("y", 2)]);
        assert!(set_diff(&a, &a).is_empty());
    }

    #[test]
    fn test_keys_only_in_right_are_ignored() {
        let a = BTreeMap::from([(1u32, "one")]);
        let b = BTreeMap::from([(2u32, "two"), (3u32, "three")]);
        assert_eq!(set_diff(&a, &b), a);
    }

    #[test]
    fn test_value_types_may_differ() {
        let a = HashMap::from([("name".to_string(), "alice".to_string())]);
        let b = HashMap::from([("name".to_string(), vec![1u8, 2, 3])]);
        assert!(set_diff(&a, &b).is_empty());
    }

    #[test]
    fn test_right_operand_as_set_or_slice() {
        let a = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);

        let set = BTreeSet::from(["a"]);
        assert_eq!(set_diff(&a, &set), BTreeMap::from([("b", 2), ("c", 3)]));

        let hashed: HashSet<&str> = HashSet::from(["c"]);
        assert_eq!(set_diff(&a, &hashed), BTreeMap::from([("a", 1), ("b", 2)]));

        let keys = ["a", "b"];
        assert_eq!(set_diff(&a, &keys[..]), BTreeMap::from([("c", 3)]));
    }

    #[test]
    fn test_json_map_keeps_insertion_order() {
        let a = json!({"z": 1, "a": 2, "m": 3});
        let b = json!({"a": null});
        let (Some(a), Some(b)) = (a.as_object(), b.as_object()) else {
            panic!("fixtures are objects");
        };

        let result = set_diff(a, b);
        let keys: Vec<&str> = result.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["z", "m"]);
    }

    #[test]
    fn test_owned_variant_moves_entries() {
        let a = BTreeMap::from([("a".to_string(), vec![1]), ("b".to_string(), vec![2])]);
        let b = BTreeSet::from(["a".to_string()]);

        let result = set_diff_owned(a, &b);

        assert_eq!(result, BTreeMap::from([("b".to_string(), vec![2])]));
    }
}
