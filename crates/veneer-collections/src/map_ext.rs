//! Convenience additions for hash maps.

use std::collections::HashMap;
use std::hash::Hash;

/// Merge- and transform-flavored additions for hash maps.
pub trait MapAdditions<K, V> {
    /// Returns the union of two maps.
    ///
    /// Keys present in both operands take the value from `other`; keys
    /// unique to either side are preserved.
    fn merged(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone;

    /// Merges `other` into the receiver, `other` winning on shared keys.
    fn merge(&mut self, other: Self);

    /// Sets `key` to the wrapped value, or removes it when `value` is
    /// `None`.
    fn set_optional(&mut self, key: K, value: Option<V>);

    /// Returns a map with every key passed through `transform`, dropping
    /// entries whose transform fails.
    fn mapping_keys<T, E>(&self, transform: impl Fn(&K) -> Result<T, E>) -> HashMap<T, V>
    where
        T: Eq + Hash,
        V: Clone;
}

impl<K: Eq + Hash, V> MapAdditions<K, V> for HashMap<K, V> {
    fn merged(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut result = self.clone();
        for (key, value) in other {
            result.insert(key.clone(), value.clone());
        }
        result
    }

    fn merge(&mut self, other: Self) {
        self.extend(other);
    }

    fn set_optional(&mut self, key: K, value: Option<V>) {
        match value {
            Some(value) => {
                self.insert(key, value);
            }
            None => {
                self.remove(&key);
            }
        }
    }

    fn mapping_keys<T, E>(&self, transform: impl Fn(&K) -> Result<T, E>) -> HashMap<T, V>
    where
        T: Eq + Hash,
        V: Clone,
    {
        self.iter()
            .filter_map(|(key, value)| Some((transform(key).ok()?, value.clone())))
            .collect()
    }
}

/// Returns a map keeping only the entries whose values are present,
/// unwrapped.
pub fn compacted<K: Eq + Hash, V>(map: HashMap<K, Option<V>>) -> HashMap<K, V> {
    map.into_iter()
        .filter_map(|(key, value)| Some((key, value?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(pairs: &[(&str, i32)]) -> HashMap<String, i32> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
    }

    #[test]
    fn test_merged_right_hand_wins() {
        let left = map(&[("a", 1), ("b", 2)]);
        let right = map(&[("b", 20), ("c", 30)]);

        let merged = left.merged(&right);

        assert_eq!(merged, map(&[("a", 1), ("b", 20), ("c", 30)]));
        // Operands are untouched.
        assert_eq!(left, map(&[("a", 1), ("b", 2)]));
    }

    #[test]
    fn test_merge_in_place() {
        let mut target = map(&[("a", 1), ("b", 2)]);
        target.merge(map(&[("b", 20)]));
        assert_eq!(target, map(&[("a", 1), ("b", 20)]));
    }

    #[test]
    fn test_set_optional() {
        let mut target = map(&[("a", 1)]);

        target.set_optional("b".to_owned(), Some(2));
        assert_eq!(target.get("b"), Some(&2));

        target.set_optional("a".to_owned(), None);
        assert!(!target.contains_key("a"));

        // Removing a missing key is a no-op.
        target.set_optional("ghost".to_owned(), None);
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn test_mapping_keys_drops_failures() {
        let source = map(&[("1", 10), ("2", 20), ("x", 30)]);
        let mapped: HashMap<i32, i32> = source.mapping_keys(|k| k.parse::<i32>());

        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped.get(&1), Some(&10));
        assert_eq!(mapped.get(&2), Some(&20));
    }

    #[test]
    fn test_compacted() {
        let mut source: HashMap<String, Option<i32>> = HashMap::new();
        source.insert("kept".to_owned(), Some(1));
        source.insert("dropped".to_owned(), None);

        let compact = compacted(source);
        assert_eq!(compact, map(&[("kept", 1)]));
    }
}
