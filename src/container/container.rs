use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::sequence::Sequence;
use super::value::Value;

/// A key-unique mapping whose slots may hold an explicit absence.
///
/// A slot set to `None` is still a key of the container; [`compact`](Container::compact) is what
/// removes it. Iteration order follows the underlying hash table and is not stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash, V: Serialize",
    deserialize = "K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>"
))]
pub struct Container<K, V> {
    inner: HashMap<K, Option<V>>,
}

/// Container with string keys and loosely typed values.
pub type DynamicContainer = Container<String, Value>;

impl<K: Eq + Hash, V> Container<K, V> {
    pub fn new() -> Self {
        Container {
            inner: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn insert(&mut self, key: K, value: impl Into<V>) {
        self.inner.insert(key, Some(value.into()));
    }

    /// Stores `key` with no value.
    pub fn insert_absent(&mut self, key: K) {
        self.inner.insert(key, None);
    }

    pub fn set(&mut self, key: K, slot: Option<V>) {
        self.inner.insert(key, slot);
    }

    /// The value under `key`; `None` both for missing keys and for absent slots.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key).and_then(Option::as_ref)
    }

    /// The raw slot under `key`, telling a missing key (`None`) from an absent value (`Some(None)`).
    pub fn slot(&self, key: &K) -> Option<Option<&V>> {
        self.inner.get(key).map(Option::as_ref)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<Option<V>> {
        self.inner.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<&V>)> {
        self.inner.iter().map(|(k, v)| (k, v.as_ref()))
    }

    /// Removes every key whose slot is absent.
    pub fn compact(&mut self) {
        self.inner.retain(|_, v| v.is_some());
    }

    pub fn keys(&self) -> Sequence<K>
    where
        K: Clone,
    {
        self.inner.keys().cloned().collect()
    }

    pub fn values(&self) -> Sequence<Option<V>>
    where
        V: Clone,
    {
        self.inner.values().cloned().collect()
    }

    /// Values for `keys`, in the requested order, skipping missing keys and absent slots.
    pub fn fetch_values<'a, I>(&self, keys: I) -> Sequence<V>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
        V: Clone,
    {
        keys.into_iter()
            .filter_map(|key| self.get(key).cloned())
            .collect()
    }

    /// Same key count, and every key of `self` holds an equal slot in `other`.
    pub fn equal(&self, other: &Container<K, V>) -> bool
    where
        V: PartialEq,
    {
        self.inner.len() == other.inner.len()
            && self
                .inner
                .iter()
                .all(|(k, v)| other.inner.get(k).is_some_and(|o| o == v))
    }

    /// Copies every slot of `other` into `self`, overwriting shared keys.
    pub fn merge(&mut self, other: &Container<K, V>)
    where
        K: Clone,
        V: Clone,
    {
        for (k, v) in &other.inner {
            self.inner.insert(k.clone(), v.clone());
        }
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Container<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<K: Eq + Hash, V> Default for Container<K, V> {
    fn default() -> Self {
        Container::new()
    }
}

impl<K: Eq + Hash, V> From<HashMap<K, Option<V>>> for Container<K, V> {
    fn from(inner: HashMap<K, Option<V>>) -> Self {
        Container { inner }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, Option<V>)> for Container<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Container {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, Option<V>); N]> for Container<K, V> {
    fn from(slots: [(K, Option<V>); N]) -> Self {
        slots.into_iter().collect()
    }
}
