use super::List;
use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};

/// An immutable association list. Lookups and updates are linear in the
/// number of keys; every key is bound at most once.
pub struct Map<K, V> {
    bindings: List<(K, V)>,
}

impl<K, V> Map<K, V> {
    pub fn new() -> Self {
        Self { bindings: List::new() }
    }

    /// Returns a map binding `key` to `value`, replacing any earlier binding
    /// of `key`.
    pub fn put(&self, key: K, value: V) -> Self
    where
        K: PartialEq + Clone,
        V: Clone,
    {
        let bindings = self.bindings.remove_where(|(k, _)| *k == key).add((key, value));
        debug_assert!(bindings.len() <= self.len() + 1);
        Self { bindings }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.bindings
            .iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound keys, most recently bound first.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.bindings.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.bindings.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            bindings: self.bindings.clone(),
        }
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for Map<K, V> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_map().entries(self.iter()).finish()
    }
}
