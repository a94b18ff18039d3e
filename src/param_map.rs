use crate::compat::{String, ToString, Vec, vec};

/// Ordered key/value mapping borrowed from a [`QueryParams`](crate::QueryParams).
///
/// Keys are unique and keep the order they were first inserted in.
/// `get_all_params` yields `ParamMap<&str>`, `get_param_list` yields
/// `ParamMap<Option<&str>>` where `None` marks a key that is not present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMap<'a, V> {
    entries: Vec<(&'a str, V)>,
}

impl<'a, V> ParamMap<'a, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert unless the key is already present; the first value wins.
    pub(crate) fn insert_first(&mut self, key: &'a str, value: V) {
        if !self.contains_key(key) {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &V)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl ParamMap<'_, &str> {
    /// Detach from the builder the map was read from.
    pub fn to_owned_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }
}

impl ParamMap<'_, Option<&str>> {
    /// Detach from the builder the map was read from.
    pub fn to_owned_pairs(&self) -> Vec<(String, Option<String>)> {
        self.entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.map(ToString::to_string)))
            .collect()
    }
}

impl<V> Default for ParamMap<'_, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for ParamMap<'a, V> {
    type Item = (&'a str, V);
    type IntoIter = vec::IntoIter<(&'a str, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_insert_first_keeps_first_value() {
        let mut map = ParamMap::new();
        map.insert_first("a", "1");
        map.insert_first("b", "2");
        map.insert_first("a", "3");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&"1"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty() {
        let map: ParamMap<'_, &str> = ParamMap::default();
        assert!(map.is_empty());
        assert_eq!(map.get("x"), None);
        assert!(!map.contains_key("x"));
    }

    #[test]
    fn test_to_owned_pairs() {
        let mut map = ParamMap::new();
        map.insert_first("a", Some("1"));
        map.insert_first("b", None);
        assert_eq!(
            map.to_owned_pairs(),
            vec![("a".to_string(), Some("1".to_string())), ("b".to_string(), None)]
        );
    }
}
