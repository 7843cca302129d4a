//! The string-keyed record type combined by this crate.
//!
//! A [`Record`] is a thin wrapper around `BTreeMap<String, V>`. Keys are
//! unique within a record, iteration is in key order, and two records are
//! equal when they hold the same key/value pairs regardless of how they were
//! built. The value type defaults to [`serde_json::Value`] so heterogeneous
//! data can be mixed freely:
//!
//! ```
//! use crossmerge::Record;
//! use serde_json::json;
//!
//! let r: Record = Record::new().with("size", json!("L")).with("qty", json!(3));
//! assert_eq!(r.get("qty"), Some(&json!(3)));
//! assert_eq!(r.keys().collect::<Vec<_>>(), vec!["qty", "size"]);
//! ```
//!
//! Records serialize transparently as JSON objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// A mapping from string keys to values of type `V`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record<V = Value> {
    fields: BTreeMap<String, V>,
}

impl<V> Record<V> {
    /// An empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style insert. A repeated key replaces the earlier value.
    #[must_use]
    pub fn with<K: Into<String>>(mut self, key: K, value: V) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Insert a field, returning the value it replaced.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) -> Option<V> {
        self.fields.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.fields.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, V> {
        self.fields.iter()
    }

    /// Borrow the backing map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, V> {
        &self.fields
    }

    /// Unwrap into the backing map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, V> {
        self.fields
    }
}

impl<V> From<BTreeMap<String, V>> for Record<V> {
    fn from(fields: BTreeMap<String, V>) -> Self {
        Self { fields }
    }
}

impl From<serde_json::Map<String, Value>> for Record<Value> {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Record<Value>> for Value {
    fn from(record: Record<Value>) -> Self {
        Value::Object(record.fields.into_iter().collect())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.fields.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);
    type IntoIter = btree_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = btree_map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<V: fmt::Display> fmt::Display for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_replaces_repeated_keys() {
        let r: Record<i32> = Record::new().with("a", 1).with("a", 2);
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("a"), Some(&2));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Record<i32> = Record::new().with("x", 1).with("y", 2);
        let b: Record<i32> = Record::new().with("y", 2).with("x", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_as_a_plain_object() -> anyhow::Result<()> {
        let r: Record = Record::new().with("b", json!(true)).with("a", json!(1));
        assert_eq!(serde_json::to_string(&r)?, r#"{"a":1,"b":true}"#);

        let back: Record = serde_json::from_str(r#"{"a":1,"b":true}"#)?;
        assert_eq!(back, r);
        Ok(())
    }

    #[test]
    fn display_lists_fields_in_key_order() {
        let r: Record<i32> = Record::new().with("z", 26).with("a", 1);
        assert_eq!(r.to_string(), "{a: 1, z: 26}");
        assert_eq!(Record::<i32>::new().to_string(), "{}");
    }

    #[test]
    fn backing_map_round_trips() {
        let r: Record<i32> = Record::new().with("a", 1).with("b", 2);
        assert_eq!(r.as_map().get("b"), Some(&2));
        assert_eq!(Record::from(r.clone().into_map()), r);
    }

    #[test]
    fn remove_drops_only_the_named_field() {
        let mut r: Record<i32> = Record::new().with("a", 1).with("b", 2);
        assert_eq!(r.remove("a"), Some(1));
        assert_eq!(r.remove("a"), None);
        assert!(!r.contains_key("a"));
        assert_eq!(r, Record::new().with("b", 2));
    }

    #[test]
    fn converts_to_and_from_json_objects() {
        let r: Record = [("k", json!("v"))].into_iter().collect();
        let v: Value = r.clone().into();
        assert_eq!(v, json!({"k": "v"}));

        let Value::Object(map) = v else {
            panic!("expected object");
        };
        assert_eq!(Record::from(map), r);
    }
}
