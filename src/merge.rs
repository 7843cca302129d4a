//! Shallow, key-wise merging of records.
//!
//! [`Merge`] is the seam the combiner is generic over: a record type supplies
//! an identity element ([`Merge::empty`]) and an override merge
//! ([`Merge::merge`]). Merging is shallow: when both operands hold a key, the
//! right-hand value replaces the left-hand one wholesale, nested structures
//! included.
//!
//! ```
//! use crossmerge::{merge, Record};
//!
//! let a: Record<i32> = Record::new().with("x", 1).with("y", 2);
//! let b: Record<i32> = Record::new().with("y", 20).with("z", 30);
//!
//! let m = merge(&a, &b);
//! assert_eq!(m, Record::new().with("x", 1).with("y", 20).with("z", 30));
//! ```
//!
//! Implementations are provided for [`Record`], `BTreeMap<String, V>`,
//! `HashMap<String, V, S>` and `serde_json::Map<String, Value>`.

use crate::record::Record;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A record type that can be combined.
///
/// Implementors must satisfy, for every `r`:
/// - `Self::empty().merge(&r) == r`
/// - `r.merge(&Self::empty()) == r`
///
/// and `a.merge(&b)` must contain every key of `a` and `b`, with `b`'s value
/// on shared keys. Neither operand is modified.
pub trait Merge: Clone {
    /// The record with no keys.
    fn empty() -> Self;

    /// Overlay `other` onto a copy of `self`.
    #[must_use]
    fn merge(&self, other: &Self) -> Self;
}

/// Merge two records; `b` wins on shared keys.
#[must_use]
pub fn merge<R: Merge>(a: &R, b: &R) -> R {
    a.merge(b)
}

impl<V: Clone> Merge for Record<V> {
    fn empty() -> Self {
        Self::new()
    }

    fn merge(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }
}

impl<V: Clone> Merge for BTreeMap<String, V> {
    fn empty() -> Self {
        Self::new()
    }

    fn merge(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in other {
            out.insert(k.clone(), v.clone());
        }
        out
    }
}

impl<V: Clone, S: BuildHasher + Clone + Default> Merge for HashMap<String, V, S> {
    fn empty() -> Self {
        Self::default()
    }

    fn merge(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.reserve(other.len());
        for (k, v) in other {
            out.insert(k.clone(), v.clone());
        }
        out
    }
}

impl Merge for serde_json::Map<String, Value> {
    fn empty() -> Self {
        Self::new()
    }

    fn merge(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in other {
            out.insert(k.clone(), v.clone());
        }
        out
    }
}
