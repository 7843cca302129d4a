//! Builders for assembling test records and groups fluently.

use crate::record::Record;
use serde_json::Value;

/// Build a [`Record`] of `serde_json::Value`s from `key => value` pairs.
///
/// Values are converted with `serde_json::json!`, so anything serializable
/// can be used.
///
/// # Example
///
/// ```
/// use crossmerge::record;
/// use serde_json::json;
///
/// let r = record! { "name" => "Ada", "age" => 36 };
/// assert_eq!(r.get("age"), Some(&json!(36)));
/// assert!(record! {}.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::<$crate::__serde_json::Value>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Record::<$crate::__serde_json::Value>::new()
            $(.with($key, $crate::__serde_json::json!($value)))+
    };
}

/// A fluent builder for a single [`Record`].
///
/// # Example
///
/// ```
/// use crossmerge::testing::RecordBuilder;
///
/// let r = RecordBuilder::new()
///     .field("sku", "A-1")
///     .field("qty", 3)
///     .build();
///
/// assert_eq!(r.len(), 2);
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            record: Record::new(),
        }
    }

    /// Set a field. Repeating a key keeps the last value.
    #[must_use]
    pub fn field<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.record.insert(key, value.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

/// A fluent builder for one group of records.
///
/// # Example
///
/// ```
/// use crossmerge::Record;
/// use crossmerge::testing::GroupBuilder;
///
/// let group = GroupBuilder::new()
///     .add(Record::new().with("k", 1))
///     .add_repeated(Record::new().with("k", 2), 2)
///     .build();
///
/// assert_eq!(group.len(), 3);
/// ```
pub struct GroupBuilder<R> {
    records: Vec<R>,
}

impl<R> Default for GroupBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> GroupBuilder<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, record: R) -> Self {
        self.records.push(record);
        self
    }

    #[must_use]
    pub fn add_all<I: IntoIterator<Item = R>>(mut self, records: I) -> Self {
        self.records.extend(records);
        self
    }

    #[must_use]
    pub fn add_repeated(mut self, record: R, count: usize) -> Self
    where
        R: Clone,
    {
        self.records.extend(std::iter::repeat_n(record, count));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<R> {
        self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl GroupBuilder<Record> {
    /// Add one single-field record per value, all under `key`.
    ///
    /// ```
    /// use crossmerge::testing::GroupBuilder;
    ///
    /// let sizes = GroupBuilder::new().add_values("size", ["S", "M", "L"]).build();
    /// assert_eq!(sizes.len(), 3);
    /// ```
    #[must_use]
    pub fn add_values<V, I>(mut self, key: &str, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        self.records
            .extend(values.into_iter().map(|v| Record::new().with(key, v.into())));
        self
    }
}
