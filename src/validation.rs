//! Combining records that arrive as untyped JSON.
//!
//! The typed entry point [`combine`](crate::combine) cannot receive a
//! malformed record. When groups come from JSON, the shape has to be checked
//! at runtime: the input must be an array of arrays of objects. The first
//! element that breaks this is reported as an [`InvalidRecordError`] carrying
//! its position; nothing is combined in that case.
//!
//! ```
//! use crossmerge::validation::{combine_json, InvalidRecordError};
//! use serde_json::json;
//!
//! let out = combine_json(&json!([[{"a": 1}, {"a": 2}], [{"b": 3}]]))?;
//! assert_eq!(out.len(), 2);
//!
//! let err = combine_json(&json!([[{"a": 1}], [{"b": 3}, 7]])).unwrap_err();
//! assert_eq!(
//!     err,
//!     InvalidRecordError::NotARecord {
//!         group: 1,
//!         index: 1,
//!         found: "number"
//!     }
//! );
//! # Ok::<(), InvalidRecordError>(())
//! ```

use crate::combine::combine;
use crate::record::Record;
use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;
use std::fmt;

/// A JSON input that is not an array of arrays of objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidRecordError {
    /// The top-level value is not an array of groups.
    NotAnArray { found: &'static str },
    /// Group `group` is not an array of records.
    GroupNotAnArray { group: usize, found: &'static str },
    /// Element `index` of group `group` is not an object.
    NotARecord {
        group: usize,
        index: usize,
        found: &'static str,
    },
}

impl fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnArray { found } => {
                write!(f, "expected an array of groups, found {found}")
            }
            Self::GroupNotAnArray { group, found } => {
                write!(f, "group {group}: expected an array of records, found {found}")
            }
            Self::NotARecord {
                group,
                index,
                found,
            } => write!(f, "group {group}, record {index}: expected an object, found {found}"),
        }
    }
}

impl std::error::Error for InvalidRecordError {}

/// Name of a JSON value's kind, as used in error messages.
#[must_use]
pub fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check the shape of `input` and convert it into typed groups.
///
/// # Errors
/// The first shape violation in document order.
pub fn groups_from_json(input: &Value) -> Result<Vec<Vec<Record>>, InvalidRecordError> {
    let Value::Array(groups) = input else {
        debug!("rejecting top-level {}", json_kind(input));
        return Err(InvalidRecordError::NotAnArray {
            found: json_kind(input),
        });
    };

    groups
        .iter()
        .enumerate()
        .map(|(g, group)| {
            let Value::Array(items) = group else {
                debug!("rejecting group {g}: {}", json_kind(group));
                return Err(InvalidRecordError::GroupNotAnArray {
                    group: g,
                    found: json_kind(group),
                });
            };
            items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(map) => Ok(Record::from(map.clone())),
                    other => {
                        debug!("rejecting group {g} record {i}: {}", json_kind(other));
                        Err(InvalidRecordError::NotARecord {
                            group: g,
                            index: i,
                            found: json_kind(other),
                        })
                    }
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Validate and combine JSON groups.
///
/// # Errors
/// See [`groups_from_json`].
pub fn combine_json(input: &Value) -> Result<Vec<Record>, InvalidRecordError> {
    let groups = groups_from_json(input)?;
    Ok(combine(&groups))
}

/// Parse `text` as JSON, then validate and combine it.
///
/// # Errors
/// Returns an error if `text` is not valid JSON or does not have the shape
/// described in [`groups_from_json`].
pub fn combine_json_str(text: &str) -> Result<Vec<Record>> {
    let input: Value = serde_json::from_str(text).context("parsing record groups")?;
    combine_json(&input).context("validating record groups")
}
