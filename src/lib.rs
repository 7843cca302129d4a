//! # crossmerge
//!
//! Cartesian products of **record groups**. Given an ordered list of groups,
//! each an ordered list of string-keyed records, `crossmerge` builds every
//! combination that picks one record per group and merges that combination
//! into a single record.
//!
//! ## Quick Start
//!
//! ```
//! use crossmerge::*;
//!
//! let sizes = vec![record! { "size" => "S" }, record! { "size" => "L" }];
//! let colors = vec![record! { "color" => "red" }, record! { "color" => "blue" }];
//!
//! let variants = combine(&[sizes, colors]);
//!
//! assert_eq!(
//!     variants,
//!     vec![
//!         record! { "size" => "S", "color" => "red" },
//!         record! { "size" => "S", "color" => "blue" },
//!         record! { "size" => "L", "color" => "red" },
//!         record! { "size" => "L", "color" => "blue" },
//!     ]
//! );
//! ```
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`Record<V>`] maps string keys to values, `serde_json::Value` by
//! default. Any type implementing [`Merge`] can be combined; `BTreeMap`,
//! `HashMap` and `serde_json::Map` implementations are included.
//!
//! ### Merging
//!
//! [`merge(a, b)`](merge()) overlays `b` on a copy of `a`. On a shared key
//! the later record wins. Merging is shallow: nested values are replaced,
//! never merged.
//!
//! ### Ordering
//!
//! Output is in lexicographic order of the chosen indices: the first group
//! varies slowest and the last group varies fastest.
//!
//! ### Edge cases
//!
//! - `combine` of zero groups is one empty record (the empty product).
//! - Any empty group makes the result empty.
//!
//! ## Execution Modes
//!
//! [`combine()`] runs single-threaded. A [`Combiner`] can instead run each
//! fold step on the rayon pool ([`ExecMode::Parallel`]) and can refuse
//! products above a size [`limit`](Combiner::limit). Both modes return the
//! same records in the same order.
//!
//! ## Untyped input
//!
//! The [`validation`] module accepts groups as `serde_json::Value` and
//! reports malformed records with their position ([`InvalidRecordError`]).
//!
//! ## Cost
//!
//! Time and memory are proportional to the product of the group sizes.
//! Use [`output_len`] or a [`Combiner`] limit to bound it.
//!
//! ## Module Overview
//!
//! - [`record`](mod@record) - the `Record` type
//! - [`merge`](mod@merge) - the `Merge` trait and `merge` function
//! - [`combine`](mod@combine) - `combine`, `combine_pair`, `output_len`, `Combiner`
//! - [`validation`] - combining JSON input with shape checks
//! - [`testing`] - assertions, builders and fixtures for tests

pub mod combine;
pub mod merge;
pub mod record;
pub mod testing;
pub mod validation;

pub use combine::{CombineError, Combiner, ExecMode, combine, combine_pair, output_len};
pub use merge::{Merge, merge};
pub use record::Record;
pub use validation::{InvalidRecordError, combine_json, combine_json_str, groups_from_json};

#[doc(hidden)]
pub use serde_json as __serde_json;
