//! Testing utilities for code that combines records.
//!
//! This module provides helpers for writing tests against [`combine`](crate::combine)
//! and [`Combiner`](crate::Combiner) output:
//!
//! - **Assertions**: compare combined output with expected results
//! - **Builders**: assemble records and groups tersely
//! - **Fixtures**: small ready-made groups for common scenarios
//!
//! # Quick Start
//!
//! ```
//! use crossmerge::*;
//! use crossmerge::testing::*;
//!
//! let groups = vec![
//!     GroupBuilder::new().add(record! { "a" => 1 }).add(record! { "a" => 2 }).build(),
//!     GroupBuilder::new().add(record! { "b" => 10 }).build(),
//! ];
//!
//! let out = combine(&groups);
//! assert_cardinality(&groups, &out);
//! assert_collections_equal(
//!     &out,
//!     &[record! { "a" => 1, "b" => 10 }, record! { "a" => 2, "b" => 10 }],
//! );
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_collections_equal`]: exact, order-dependent comparison
//! - [`assert_collections_unordered_equal`]: same records, any order
//! - [`assert_cardinality`]: output length is the product of group lengths
//! - [`assert_all`]: every record satisfies a predicate
//! - [`assert_inputs_unchanged`]: combining left the groups as they were

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
