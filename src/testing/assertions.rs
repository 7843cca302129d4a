//! Assertion functions for testing combined output.

use crate::combine::output_len;
use std::fmt::Debug;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use crossmerge::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections hold the same elements with the same
/// multiplicities, ignoring order.
///
/// Only `PartialEq` is required, so records holding `serde_json::Value`
/// (which is neither `Hash` nor `Ord`) can be compared.
///
/// # Panics
///
/// Panics if some element occurs a different number of times in each.
///
/// # Example
///
/// ```
/// use crossmerge::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2, 1], &[1, 1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    let mut unmatched: Vec<&T> = expected.iter().collect();
    let mut extra: Vec<&T> = Vec::new();
    for a in actual {
        if let Some(pos) = unmatched.iter().position(|e| *e == a) {
            unmatched.swap_remove(pos);
        } else {
            extra.push(a);
        }
    }

    assert!(
        extra.is_empty() && unmatched.is_empty(),
        "Collection content mismatch:\n  Missing elements: {unmatched:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that `output` has as many records as the product of the group
/// lengths (one for zero groups).
///
/// # Panics
///
/// Panics on a length mismatch, or if the product overflows `usize`.
///
/// # Example
///
/// ```
/// use crossmerge::{combine, Record};
/// use crossmerge::testing::assert_cardinality;
///
/// let groups = vec![vec![Record::<u8>::new(); 3], vec![Record::new(); 4]];
/// assert_cardinality(&groups, &combine(&groups));
/// ```
pub fn assert_cardinality<G, R>(groups: &[G], output: &[R])
where
    G: AsRef<[R]>,
{
    let lens: Vec<usize> = groups.iter().map(|g| g.as_ref().len()).collect();
    let expected = output_len(groups)
        .unwrap_or_else(|| panic!("Product of group lengths {lens:?} overflows usize"));
    assert_eq!(
        output.len(),
        expected,
        "Cardinality mismatch:\n  Group lengths: {lens:?}\n  Expected: {expected}\n  Actual: {}",
        output.len()
    );
}

/// Assert that `groups` still equals a snapshot taken before combining.
///
/// # Panics
///
/// Panics if any group differs from its snapshot.
///
/// # Example
///
/// ```
/// use crossmerge::{combine, Record};
/// use crossmerge::testing::assert_inputs_unchanged;
///
/// let groups = vec![vec![Record::new().with("a", 1)]];
/// let before = groups.clone();
/// let _ = combine(&groups);
/// assert_inputs_unchanged(&before, &groups);
/// ```
pub fn assert_inputs_unchanged<T: Debug + PartialEq>(before: &[Vec<T>], after: &[Vec<T>]) {
    assert_eq!(
        before.len(),
        after.len(),
        "Group count changed: {} -> {}",
        before.len(),
        after.len()
    );
    for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
        assert_eq!(b, a, "Group {i} was modified:\n  Before: {b:?}\n  After: {a:?}");
    }
}

/// Assert that all elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use crossmerge::testing::assert_all;
///
/// assert_all(&[2, 4, 6, 8], |x| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Collection mismatch at index 1")]
    fn ordered_comparison_reports_index() {
        assert_collections_equal(&[1, 2], &[1, 3]);
    }

    #[test]
    #[should_panic(expected = "Extra elements")]
    fn unordered_comparison_counts_duplicates() {
        assert_collections_unordered_equal(&[1, 1, 2], &[1, 2, 2]);
    }

    #[test]
    #[should_panic(expected = "Cardinality mismatch")]
    fn cardinality_mismatch_panics() {
        let groups = vec![vec![1, 2], vec![3, 4]];
        assert_cardinality(&groups, &[0, 0, 0]);
    }

    #[test]
    fn zero_groups_have_cardinality_one() {
        let groups: Vec<Vec<u8>> = vec![];
        assert_cardinality(&groups, &[0u8]);
    }
}
