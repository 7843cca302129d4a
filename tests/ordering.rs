use crossmerge::testing::*;
use crossmerge::{Record, combine, combine_pair, record};

fn indexed(key: &str, n: u64) -> Vec<Record> {
    numbered_group(key, n)
}

#[test]
fn output_is_lexicographic_in_group_indices() {
    let groups = vec![indexed("a", 3), indexed("b", 2), indexed("c", 4)];
    let out = combine(&groups);

    let seen: Vec<(u64, u64, u64)> = out
        .iter()
        .map(|r| {
            let get = |k: &str| r.get(k).and_then(serde_json::Value::as_u64).unwrap();
            (get("a"), get("b"), get("c"))
        })
        .collect();

    let mut expected = Vec::new();
    for a in 0..3 {
        for b in 0..2 {
            for c in 0..4 {
                expected.push((a, b, c));
            }
        }
    }
    assert_eq!(seen, expected);
}

#[test]
fn fold_agrees_with_sequential_pairwise_products() {
    let a = indexed("a", 2);
    let b = vec![record! { "b" => "x", "a" => 99 }, record! { "b" => "y" }];
    let c = indexed("c", 3);

    let all_at_once = combine(&[a.clone(), b.clone(), c.clone()]);

    // Combine [A, B] first, then treat that result as a single group.
    let ab = combine(&[a.clone(), b.clone()]);
    let regrouped = combine(&[ab.clone(), c.clone()]);
    assert_collections_equal(&all_at_once, &regrouped);

    let pairwise = combine_pair(&combine_pair(&combine_pair(&[record! {}], &a), &b), &c);
    assert_collections_equal(&all_at_once, &pairwise);
}

#[test]
fn grouping_from_the_right_gives_the_same_set() {
    let a = indexed("a", 2);
    let b = indexed("b", 3);
    let c = indexed("c", 2);

    let left = combine(&[combine(&[a.clone(), b.clone()]), c.clone()]);
    let right = combine(&[a, combine(&[b, c])]);
    assert_collections_equal(&left, &right);
}

#[test]
fn swapping_groups_changes_order_and_collisions() {
    let a = vec![record! { "k" => 1 }, record! { "k" => 2 }];
    let b = vec![record! { "k" => "x" }];

    assert_collections_equal(
        &combine(&[a.clone(), b.clone()]),
        &[record! { "k" => "x" }, record! { "k" => "x" }],
    );
    assert_collections_equal(
        &combine(&[b, a]),
        &[record! { "k" => 1 }, record! { "k" => 2 }],
    );
}

#[test]
fn duplicates_are_kept() {
    let groups = vec![
        vec![record! { "a" => 1 }, record! { "a" => 1 }],
        vec![record! { "b" => 2 }],
    ];
    let out = combine(&groups);
    assert_collections_unordered_equal(
        &out,
        &[record! { "a" => 1, "b" => 2 }, record! { "a" => 1, "b" => 2 }],
    );
}
