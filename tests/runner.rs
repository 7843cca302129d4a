use crossmerge::testing::*;
use crossmerge::{CombineError, Combiner, ExecMode, Record, combine, output_len};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn wide_groups() -> Vec<Vec<Record>> {
    vec![
        numbered_group("a", 40),
        numbered_group("b", 25),
        numbered_group("a", 3),
        numbered_group("c", 10),
    ]
}

#[test]
fn default_combiner_is_sequential_and_unbounded() {
    let c = Combiner::default();
    assert_eq!(c.mode, ExecMode::Sequential);
    assert_eq!(c.limit, None);
    assert_eq!(c, Combiner::new());
}

#[test]
fn parallel_equals_sequential() -> anyhow::Result<()> {
    init_logging();
    let groups = wide_groups();

    let seq = Combiner::new().mode(ExecMode::Sequential).run(&groups)?;
    let par = Combiner::new().mode(ExecMode::Parallel).run(&groups)?;

    assert_eq!(seq.len(), 40 * 25 * 3 * 10);
    assert_collections_equal(&par, &seq);
    assert_collections_equal(&seq, &combine(&groups));
    Ok(())
}

#[test]
fn parallel_handles_edge_cases() -> anyhow::Result<()> {
    let par = Combiner::new().mode(ExecMode::Parallel);

    let none: Vec<Vec<Record>> = vec![];
    assert_collections_equal(&par.run(&none)?, &[Record::new()]);

    let with_empty = vec![numbered_group("a", 5), vec![]];
    assert!(par.run(&with_empty)?.is_empty());
    Ok(())
}

#[test]
fn limit_at_the_product_is_accepted() -> anyhow::Result<()> {
    let groups = wide_groups();
    let n = output_len(&groups).expect("fits in usize");

    let out = Combiner::new().limit(n).run(&groups)?;
    assert_cardinality(&groups, &out);
    Ok(())
}

#[test]
fn limit_below_the_product_is_rejected_in_both_modes() {
    let groups = wide_groups();
    for mode in [ExecMode::Sequential, ExecMode::Parallel] {
        let err = Combiner::new().mode(mode).limit(29_999).run(&groups).unwrap_err();
        assert_eq!(
            err,
            CombineError::TooManyCombinations {
                limit: 29_999,
                required: Some(30_000)
            }
        );
    }
}

#[test]
fn limit_counts_zero_and_empty_products() -> anyhow::Result<()> {
    let groups = vec![numbered_group("a", 1_000), vec![]];
    assert!(Combiner::new().limit(0).run(&groups)?.is_empty());

    let none: Vec<Vec<Record>> = vec![];
    let err = Combiner::new().limit(0).run(&none).unwrap_err();
    assert_eq!(
        err,
        CombineError::TooManyCombinations {
            limit: 0,
            required: Some(1)
        }
    );
    Ok(())
}

#[test]
fn combine_error_converts_into_anyhow() {
    let groups = vec![numbered_group("a", 2), numbered_group("b", 2)];
    let res: anyhow::Result<Vec<Record>> =
        Combiner::new().limit(1).run(&groups).map_err(Into::into);
    let err = res.unwrap_err();
    assert_eq!(err.to_string(), "product has 4 combinations, limit is 1");
    assert!(err.downcast_ref::<CombineError>().is_some());
}
