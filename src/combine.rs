//! Cartesian product of record groups.
//!
//! [`combine`] folds left over the groups, starting from a single empty
//! record. Each step replaces the accumulator with the product of the
//! accumulator and the next group, merging every pair with [`Merge::merge`]:
//!
//! ```text
//! acc = [{}]
//! for G in groups:
//!     acc = [a.merge(g) for a in acc for g in G]
//! ```
//!
//! The outer loop runs over the accumulator and the inner loop over the
//! group, so the first group varies slowest and the last group fastest.
//!
//! ```
//! use crossmerge::{combine, Record};
//!
//! let sizes = vec![
//!     Record::new().with("size", "S"),
//!     Record::new().with("size", "L"),
//! ];
//! let colors = vec![
//!     Record::new().with("color", "red"),
//!     Record::new().with("color", "blue"),
//! ];
//!
//! let out = combine(&[sizes, colors]);
//! assert_eq!(out.len(), 4);
//! assert_eq!(out[1], Record::new().with("size", "S").with("color", "blue"));
//! ```
//!
//! ## Edge cases
//! - No groups at all yields exactly one empty record (the empty product).
//! - Any empty group yields no records.
//!
//! ## Cost
//! Time and space are proportional to the product of the group sizes. Nothing
//! here guards against combinatorial explosion unless a [`Combiner`] is given
//! a [`limit`](Combiner::limit); [`output_len`] lets callers check up front.

use crate::merge::Merge;
use log::{debug, trace};
use rayon::prelude::*;
use std::fmt;

/// Every combination of one record per group, each merged into one record.
///
/// Never fails and never modifies its input.
#[must_use]
pub fn combine<R, G>(groups: &[G]) -> Vec<R>
where
    R: Merge,
    G: AsRef<[R]>,
{
    fold_groups(groups, combine_pair, "combine")
}

/// Left fold over `groups` from a single empty record, one `step` per group.
fn fold_groups<R, G>(groups: &[G], step: fn(&[R], &[R]) -> Vec<R>, label: &str) -> Vec<R>
where
    R: Merge,
    G: AsRef<[R]>,
{
    trace!("{label}: {} groups", groups.len());
    groups
        .iter()
        .enumerate()
        .fold(vec![R::empty()], |acc, (i, group)| {
            let group = group.as_ref();
            let next = step(&acc, group);
            debug!(
                "{label}: group {i} ({} records) x {} accumulated -> {}",
                group.len(),
                acc.len(),
                next.len()
            );
            next
        })
}

/// The product of two sequences of records, `acc` slow and `group` fast.
///
/// `combine(&[a, b])` equals `combine_pair(&combine(&[a]), &b)`.
#[must_use]
pub fn combine_pair<R: Merge>(acc: &[R], group: &[R]) -> Vec<R> {
    let mut out = Vec::with_capacity(acc.len().saturating_mul(group.len()));
    for a in acc {
        for g in group {
            out.push(a.merge(g));
        }
    }
    out
}

/// Parallel counterpart of [`combine_pair`]; output order is identical.
fn combine_pair_par<R>(acc: &[R], group: &[R]) -> Vec<R>
where
    R: Merge + Send + Sync,
{
    acc.par_iter()
        .flat_map_iter(|a| group.iter().map(move |g| a.merge(g)))
        .collect()
}

/// Number of records [`combine`] would return, or `None` if that overflows
/// `usize`. Zero groups give `Some(1)`.
#[must_use]
pub fn output_len<G, R>(groups: &[G]) -> Option<usize>
where
    G: AsRef<[R]>,
{
    groups
        .iter()
        .try_fold(1usize, |n, g| n.checked_mul(g.as_ref().len()))
}

/// How a [`Combiner`] evaluates each fold step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecMode {
    /// Single-threaded, in order.
    #[default]
    Sequential,
    /// Each step's product is computed on the rayon thread pool.
    Parallel,
}

/// Errors returned by [`Combiner::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombineError {
    /// The configured limit is below the size of the product.
    /// `required` is `None` when the product overflows `usize`.
    TooManyCombinations {
        limit: usize,
        required: Option<usize>,
    },
}

impl fmt::Display for CombineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyCombinations {
                limit,
                required: Some(n),
            } => write!(f, "product has {n} combinations, limit is {limit}"),
            Self::TooManyCombinations {
                limit,
                required: None,
            } => write!(f, "product size overflows usize, limit is {limit}"),
        }
    }
}

impl std::error::Error for CombineError {}

/// A configured combiner.
///
/// The default runs sequentially with no limit and returns the same records
/// as [`combine`]. Because the mode is chosen at runtime, [`run`](Self::run)
/// requires `Send + Sync` records in every mode; records that are not
/// thread-safe (holding `Rc`, say) go through [`combine`] directly.
///
/// ```
/// use crossmerge::{Combiner, CombineError, ExecMode, Record};
///
/// let g: Vec<Record<u32>> = (0..10).map(|i| Record::new().with("i", i)).collect();
/// let groups = vec![g.clone(), g.clone(), g];
///
/// let out = Combiner::new().mode(ExecMode::Parallel).run(&groups)?;
/// assert_eq!(out.len(), 1000);
///
/// let err = Combiner::new().limit(999).run(&groups).unwrap_err();
/// assert_eq!(
///     err,
///     CombineError::TooManyCombinations {
///         limit: 999,
///         required: Some(1000)
///     }
/// );
/// # Ok::<(), CombineError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Combiner {
    pub mode: ExecMode,
    pub limit: Option<usize>,
}

impl Combiner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(mut self, mode: ExecMode) -> Self {
        self.mode = mode;
        self
    }

    /// Refuse to build products with more than `max` records.
    #[must_use]
    pub const fn limit(mut self, max: usize) -> Self {
        self.limit = Some(max);
        self
    }

    /// Remove any limit.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Combine `groups` under this configuration.
    ///
    /// `R: Send + Sync` is required even in [`ExecMode::Sequential`]; use
    /// [`combine`] for records that cannot cross threads.
    ///
    /// # Errors
    /// [`CombineError::TooManyCombinations`] if a limit is set and the
    /// product exceeds it. The check happens before any record is built.
    pub fn run<R, G>(&self, groups: &[G]) -> Result<Vec<R>, CombineError>
    where
        R: Merge + Send + Sync,
        G: AsRef<[R]>,
    {
        if let Some(limit) = self.limit {
            match output_len(groups) {
                Some(n) if n <= limit => {}
                required => {
                    debug!("combiner: refusing product of {required:?} records (limit {limit})");
                    return Err(CombineError::TooManyCombinations { limit, required });
                }
            }
        }

        Ok(match self.mode {
            ExecMode::Sequential => fold_groups(groups, combine_pair, "combine"),
            ExecMode::Parallel => fold_groups(groups, combine_pair_par, "combine (parallel)"),
        })
    }
}
