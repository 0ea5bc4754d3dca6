use std::{cmp::Ordering, time::Instant};

use alphanum_core::{AlphanumericComparator, Collate};
use rayon::slice::ParallelSliceMut;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOptions {
    pub reverse: bool,
    /// Keep only the first of consecutive lines that compare equal.
    pub unique: bool,
    /// Sort on the rayon pool once there are more lines than this.
    pub parallel_threshold: usize,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            reverse: false,
            unique: false,
            parallel_threshold: 10_000,
        }
    }
}

fn directed<C: Collate>(
    comparator: &AlphanumericComparator<C>,
    options: &SortOptions,
    lhs: &str,
    rhs: &str,
) -> Ordering {
    let ordering = comparator.compare(lhs, rhs);
    if options.reverse {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Stable natural sort of `lines`.
pub fn sort_lines<C>(
    lines: &mut Vec<String>,
    comparator: &AlphanumericComparator<C>,
    options: &SortOptions,
) where
    C: Collate + Sync,
{
    let start = Instant::now();
    let parallel = lines.len() > options.parallel_threshold;
    let cmp = |lhs: &String, rhs: &String| directed(comparator, options, lhs, rhs);

    if parallel {
        lines.par_sort_by(cmp);
    } else {
        lines.sort_by(cmp);
    }

    if options.unique {
        let before = lines.len();
        lines.dedup_by(|current, previous| comparator.compare(previous, current).is_eq());
        tracing::debug!("dropped {} duplicate lines", before - lines.len());
    }

    tracing::debug!(
        lines = lines.len(),
        parallel,
        "sorted in {:?}",
        start.elapsed()
    );
}

/// Index of the first line that is out of order, `None` if `lines` is sorted.
/// With `unique` set, equal neighbours count as out of order.
pub fn first_unsorted<C: Collate>(
    lines: &[String],
    comparator: &AlphanumericComparator<C>,
    options: &SortOptions,
) -> Option<usize> {
    lines
        .windows(2)
        .position(|pair| match directed(comparator, options, &pair[0], &pair[1]) {
            Ordering::Less => false,
            Ordering::Equal => options.unique,
            Ordering::Greater => true,
        })
        .map(|index| index + 1)
}
