//! Comparator-driven insertion sort, merge sort and a hybrid of the two.
//!
//! Every range-based routine sorts `data[first..=last]` in place. A range
//! whose start exceeds its end is empty and leaves `data` untouched. Merging
//! comes in two flavours: an in-place block-shifting merge that needs no
//! extra storage, and a buffered merge that goes through a caller-supplied
//! scratch slice.

mod algorithms;
mod comparator;
mod error;

use std::cmp::Ordering;

use algorithms::common::Bounds;

pub use algorithms::insertion_sort::insertion_sort;
pub use algorithms::merge::merge;
pub use algorithms::merge_aux::merge_aux;
pub use algorithms::merge_sort::{hybrid_sort, hybrid_sort_aux, merge_sort, merge_sort_aux};
pub use comparator::{CountingComparator, ascending};
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    MergeSort,
    MergeSortAux,
    HybridSort,
    HybridSortAux,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 5] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::MergeSortAux,
    SortAlgorithm::HybridSort,
    SortAlgorithm::HybridSortAux,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::MergeSortAux => "merge_sort_aux",
        SortAlgorithm::HybridSort => "hybrid_sort",
        SortAlgorithm::HybridSortAux => "hybrid_sort_aux",
    }
}

/// Whether the algorithm merges through a scratch buffer.
pub fn uses_scratch(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::MergeSortAux | SortAlgorithm::HybridSortAux
    )
}

impl SortAlgorithm {
    pub fn from_name(name: &str) -> Option<Self> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == name)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortParams {
    /// Partitions with at most this many elements are insertion sorted.
    /// Only the hybrid algorithms read it.
    pub threshold: usize,
}

pub const DEFAULT_PARAMS: SortParams = SortParams { threshold: 16 };

impl Default for SortParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

/// Reusable scratch storage for the buffered algorithms.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub scratch: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl<T: Clone> SortContext<T> {
    /// Grows the scratch buffer to at least `len` elements, padding with
    /// clones of `fill`, and returns its first `len` slots.
    #[inline]
    pub(crate) fn ensure_scratch(&mut self, len: usize, fill: &T) -> &mut [T] {
        if self.scratch.len() < len {
            self.scratch.resize(len, fill.clone());
        }
        &mut self.scratch[..len]
    }
}

pub fn sort_slice<T, F>(algo: SortAlgorithm, data: &mut [T], params: SortParams, cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ctx = SortContext::default();
    sort_slice_with_ctx(algo, data, params, &mut ctx, cmp);
}

/// Sorts all of `data`, taking scratch space for the buffered algorithms
/// from `ctx`.
pub fn sort_slice_with_ctx<T, F>(
    algo: SortAlgorithm,
    data: &mut [T],
    params: SortParams,
    ctx: &mut SortContext<T>,
    mut cmp: F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }
    let bounds = Bounds {
        first: 0,
        last: data.len() - 1,
    };

    use algorithms::{insertion_sort, merge_sort};
    match algo {
        SortAlgorithm::InsertionSort => insertion_sort::sort_bounds(data, bounds, &mut cmp),
        SortAlgorithm::MergeSort => merge_sort::sort_recursive(data, bounds, 0, &mut cmp),
        SortAlgorithm::HybridSort => {
            merge_sort::sort_recursive(data, bounds, params.threshold, &mut cmp)
        }
        SortAlgorithm::MergeSortAux => {
            let scratch = ctx.ensure_scratch(data.len(), &data[0]);
            merge_sort::sort_aux_recursive(data, bounds, 0, scratch, &mut cmp);
        }
        SortAlgorithm::HybridSortAux => {
            let scratch = ctx.ensure_scratch(data.len(), &data[0]);
            merge_sort::sort_aux_recursive(data, bounds, params.threshold, scratch, &mut cmp);
        }
    }
}
