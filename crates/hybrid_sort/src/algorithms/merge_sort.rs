use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::SortError;

use super::common::{self, Bounds};
use super::{insertion_sort, merge, merge_aux};

/// Top-down merge sort of `data[range]` using the in-place merge.
pub fn merge_sort<T, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    cmp: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    hybrid_sort(data, range, 0, cmp)
}

/// Top-down merge sort of `data[range]` merging through `scratch`.
///
/// One scratch buffer of at least the range length serves every level of
/// the recursion.
pub fn merge_sort_aux<T, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    scratch: &mut [T],
    cmp: F,
) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    hybrid_sort_aux(data, range, 0, scratch, cmp)
}

/// Merge sort that hands partitions of at most `threshold` elements to
/// insertion sort. A threshold of 0 or 1 is plain merge sort.
pub fn hybrid_sort<T, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    threshold: usize,
    mut cmp: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(bounds) = common::resolve_range(data.len(), &range)? {
        sort_recursive(data, bounds, threshold, &mut cmp);
    }
    Ok(())
}

/// [`hybrid_sort`] with the buffered merge.
pub fn hybrid_sort_aux<T, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    threshold: usize,
    scratch: &mut [T],
    mut cmp: F,
) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(bounds) = common::resolve_range(data.len(), &range)? {
        common::check_scratch(bounds.len(), scratch.len())?;
        sort_aux_recursive(data, bounds, threshold, scratch, &mut cmp);
    }
    Ok(())
}

pub(crate) fn sort_recursive<T, F>(data: &mut [T], bounds: Bounds, threshold: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = bounds.len();
    if len <= 1 {
        return;
    }
    if len <= threshold {
        insertion_sort::sort_bounds(data, bounds, cmp);
        return;
    }

    let mid = bounds.mid();
    sort_recursive(data, Bounds { first: bounds.first, last: mid }, threshold, cmp);
    sort_recursive(data, Bounds { first: mid + 1, last: bounds.last }, threshold, cmp);
    merge::merge_bounds(data, bounds, mid, cmp);
}

pub(crate) fn sort_aux_recursive<T, F>(
    data: &mut [T],
    bounds: Bounds,
    threshold: usize,
    scratch: &mut [T],
    cmp: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = bounds.len();
    if len <= 1 {
        return;
    }
    if len <= threshold {
        insertion_sort::sort_bounds(data, bounds, cmp);
        return;
    }

    let mid = bounds.mid();
    sort_aux_recursive(
        data,
        Bounds { first: bounds.first, last: mid },
        threshold,
        scratch,
        cmp,
    );
    sort_aux_recursive(
        data,
        Bounds { first: mid + 1, last: bounds.last },
        threshold,
        scratch,
        cmp,
    );
    merge_aux::merge_aux_bounds(data, bounds, mid, scratch, cmp);
}

#[cfg(test)]
mod tests {
    use crate::{CountingComparator, ascending};

    use super::*;

    fn check_all_forms(input: &[i64], threshold: usize) {
        let mut expected = input.to_vec();
        expected.sort_unstable();
        let last = input.len().wrapping_sub(1);
        let range = if input.is_empty() { 1..=0 } else { 0..=last };

        let mut scratch = vec![0; input.len()];

        let mut data = input.to_vec();
        merge_sort(&mut data, range.clone(), ascending).unwrap();
        assert_eq!(data, expected, "merge_sort");

        let mut data = input.to_vec();
        merge_sort_aux(&mut data, range.clone(), &mut scratch, ascending).unwrap();
        assert_eq!(data, expected, "merge_sort_aux");

        let mut data = input.to_vec();
        hybrid_sort(&mut data, range.clone(), threshold, ascending).unwrap();
        assert_eq!(data, expected, "hybrid_sort threshold={threshold}");

        let mut data = input.to_vec();
        hybrid_sort_aux(&mut data, range, threshold, &mut scratch, ascending).unwrap();
        assert_eq!(data, expected, "hybrid_sort_aux threshold={threshold}");
    }

    #[test]
    fn small_inputs_every_threshold() {
        let cases: [&[i64]; 6] = [
            &[],
            &[1],
            &[2, 1],
            &[3, 1, 2, 3, 1],
            &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[4, -2, 4, 0, -2, 9, 4, 4, 1, 0, 0, 7, -9],
        ];
        for case in cases {
            for threshold in 0..=case.len() + 1 {
                check_all_forms(case, threshold);
            }
        }
    }

    #[test]
    fn thousand_sevens() {
        let input = vec![7_i64; 1000];
        for threshold in [0, 1, 2, 16, 1000] {
            check_all_forms(&input, threshold);
        }
    }

    #[test]
    fn sub_range_leaves_neighbours_alone() {
        let mut data = [50, 40, 5, 3, 9, 1, 7, -10, -20];
        hybrid_sort(&mut data, 2..=6, 2, ascending).unwrap();
        assert_eq!(data, [50, 40, 1, 3, 5, 7, 9, -10, -20]);

        let mut data = [50, 40, 5, 3, 9, 1, 7, -10, -20];
        let mut scratch = [0; 5];
        merge_sort_aux(&mut data, 2..=6, &mut scratch, ascending).unwrap();
        assert_eq!(data, [50, 40, 1, 3, 5, 7, 9, -10, -20]);
    }

    #[test]
    fn threshold_boundary_uses_insertion_sort_at_equality() {
        // Four elements, threshold four: insertion sort only. Reversed input
        // costs it 6 comparisons, a merge sort of the same input costs 4.
        let mut counter = CountingComparator::new(ascending::<i64>);
        let mut data = [4, 3, 2, 1];
        hybrid_sort(&mut data, 0..=3, 4, |a, b| counter.compare(a, b)).unwrap();
        assert_eq!(data, [1, 2, 3, 4]);
        assert_eq!(counter.count(), 6);

        counter.reset();
        let mut data = [4, 3, 2, 1];
        hybrid_sort(&mut data, 0..=3, 3, |a, b| counter.compare(a, b)).unwrap();
        assert_eq!(data, [1, 2, 3, 4]);
        assert_eq!(counter.count(), 4);
    }

    #[test]
    fn no_op_boundaries() {
        let original = [6, 5, 4, 3, 2, 1, 0];
        let mut data = original;
        let mut scratch: [i32; 0] = [];
        merge_sort(&mut data, 5..=4, ascending).unwrap();
        merge_sort_aux(&mut data, 5..=4, &mut scratch, ascending).unwrap();
        hybrid_sort(&mut data, 5..=4, 3, ascending).unwrap();
        hybrid_sort_aux(&mut data, 5..=4, 3, &mut scratch, ascending).unwrap();
        assert_eq!(data, original);

        merge_sort(&mut data, 3..=3, ascending).unwrap();
        merge_sort_aux(&mut data, 3..=3, &mut [0], ascending).unwrap();
        hybrid_sort(&mut data, 3..=3, 8, ascending).unwrap();
        hybrid_sort_aux(&mut data, 3..=3, 8, &mut [0], ascending).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn undersized_scratch_is_reported_up_front() {
        let original = [5, 1, 4, 2, 3];
        let mut data = original;
        let mut scratch = [0; 4];
        let expected = Err(SortError::ScratchTooSmall {
            required: 5,
            available: 4,
        });
        assert_eq!(
            merge_sort_aux(&mut data, 0..=4, &mut scratch, ascending),
            expected
        );
        assert_eq!(
            hybrid_sort_aux(&mut data, 0..=4, 2, &mut scratch, ascending),
            expected
        );
        assert_eq!(data, original);

        // A sub-range only needs scratch for its own length.
        hybrid_sort_aux(&mut data, 1..=4, 0, &mut scratch, ascending).unwrap();
        assert_eq!(data, [5, 1, 2, 3, 4]);
    }
}
