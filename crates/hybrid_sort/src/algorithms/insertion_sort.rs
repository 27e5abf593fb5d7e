use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::SortError;

use super::common::{self, Bounds};

/// Sorts `data[range]` ascending by `cmp` using adjacent swaps.
///
/// An empty range (start greater than end) is a no-op.
pub fn insertion_sort<T, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    mut cmp: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(bounds) = common::resolve_range(data.len(), &range)? {
        sort_bounds(data, bounds, &mut cmp);
    }
    Ok(())
}

pub(crate) fn sort_bounds<T, F>(data: &mut [T], bounds: Bounds, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Bounds { first, last } = bounds;
    for i in (first + 1)..=last {
        let mut j = i;
        // Equal neighbours stop the walk, so ties keep their relative order within a pass.
        while j > first && cmp(&data[j], &data[j - 1]) == Ordering::Less {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}
