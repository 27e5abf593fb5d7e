use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::SortError;

use super::common::{self, Bounds};

/// Merges the sorted partitions `data[first..=mid]` and `data[mid + 1..=last]`
/// in place, using no storage beyond a few cursors.
///
/// Each element taken from the right partition is moved into position by
/// shifting the unconsumed part of the left partition one slot to the right,
/// so the worst case is quadratic in moves.
pub fn merge<T, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    mid: usize,
    mut cmp: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Some(bounds) = common::resolve_range(data.len(), &range)? else {
        return Ok(());
    };
    if mid < bounds.first || mid > bounds.last {
        return Err(SortError::InvalidMidpoint {
            mid,
            start: bounds.first,
            end: bounds.last,
        });
    }
    merge_bounds(data, bounds, mid, &mut cmp);
    Ok(())
}

pub(crate) fn merge_bounds<T, F>(data: &mut [T], bounds: Bounds, mid: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = bounds.last;
    // f1..=e1 is the unconsumed window of the left partition, f2..=last the
    // unconsumed right partition. The two stay adjacent: f2 == e1 + 1.
    let mut f1 = bounds.first;
    let mut e1 = mid;
    let mut f2 = mid + 1;

    while f1 <= e1 && f2 <= last {
        debug_assert_eq!(f2, e1 + 1);
        match cmp(&data[f1], &data[f2]) {
            Ordering::Less => {
                f1 += 1;
            }
            Ordering::Equal => {
                // Right element lands directly behind its equal on the left.
                data[(f1 + 1)..=f2].rotate_right(1);
                f1 += 2;
                e1 += 1;
                f2 += 1;
            }
            Ordering::Greater => {
                data[f1..=f2].rotate_right(1);
                f1 += 1;
                e1 += 1;
                f2 += 1;
            }
        }
    }
}
