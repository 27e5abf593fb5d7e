use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::SortError;

use super::common::{self, Bounds};

/// Merges the sorted partitions `data[first..=mid]` and `data[mid + 1..=last]`
/// through `scratch`, which must hold at least `last - first + 1` elements.
///
/// The scratch contents on entry are ignored and unspecified on return. An
/// undersized scratch buffer is reported before `data` is touched.
pub fn merge_aux<T, F>(
    data: &mut [T],
    range: RangeInclusive<usize>,
    mid: usize,
    scratch: &mut [T],
    mut cmp: F,
) -> Result<(), SortError>
where
    T: Clone,
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
    common::check_scratch(bounds.len(), scratch.len())?;
    merge_aux_bounds(data, bounds, mid, scratch, &mut cmp);
    Ok(())
}

pub(crate) fn merge_aux_bounds<T, F>(
    data: &mut [T],
    bounds: Bounds,
    mid: usize,
    scratch: &mut [T],
    cmp: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(scratch.len() >= bounds.len());

    let Bounds { first, last } = bounds;
    let e1 = mid;
    let mut f1 = first;
    let mut f2 = mid + 1;
    let mut i = 0usize;

    while f1 <= e1 && f2 <= last {
        match cmp(&data[f1], &data[f2]) {
            Ordering::Less => {
                scratch[i].clone_from(&data[f1]);
                i += 1;
                f1 += 1;
            }
            Ordering::Equal => {
                scratch[i].clone_from(&data[f1]);
                scratch[i + 1].clone_from(&data[f2]);
                i += 2;
                f1 += 1;
                f2 += 1;
            }
            Ordering::Greater => {
                scratch[i].clone_from(&data[f2]);
                i += 1;
                f2 += 1;
            }
        }
    }

    if f1 > e1 {
        // The right remainder already sits at the tail.
        data[first..(first + i)].clone_from_slice(&scratch[..i]);
    } else {
        // The left remainder overlaps the landing zone of the merged prefix:
        // move it behind the consumed right partition first.
        let rest = e1 - f1 + 1;
        data[f1..=last].rotate_left(rest);
        debug_assert_eq!(first + i, last + 1 - rest);
        data[first..(first + i)].clone_from_slice(&scratch[..i]);
    }
}
