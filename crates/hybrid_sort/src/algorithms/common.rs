use std::ops::RangeInclusive;

use crate::SortError;

/// Inclusive `(first, last)` bounds of a validated, non-empty range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub first: usize,
    pub last: usize,
}

impl Bounds {
    #[inline]
    pub fn len(self) -> usize {
        self.last - self.first + 1
    }

    /// Floor midpoint, so the left partition is never the shorter one.
    #[inline]
    pub fn mid(self) -> usize {
        self.first + (self.last - self.first) / 2
    }
}

/// Checks `range` against a sequence of `len` elements.
///
/// `Ok(None)` means the range is empty and the caller should do nothing.
#[inline]
pub(crate) fn resolve_range(
    len: usize,
    range: &RangeInclusive<usize>,
) -> Result<Option<Bounds>, SortError> {
    let (first, last) = (*range.start(), *range.end());
    if first > last {
        return Ok(None);
    }
    if last >= len {
        return Err(SortError::RangeOutOfBounds { end: last, len });
    }
    Ok(Some(Bounds { first, last }))
}

#[inline]
pub(crate) fn check_scratch(required: usize, available: usize) -> Result<(), SortError> {
    if available < required {
        return Err(SortError::ScratchTooSmall {
            required,
            available,
        });
    }
    Ok(())
}
