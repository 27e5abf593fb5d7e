use std::error::Error;
use std::fmt;

/// Precondition violations reported by the range-based entry points.
///
/// Empty ranges never produce an error; they are silent no-ops.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortError {
    /// A non-empty range whose inclusive end is not a valid index.
    RangeOutOfBounds { end: usize, len: usize },
    /// A standalone merge was asked to split outside its own range.
    InvalidMidpoint { mid: usize, start: usize, end: usize },
    /// The scratch buffer cannot hold the whole range.
    ScratchTooSmall { required: usize, available: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::RangeOutOfBounds { end, len } => {
                write!(f, "range end {end} out of bounds for sequence of length {len}")
            }
            Self::InvalidMidpoint { mid, start, end } => {
                write!(f, "midpoint {mid} outside of range [{start}, {end}]")
            }
            Self::ScratchTooSmall {
                required,
                available,
            } => write!(
                f,
                "scratch buffer too small: need {required} elements, have {available}"
            ),
        }
    }
}

impl Error for SortError {}
