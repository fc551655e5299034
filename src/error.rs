use std::fmt::Debug;
use thiserror::Error;

/// Returned when the bounds handed to [`Interval::new`](crate::Interval::new) don't form a valid interval
///
/// The bounds are kept in their `Debug` rendering, so the error doesn't carry the numeric type around
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRangeError {
    /// `start` lies after `end`
    #[error("invalid range: start {start} is greater than end {end}")]
    Reversed { start: String, end: String },

    /// The bounds have no ordering, e.g. one of them is `NaN`
    #[error("invalid range: bounds {start} and {end} can't be ordered")]
    Incomparable { start: String, end: String },
}

impl InvalidRangeError {
    pub(crate) fn reversed<T: Debug>(start: &T, end: &T) -> Self {
        InvalidRangeError::Reversed {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        }
    }

    pub(crate) fn incomparable<T: Debug>(start: &T, end: &T) -> Self {
        InvalidRangeError::Incomparable {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        }
    }
}
