use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use crate::{InvalidRangeError, Pieces};

/// A half-open interval `[start, end)` over a numeric type
///
/// An interval with `start == end` is empty, it can be constructed but covers no points.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "(T, T)",
        into = "(T, T)",
        bound(
            serialize = "T: serde::Serialize + Copy",
            deserialize = "T: serde::Deserialize<'de> + PartialOrd + Copy + Debug"
        )
    )
)]
pub struct Interval<T> {
    pub(crate) start: T,
    pub(crate) end: T,
}

impl<T: PartialOrd + Copy + Debug> Interval<T> {
    /// Create a new interval from `start` (included) to `end` (excluded)
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_intervalset::{Interval, InvalidRangeError};
    ///
    /// let a = Interval::new(1, 5).unwrap();
    /// assert_eq!((1, 5), a.into_inner());
    ///
    /// assert!(matches!(Interval::new(5, 1), Err(InvalidRangeError::Reversed { .. })));
    /// assert!(matches!(Interval::new(f64::NAN, 1.0), Err(InvalidRangeError::Incomparable { .. })));
    /// ```
    pub fn new(start: T, end: T) -> Result<Interval<T>, InvalidRangeError> {
        match start.partial_cmp(&end) {
            Some(Ordering::Less) | Some(Ordering::Equal) => Ok(Interval { start, end }),
            Some(Ordering::Greater) => Err(InvalidRangeError::reversed(&start, &end)),
            None => Err(InvalidRangeError::incomparable(&start, &end)),
        }
    }

    /// The first point covered by this interval
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// The first point after this interval
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if this interval covers no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if given point falls within this interval
    #[inline]
    pub fn contains(&self, point: &T) -> bool {
        self.start <= *point && *point < self.end
    }

    /// Returns `true` if the intervals share a point, or touch at a boundary
    ///
    /// Touching intervals count as overlapping, so that adding `[5, 10)` next to `[0, 5)` coalesces
    /// into `[0, 10)` instead of leaving two fragments behind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_intervalset::Interval;
    ///
    /// let a = Interval::new(0, 5).unwrap();
    /// assert!(a.overlaps(&Interval::new(5, 10).unwrap()));
    /// assert!(a.overlaps(&Interval::new(3, 4).unwrap()));
    /// assert!(!a.overlaps(&Interval::new(6, 10).unwrap()));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if the intervals share at least one point, touching boundaries don't count
    #[inline]
    pub fn intersects(&self, other: &Interval<T>) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The smallest interval covering both intervals
    ///
    /// Only meaningful when the intervals [`overlap`](Interval::overlaps), otherwise the gap between
    /// them gets covered as well.
    pub fn merge(&self, other: &Interval<T>) -> Interval<T> {
        debug_assert!(self.overlaps(other), "merging disjoint intervals {:?} and {:?}", self, other);

        Interval {
            start: if other.start < self.start { other.start } else { self.start },
            end: if other.end > self.end { other.end } else { self.end },
        }
    }

    /// The parts of this interval left after taking out `removal`, left piece first
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_intervalset::Interval;
    ///
    /// let a = Interval::new(1, 10).unwrap();
    ///
    /// let pieces = a.split_around(&Interval::new(3, 5).unwrap());
    /// assert_eq!(&[Interval::new(1, 3).unwrap(), Interval::new(5, 10).unwrap()], &pieces[..]);
    ///
    /// let pieces = a.split_around(&Interval::new(0, 20).unwrap());
    /// assert!(pieces.is_empty());
    /// ```
    pub fn split_around(&self, removal: &Interval<T>) -> Pieces<Interval<T>> {
        let mut pieces = Pieces::new();

        if removal.is_empty() || !self.intersects(removal) {
            if !self.is_empty() {
                pieces.push(*self);
            }

            return pieces;
        }

        // Removal starts inside, keep the left side
        if self.start < removal.start {
            pieces.push(Interval { start: self.start, end: removal.start });
        }

        // Removal ends inside, keep the right side
        if removal.end < self.end {
            pieces.push(Interval { start: removal.end, end: self.end });
        }

        pieces
    }

    /// Returns the internal `start` and `end` bounds
    #[inline]
    pub fn into_inner(self) -> (T, T) {
        (self.start, self.end)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
