//! A small library keeping a normalized set of half-open numeric intervals
//!
//! An [`IntervalSet`](IntervalSet) is always sorted, disjoint and free of empty intervals. Adding an
//! interval unions it into the set, coalescing everything it overlaps or touches, removing an
//! interval subtracts it, splitting the intervals it cuts through.
//!
//! ```rust
//! use eater_intervalset::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//! set.add(1, 10)?;
//! set.remove(3, 5)?;
//! set.add(10, 12)?;
//!
//! assert_eq!("[1, 3) [5, 12) ", set.to_display_string());
//! # Ok::<(), eater_intervalset::InvalidRangeError>(())
//! ```

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Range;
use tracing::{debug, trace};

mod conversions;
mod error;
mod internal;
mod interval;
mod macros;

pub use crate::error::InvalidRangeError;
pub use crate::interval::Interval;

/// The list type used for storing the intervals of a set
///
/// Disable the `smallvec` feature to use the std [Vec](Vec)
#[cfg(feature = "smallvec")]
pub type RangeVec<T> = smallvec::SmallVec<[T; 5]>;

/// The list type used for storing the intervals of a set
///
/// Enable the `smallvec` feature to use the smallvec's [`SmallVec`](smallvec::SmallVec)
#[cfg(not(feature = "smallvec"))]
pub type RangeVec<T> = Vec<T>;

/// The list type holding what's left of an interval after [`Interval::split_around`](Interval::split_around)
#[cfg(feature = "smallvec")]
pub type Pieces<T> = smallvec::SmallVec<[T; 2]>;

/// The list type holding what's left of an interval after [`Interval::split_around`](Interval::split_around)
#[cfg(not(feature = "smallvec"))]
pub type Pieces<T> = Vec<T>;

/// A set of half-open intervals
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<Interval<T>>",
        into = "Vec<Interval<T>>",
        bound(
            serialize = "T: serde::Serialize + Copy",
            deserialize = "T: serde::Deserialize<'de> + PartialOrd + Copy + Debug"
        )
    )
)]
pub struct IntervalSet<T> {
    pub(crate) items: RangeVec<Interval<T>>,
}

impl<T: PartialOrd + Copy + Debug> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::with_capacity(5)
    }
}

impl<T: PartialOrd + Copy + Debug> IntervalSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new set with given capacity
    #[inline]
    pub fn with_capacity(data: usize) -> Self {
        IntervalSet {
            items: RangeVec::with_capacity(data),
        }
    }

    /// Create a set from a list of ranges, validating every one of them
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_intervalset::IntervalSet;
    ///
    /// let set = IntervalSet::from_ranges([10..15, 1..5, 5..8]).unwrap();
    /// assert_eq!(vec![(1, 8), (10, 15)], set.pairs().collect::<Vec<_>>());
    ///
    /// assert!(IntervalSet::from_ranges([1..5, 8..2]).is_err());
    /// ```
    pub fn from_ranges<I: IntoIterator<Item = Range<T>>>(ranges: I) -> Result<Self, InvalidRangeError> {
        let items = ranges
            .into_iter()
            .map(Interval::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IntervalSet::from(items))
    }

    /// If this is an empty set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The amount of disjoint intervals in this set
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove all intervals from this set
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator with all intervals inside of this set, ascending
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.items.iter()
    }

    /// Returns an iterator with the `(start, end)` bounds of all intervals inside of this set, ascending
    #[inline]
    pub fn pairs(&self) -> impl Iterator<Item = (T, T)> + Clone + '_ {
        self.items.iter().map(|item| item.into_inner())
    }

    /// Check if `point` falls within the intervals defined in this set
    pub fn contains(&self, point: &T) -> bool {
        let idx = self.items.partition_point(|item| !(*point < item.end()));
        self.items.get(idx).map_or(false, |item| item.contains(point))
    }

    /// Add the interval `[start, end)` to this set
    ///
    /// Nothing is changed if the bounds don't form a valid interval.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_intervalset::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(0, 5)?;
    /// set.add(5, 10)?;
    /// assert_eq!("[0, 10) ", set.to_display_string());
    ///
    /// assert!(set.add(20, 15).is_err());
    /// assert_eq!("[0, 10) ", set.to_display_string());
    /// # Ok::<(), eater_intervalset::InvalidRangeError>(())
    /// ```
    pub fn add(&mut self, start: T, end: T) -> Result<(), InvalidRangeError> {
        let interval = Interval::new(start, end).map_err(|err| {
            debug!(?start, ?end, %err, "rejected interval to add");
            err
        })?;

        self.add_interval(interval);
        Ok(())
    }

    /// Add a new interval to this set, merging it with every interval it overlaps or touches
    pub fn add_interval(&mut self, interval: Interval<T>) {
        if interval.is_empty() {
            trace!(?interval, "skipping empty interval");
            return;
        }

        // Members overlapping the new interval form one run, as the set is sorted and disjoint
        let first = self.items.partition_point(|item| item.end() < interval.start());
        let last = first + self.items[first..].partition_point(|item| !(interval.end() < item.start()));

        let merged = self.items[first..last]
            .iter()
            .fold(interval, |acc, item| acc.merge(item));

        trace!(?interval, ?merged, replaced = last - first, "adding interval");

        self.items.drain(first..last);
        self.items.insert(first, merged);

        debug_assert!(self.is_normalized(), "set is not normalized after adding {:?}: {:?}", interval, self);
    }

    /// Remove the interval `[start, end)` from this set
    ///
    /// Nothing is changed if the bounds don't form a valid interval.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_intervalset::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(1, 10)?;
    /// set.remove(5, 20)?;
    /// assert_eq!("[1, 5) ", set.to_display_string());
    /// # Ok::<(), eater_intervalset::InvalidRangeError>(())
    /// ```
    pub fn remove(&mut self, start: T, end: T) -> Result<(), InvalidRangeError> {
        let removal = Interval::new(start, end).map_err(|err| {
            debug!(?start, ?end, %err, "rejected interval to remove");
            err
        })?;

        self.remove_interval(removal);
        Ok(())
    }

    /// Remove an interval from this set, cutting the intervals it intersects
    pub fn remove_interval(&mut self, removal: Interval<T>) {
        if removal.is_empty() {
            trace!(?removal, "skipping empty removal");
            return;
        }

        let first = self.items.partition_point(|item| !(removal.start() < item.end()));
        let last = first + self.items[first..].partition_point(|item| item.start() < removal.end());

        if first == last {
            trace!(?removal, "removal intersects nothing");
            return;
        }

        // Only the outermost intervals of the run can leave anything behind
        let mut pieces: Pieces<Interval<T>> = Pieces::new();
        for item in &self.items[first..last] {
            pieces.extend(item.split_around(&removal));
        }

        trace!(?removal, replaced = last - first, kept = pieces.len(), "removing interval");

        self.items.drain(first..last);
        for (offset, piece) in pieces.into_iter().enumerate() {
            self.items.insert(first + offset, piece);
        }

        debug_assert!(self.is_normalized(), "set is not normalized after removing {:?}: {:?}", removal, self);
    }

    /// Returns `true` if every interval is non-empty, and ends before the next one starts
    fn is_normalized(&self) -> bool {
        self.items.iter().all(|item| !item.is_empty())
            && self.items.windows(2).all(|pair| pair[0].end() < pair[1].start())
    }
}

impl<T: PartialOrd + Copy + Debug + Display> IntervalSet<T> {
    /// Render all intervals as `[start, end) `, ascending
    ///
    /// Meant for diagnostics, an empty set renders as an empty string.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<T: Display> Display for IntervalSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for item in self.items.iter() {
            write!(f, "{} ", item)?;
        }

        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
