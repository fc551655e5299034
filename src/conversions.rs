use std::fmt::Debug;
use std::ops::Range;

use crate::internal::{sort_by_start, LinearIntervalAdder};
use crate::{Interval, IntervalSet, InvalidRangeError};

#[cfg(feature = "smallvec")]
impl<T: PartialOrd + Copy + Debug, const N: usize> From<smallvec::SmallVec<[Interval<T>; N]>> for IntervalSet<T> {
    fn from(mut value: smallvec::SmallVec<[Interval<T>; N]>) -> Self {
        sort_by_start(&mut value);
        let mut adder = LinearIntervalAdder::with_capacity(value.len());
        for item in value {
            adder.add(item);
        }

        adder.finalize()
    }
}

impl<T: PartialOrd + Copy + Debug> From<Vec<Interval<T>>> for IntervalSet<T> {
    fn from(mut value: Vec<Interval<T>>) -> Self {
        sort_by_start(&mut value);
        let mut adder = LinearIntervalAdder::with_capacity(value.len());
        for item in value {
            adder.add(item);
        }

        adder.finalize()
    }
}

impl<T: PartialOrd + Copy + Debug, const N: usize> From<[Interval<T>; N]> for IntervalSet<T> {
    fn from(mut value: [Interval<T>; N]) -> Self {
        sort_by_start(&mut value);
        let mut adder = LinearIntervalAdder::with_capacity(N);
        for item in value {
            adder.add(item);
        }

        adder.finalize()
    }
}

impl<T: PartialOrd + Copy + Debug> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        IntervalSet::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: PartialOrd + Copy + Debug> Extend<Interval<T>> for IntervalSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.add_interval(interval);
        }
    }
}

impl<T> From<IntervalSet<T>> for Vec<Interval<T>> {
    fn from(value: IntervalSet<T>) -> Self {
        value.items.into_iter().collect()
    }
}

impl<T: PartialOrd + Copy + Debug> TryFrom<(T, T)> for Interval<T> {
    type Error = InvalidRangeError;

    fn try_from(value: (T, T)) -> Result<Self, Self::Error> {
        Interval::new(value.0, value.1)
    }
}

impl<T: PartialOrd + Copy + Debug> TryFrom<Range<T>> for Interval<T> {
    type Error = InvalidRangeError;

    fn try_from(value: Range<T>) -> Result<Self, Self::Error> {
        Interval::new(value.start, value.end)
    }
}

impl<T> From<Interval<T>> for (T, T) {
    fn from(value: Interval<T>) -> Self {
        let Interval { start, end } = value;
        (start, end)
    }
}

impl<T> From<Interval<T>> for Range<T> {
    fn from(value: Interval<T>) -> Self {
        let Interval { start, end } = value;
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals() {
        let a: Interval<i32> = (1, 5).try_into().unwrap();
        assert_eq!(Interval::new(1, 5).unwrap(), a);
        assert_eq!(Ok(a), Interval::try_from(1..5));
        assert!(Interval::try_from(5..1).is_err());

        let pair: (i32, i32) = a.into();
        assert_eq!((1, 5), pair);
        assert_eq!(1..5, Range::from(a));
    }

    #[test]
    fn sets() {
        let set = IntervalSet::from([
            Interval::new(10, 15).unwrap(),
            Interval::new(1, 5).unwrap(),
            Interval::new(4, 8).unwrap(),
        ]);
        assert_eq!("[1, 8) [10, 15) ", set.to_display_string());

        let collected: IntervalSet<i32> = vec![(20, 30), (0, 10), (10, 20)]
            .into_iter()
            .map(|pair| Interval::try_from(pair).unwrap())
            .collect();
        assert_eq!(vec![(0, 30)], collected.pairs().collect::<Vec<_>>());

        let mut extended = collected.clone();
        extended.extend([Interval::new(40, 50).unwrap(), Interval::new(45, 60).unwrap()]);
        assert_eq!("[0, 30) [40, 60) ", extended.to_display_string());

        let items: Vec<Interval<i32>> = extended.into();
        assert_eq!(vec![Interval::new(0, 30).unwrap(), Interval::new(40, 60).unwrap()], items);
    }
}
