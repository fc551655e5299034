use std::fmt::Debug;
use crate::{Interval, IntervalSet, RangeVec};

/// Builds a normalized set out of intervals handed over in ascending `start` order
#[derive(Debug)]
pub struct LinearIntervalAdder<T> {
    items: RangeVec<Interval<T>>,
    last: Option<Interval<T>>,
}

impl<T: PartialOrd + Copy + Debug> LinearIntervalAdder<T> {
    pub fn with_capacity(cap: usize) -> Self {
        LinearIntervalAdder {
            items: RangeVec::with_capacity(cap),
            last: None,
        }
    }

    pub fn add(&mut self, interval: Interval<T>) {
        if interval.is_empty() {
            return;
        }

        match self.last.take() {
            None => self.last = Some(interval),
            Some(last) => {
                debug_assert!(!(interval.start() < last.start()), "interval added to adder is lower than previous interval");
                if last.overlaps(&interval) {
                    self.last = Some(last.merge(&interval));
                } else {
                    self.items.push(last);
                    self.last = Some(interval);
                }
            }
        }
    }

    pub fn finalize(mut self) -> IntervalSet<T> {
        if let Some(v) = self.last {
            self.items.push(v);
        }

        IntervalSet { items: self.items }
    }
}

/// Sort intervals by `start`, bounds of constructed intervals are always comparable
pub(crate) fn sort_by_start<T: PartialOrd + Copy + Debug>(items: &mut [Interval<T>]) {
    items.sort_by(|a, b| a.start().partial_cmp(&b.start()).unwrap_or(std::cmp::Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> Interval<u32> {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn coalesces() {
        let mut adder = LinearIntervalAdder::with_capacity(4);
        adder.add(iv(0, 2));
        adder.add(iv(1, 4));
        adder.add(iv(4, 6));
        adder.add(iv(5, 5));
        adder.add(iv(8, 9));
        adder.add(iv(9, 9));

        let set = adder.finalize();
        assert_eq!(vec![(0, 6), (8, 9)], set.pairs().collect::<Vec<_>>());
    }

    #[test]
    fn empty() {
        let mut adder = LinearIntervalAdder::<u32>::with_capacity(1);
        adder.add(iv(3, 3));

        assert!(adder.finalize().is_empty());
    }
}
