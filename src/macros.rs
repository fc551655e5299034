/// Create a new interval set from half-open range expressions
///
/// `<type>:` can be used to set the type when it can't resolved from context
///
/// Evaluates to a `Result`, as each range is validated like [`Interval::new`](crate::Interval::new) does.
///
/// Examples:
///
/// ```rust
/// use eater_intervalset::interval_set;
///
/// let set = interval_set![1..5, 4..10, 12..15].unwrap();
/// assert_eq!("[1, 10) [12, 15) ", set.to_display_string());
///
/// let set = interval_set![f64: 0.5..1.5].unwrap();
/// assert!(set.contains(&1.0));
///
/// assert!(interval_set![i64: 5..1].is_err());
/// ```
#[macro_export]
macro_rules! interval_set {
    [$ty:ty: $($item:expr),* $(,)?] => {
        $crate::IntervalSet::<$ty>::from_ranges([$($item),*])
    };

    [$($item:expr),* $(,)?] => {
        $crate::IntervalSet::from_ranges([$($item),*])
    };
}
