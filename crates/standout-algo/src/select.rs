//! Maximum and minimum selection.
//!
//! All selectors scan from the last index down to index 0 against a candidate
//! that starts at the last index. An element replaces the candidate unless it
//! is strictly worse, so among equal extrema the lowest index wins.
//!
//! The plain selectors ([`max`], [`min`], [`max_num`], [`min_num`]) return the
//! element type's default value for empty input. That is ambiguous with a
//! default value that genuinely is the extremum; use the `try_` variants when
//! the distinction matters.

use std::cmp::Ordering;

use crate::traits::{Comparable, Num};

/// Scans `items` right-to-left, replacing the candidate whenever
/// `compare(item, candidate)` is not `worse`.
///
/// Incomparable pairs (NaN) keep the candidate, unless the candidate cannot
/// be compared with itself, in which case any element displaces it.
fn select_index<T, F>(items: &[T], worse: Ordering, compare: F) -> Option<usize>
where
    F: Fn(&T, &T) -> Option<Ordering>,
{
    let mut best = items.len().checked_sub(1)?;
    for i in (0..best).rev() {
        let replace = match compare(&items[i], &items[best]) {
            Some(ordering) => ordering != worse,
            None => compare(&items[best], &items[best]).is_none(),
        };
        if replace {
            best = i;
        }
    }
    Some(best)
}

// ============================================================================
// Ordering contract
// ============================================================================

/// Returns a reference to the maximal element, or `None` if `items` is empty.
pub fn try_max<T: Comparable>(items: &[T]) -> Option<&T> {
    select_index(items, Ordering::Less, |a, b| Some(a.compare_to(b))).map(|i| &items[i])
}

/// Returns a reference to the minimal element, or `None` if `items` is empty.
pub fn try_min<T: Comparable>(items: &[T]) -> Option<&T> {
    select_index(items, Ordering::Greater, |a, b| Some(a.compare_to(b))).map(|i| &items[i])
}

/// Returns the maximal element, or `T::default()` if `items` is empty.
///
/// Use the [`max!`](crate::max!) macro for the variadic call shape.
///
/// # Example
///
/// ```
/// use standout_algo::max;
///
/// assert_eq!(max(&[3, 9, 4]), 9);
/// assert_eq!(max::<i32>(&[]), 0);
/// ```
pub fn max<T: Comparable + Clone + Default>(items: &[T]) -> T {
    try_max(items).cloned().unwrap_or_default()
}

/// Returns the minimal element, or `T::default()` if `items` is empty.
pub fn min<T: Comparable + Clone + Default>(items: &[T]) -> T {
    try_min(items).cloned().unwrap_or_default()
}

/// Slice entry point for [`max`].
pub fn slice_max<T: Comparable + Clone + Default>(items: &[T]) -> T {
    max(items)
}

/// Slice entry point for [`min`].
pub fn slice_min<T: Comparable + Clone + Default>(items: &[T]) -> T {
    min(items)
}

// ============================================================================
// Numeric contract
// ============================================================================

/// Returns the largest number, or `None` if `ns` is empty.
pub fn try_max_num<T: Num>(ns: &[T]) -> Option<T> {
    select_index(ns, Ordering::Less, |a, b| a.difference_sign(*b)).map(|i| ns[i])
}

/// Returns the smallest number, or `None` if `ns` is empty.
pub fn try_min_num<T: Num>(ns: &[T]) -> Option<T> {
    select_index(ns, Ordering::Greater, |a, b| a.difference_sign(*b)).map(|i| ns[i])
}

/// Returns the largest number, or zero if `ns` is empty.
///
/// ```
/// use standout_algo::max_num;
///
/// assert_eq!(max_num(&[1.5, -2.0, 7.25]), 7.25);
/// assert_eq!(max_num::<u8>(&[]), 0);
/// ```
pub fn max_num<T: Num>(ns: &[T]) -> T {
    try_max_num(ns).unwrap_or_default()
}

/// Returns the smallest number, or zero if `ns` is empty.
pub fn min_num<T: Num>(ns: &[T]) -> T {
    try_min_num(ns).unwrap_or_default()
}

/// Variadic form of [`max`](crate::max()).
///
/// `max!()` with no arguments yields the default value of the inferred type.
///
/// ```
/// use standout_algo::max;
///
/// assert_eq!(max!(4, 11, 2), 11);
/// let none: u32 = max!();
/// assert_eq!(none, 0);
/// ```
#[macro_export]
macro_rules! max {
    ($($item:expr),* $(,)?) => {
        $crate::max(&[$($item),*])
    };
}

/// Variadic form of [`min`](crate::min()).
///
/// ```
/// use standout_algo::min;
///
/// assert_eq!(min!("pear", "apple", "fig"), "apple");
/// ```
#[macro_export]
macro_rules! min {
    ($($item:expr),* $(,)?) => {
        $crate::min(&[$($item),*])
    };
}
