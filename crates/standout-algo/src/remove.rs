//! Removing elements by position or by value.
//!
//! The two value-based removals differ in how they treat the caller's
//! storage:
//!
//! - [`remove_safe`] never touches its input. It returns a fresh copy when
//!   something was removed and the original slice otherwise.
//! - [`remove`] edits the caller's `Vec` in place and reports absence as
//!   [`AlgoError::NotFound`].

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::{AlgoError, Result};

/// Returns a new vector without the elements at `indices`.
///
/// Duplicate indices are removed once and out-of-range indices are ignored.
/// Surviving elements keep their relative order.
///
/// ```
/// use standout_algo::remove_index;
///
/// assert_eq!(remove_index(&[10, 20, 30, 40], &[1, 3]), vec![10, 30]);
/// assert_eq!(remove_index(&[10, 20], &[5, 1, 1]), vec![10]);
/// ```
pub fn remove_index<T: Clone>(obj: &[T], indices: &[usize]) -> Vec<T> {
    let skip: HashSet<usize> = indices.iter().copied().collect();
    let mut kept = Vec::with_capacity(obj.len().saturating_sub(skip.len()));
    kept.extend(
        obj.iter()
            .enumerate()
            .filter(|(i, _)| !skip.contains(i))
            .map(|(_, item)| item.clone()),
    );
    kept
}

/// Removes the first occurrence of `obj`, leaving `target` untouched.
///
/// Returns the shortened copy and `true` when `obj` was found, or the
/// original slice and `false` when it was not.
///
/// ```
/// use standout_algo::remove_safe;
///
/// let (rest, removed) = remove_safe(&[1, 2, 3], &2);
/// assert!(removed);
/// assert_eq!(&*rest, &[1, 3]);
///
/// let (rest, removed) = remove_safe(&[1, 2, 3], &5);
/// assert!(!removed);
/// assert_eq!(&*rest, &[1, 2, 3]);
/// ```
pub fn remove_safe<'a, T>(target: &'a [T], obj: &T) -> (Cow<'a, [T]>, bool)
where
    T: PartialEq + Clone,
{
    match target.iter().position(|item| item == obj) {
        Some(i) => {
            let mut copy = Vec::with_capacity(target.len() - 1);
            copy.extend_from_slice(&target[..i]);
            copy.extend_from_slice(&target[i + 1..]);
            (Cow::Owned(copy), true)
        }
        None => (Cow::Borrowed(target), false),
    }
}

/// Removes the first occurrence of `obj` from `target` in place and returns
/// it.
///
/// The removal reuses `target`'s allocation. When `obj` is absent, `target`
/// is left as it was and [`AlgoError::NotFound`] is returned.
///
/// ```
/// use standout_algo::{remove, AlgoError};
///
/// let mut items = vec!["a", "b", "a"];
/// assert_eq!(remove(&mut items, &"a"), Ok("a"));
/// assert_eq!(items, ["b", "a"]);
/// assert_eq!(remove(&mut items, &"z"), Err(AlgoError::NotFound));
/// ```
pub fn remove<T: PartialEq>(target: &mut Vec<T>, obj: &T) -> Result<T> {
    let i = target
        .iter()
        .position(|item| item == obj)
        .ok_or(AlgoError::NotFound)?;
    Ok(target.remove(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_index_drops_positions() {
        assert_eq!(remove_index(&[10, 20, 30, 40], &[1, 3]), vec![10, 30]);
        assert_eq!(remove_index(&[10, 20, 30, 40], &[0]), vec![20, 30, 40]);
    }

    #[test]
    fn remove_index_collapses_duplicates() {
        assert_eq!(remove_index(&[1, 2, 3], &[1, 1, 1]), vec![1, 3]);
    }

    #[test]
    fn remove_index_ignores_out_of_range() {
        assert_eq!(remove_index(&[1, 2, 3], &[3, 100]), vec![1, 2, 3]);
        assert_eq!(remove_index::<i32>(&[], &[0]), Vec::<i32>::new());
    }

    #[test]
    fn remove_index_more_indices_than_elements() {
        assert_eq!(remove_index(&['a'], &[0, 1, 2, 3]), Vec::<char>::new());
    }

    #[test]
    fn remove_index_no_indices() {
        assert_eq!(remove_index(&[5, 6], &[]), vec![5, 6]);
    }

    #[test]
    fn remove_safe_found() {
        let (rest, removed) = remove_safe(&[1, 2, 3], &2);
        assert!(removed);
        assert_eq!(rest.as_ref(), &[1, 3]);
        assert!(matches!(rest, Cow::Owned(_)));
    }

    #[test]
    fn remove_safe_absent_borrows_original() {
        let original = [1, 2, 3];
        let (rest, removed) = remove_safe(&original, &5);
        assert!(!removed);
        assert!(matches!(rest, Cow::Borrowed(_)));
        assert_eq!(rest.as_ref(), &original);
    }

    #[test]
    fn remove_safe_first_occurrence_only() {
        let (rest, removed) = remove_safe(&[7, 1, 7], &7);
        assert!(removed);
        assert_eq!(rest.as_ref(), &[1, 7]);
    }

    #[test]
    fn remove_safe_empty() {
        let (rest, removed) = remove_safe::<u8>(&[], &0);
        assert!(!removed);
        assert!(rest.is_empty());
    }

    #[test]
    fn remove_in_place() {
        let mut items = vec![3, 4, 3, 5];
        let cap = items.capacity();
        assert_eq!(remove(&mut items, &3), Ok(3));
        assert_eq!(items, vec![4, 3, 5]);
        assert_eq!(items.capacity(), cap);
    }

    #[test]
    fn remove_not_found_leaves_target() {
        let mut items = vec![1, 2];
        assert_eq!(remove(&mut items, &9), Err(AlgoError::NotFound));
        assert_eq!(items, vec![1, 2]);

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(remove(&mut empty, &0), Err(AlgoError::NotFound));
    }
}
