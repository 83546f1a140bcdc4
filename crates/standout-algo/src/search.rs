//! Index lookup and containment.
//!
//! [`index_of`] scans from the end so the highest-index match wins. The
//! containment checks scan forward and stop at the first match.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::traits::{Comparable, Mapping};

/// Returns the index of the last element of `haystack` that compares equal to
/// `needle`, or `None` if there is none.
///
/// Equality is `compare_to(..) == Ordering::Equal`.
///
/// ```
/// use standout_algo::index_of;
///
/// assert_eq!(index_of(&7, &[1, 7, 3, 7, 2, 7]), Some(5));
/// assert_eq!(index_of(&4, &[1, 2, 3]), None);
/// ```
pub fn index_of<T: Comparable>(needle: &T, haystack: &[T]) -> Option<usize> {
    haystack
        .iter()
        .rposition(|item| item.compare_to(needle) == Ordering::Equal)
}

/// Same reverse scan as [`index_of`], for types that only support `==`.
pub fn index_of_eq<T: PartialEq>(needle: &T, haystack: &[T]) -> Option<usize> {
    haystack.iter().rposition(|item| item == needle)
}

/// Returns `true` if `target` contains an element equal to `obj`.
pub fn slice_contain<T: PartialEq>(target: &[T], obj: &T) -> bool {
    target.iter().any(|item| item == obj)
}

/// Returns `true` if `target` has an entry under `key`.
pub fn map_contain_key<M: Mapping>(target: &M, key: &M::Key) -> bool {
    target.contains_key(key)
}

/// Returns `true` if any entry of `target` holds a value equal to `value`.
pub fn map_contain_value<M>(target: &M, value: &M::Value) -> bool
where
    M: Mapping,
    M::Value: PartialEq,
{
    target.entries().any(|(_, v)| v == value)
}

/// Key lookup over a mapping of any kind, used by [`Haystack::Map`].
///
/// Every [`Mapping`] implements it, so the lookup bounds (`Eq + Hash` for
/// `HashMap`, `Ord` for `BTreeMap`) are checked when the view is built.
pub trait KeyLookup<K> {
    /// Returns `true` if `key` is present.
    fn has_key(&self, key: &K) -> bool;

    /// Number of entries.
    fn key_count(&self) -> usize;
}

impl<M: Mapping> KeyLookup<M::Key> for M {
    fn has_key(&self, key: &M::Key) -> bool {
        self.contains_key(key)
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

/// A borrowed container of unknown shape.
///
/// This is the closed set of shapes accepted by [`contain`]. Sequences are
/// searched by element, mappings by key. Build one with `.into()` from a
/// slice, array, `Vec`, `HashMap` or `BTreeMap` reference.
pub enum Haystack<'a, T> {
    /// Ordered sequence of elements.
    Seq(&'a [T]),
    /// Mapping; only keys are searched.
    Map(&'a (dyn KeyLookup<T> + 'a)),
}

impl<T> Clone for Haystack<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Haystack<'_, T> {}

impl<T> fmt::Debug for Haystack<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Haystack::Seq(items) => f.debug_struct("Seq").field("len", &items.len()).finish(),
            Haystack::Map(map) => f.debug_struct("Map").field("len", &map.key_count()).finish(),
        }
    }
}

impl<T> Haystack<'_, T> {
    /// Returns the number of elements (or entries) in the container.
    pub fn len(&self) -> usize {
        match self {
            Haystack::Seq(items) => items.len(),
            Haystack::Map(map) => map.key_count(),
        }
    }

    /// Returns `true` if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if this is a sequence view.
    pub fn is_seq(&self) -> bool {
        matches!(self, Haystack::Seq(_))
    }

    /// Returns `true` if this is a mapping view.
    pub fn is_map(&self) -> bool {
        matches!(self, Haystack::Map(_))
    }
}

impl<T: PartialEq> Haystack<'_, T> {
    /// Returns `true` if the container holds `obj`: an equal element for a
    /// sequence, a key for a mapping.
    pub fn contains(&self, obj: &T) -> bool {
        match self {
            Haystack::Seq(items) => slice_contain(items, obj),
            Haystack::Map(map) => map.has_key(obj),
        }
    }
}

impl<'a, T> From<&'a [T]> for Haystack<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Haystack::Seq(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Haystack<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Haystack::Seq(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Haystack<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Haystack::Seq(items)
    }
}

impl<'a, T, V, S> From<&'a HashMap<T, V, S>> for Haystack<'a, T>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn from(map: &'a HashMap<T, V, S>) -> Self {
        Haystack::Map(map)
    }
}

impl<'a, T: Ord, V> From<&'a BTreeMap<T, V>> for Haystack<'a, T> {
    fn from(map: &'a BTreeMap<T, V>) -> Self {
        Haystack::Map(map)
    }
}

/// Returns `true` if `target` contains `obj`.
///
/// For sequences this is an element search needing only `PartialEq`; for
/// mappings it is a key lookup.
///
/// ```
/// use std::collections::HashMap;
/// use standout_algo::contain;
///
/// assert!(contain(&[1, 2, 3], &2));
/// assert!(contain(&vec!["a", "b"], &"b"));
/// assert!(contain(&[0.5, 1.5], &1.5));
///
/// let ages: HashMap<&str, u32> = [("ann", 31)].into_iter().collect();
/// assert!(contain(&ages, &"ann"));
/// assert!(!contain(&ages, &"bob"));
/// ```
pub fn contain<'a, T: PartialEq + 'a>(target: impl Into<Haystack<'a, T>>, obj: &T) -> bool {
    target.into().contains(obj)
}
