//! Capability contracts consumed by the algorithms.
//!
//! - [`Comparable`] is the ordering contract used by selection and
//!   [`index_of`](crate::index_of).
//! - [`Num`] restricts a type to the primitive numeric representations so
//!   that the sign of an arithmetic difference can stand in for a comparison.
//! - [`Mapping`] lets the map algorithms run over both `HashMap` and
//!   `BTreeMap`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Three-way ordering of a value against another value of its own type.
///
/// Every [`Ord`] type is `Comparable` through a blanket implementation.
/// Types that are not `Ord` (or that want an ordering different from their
/// derived one) opt in by implementing the trait directly.
///
/// The relation must be a total order. The algorithms do not check this;
/// a broken ordering gives unspecified (but never panicking) results.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use standout_algo::{max, Comparable};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Comparable for Task {
///     fn compare_to(&self, other: &Self) -> Ordering {
///         self.priority.cmp(&other.priority)
///     }
/// }
///
/// let tasks = vec![
///     Task { name: "docs".into(), priority: 2 },
///     Task { name: "bug".into(), priority: 5 },
/// ];
/// assert_eq!(max(&tasks).name, "bug");
/// ```
pub trait Comparable {
    /// Compares `self` against `other`.
    fn compare_to(&self, other: &Self) -> Ordering;

    /// Returns the comparison as a signed integer: `-1`, `0` or `1`.
    fn sign(&self, other: &Self) -> i32 {
        match self.compare_to(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl<T: Ord + ?Sized> Comparable for T {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Primitive numeric types usable with [`max_num`](crate::max_num) and
/// [`min_num`](crate::min_num).
///
/// The set is closed: signed integers, unsigned integers and the two float
/// widths. It cannot be implemented outside this crate.
///
/// `num_traits::Num` is a supertrait so that code generic over `T: Num` can
/// use the arithmetic operators and `zero()`/`one()` alongside the selectors.
///
/// ```
/// use standout_algo::{max_num, Num};
///
/// fn spread<T: Num>(ns: &[T]) -> T {
///     max_num(ns) - standout_algo::min_num(ns)
/// }
///
/// assert_eq!(spread(&[4, -2, 9]), 11);
/// assert_eq!(spread::<f64>(&[]), 0.0);
/// ```
pub trait Num: Copy + Default + PartialOrd + num_traits::Num + sealed::Sealed {
    /// Returns the sign of `self - other`, or `None` if the difference has no
    /// sign.
    ///
    /// Integers report the sign of the exact difference without computing it,
    /// so the result never overflows and is always `Some`. Floats subtract; a
    /// NaN difference yields `None`.
    fn difference_sign(self, other: Self) -> Option<Ordering>;
}

macro_rules! impl_num_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Num for $t {
                #[inline]
                fn difference_sign(self, other: Self) -> Option<Ordering> {
                    Some(self.cmp(&other))
                }
            }
        )*
    };
}

macro_rules! impl_num_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Num for $t {
                #[inline]
                fn difference_sign(self, other: Self) -> Option<Ordering> {
                    let diff = self - other;
                    if diff > 0.0 {
                        Some(Ordering::Greater)
                    } else if diff < 0.0 {
                        Some(Ordering::Less)
                    } else if diff == 0.0 {
                        Some(Ordering::Equal)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_num_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_num_float!(f32, f64);

/// Read-only view of a key-value collection with unique keys.
///
/// Implemented for [`HashMap`] (any hasher) and [`BTreeMap`].
pub trait Mapping {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the mapping has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the value stored under `key`.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over all entries in the mapping's own order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Self::Key, &Self::Value)> + '_>;
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}
