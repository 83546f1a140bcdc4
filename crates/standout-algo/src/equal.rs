//! Structural equality for slices and mappings.

use crate::traits::Mapping;

/// Returns `true` if both slices have the same length and equal elements at
/// every index.
pub fn slice_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Returns `true` if both mappings hold the same keys with equal values.
///
/// Only `a` is traversed; the cardinality check makes the result symmetric.
/// The two sides may be different map types sharing key and value types.
///
/// ```
/// use std::collections::{BTreeMap, HashMap};
/// use standout_algo::map_equal;
///
/// let a: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let b: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
/// assert!(map_equal(&a, &b));
/// ```
pub fn map_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Mapping,
    B: Mapping<Key = A::Key, Value = A::Value>,
    A::Value: PartialEq,
{
    if a.len() != b.len() {
        return false;
    }
    a.entries()
        .all(|(key, value)| b.get(key).is_some_and(|other| other == value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn hash(pairs: &[(&'static str, i32)]) -> HashMap<&'static str, i32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn slices_equal() {
        assert!(slice_equal(&[1, 2, 3], &[1, 2, 3]));
        assert!(slice_equal::<u8>(&[], &[]));
    }

    #[test]
    fn slices_differ_in_length() {
        assert!(!slice_equal(&[1, 2], &[1, 2, 3]));
        assert!(!slice_equal(&[1, 2, 3], &[1, 2]));
    }

    #[test]
    fn slices_are_order_sensitive() {
        assert!(!slice_equal(&[1, 2, 3], &[3, 2, 1]));
    }

    #[test]
    fn maps_equal_regardless_of_insertion_order() {
        assert!(map_equal(&hash(&[("a", 1), ("b", 2)]), &hash(&[("b", 2), ("a", 1)])));
        assert!(map_equal(&hash(&[]), &hash(&[])));
    }

    #[test]
    fn maps_differ_in_value() {
        assert!(!map_equal(&hash(&[("a", 1)]), &hash(&[("a", 2)])));
    }

    #[test]
    fn maps_differ_in_keys() {
        assert!(!map_equal(&hash(&[("a", 1)]), &hash(&[("b", 1)])));
    }

    #[test]
    fn maps_differ_in_size_both_ways() {
        let small = hash(&[("a", 1)]);
        let large = hash(&[("a", 1), ("b", 2)]);
        assert!(!map_equal(&small, &large));
        assert!(!map_equal(&large, &small));
    }

    #[test]
    fn maps_across_kinds() {
        let tree: BTreeMap<&str, i32> = [("x", 9)].into_iter().collect();
        assert!(map_equal(&tree, &hash(&[("x", 9)])));
        assert!(!map_equal(&hash(&[("x", 8)]), &tree));
    }
}
