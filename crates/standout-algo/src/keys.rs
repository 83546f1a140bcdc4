//! Key extraction helpers.

use num_traits::PrimInt;

use crate::traits::Mapping;

/// Returns the keys of `m` in ascending order.
///
/// Keys are restricted to primitive integers.
///
/// ```
/// use std::collections::HashMap;
/// use standout_algo::sort_map_by_key;
///
/// let m: HashMap<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
/// assert_eq!(sort_map_by_key(&m), vec![1, 2, 3]);
/// ```
pub fn sort_map_by_key<M>(m: &M) -> Vec<M::Key>
where
    M: Mapping,
    M::Key: PrimInt,
{
    let mut keys: Vec<M::Key> = m.entries().map(|(k, _)| *k).collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn sorts_hash_map_keys() {
        let m: HashMap<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
        assert_eq!(sort_map_by_key(&m), vec![1, 2, 3]);
    }

    #[test]
    fn negative_and_unsigned_keys() {
        let m: HashMap<i64, ()> = [(-4, ()), (10, ()), (0, ())].into_iter().collect();
        assert_eq!(sort_map_by_key(&m), vec![-4, 0, 10]);

        let m: BTreeMap<u8, char> = [(200, 'z'), (7, 'a')].into_iter().collect();
        assert_eq!(sort_map_by_key(&m), vec![7, 200]);
    }

    #[test]
    fn empty_map() {
        let m: HashMap<usize, String> = HashMap::new();
        assert!(sort_map_by_key(&m).is_empty());
    }

    #[test]
    fn leaves_map_untouched() {
        let m: HashMap<u32, u32> = [(2, 20), (1, 10)].into_iter().collect();
        let _ = sort_map_by_key(&m);
        assert_eq!(m.len(), 2);
        assert_eq!(m[&1], 10);
    }
}
