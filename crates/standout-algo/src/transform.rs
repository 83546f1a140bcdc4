//! Element-wise transformation.

/// A boxed element transform, for callers that store transforms.
pub type MapFn<T1, T2> = Box<dyn Fn(&T1) -> T2>;

/// Applies `f` to every element of `obj`, in order.
///
/// The output always has the same length as the input.
///
/// ```
/// use standout_algo::map_slice;
///
/// let lengths = map_slice(&["a", "bcd", ""], |s| s.len());
/// assert_eq!(lengths, vec![1, 3, 0]);
/// ```
pub fn map_slice<T1, T2, F>(obj: &[T1], f: F) -> Vec<T2>
where
    F: FnMut(&T1) -> T2,
{
    obj.iter().map(f).collect()
}
