//! Algo - Generic algorithms over slices and maps.
//!
//! Algo provides small, pure functions that work over any element type
//! satisfying a minimal capability contract:
//!
//! - Selection: maximum and minimum, with a fixed tie-break
//! - Search: index lookup and containment in slices and maps
//! - Removal: by position, or by value with a copying or in-place variant
//! - Equality: slice and map structural equality
//! - Transform: element-wise mapping and integer key sorting
//!
//! # Quick Start
//!
//! ```rust
//! use std::cmp::Ordering;
//! use standout_algo::{index_of, max, remove_safe, Comparable};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Task {
//!     name: String,
//!     priority: i32,
//! }
//!
//! impl Comparable for Task {
//!     fn compare_to(&self, other: &Self) -> Ordering {
//!         self.priority.cmp(&other.priority)
//!     }
//! }
//!
//! let tasks = vec![
//!     Task { name: "Write docs".into(), priority: 3 },
//!     Task { name: "Fix bug".into(), priority: 5 },
//!     Task { name: "Triage".into(), priority: 5 },
//! ];
//!
//! // Equal maxima: the lowest index wins
//! assert_eq!(max(&tasks).name, "Fix bug");
//!
//! // Duplicates: the highest index wins
//! let needle = Task { name: String::new(), priority: 5 };
//! assert_eq!(index_of(&needle, &tasks), Some(2));
//!
//! let (rest, removed) = remove_safe(&tasks, &tasks[0]);
//! assert!(removed);
//! assert_eq!(rest.len(), 2);
//! ```
//!
//! # Contracts
//!
//! | Contract | Trait | Used by |
//! |----------|-------|---------|
//! | Ordering | [`Comparable`] | `max`, `min`, `slice_max`, `slice_min`, `index_of` |
//! | Numeric | [`Num`] | `max_num`, `min_num` |
//! | Equality | `PartialEq` | containment, removal, equality |
//! | Mapping | [`Mapping`] | `map_*` functions, `sort_map_by_key` |
//!
//! Every `Ord` type is [`Comparable`]. [`Num`] is sealed to the primitive
//! integer and float types.
//!
//! # Scan Direction
//!
//! ```text
//! max / min / index_of   last index -> first index
//! contain / remove_*     first index -> last index
//! ```
//!
//! Selection starts from the last element and moves its candidate to every
//! element that is at least as good, so equal extrema resolve to the lowest
//! index. `index_of` returns the first hit of its reverse scan, which is the
//! highest matching index.
//!
//! # Empty Input
//!
//! [`max`], [`min`], [`max_num`] and [`min_num`] return the default value of
//! the element type when given no elements. Check the length first, or use
//! the `try_` variants, when a default value could also be a real answer.

mod equal;
mod error;
mod keys;
mod remove;
mod search;
mod select;
mod traits;
mod transform;

// Re-export public API
pub use equal::{map_equal, slice_equal};
pub use error::{AlgoError, Result};
pub use keys::sort_map_by_key;
pub use remove::{remove, remove_index, remove_safe};
pub use search::{
    contain, index_of, index_of_eq, map_contain_key, map_contain_value, slice_contain, Haystack,
    KeyLookup,
};
pub use select::{
    max, max_num, min, min_num, slice_max, slice_min, try_max, try_max_num, try_min, try_min_num,
};
pub use traits::{Comparable, Mapping, Num};
pub use transform::{map_slice, MapFn};
