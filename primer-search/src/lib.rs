//! Search and sort algorithms over slices.
//!
//! Searches return `Option<usize>`: `Some(index)` of a matching element, or
//! `None`. There is no sentinel, so a slice may hold any value, `-1`
//! included.
//!
//! ```
//! use primer_search::{binary_search, exponential_search, jump_search, ternary_search};
//!
//! let arr = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610];
//! assert_eq!(jump_search(&arr, &55), Some(10));
//! assert_eq!(binary_search(&arr, &55), Some(10));
//! assert_eq!(exponential_search(&arr, &55), Some(10));
//! assert_eq!(ternary_search(&arr, &55), Some(10));
//! ```
//!
//! | Search | Time | Call depth |
//! |--------|------|------------|
//! | [`binary_search`] | O(log n) | O(log n) |
//! | [`binary_search_iterative`] | O(log n) | O(1) |
//! | [`exponential_search`] | O(log i) | O(log i) |
//! | [`jump_search`] | O(√n) | O(1) |
//! | [`ternary_search`] | O(log n) | O(log n) |
//! | [`interpolation_search`] | O(log log n) uniform, O(n) worst | O(1) |
//! | [`fibonacci_search`] | O(log n) | O(1) |
//!
//! The [`sort`] module provides in-place sorts to prepare input.

#![warn(missing_docs)]

pub mod search;
pub mod sort;

pub use search::{
    binary_search, binary_search_iterative, binary_search_range, exponential_search,
    fibonacci_search, interpolation_search, jump_search, linear_search, ternary_search,
};
pub use sort::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};
