//! The algorithm suite: free functions over half-open ranges `[first, last)` of [`Cursor`]s.
//!
//! Every function is generic over the [`Store`] behind its cursors, so the same code runs on
//! slices, [`Vec`]s and [`VecDeque`](std::collections::VecDeque)s of [`Cell`](std::cell::Cell)s, or
//! a [`Buffer`](crate::buffer::Buffer). Output ranges are given by their first cursor only and may
//! live in a different store from the input, as long as the item type matches.
//!
//! Behaviour is customised with closures rather than traits. Ordering closures follow the strict
//! weak ordering convention: `comp(a, b)` returns true when `a` orders strictly before `b`.
//! Equivalence closures return true when two elements should be treated as equal.
//!
//! Ranges are never validated up front. A malformed range or an output range that is too short
//! panics on the first out of bounds access, and a range that doesn't satisfy a documented
//! precondition (such as being sorted) produces unspecified output.
//!
//! [`Cursor`]: crate::cursor::Cursor
//! [`Store`]: crate::cursor::Store
#![warn(missing_docs)]

mod bound;
mod heap;
mod merge;
mod modify;
mod partition;
mod permutation;
mod query;
mod sort;

mod tests;

pub use bound::{binary_search, equal_range, lower_bound, upper_bound};
pub use heap::{is_heap, is_heap_until, make_heap, pop_heap, push_heap, sort_heap};
pub use merge::{
    includes, inplace_merge, merge, set_difference, set_intersection, set_symmetric_difference,
    set_union,
};
pub use modify::{
    copy, copy_backward, copy_if, copy_n, fill, fill_n, generate, random_shuffle, remove_copy_if,
    remove_if, replace, replace_copy, replace_copy_if, replace_if, reverse, reverse_copy, rotate,
    rotate_copy, swap, swap_ranges, transform, transform_binary, unique, unique_copy,
};
pub use partition::{
    is_partitioned, partition, partition_copy, partition_point, stable_partition,
};
pub use permutation::{
    lexicographical_compare, max_element, min_element, min_max_element, next_permutation,
    prev_permutation,
};
pub use query::{
    adjacent_find, all_of, any_of, count, count_if, equal, find, find_end, find_first_of, find_if,
    find_if_not, for_each, is_permutation, mismatch, none_of, search, search_n,
};
pub use sort::{
    is_sorted, is_sorted_until, nth_element, partial_sort, partial_sort_copy, sort, stable_sort,
};
