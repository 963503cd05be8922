//! Binary searches over ranges that are already sorted by `comp`.
//!
//! None of these check that the range is sorted. On unsorted input they still return a position
//! inside `[first, last]`, but which one is unspecified.

use crate::cursor::{Cursor, Store};

use super::partition_point;

/// Returns the first position in `[first, last)` whose element doesn't order before `value`, or
/// `last`.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::{lower_bound, upper_bound};
/// # use cursor_algorithm::cursor::{begin, cells, end};
/// let mut values = [1, 2, 2, 3];
/// let store = cells(&mut values);
/// assert_eq!(lower_bound(begin(store), end(store), 2, |a, b| a < b).index(), 1);
/// assert_eq!(upper_bound(begin(store), end(store), 2, |a, b| a < b).index(), 3);
/// ```
pub fn lower_bound<'a, S, C>(first: Cursor<'a, S>, last: Cursor<'a, S>, value: S::Item, mut comp: C) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    partition_point(first, last, |item| comp(item, &value))
}

/// Returns the first position in `[first, last)` whose element `value` orders before, or `last`.
pub fn upper_bound<'a, S, C>(first: Cursor<'a, S>, last: Cursor<'a, S>, value: S::Item, mut comp: C) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    partition_point(first, last, |item| !comp(&value, item))
}

/// Returns the subrange of `[first, last)` whose elements are equivalent to `value`, as the pair
/// `(lower_bound, upper_bound)`.
pub fn equal_range<'a, S, C>(
    first: Cursor<'a, S>,
    last: Cursor<'a, S>,
    value: S::Item,
    mut comp: C,
) -> (Cursor<'a, S>, Cursor<'a, S>)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let lower = lower_bound(first, last, value, &mut comp);
    let upper = upper_bound(lower, last, value, &mut comp);
    (lower, upper)
}

/// Returns true if `[first, last)` contains an element equivalent to `value`.
pub fn binary_search<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, value: S::Item, mut comp: C) -> bool
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let found = lower_bound(first, last, value, &mut comp);
    found != last && !comp(&value, &found.get())
}
