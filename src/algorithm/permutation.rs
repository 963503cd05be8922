//! Extremes, lexicographical ordering and permutation stepping.

use crate::cursor::{Cursor, Store};

use super::reverse;

/// Returns the first smallest element of `[first, last)`, or `last` if the range is empty.
pub fn min_element<'a, S, C>(first: Cursor<'a, S>, last: Cursor<'a, S>, mut comp: C) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }

    let mut smallest = first;
    let mut smallest_value = first.get();
    let mut it = first.next();
    while it != last {
        let value = it.get();
        if comp(&value, &smallest_value) {
            smallest = it;
            smallest_value = value;
        }
        it = it.next();
    }
    smallest
}

/// Returns the first largest element of `[first, last)`, or `last` if the range is empty.
pub fn max_element<'a, S, C>(first: Cursor<'a, S>, last: Cursor<'a, S>, mut comp: C) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }

    let mut largest = first;
    let mut largest_value = first.get();
    let mut it = first.next();
    while it != last {
        let value = it.get();
        if comp(&largest_value, &value) {
            largest = it;
            largest_value = value;
        }
        it = it.next();
    }
    largest
}

/// Returns the smallest and largest elements of `[first, last)` in a single pass, as
/// `(min_element, max_element)`. Ties resolve to the first occurrence on both sides. An empty range
/// yields `(last, last)`.
pub fn min_max_element<'a, S, C>(
    first: Cursor<'a, S>,
    last: Cursor<'a, S>,
    mut comp: C,
) -> (Cursor<'a, S>, Cursor<'a, S>)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return (last, last);
    }

    let (mut min, mut max) = (first, first);
    let (mut min_value, mut max_value) = (first.get(), first.get());
    let mut it = first.next();
    while it != last {
        let value = it.get();
        if comp(&value, &min_value) {
            min = it;
            min_value = value;
        } else if comp(&max_value, &value) {
            max = it;
            max_value = value;
        }
        it = it.next();
    }
    (min, max)
}

/// Returns true if `[first1, last1)` orders strictly before `[first2, last2)`: the first differing
/// element decides, and a proper prefix orders before the longer range.
pub fn lexicographical_compare<S1, S2, C>(
    mut first1: Cursor<'_, S1>,
    last1: Cursor<'_, S1>,
    mut first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut comp: C,
) -> bool
where
    S1: Store + ?Sized,
    S2: Store<Item = S1::Item> + ?Sized,
    C: FnMut(&S1::Item, &S1::Item) -> bool,
{
    while first1 != last1 {
        if first2 == last2 {
            return false;
        }
        let (a, b) = (first1.get(), first2.get());
        if comp(&a, &b) {
            return true;
        }
        if comp(&b, &a) {
            return false;
        }
        first1 = first1.next();
        first2 = first2.next();
    }
    first2 != last2
}

/// Rearranges `[first, last)` into the next greater permutation under `comp`. Returns false, after
/// resetting the range to its smallest permutation (sorted ascending), if it already held the
/// greatest one.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::next_permutation;
/// # use cursor_algorithm::cursor::{begin, cells, end};
/// let mut values = [1, 2, 2];
/// let store = cells(&mut values);
/// let mut seen = 1;
/// while next_permutation(begin(store), end(store), |a, b| a < b) {
///     seen += 1;
/// }
/// assert_eq!(seen, 3);
/// assert_eq!(values, [1, 2, 2]);
/// ```
pub fn next_permutation<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, comp: C) -> bool
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    step_permutation(first, last, comp)
}

/// Rearranges `[first, last)` into the next smaller permutation under `comp`. Returns false, after
/// resetting the range to its greatest permutation (sorted descending), if it already held the
/// smallest one.
pub fn prev_permutation<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C) -> bool
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    step_permutation(first, last, |a, b| comp(b, a))
}

/// Finds the rightmost ascent `i < j` (with `before(i, j)`), swaps `i` with the rightmost element
/// after it that `i` orders before, then reverses the suffix after `i`. With no ascent the whole
/// range is reversed.
fn step_permutation<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut before: C) -> bool
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last || first.next() == last {
        return false;
    }

    let mut i = last.prev();
    loop {
        let j = i;
        i = i.prev();
        let pivot = i.get();
        if before(&pivot, &j.get()) {
            let mut k = last.prev();
            while !before(&pivot, &k.get()) {
                k = k.prev();
            }
            i.swap_with(k);
            reverse(j, last);
            return true;
        }
        if i == first {
            reverse(first, last);
            return false;
        }
    }
}
