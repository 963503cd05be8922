//! Merging and set operations on ranges that are already sorted by `comp`.
//!
//! Set operations treat their inputs as sorted multisets: an element appearing `m` times in one
//! range and `n` times in the other contributes `max(m, n)` copies to a union, `min(m, n)` to an
//! intersection, and so on. Output ranges must not overlap the inputs.

use crate::cursor::{Cursor, Store, span};

use super::{copy, lower_bound, rotate, upper_bound};

/// Merges the sorted ranges `[first1, last1)` and `[first2, last2)` into the range starting at
/// `result`. Equivalent elements from the first range are written before those from the second.
/// Returns the end of the output range.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::merge;
/// # use cursor_algorithm::cursor::{begin, cells, end};
/// let mut a = [1, 2, 2, 3];
/// let mut b = [1, 3, 3, 4];
/// let mut out = [0; 8];
/// let (a, b, out_store) = (cells(&mut a), cells(&mut b), cells(&mut out));
/// let out_end = merge(begin(a), end(a), begin(b), end(b), begin(out_store), |x, y| x < y);
/// assert_eq!(out_end.index(), 8);
/// assert_eq!(out, [1, 1, 2, 2, 3, 3, 3, 4]);
/// ```
pub fn merge<'r, S1, S2, D, C>(
    mut first1: Cursor<'_, S1>,
    last1: Cursor<'_, S1>,
    mut first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut result: Cursor<'r, D>,
    mut comp: C,
) -> Cursor<'r, D>
where
    S1: Store + ?Sized,
    S2: Store<Item = S1::Item> + ?Sized,
    D: Store<Item = S1::Item> + ?Sized,
    C: FnMut(&S1::Item, &S1::Item) -> bool,
{
    loop {
        if first1 == last1 {
            return copy(first2, last2, result);
        }
        if first2 == last2 {
            return copy(first1, last1, result);
        }
        let (a, b) = (first1.get(), first2.get());
        if comp(&b, &a) {
            result.set(b);
            first2 = first2.next();
        } else {
            result.set(a);
            first1 = first1.next();
        }
        result = result.next();
    }
}

/// Merges the consecutive sorted ranges `[first, middle)` and `[middle, last)` into one sorted
/// range in place. Stable, and allocation-free: the halves are bisected with
/// [`lower_bound`]/[`upper_bound`], exchanged with [`rotate`] and merged recursively, for
/// `O(n log n)` swaps.
pub fn inplace_merge<S, C>(first: Cursor<'_, S>, middle: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    merge_in_place(first, middle, last, &mut comp);
}

pub(crate) fn merge_in_place<S, C>(first: Cursor<'_, S>, middle: Cursor<'_, S>, last: Cursor<'_, S>, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len1 = span(first, middle);
    let len2 = span(middle, last);
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 + len2 == 2 {
        if comp(&middle.get(), &first.get()) {
            first.swap_with(middle);
        }
        return;
    }

    let (first_cut, second_cut) = if len1 > len2 {
        let first_cut = first.forward(len1 / 2);
        (first_cut, lower_bound(middle, last, first_cut.get(), &mut *comp))
    } else {
        let second_cut = middle.forward(len2 / 2);
        (upper_bound(first, middle, second_cut.get(), &mut *comp), second_cut)
    };
    let new_middle = rotate(first_cut, middle, second_cut);
    merge_in_place(first, first_cut, new_middle, comp);
    merge_in_place(new_middle, second_cut, last, comp);
}

/// Returns true if the sorted range `[first2, last2)` is a sub-multiset of the sorted range
/// `[first1, last1)`.
pub fn includes<S1, S2, C>(
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
    while first2 != last2 {
        if first1 == last1 {
            return false;
        }
        let (a, b) = (first1.get(), first2.get());
        if comp(&b, &a) {
            return false;
        }
        if !comp(&a, &b) {
            first2 = first2.next();
        }
        first1 = first1.next();
    }
    true
}

/// Writes the sorted union of `[first1, last1)` and `[first2, last2)` to the range starting at
/// `result`. Where elements are equivalent, the one from the first range is written. Returns the
/// end of the output range.
pub fn set_union<'r, S1, S2, D, C>(
    mut first1: Cursor<'_, S1>,
    last1: Cursor<'_, S1>,
    mut first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut result: Cursor<'r, D>,
    mut comp: C,
) -> Cursor<'r, D>
where
    S1: Store + ?Sized,
    S2: Store<Item = S1::Item> + ?Sized,
    D: Store<Item = S1::Item> + ?Sized,
    C: FnMut(&S1::Item, &S1::Item) -> bool,
{
    loop {
        if first1 == last1 {
            return copy(first2, last2, result);
        }
        if first2 == last2 {
            return copy(first1, last1, result);
        }
        let (a, b) = (first1.get(), first2.get());
        if comp(&a, &b) {
            result.set(a);
            first1 = first1.next();
        } else if comp(&b, &a) {
            result.set(b);
            first2 = first2.next();
        } else {
            result.set(a);
            first1 = first1.next();
            first2 = first2.next();
        }
        result = result.next();
    }
}

/// Writes the sorted intersection of `[first1, last1)` and `[first2, last2)` to the range starting
/// at `result`, taking elements from the first range. Returns the end of the output range.
pub fn set_intersection<'r, S1, S2, D, C>(
    mut first1: Cursor<'_, S1>,
    last1: Cursor<'_, S1>,
    mut first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut result: Cursor<'r, D>,
    mut comp: C,
) -> Cursor<'r, D>
where
    S1: Store + ?Sized,
    S2: Store<Item = S1::Item> + ?Sized,
    D: Store<Item = S1::Item> + ?Sized,
    C: FnMut(&S1::Item, &S1::Item) -> bool,
{
    while first1 != last1 && first2 != last2 {
        let (a, b) = (first1.get(), first2.get());
        if comp(&a, &b) {
            first1 = first1.next();
        } else if comp(&b, &a) {
            first2 = first2.next();
        } else {
            result.set(a);
            result = result.next();
            first1 = first1.next();
            first2 = first2.next();
        }
    }
    result
}

/// Writes the elements of `[first1, last1)` which aren't matched in `[first2, last2)` to the range
/// starting at `result`, in sorted order. Returns the end of the output range.
pub fn set_difference<'r, S1, S2, D, C>(
    mut first1: Cursor<'_, S1>,
    last1: Cursor<'_, S1>,
    mut first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut result: Cursor<'r, D>,
    mut comp: C,
) -> Cursor<'r, D>
where
    S1: Store + ?Sized,
    S2: Store<Item = S1::Item> + ?Sized,
    D: Store<Item = S1::Item> + ?Sized,
    C: FnMut(&S1::Item, &S1::Item) -> bool,
{
    while first1 != last1 && first2 != last2 {
        let (a, b) = (first1.get(), first2.get());
        if comp(&a, &b) {
            result.set(a);
            result = result.next();
            first1 = first1.next();
        } else if comp(&b, &a) {
            first2 = first2.next();
        } else {
            first1 = first1.next();
            first2 = first2.next();
        }
    }
    copy(first1, last1, result)
}

/// Writes the elements found in exactly one of `[first1, last1)` and `[first2, last2)` to the range
/// starting at `result`, in sorted order. Returns the end of the output range.
pub fn set_symmetric_difference<'r, S1, S2, D, C>(
    mut first1: Cursor<'_, S1>,
    last1: Cursor<'_, S1>,
    mut first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut result: Cursor<'r, D>,
    mut comp: C,
) -> Cursor<'r, D>
where
    S1: Store + ?Sized,
    S2: Store<Item = S1::Item> + ?Sized,
    D: Store<Item = S1::Item> + ?Sized,
    C: FnMut(&S1::Item, &S1::Item) -> bool,
{
    loop {
        if first1 == last1 {
            return copy(first2, last2, result);
        }
        if first2 == last2 {
            return copy(first1, last1, result);
        }
        let (a, b) = (first1.get(), first2.get());
        if comp(&a, &b) {
            result.set(a);
            result = result.next();
            first1 = first1.next();
        } else if comp(&b, &a) {
            result.set(b);
            result = result.next();
            first2 = first2.next();
        } else {
            first1 = first1.next();
            first2 = first2.next();
        }
    }
}
