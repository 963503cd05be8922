//! Sorting, partial sorting and order checks.
//!
//! Nothing here allocates. `sort` is an introsort (quicksort with a heapsort fallback), so it is
//! `O(n log n)` in the worst case and its recursion depth is bounded by `log2(n)`. It isn't stable,
//! use [`stable_sort`] when equivalent elements must keep their order.

use crate::cursor::{Cursor, Store, span};

use super::heap::{heap_select, make_heap_by, sort_heap_by, adjust_heap};
use super::merge::merge_in_place;

/// Ranges at or below this length are finished with an insertion sort.
const INSERTION_THRESHOLD: usize = 16;

/// The partition depth after which `sort` and `nth_element` give up on quicksort: twice the
/// number of bits needed to represent `len`.
const fn depth_limit(len: usize) -> usize {
    2 * (usize::BITS - len.leading_zeros()) as usize
}

/// Sorts `[first, last)` by `comp`, where `comp(a, b)` means `a` is ordered strictly before `b`.
/// Equivalent elements may be reordered.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::sort;
/// # use cursor_algorithm::cursor::{begin, cells, end};
/// let mut values = [1, 2, 2, 3];
/// let store = cells(&mut values);
/// sort(begin(store), end(store), |a, b| a > b);
/// assert_eq!(values, [3, 2, 2, 1]);
/// ```
pub fn sort<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = span(first, last);
    if len < 2 {
        return;
    }
    introsort(first, last, depth_limit(len), &mut comp);
}

fn introsort<'a, S, C>(mut first: Cursor<'a, S>, mut last: Cursor<'a, S>, mut depth: usize, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        if span(first, last) <= INSERTION_THRESHOLD {
            insertion_sort(first, last, comp);
            return;
        }
        if depth == 0 {
            make_heap_by(first, last, comp);
            sort_heap_by(first, last, comp);
            return;
        }
        depth -= 1;

        let pivot = partition_around_pivot(first, last, comp);
        // Recurse into the smaller side and loop on the larger one to keep the stack shallow.
        if span(first, pivot) < span(pivot, last) {
            introsort(first, pivot, depth, comp);
            first = pivot.next();
        } else {
            introsort(pivot.next(), last, depth, comp);
            last = pivot;
        }
    }
}

/// Moves the median of the first, middle and last elements to `first`, then runs a Lomuto
/// partition around it. Returns the pivot's final position; everything before it orders strictly
/// before the pivot and nothing after it does.
///
/// Requires a range of at least two elements.
fn partition_around_pivot<'a, S, C>(first: Cursor<'a, S>, last: Cursor<'a, S>, comp: &mut C) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let middle = first.forward(span(first, last) / 2);
    let tail = last.prev();
    let (a, b, c) = (first.get(), middle.get(), tail.get());
    let median = if comp(&a, &b) {
        if comp(&b, &c) {
            middle
        } else if comp(&a, &c) {
            tail
        } else {
            first
        }
    } else if comp(&a, &c) {
        first
    } else if comp(&b, &c) {
        tail
    } else {
        middle
    };
    if median != first {
        first.swap_with(median);
    }

    let pivot = first.get();
    let mut separator = first;
    let mut it = first.next();
    while it != last {
        if comp(&it.get(), &pivot) {
            separator = separator.next();
            separator.swap_with(it);
        }
        it = it.next();
    }
    first.swap_with(separator);
    separator
}

/// A plain (stable) insertion sort, shifting larger elements up one slot at a time.
fn insertion_sort<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return;
    }

    let mut it = first.next();
    while it != last {
        let value = it.get();
        let mut hole = it;
        while hole != first {
            let prev = hole.prev();
            let prev_value = prev.get();
            if !comp(&value, &prev_value) {
                break;
            }
            hole.set(prev_value);
            hole = prev;
        }
        hole.set(value);
        it = it.next();
    }
}

/// An insertion sort that finds each insertion point with a binary search. Stable because the
/// search lands after any equivalent elements.
fn binary_insertion_sort<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = span(first, last);
    for i in 1..len {
        let value = first.forward(i).get();

        let mut left = 0;
        let mut right = i;
        while left < right {
            let middle = left + (right - left) / 2;
            if comp(&value, &first.forward(middle).get()) {
                right = middle;
            } else {
                left = middle + 1;
            }
        }

        let mut j = i;
        while j > left {
            first.forward(j).set(first.forward(j - 1).get());
            j -= 1;
        }
        first.forward(left).set(value);
    }
}

/// Sorts `[first, last)` by `comp`, keeping equivalent elements in their original order.
///
/// Short ranges use a binary insertion sort. Longer ones are split in half, sorted recursively and
/// joined with [`inplace_merge`](super::inplace_merge), which is `O(n log² n)` but never allocates.
pub fn stable_sort<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    stable_sort_by(first, last, &mut comp);
}

fn stable_sort_by<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = span(first, last);
    if len <= INSERTION_THRESHOLD {
        binary_insertion_sort(first, last, comp);
        return;
    }
    let middle = first.forward(len / 2);
    stable_sort_by(first, middle, comp);
    stable_sort_by(middle, last, comp);
    merge_in_place(first, middle, last, comp);
}

/// Rearranges `[first, last)` so that `[first, middle)` holds the smallest `middle - first`
/// elements in sorted order. The order of the remaining elements is unspecified.
///
/// This is a heap select followed by a heap sort of the prefix: `O(n log m)` where `m` is the
/// length of the prefix.
pub fn partial_sort<S, C>(first: Cursor<'_, S>, middle: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == middle {
        return;
    }
    heap_select(first, middle, last, &mut comp);
    sort_heap_by(first, middle, &mut comp);
}

/// Copies the smallest elements of `[first, last)` into `[result_first, result_last)` in sorted
/// order, filling as much of the output as there is input. Returns the end of the written output.
pub fn partial_sort_copy<'b, S, D, C>(
    mut first: Cursor<'_, S>,
    last: Cursor<'_, S>,
    result_first: Cursor<'b, D>,
    result_last: Cursor<'b, D>,
    mut comp: C,
) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if result_first == result_last {
        return result_last;
    }

    let mut result_real_last = result_first;
    while first != last && result_real_last != result_last {
        result_real_last.set(first.get());
        result_real_last = result_real_last.next();
        first = first.next();
    }

    let len = span(result_first, result_real_last);
    make_heap_by(result_first, result_real_last, &mut comp);
    while first != last {
        let value = first.get();
        if comp(&value, &result_first.get()) {
            adjust_heap(result_first, 0, len, value, &mut comp);
        }
        first = first.next();
    }
    sort_heap_by(result_first, result_real_last, &mut comp);
    result_real_last
}

/// Rearranges `[first, last)` so that `nth` holds the element a full sort would put there. Nothing
/// before `nth` orders after it and nothing after `nth` orders before it.
///
/// This is a quickselect over the same pivoting as [`sort`], with a heap select fallback, so it
/// runs in linear time on average without recursing.
pub fn nth_element<S, C>(first: Cursor<'_, S>, nth: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if nth == last {
        return;
    }

    let (mut first, mut last) = (first, last);
    let mut depth = depth_limit(span(first, last));
    while span(first, last) > 3 {
        if depth == 0 {
            heap_select(first, nth.next(), last, &mut comp);
            // The root of the selected heap is the largest of the smallest elements.
            first.swap_with(nth);
            return;
        }
        depth -= 1;

        let pivot = partition_around_pivot(first, last, &mut comp);
        if pivot == nth {
            return;
        } else if nth.index() < pivot.index() {
            last = pivot;
        } else {
            first = pivot.next();
        }
    }
    insertion_sort(first, last, &mut comp);
}

/// Returns true if `[first, last)` is sorted by `comp`.
pub fn is_sorted<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, comp: C) -> bool
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    is_sorted_until(first, last, comp) == last
}

/// Returns the end of the longest sorted prefix of `[first, last)`, i.e. the first element which
/// orders before its predecessor, or `last`.
pub fn is_sorted_until<'a, S, C>(first: Cursor<'a, S>, last: Cursor<'a, S>, mut comp: C) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }

    let mut prev = first.get();
    let mut next = first.next();
    while next != last {
        let value = next.get();
        if comp(&value, &prev) {
            return next;
        }
        prev = value;
        next = next.next();
    }
    last
}
