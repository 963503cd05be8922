//! Binary max-heaps stored implicitly in a range.
//!
//! The heap is 0-indexed relative to `first`: the children of position `i` are `2i + 1` and
//! `2i + 2`. "Max" is defined by `comp`, so the root is an element that no other element orders
//! after. A heap built with `|a, b| a > b` is therefore a min-heap.

use crate::cursor::{Cursor, Store, span};

/// Places `value` into the hole at `hole` and moves it up towards `top` until its parent no longer
/// orders before it.
fn push_hole<S, C>(first: Cursor<'_, S>, mut hole: usize, top: usize, value: S::Item, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    while hole > top {
        let parent = (hole - 1) / 2;
        let parent_value = first.forward(parent).get();
        if !comp(&parent_value, &value) {
            break;
        }
        first.forward(hole).set(parent_value);
        hole = parent;
    }
    first.forward(hole).set(value);
}

/// Fills the hole at `hole` in the heap `[first, first + len)` with `value`: the hole is first
/// walked down to a leaf along the larger children, then `value` is pushed back up from there.
///
/// The trailing node with only a left child (possible when `len` is even) is handled explicitly.
pub(crate) fn adjust_heap<S, C>(first: Cursor<'_, S>, mut hole: usize, len: usize, value: S::Item, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    if len == 0 {
        return;
    }

    let top = hole;
    let mut child = hole;
    while child < (len - 1) / 2 {
        child = 2 * (child + 1);
        if comp(&first.forward(child).get(), &first.forward(child - 1).get()) {
            child -= 1;
        }
        first.forward(hole).set(first.forward(child).get());
        hole = child;
    }
    if len % 2 == 0 && child == (len - 2) / 2 {
        child = 2 * (child + 1);
        first.forward(hole).set(first.forward(child - 1).get());
        hole = child - 1;
    }
    push_hole(first, hole, top, value, comp);
}

/// Extends the heap `[first, last - 1)` to `[first, last)` by sifting the element at `last - 1` up
/// into place.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::push_heap;
/// # use cursor_algorithm::cursor::{begin, cells, end};
/// let mut values = [4, 2, 3, 1, 5];
/// let store = cells(&mut values);
/// push_heap(begin(store), end(store), |a, b| a < b);
/// assert_eq!(values, [5, 4, 3, 1, 2]);
/// ```
pub fn push_heap<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = span(first, last);
    if len < 2 {
        return;
    }
    let value = last.prev().get();
    push_hole(first, len - 1, 0, value, &mut comp);
}

/// Moves the root of the heap `[first, last)` to `last - 1` and restores the heap property on
/// `[first, last - 1)`.
pub fn pop_heap<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    pop_heap_by(first, last, &mut comp);
}

fn pop_heap_by<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = span(first, last);
    if len < 2 {
        return;
    }
    let last = last.prev();
    let value = last.get();
    last.set(first.get());
    adjust_heap(first, 0, len - 1, value, comp);
}

/// Rearranges `[first, last)` into a heap, sifting down from the last parent to the root.
pub fn make_heap<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    make_heap_by(first, last, &mut comp);
}

pub(crate) fn make_heap_by<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = span(first, last);
    if len < 2 {
        return;
    }
    for parent in (0..=(len - 2) / 2).rev() {
        adjust_heap(first, parent, len, first.forward(parent).get(), comp);
    }
}

/// Turns the heap `[first, last)` into a range sorted by `comp`, by popping until one element is
/// left.
pub fn sort_heap<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut comp: C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    sort_heap_by(first, last, &mut comp);
}

pub(crate) fn sort_heap_by<S, C>(first: Cursor<'_, S>, mut last: Cursor<'_, S>, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    while span(first, last) > 1 {
        pop_heap_by(first, last, comp);
        last = last.prev();
    }
}

/// Leaves the smallest `middle - first` elements of `[first, last)` in `[first, middle)`, arranged
/// as a heap. The rest end up in `[middle, last)` in no particular order.
pub(crate) fn heap_select<S, C>(first: Cursor<'_, S>, middle: Cursor<'_, S>, last: Cursor<'_, S>, comp: &mut C)
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = span(first, middle);
    if len == 0 {
        return;
    }
    make_heap_by(first, middle, comp);
    let mut it = middle;
    while it != last {
        let value = it.get();
        if comp(&value, &first.get()) {
            it.set(first.get());
            adjust_heap(first, 0, len, value, comp);
        }
        it = it.next();
    }
}

/// Returns true if `[first, last)` is a heap under `comp`.
pub fn is_heap<S, C>(first: Cursor<'_, S>, last: Cursor<'_, S>, comp: C) -> bool
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    is_heap_until(first, last, comp) == last
}

/// Returns the end of the longest prefix of `[first, last)` which is a heap, i.e. the first child
/// that orders after its parent, or `last`.
pub fn is_heap_until<'a, S, C>(first: Cursor<'a, S>, last: Cursor<'a, S>, mut comp: C) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = span(first, last);
    let mut parent = 0;
    for child in 1..len {
        if comp(&first.forward(parent).get(), &first.forward(child).get()) {
            return first.forward(child);
        }
        if child % 2 == 0 {
            parent += 1;
        }
    }
    last
}
