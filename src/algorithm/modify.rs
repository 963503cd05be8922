//! Copying and mutating transforms.
//!
//! Output ranges are described only by their first position and are assumed to be long enough.
//! Unless stated otherwise an output range may overlap its input only if it starts at or before the
//! input, the same rule as a forward element-by-element copy.

use crate::cursor::{Cursor, Store, span};

/// Copies `[first, last)` into the range starting at `result`, front to back. Returns the end of the
/// output range.
pub fn copy<'b, S, D>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, mut result: Cursor<'b, D>) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
{
    while first != last {
        result.set(first.get());
        result = result.next();
        first = first.next();
    }
    result
}

/// Copies the `count` elements starting at `first` into the range starting at `result`. Returns the
/// end of the output range.
pub fn copy_n<'b, S, D>(first: Cursor<'_, S>, count: usize, result: Cursor<'b, D>) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
{
    copy(first, first.forward(count), result)
}

/// Copies the elements of `[first, last)` for which `pred` holds, preserving their order. Returns
/// the end of the output range.
pub fn copy_if<'b, S, D, P>(
    mut first: Cursor<'_, S>,
    last: Cursor<'_, S>,
    mut result: Cursor<'b, D>,
    mut pred: P,
) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last {
        let item = first.get();
        if pred(&item) {
            result.set(item);
            result = result.next();
        }
        first = first.next();
    }
    result
}

/// Copies `[first, last)` into the range ending just before `result`, back to front. Returns the
/// start of the output range.
///
/// Because elements are copied in reverse, the output may overlap the input as long as it is
/// shifted towards the end, which is exactly the case a forward [`copy`] can't handle.
pub fn copy_backward<'b, S, D>(first: Cursor<'_, S>, mut last: Cursor<'_, S>, mut result: Cursor<'b, D>) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
{
    while last != first {
        result = result.prev();
        last = last.prev();
        result.set(last.get());
    }
    result
}

/// Swaps each element of `[first1, last1)` with the corresponding element of the range starting at
/// `first2`. Returns the end of the second range.
pub fn swap_ranges<'b, S1, S2>(mut first1: Cursor<'_, S1>, last1: Cursor<'_, S1>, mut first2: Cursor<'b, S2>) -> Cursor<'b, S2>
where
    S1: Store + ?Sized,
    S2: Store<Item = S1::Item> + ?Sized,
{
    while first1 != last1 {
        first1.swap_with(first2);
        first1 = first1.next();
        first2 = first2.next();
    }
    first2
}

/// Swaps the elements under two cursors.
///
/// # Panics
/// Panics if either cursor isn't dereferenceable.
#[track_caller]
pub fn swap<S1, S2>(a: Cursor<'_, S1>, b: Cursor<'_, S2>)
where
    S1: Store + ?Sized,
    S2: Store<Item = S1::Item> + ?Sized,
{
    a.swap_with(b);
}

/// Writes `op(x)` for every `x` in `[first, last)` to the range starting at `result`, which may be
/// `first` itself. Returns the end of the output range.
pub fn transform<'b, S, D, F>(
    mut first: Cursor<'_, S>,
    last: Cursor<'_, S>,
    mut result: Cursor<'b, D>,
    mut op: F,
) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store + ?Sized,
    F: FnMut(S::Item) -> D::Item,
{
    while first != last {
        result.set(op(first.get()));
        result = result.next();
        first = first.next();
    }
    result
}

/// Writes `op(x, y)` for every pair of corresponding elements from `[first1, last1)` and the range
/// starting at `first2` to the range starting at `result`. Returns the end of the output range.
pub fn transform_binary<'b, S1, S2, D, F>(
    mut first1: Cursor<'_, S1>,
    last1: Cursor<'_, S1>,
    mut first2: Cursor<'_, S2>,
    mut result: Cursor<'b, D>,
    mut op: F,
) -> Cursor<'b, D>
where
    S1: Store + ?Sized,
    S2: Store + ?Sized,
    D: Store + ?Sized,
    F: FnMut(S1::Item, S2::Item) -> D::Item,
{
    while first1 != last1 {
        result.set(op(first1.get(), first2.get()));
        first2 = first2.next();
        result = result.next();
        first1 = first1.next();
    }
    result
}

/// Assigns `value` to every element of `[first, last)`.
pub fn fill<S: Store + ?Sized>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, value: S::Item) {
    while first != last {
        first.set(value);
        first = first.next();
    }
}

/// Assigns `value` to the `count` elements starting at `first`. Returns the end of the filled range.
pub fn fill_n<'a, S: Store + ?Sized>(first: Cursor<'a, S>, count: usize, value: S::Item) -> Cursor<'a, S> {
    let last = first.forward(count);
    fill(first, last, value);
    last
}

/// Assigns successive results of `generator` to the elements of `[first, last)`.
pub fn generate<S, G>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, mut generator: G)
where
    S: Store + ?Sized,
    G: FnMut() -> S::Item,
{
    while first != last {
        first.set(generator());
        first = first.next();
    }
}

/// Replaces every element of `[first, last)` equivalent to `old` under `pred` with `new`.
pub fn replace<S, P>(first: Cursor<'_, S>, last: Cursor<'_, S>, old: S::Item, new: S::Item, mut pred: P)
where
    S: Store + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    replace_if(first, last, |item| pred(item, &old), new);
}

/// Replaces every element of `[first, last)` for which `pred` holds with `new`.
pub fn replace_if<S, P>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, mut pred: P, new: S::Item)
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last {
        if pred(&first.get()) {
            first.set(new);
        }
        first = first.next();
    }
}

/// Copies `[first, last)` to the range starting at `result`, substituting `new` for every element
/// equivalent to `old`. Returns the end of the output range.
pub fn replace_copy<'b, S, D, P>(
    first: Cursor<'_, S>,
    last: Cursor<'_, S>,
    result: Cursor<'b, D>,
    old: S::Item,
    new: S::Item,
    mut pred: P,
) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    replace_copy_if(first, last, result, |item| pred(item, &old), new)
}

/// Copies `[first, last)` to the range starting at `result`, substituting `new` for every element
/// for which `pred` holds. Returns the end of the output range.
pub fn replace_copy_if<'b, S, D, P>(
    first: Cursor<'_, S>,
    last: Cursor<'_, S>,
    result: Cursor<'b, D>,
    mut pred: P,
    new: S::Item,
) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    transform(first, last, result, |item| if pred(&item) { new } else { item })
}

/// Moves the elements of `[first, last)` for which `pred` doesn't hold to the front of the range,
/// preserving their order. Returns the new logical end; elements from there to `last` are left in
/// an unspecified state.
pub fn remove_if<'a, S, P>(first: Cursor<'a, S>, last: Cursor<'a, S>, mut pred: P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    copy_if(first, last, first, |item| !pred(item))
}

/// Copies the elements of `[first, last)` for which `pred` doesn't hold. Returns the end of the
/// output range.
pub fn remove_copy_if<'b, S, D, P>(
    first: Cursor<'_, S>,
    last: Cursor<'_, S>,
    result: Cursor<'b, D>,
    mut pred: P,
) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    copy_if(first, last, result, |item| !pred(item))
}

/// Collapses every run of consecutive equivalent elements in `[first, last)` down to its first
/// element. Returns the new logical end; elements from there to `last` are stale.
///
/// `pred` is called as `pred(kept, candidate)`, where `kept` is the last element retained.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::unique;
/// # use cursor_algorithm::cursor::{begin, cells, end};
/// let mut values = [1, 2, 2, 3];
/// let store = cells(&mut values);
/// let new_end = unique(begin(store), end(store), |a, b| a == b);
/// assert_eq!(new_end.index(), 3);
/// assert_eq!(&values[..3], &[1, 2, 3]);
/// ```
pub fn unique<'a, S, P>(mut first: Cursor<'a, S>, last: Cursor<'a, S>, mut pred: P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }

    let mut result = first;
    first = first.next();
    while first != last {
        let candidate = first.get();
        if !pred(&result.get(), &candidate) {
            result = result.next();
            result.set(candidate);
        }
        first = first.next();
    }
    result.next()
}

/// Copies `[first, last)` to the range starting at `result`, keeping only the first element of every
/// run of consecutive equivalent elements. Returns the end of the output range.
pub fn unique_copy<'b, S, D, P>(
    mut first: Cursor<'_, S>,
    last: Cursor<'_, S>,
    mut result: Cursor<'b, D>,
    mut pred: P,
) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return result;
    }

    let mut kept = first.get();
    result.set(kept);
    first = first.next();
    while first != last {
        let candidate = first.get();
        if !pred(&kept, &candidate) {
            result = result.next();
            result.set(candidate);
            kept = candidate;
        }
        first = first.next();
    }
    result.next()
}

/// Reverses the order of the elements of `[first, last)`.
pub fn reverse<S: Store + ?Sized>(mut first: Cursor<'_, S>, mut last: Cursor<'_, S>) {
    while first != last {
        last = last.prev();
        if first == last {
            break;
        }
        first.swap_with(last);
        first = first.next();
    }
}

/// Copies `[first, last)` to the range starting at `result` in reverse order. Returns the end of the
/// output range.
pub fn reverse_copy<'b, S, D>(first: Cursor<'_, S>, mut last: Cursor<'_, S>, mut result: Cursor<'b, D>) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
{
    while first != last {
        last = last.prev();
        result.set(last.get());
        result = result.next();
    }
    result
}

/// Rotates `[first, last)` so that `middle` becomes the first element, using `O(n)` swaps and no
/// extra storage. Returns the new position of the element that was at `first`.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::rotate;
/// # use cursor_algorithm::cursor::{at, begin, cells, end};
/// let mut values = [1, 2, 2, 3];
/// let store = cells(&mut values);
/// let old_first = rotate(begin(store), at(store, 2), end(store));
/// assert_eq!(old_first.index(), 2);
/// assert_eq!(values, [2, 3, 1, 2]);
/// ```
pub fn rotate<'a, S: Store + ?Sized>(
    mut first: Cursor<'a, S>,
    mut middle: Cursor<'a, S>,
    last: Cursor<'a, S>,
) -> Cursor<'a, S> {
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }

    let rotated = first.forward(span(middle, last));
    let mut next = middle;
    while first != next {
        first.swap_with(next);
        first = first.next();
        next = next.next();
        if next == last {
            next = middle;
        } else if first == middle {
            middle = next;
        }
    }
    rotated
}

/// Copies `[first, last)` rotated around `middle` to the range starting at `result`. Returns the end
/// of the output range.
pub fn rotate_copy<'b, S, D>(
    first: Cursor<'_, S>,
    middle: Cursor<'_, S>,
    last: Cursor<'_, S>,
    result: Cursor<'b, D>,
) -> Cursor<'b, D>
where
    S: Store + ?Sized,
    D: Store<Item = S::Item> + ?Sized,
{
    let result = copy(middle, last, result);
    copy(first, middle, result)
}

/// Shuffles `[first, last)` with a Fisher-Yates pass. `next_below(n)` must return a value in
/// `0..n`; the randomness source belongs to the caller.
pub fn random_shuffle<S, G>(first: Cursor<'_, S>, last: Cursor<'_, S>, mut next_below: G)
where
    S: Store + ?Sized,
    G: FnMut(usize) -> usize,
{
    let len = span(first, last);
    for i in (1..len).rev() {
        first.forward(i).swap_with(first.forward(next_below(i + 1)));
    }
}
