//! Non-modifying queries: linear scans that stop at the first element which decides the answer.

use crate::cursor::{Cursor, Store, span};

/// Returns true if `pred` holds for every element of `[first, last)`, including when the range is
/// empty.
pub fn all_of<S, P>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, mut pred: P) -> bool
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last {
        if !pred(&first.get()) {
            return false;
        }
        first = first.next();
    }
    true
}

/// Returns true if `pred` holds for at least one element of `[first, last)`.
pub fn any_of<S, P>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, mut pred: P) -> bool
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last {
        if pred(&first.get()) {
            return true;
        }
        first = first.next();
    }
    false
}

/// Returns true if `pred` holds for no element of `[first, last)`.
pub fn none_of<S, P>(first: Cursor<'_, S>, last: Cursor<'_, S>, pred: P) -> bool
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    !any_of(first, last, pred)
}

/// Calls `f` with a copy of every element of `[first, last)`, in order.
pub fn for_each<S, F>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, mut f: F)
where
    S: Store + ?Sized,
    F: FnMut(S::Item),
{
    while first != last {
        f(first.get());
        first = first.next();
    }
}

/// Returns the first position in `[first, last)` whose element is equivalent to `value` under
/// `pred`, or `last` if there is none. `pred` is called as `pred(element, value)`.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::find;
/// # use cursor_algorithm::cursor::{begin, cells, end};
/// let mut values = [1, 2, 2, 3];
/// let store = cells(&mut values);
/// assert_eq!(find(begin(store), end(store), 2, |a, b| a == b).index(), 1);
/// assert_eq!(find(begin(store), end(store), 9, |a, b| a == b), end(store));
/// ```
pub fn find<'a, S, P>(
    first: Cursor<'a, S>,
    last: Cursor<'a, S>,
    value: S::Item,
    mut pred: P,
) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    find_if(first, last, |item| pred(item, &value))
}

/// Returns the first position in `[first, last)` for which `pred` holds, or `last`.
pub fn find_if<'a, S, P>(mut first: Cursor<'a, S>, last: Cursor<'a, S>, mut pred: P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last {
        if pred(&first.get()) {
            return first;
        }
        first = first.next();
    }
    last
}

/// Returns the first position in `[first, last)` for which `pred` doesn't hold, or `last`.
pub fn find_if_not<'a, S, P>(first: Cursor<'a, S>, last: Cursor<'a, S>, mut pred: P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    find_if(first, last, |item| !pred(item))
}

/// Returns the start of the last occurrence of `[first2, last2)` within `[first1, last1)`, or
/// `last1` if it doesn't occur. An empty subrange is never considered found, so it also yields
/// `last1`.
pub fn find_end<'a, S1, S2, P>(
    mut first1: Cursor<'a, S1>,
    last1: Cursor<'a, S1>,
    first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut pred: P,
) -> Cursor<'a, S1>
where
    S1: Store + ?Sized,
    S2: Store + ?Sized,
    P: FnMut(&S1::Item, &S2::Item) -> bool,
{
    if first2 == last2 {
        return last1;
    }

    let mut found = last1;
    while first1 != last1 {
        let mut it1 = first1;
        let mut it2 = first2;
        while pred(&it1.get(), &it2.get()) {
            it1 = it1.next();
            it2 = it2.next();
            if it2 == last2 {
                found = first1;
                break;
            }
            if it1 == last1 {
                // The rest of the haystack is shorter than the needle.
                return found;
            }
        }
        first1 = first1.next();
    }
    found
}

/// Returns the first position in `[first1, last1)` whose element is equivalent to any element of
/// `[first2, last2)`, or `last1`.
pub fn find_first_of<'a, S1, S2, P>(
    mut first1: Cursor<'a, S1>,
    last1: Cursor<'a, S1>,
    first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut pred: P,
) -> Cursor<'a, S1>
where
    S1: Store + ?Sized,
    S2: Store + ?Sized,
    P: FnMut(&S1::Item, &S2::Item) -> bool,
{
    while first1 != last1 {
        let item = first1.get();
        if any_of(first2, last2, |candidate| pred(&item, candidate)) {
            return first1;
        }
        first1 = first1.next();
    }
    last1
}

/// Returns the first position `it` in `[first, last)` such that `pred(*it, *(it + 1))` holds, or
/// `last`.
pub fn adjacent_find<'a, S, P>(mut first: Cursor<'a, S>, last: Cursor<'a, S>, mut pred: P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }

    let mut next = first.next();
    while next != last {
        if pred(&first.get(), &next.get()) {
            return first;
        }
        first = next;
        next = next.next();
    }
    last
}

/// Counts the elements of `[first, last)` equivalent to `value` under `pred`.
pub fn count<S, P>(first: Cursor<'_, S>, last: Cursor<'_, S>, value: S::Item, mut pred: P) -> usize
where
    S: Store + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    count_if(first, last, |item| pred(item, &value))
}

/// Counts the elements of `[first, last)` for which `pred` holds.
pub fn count_if<S, P>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, mut pred: P) -> usize
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut count = 0;
    while first != last {
        if pred(&first.get()) {
            count += 1;
        }
        first = first.next();
    }
    count
}

/// Walks `[first1, last1)` and the range starting at `first2` in lockstep, returning the first pair
/// of positions whose elements aren't equivalent. If every element matches, the first cursor is
/// `last1`.
///
/// The second range must be at least as long as the first.
pub fn mismatch<'a, 'b, S1, S2, P>(
    mut first1: Cursor<'a, S1>,
    last1: Cursor<'a, S1>,
    mut first2: Cursor<'b, S2>,
    mut pred: P,
) -> (Cursor<'a, S1>, Cursor<'b, S2>)
where
    S1: Store + ?Sized,
    S2: Store + ?Sized,
    P: FnMut(&S1::Item, &S2::Item) -> bool,
{
    while first1 != last1 && pred(&first1.get(), &first2.get()) {
        first1 = first1.next();
        first2 = first2.next();
    }
    (first1, first2)
}

/// Returns true if `[first1, last1)` is element-wise equivalent to the range of the same length
/// starting at `first2`.
pub fn equal<S1, S2, P>(
    first1: Cursor<'_, S1>,
    last1: Cursor<'_, S1>,
    first2: Cursor<'_, S2>,
    pred: P,
) -> bool
where
    S1: Store + ?Sized,
    S2: Store + ?Sized,
    P: FnMut(&S1::Item, &S2::Item) -> bool,
{
    mismatch(first1, last1, first2, pred).0 == last1
}

/// Returns true if the range of the same length starting at `first2` is a rearrangement of
/// `[first1, last1)` under the equivalence `pred`.
///
/// After skipping the common prefix, each distinct remaining element is counted in both tails. This
/// is `O(n²)` in the worst case, but never allocates.
pub fn is_permutation<S, P>(
    first1: Cursor<'_, S>,
    last1: Cursor<'_, S>,
    first2: Cursor<'_, S>,
    mut pred: P,
) -> bool
where
    S: Store + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first1, first2) = mismatch(first1, last1, first2, &mut pred);
    if first1 == last1 {
        return true;
    }
    let last2 = first2.forward(span(first1, last1));

    let mut it = first1;
    while it != last1 {
        let item = it.get();
        // Only count each equivalence class once, at its first occurrence.
        if find(first1, it, item, &mut pred) == it {
            let matches = count(first2, last2, item, &mut pred);
            if matches == 0 || count(it, last1, item, &mut pred) != matches {
                return false;
            }
        }
        it = it.next();
    }
    true
}

/// Returns the start of the first occurrence of `[first2, last2)` within `[first1, last1)`, or
/// `last1`. An empty subrange is found at `first1`.
pub fn search<'a, S1, S2, P>(
    mut first1: Cursor<'a, S1>,
    last1: Cursor<'a, S1>,
    first2: Cursor<'_, S2>,
    last2: Cursor<'_, S2>,
    mut pred: P,
) -> Cursor<'a, S1>
where
    S1: Store + ?Sized,
    S2: Store + ?Sized,
    P: FnMut(&S1::Item, &S2::Item) -> bool,
{
    if first2 == last2 {
        return first1;
    }

    while first1 != last1 {
        let mut it1 = first1;
        let mut it2 = first2;
        while pred(&it1.get(), &it2.get()) {
            it1 = it1.next();
            it2 = it2.next();
            if it2 == last2 {
                return first1;
            }
            if it1 == last1 {
                return last1;
            }
        }
        first1 = first1.next();
    }
    last1
}

/// Returns the start of the first run of `count` consecutive elements in `[first, last)` that
/// each satisfy `pred(value, element)`, or `last`. A run of zero is found at `first`.
pub fn search_n<'a, S, P>(
    mut first: Cursor<'a, S>,
    last: Cursor<'a, S>,
    count: usize,
    value: S::Item,
    mut pred: P,
) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    if count == 0 {
        return first;
    }

    while span(first, last) >= count {
        let mut run = 0;
        while run < count && pred(&value, &first.forward(run).get()) {
            run += 1;
        }
        if run == count {
            return first;
        }
        // No run can start at or before the element that broke this one.
        first = first.forward(run + 1);
    }
    last
}
