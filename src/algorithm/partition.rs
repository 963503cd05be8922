//! Partitioning by a unary predicate.

use crate::cursor::{Cursor, Store, span};

use super::rotate;

/// Returns true if every element of `[first, last)` for which `pred` holds comes before every
/// element for which it doesn't. Empty ranges are partitioned.
pub fn is_partitioned<S, P>(mut first: Cursor<'_, S>, last: Cursor<'_, S>, mut pred: P) -> bool
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last && pred(&first.get()) {
        first = first.next();
    }
    while first != last {
        if pred(&first.get()) {
            return false;
        }
        first = first.next();
    }
    true
}

/// Reorders `[first, last)` so that every element satisfying `pred` precedes every element that
/// doesn't, by swapping from both ends inwards. Relative order isn't preserved, see
/// [`stable_partition`] for that. Returns the first position of the second group.
///
/// # Examples
/// ```
/// # use cursor_algorithm::algorithm::partition;
/// # use cursor_algorithm::cursor::{begin, cells, end};
/// let mut values = [1, 2, 2, 3];
/// let store = cells(&mut values);
/// let split = partition(begin(store), end(store), |x| x % 2 == 0);
/// assert_eq!(split.index(), 2);
/// assert_eq!(values, [2, 2, 1, 3]);
/// ```
pub fn partition<'a, S, P>(mut first: Cursor<'a, S>, mut last: Cursor<'a, S>, mut pred: P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    loop {
        // Skip elements already in the first group.
        loop {
            if first == last {
                return first;
            }
            if !pred(&first.get()) {
                break;
            }
            first = first.next();
        }
        // Skip elements already in the second group.
        loop {
            last = last.prev();
            if first == last {
                return first;
            }
            if pred(&last.get()) {
                break;
            }
        }
        first.swap_with(last);
        first = first.next();
    }
}

/// Reorders `[first, last)` like [`partition`], but keeps the relative order within both groups.
///
/// This doesn't allocate: each half is partitioned recursively and the halves are joined with a
/// [`rotate`], for `O(n log n)` swaps in total.
pub fn stable_partition<'a, S, P>(first: Cursor<'a, S>, last: Cursor<'a, S>, mut pred: P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    stable_partition_len(first, span(first, last), &mut pred)
}

fn stable_partition_len<'a, S, P>(first: Cursor<'a, S>, len: usize, pred: &mut P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    match len {
        0 => first,
        1 => {
            if pred(&first.get()) {
                first.next()
            } else {
                first
            }
        },
        _ => {
            let middle = first.forward(len / 2);
            let left_split = stable_partition_len(first, len / 2, pred);
            let right_split = stable_partition_len(middle, len - len / 2, pred);
            rotate(left_split, middle, right_split)
        },
    }
}

/// Copies the elements of `[first, last)` for which `pred` holds to `result_true`, and the rest to
/// `result_false`. Returns the ends of both output ranges.
pub fn partition_copy<'t, 'f, S, DT, DF, P>(
    mut first: Cursor<'_, S>,
    last: Cursor<'_, S>,
    mut result_true: Cursor<'t, DT>,
    mut result_false: Cursor<'f, DF>,
    mut pred: P,
) -> (Cursor<'t, DT>, Cursor<'f, DF>)
where
    S: Store + ?Sized,
    DT: Store<Item = S::Item> + ?Sized,
    DF: Store<Item = S::Item> + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last {
        let item = first.get();
        if pred(&item) {
            result_true.set(item);
            result_true = result_true.next();
        } else {
            result_false.set(item);
            result_false = result_false.next();
        }
        first = first.next();
    }
    (result_true, result_false)
}

/// Returns the first position in the already partitioned range `[first, last)` for which `pred`
/// doesn't hold, using a binary search. If the range isn't partitioned by `pred` the result is
/// unspecified.
pub fn partition_point<'a, S, P>(mut first: Cursor<'a, S>, last: Cursor<'a, S>, mut pred: P) -> Cursor<'a, S>
where
    S: Store + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut len = span(first, last);
    while len > 0 {
        let step = len / 2;
        let probe = first.forward(step);
        if pred(&probe.get()) {
            first = probe.next();
            len -= step + 1;
        } else {
            len = step;
        }
    }
    first
}
