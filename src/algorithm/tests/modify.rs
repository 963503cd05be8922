use std::cell::Cell;
use std::collections::VecDeque;

use super::{XorShift, contents, eq, is_even, lt};
use crate::algorithm::*;
use crate::cursor::{at, begin, cells, end};

#[test]
fn test_copy_family() {
    let mut values = [1, 2, 2, 3];
    let mut out = [0; 4];
    let store = cells(&mut values);
    let out = cells(&mut out);

    let out_end = copy(begin(store), at(store, 2), begin(out));
    assert_eq!(out_end.index(), 2, "copy should return the end of the written range.");
    assert_eq!(contents(out), [1, 2, 0, 0]);

    fill(begin(out), end(out), 0);
    assert_eq!(copy_n(begin(store), 3, begin(out)).index(), 3);
    assert_eq!(contents(out), [1, 2, 2, 0]);

    fill(begin(out), end(out), 0);
    assert_eq!(copy_if(begin(store), end(store), begin(out), is_even).index(), 2);
    assert_eq!(contents(out), [2, 2, 0, 0]);

    fill(begin(out), end(out), 0);
    let out_start = copy_backward(at(store, 1), at(store, 3), end(out));
    assert_eq!(out_start.index(), 2, "copy_backward should return the start of the output.");
    assert_eq!(contents(out), [0, 0, 2, 2]);
}

#[test]
fn test_overlapping_copies() {
    let mut values = [1, 2, 3, 4, 0];
    let store = cells(&mut values);

    let start = copy_backward(begin(store), at(store, 4), end(store));
    assert_eq!(start.index(), 1);
    assert_eq!(
        contents(store),
        [1, 1, 2, 3, 4],
        "copy_backward should handle an output shifted towards the end."
    );

    let out_end = copy(at(store, 1), end(store), begin(store));
    assert_eq!(out_end.index(), 4);
    assert_eq!(
        contents(store),
        [1, 2, 3, 4, 4],
        "copy should handle an output shifted towards the start."
    );
}

#[test]
fn test_swapping() {
    let mut values = [1, 2, 2, 3];
    let mut other = [0; 4];
    let store = cells(&mut values);
    let other = cells(&mut other);

    let other_end = swap_ranges(at(store, 1), at(store, 3), at(other, 1));
    assert_eq!(other_end.index(), 3);
    assert_eq!(contents(store), [1, 0, 0, 3]);
    assert_eq!(contents(other), [0, 2, 2, 0]);

    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);
    swap(begin(store), at(store, 1));
    assert_eq!(contents(store), [2, 1, 2, 3]);
}

#[test]
fn test_transform() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);

    let out_end = transform(begin(store), end(store), begin(store), |x| x * 2);
    assert_eq!(out_end, end(store));
    assert_eq!(contents(store), [2, 4, 4, 6], "transform should work in place.");

    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);
    transform_binary(begin(store), end(store), begin(store), begin(store), |a, b| a * b);
    assert_eq!(contents(store), [1, 4, 4, 9]);

    let mut widened = [0u64; 4];
    let widened = cells(&mut widened);
    transform(begin(store), end(store), begin(widened), |x| x as u64 + 1);
    assert_eq!(
        contents(widened),
        [2, 5, 5, 10],
        "transform should be able to change the element type."
    );
}

#[test]
fn test_fill_and_generate() {
    let mut values = [0; 5];
    let store = cells(&mut values);

    fill(begin(store), end(store), 7);
    assert_eq!(contents(store), [7; 5]);
    assert_eq!(fill_n(begin(store), 2, 1).index(), 2);
    assert_eq!(contents(store), [1, 1, 7, 7, 7]);

    let mut next = 0;
    generate(begin(store), end(store), || {
        next += 10;
        next
    });
    assert_eq!(contents(store), [10, 20, 30, 40, 50]);
}

#[test]
fn test_replace_family() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);
    replace_if(begin(store), end(store), |x| *x == 2, 20);
    assert_eq!(contents(store), [1, 20, 20, 3]);
    replace(begin(store), end(store), 20, 2, eq);
    assert_eq!(contents(store), [1, 2, 2, 3]);

    replace_copy_if(begin(store), end(store), begin(store), is_even, 200);
    assert_eq!(contents(store), [1, 200, 200, 3], "replace_copy_if should work in place.");

    let mut values = [1, 2, 2, 3];
    let mut out = [0; 4];
    let store = cells(&mut values);
    let out = cells(&mut out);
    assert_eq!(replace_copy(begin(store), end(store), begin(out), 3, 30, eq).index(), 4);
    assert_eq!(contents(out), [1, 2, 2, 30]);
    assert_eq!(contents(store), [1, 2, 2, 3], "The source should be left untouched.");
}

#[test]
fn test_remove_family() {
    let mut values = [1, 2, 2, 3];
    let mut out = [0; 4];
    let store = cells(&mut values);
    let out = cells(&mut out);

    let out_end = remove_copy_if(begin(store), end(store), begin(out), is_even);
    assert_eq!(out_end.index(), 2);
    assert_eq!(contents(out), [1, 3, 0, 0]);

    let new_end = remove_if(begin(store), end(store), is_even);
    assert_eq!(new_end.index(), 2, "remove_if should return the new logical end.");
    assert_eq!(contents(store)[..2], [1, 3]);
}

#[test]
fn test_unique() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);
    let new_end = unique(begin(store), end(store), eq);
    assert_eq!(new_end.index(), 3);
    assert_eq!(contents(store), [1, 2, 3, 3], "Storage past the new end should be stale.");
    assert_eq!(unique(begin(store), begin(store), eq), begin(store));

    let mut values = [1, 1, 2, 1, 1, 1, 3, 3];
    let store = cells(&mut values);
    let new_end = unique(begin(store), end(store), eq);
    assert_eq!(
        contents(store)[..new_end.index()],
        [1, 2, 1, 3],
        "Only consecutive duplicates should be collapsed."
    );
    assert!(
        adjacent_find(begin(store), new_end, eq) == new_end,
        "No two adjacent elements should be equal after unique."
    );
}

#[test]
fn test_unique_copy() {
    let mut values = [1, 2, 2, 3];
    let mut out = [0; 4];
    let store = cells(&mut values);
    let out = cells(&mut out);

    assert_eq!(unique_copy(begin(store), end(store), begin(out), eq).index(), 3);
    assert_eq!(contents(out), [1, 2, 3, 0]);
    assert_eq!(
        unique_copy(begin(store), begin(store), at(out, 1), eq),
        at(out, 1),
        "An empty input should leave the output cursor where it was."
    );
}

#[test]
fn test_reverse() {
    let mut values = [1, 2, 2, 3];
    let mut out = [0; 4];
    let store = cells(&mut values);
    let out = cells(&mut out);

    assert_eq!(reverse_copy(begin(store), end(store), begin(out)), end(out));
    assert_eq!(contents(out), [3, 2, 2, 1]);

    reverse(begin(store), end(store));
    assert_eq!(contents(store), [3, 2, 2, 1]);
    reverse(begin(store), at(store, 3));
    assert_eq!(contents(store), [2, 2, 3, 1], "Odd length ranges should keep their middle.");
    reverse(begin(store), begin(store));
    assert_eq!(contents(store), [2, 2, 3, 1]);
}

#[test]
fn test_rotate() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);
    let old_first = rotate(begin(store), at(store, 2), end(store));
    assert_eq!(old_first.index(), 2);
    assert_eq!(contents(store), [2, 3, 1, 2]);

    assert_eq!(rotate(begin(store), begin(store), end(store)), end(store));
    assert_eq!(rotate(begin(store), end(store), end(store)), begin(store));
    assert_eq!(contents(store), [2, 3, 1, 2], "Degenerate rotations should change nothing.");

    let mut values = [0, 1, 2, 3, 4, 5, 6];
    let store = cells(&mut values);
    let old_first = rotate(begin(store), at(store, 3), end(store));
    assert_eq!(old_first.index(), 4);
    assert_eq!(contents(store), [3, 4, 5, 6, 0, 1, 2]);

    let mut values = [1, 2, 2, 3];
    let mut out = [0; 4];
    let store = cells(&mut values);
    let out = cells(&mut out);
    assert_eq!(rotate_copy(begin(store), at(store, 2), end(store), begin(out)), end(out));
    assert_eq!(contents(out), [2, 3, 1, 2]);
}

#[test]
fn test_random_shuffle() {
    let mut values = [1, 2, 3, 4];
    let store = cells(&mut values);

    random_shuffle(begin(store), end(store), |_| 0);
    assert_eq!(
        contents(store),
        [2, 3, 4, 1],
        "Always picking the first slot should perform a predictable series of swaps."
    );

    random_shuffle(begin(store), end(store), |bound| bound - 1);
    assert_eq!(contents(store), [2, 3, 4, 1], "Picking every element itself should be a no-op.");

    let mut bounds = Vec::new();
    let mut values: Vec<i32> = (0..50).collect();
    let mut original = values.clone();
    let store = cells(&mut values);
    let mut rng = XorShift(0x2545_f491_4f6c_dd1d);
    random_shuffle(begin(store), end(store), |bound| {
        bounds.push(bound);
        rng.below(bound)
    });
    assert_eq!(bounds, (2..=50).rev().collect::<Vec<_>>());

    let mut shuffled = contents(store);
    assert_ne!(shuffled, original);
    shuffled.sort();
    original.sort();
    assert_eq!(shuffled, original, "A shuffle should be a permutation of its input.");
}

#[test]
fn test_other_back_ends() {
    let deque: VecDeque<Cell<i32>> = [3, 1, 2].into_iter().map(Cell::new).collect();
    let vec: Vec<Cell<i32>> = vec![Cell::new(0); 3];

    let out_end = copy(begin(&deque), end(&deque), begin(&vec));
    assert_eq!(out_end, end(&vec));
    reverse(begin(&vec), end(&vec));
    assert_eq!(vec.iter().map(Cell::get).collect::<Vec<_>>(), [2, 1, 3]);

    rotate(begin(&deque), at(&deque, 1), end(&deque));
    assert_eq!(deque.iter().map(Cell::get).collect::<Vec<_>>(), [1, 2, 3]);
    assert!(is_sorted(begin(&deque), end(&deque), lt));
}
