use super::{contents, is_even};
use crate::algorithm::*;
use crate::cursor::{at, begin, cells, end};

#[test]
fn test_is_partitioned() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);

    assert!(!is_partitioned(begin(store), end(store), is_even));
    assert!(is_partitioned(begin(store), end(store), |x| *x <= 2));
    assert!(is_partitioned(begin(store), begin(store), is_even), "Empty ranges are partitioned.");
    assert!(is_partitioned(begin(store), end(store), |_| false));
}

#[test]
fn test_partition() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);

    let split = partition(begin(store), end(store), is_even);
    assert_eq!(split.index(), 2);
    assert_eq!(contents(store), [2, 2, 1, 3]);
    assert!(is_partitioned(begin(store), end(store), is_even));

    let mut values = [5, 7, 9];
    let store = cells(&mut values);
    assert_eq!(partition(begin(store), end(store), is_even), begin(store));
    assert_eq!(partition(begin(store), end(store), |_| true), end(store));
    assert_eq!(partition(begin(store), begin(store), is_even), begin(store));

    let mut values: Vec<i32> = (0..100).map(|i| (i * 37) % 101).collect();
    let store = cells(&mut values);
    let split = partition(begin(store), end(store), is_even);
    assert_eq!(split.index(), count_if(begin(store), end(store), is_even));
    assert!(all_of(begin(store), split, is_even));
    assert!(none_of(split, end(store), is_even));
}

#[test]
fn test_stable_partition() {
    let mut values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let store = cells(&mut values);

    let split = stable_partition(begin(store), end(store), is_even);
    assert_eq!(split.index(), 4);
    assert_eq!(
        contents(store),
        [2, 4, 6, 8, 1, 3, 5, 7, 9],
        "stable_partition should keep the relative order within both groups."
    );

    assert_eq!(stable_partition(begin(store), begin(store), is_even), begin(store));
    let split = stable_partition(begin(store), end(store), |_| true);
    assert_eq!(split, end(store));
    assert_eq!(contents(store), [2, 4, 6, 8, 1, 3, 5, 7, 9]);
}

#[test]
fn test_partition_copy() {
    let mut values = [1, 2, 2, 3];
    let mut evens = [0; 4];
    let mut odds = [0; 4];
    let store = cells(&mut values);
    let evens = cells(&mut evens);
    let odds = cells(&mut odds);

    let (evens_end, odds_end) =
        partition_copy(begin(store), end(store), begin(evens), begin(odds), is_even);
    assert_eq!((evens_end.index(), odds_end.index()), (2, 2));
    assert_eq!(contents(evens), [2, 2, 0, 0]);
    assert_eq!(contents(odds), [1, 3, 0, 0]);
}

#[test]
fn test_partition_point() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);

    assert_eq!(partition_point(begin(store), end(store), |x| *x <= 2).index(), 3);
    assert_eq!(partition_point(begin(store), end(store), |_| true), end(store));
    assert_eq!(partition_point(begin(store), end(store), |_| false), begin(store));
    assert_eq!(partition_point(at(store, 1), at(store, 1), |_| true), at(store, 1));

    let mut values: Vec<i32> = (0..1000).collect();
    let store = cells(&mut values);
    for boundary in [0, 1, 499, 500, 999, 1000] {
        assert_eq!(
            partition_point(begin(store), end(store), |x| *x < boundary).index(),
            boundary as usize,
            "partition_point should find every boundary of a long range."
        );
    }
}
