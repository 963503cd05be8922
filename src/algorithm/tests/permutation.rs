use super::{contents, gt, lt};
use crate::algorithm::*;
use crate::cursor::{at, begin, cells, end};

#[test]
fn test_extremes() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);

    assert_eq!(min_element(begin(store), end(store), lt).index(), 0);
    assert_eq!(max_element(begin(store), end(store), lt).index(), 3);
    let (min, max) = min_max_element(begin(store), end(store), lt);
    assert_eq!((min.index(), max.index()), (0, 3));

    assert_eq!(min_element(begin(store), begin(store), lt), begin(store));
    assert_eq!(max_element(at(store, 2), at(store, 2), lt), at(store, 2));
    assert_eq!(
        min_max_element(begin(store), begin(store), lt),
        (begin(store), begin(store)),
        "An empty range should yield its end twice."
    );
}

#[test]
fn test_extreme_ties() {
    let mut values = [2, 1, 1, 3, 3];
    let store = cells(&mut values);

    assert_eq!(min_element(begin(store), end(store), lt).index(), 1);
    assert_eq!(
        max_element(begin(store), end(store), lt).index(),
        3,
        "Ties should resolve to the first largest element."
    );
    let (min, max) = min_max_element(begin(store), end(store), lt);
    assert_eq!((min.index(), max.index()), (1, 3));

    let (min, max) = min_max_element(at(store, 4), end(store), lt);
    assert_eq!((min, max), (at(store, 4), at(store, 4)), "A single element is both extremes.");
}

#[test]
fn test_lexicographical_compare() {
    let mut values = [1, 2, 2, 3];
    let mut zeros = [0; 4];
    let store = cells(&mut values);
    let zeros = cells(&mut zeros);

    assert!(!lexicographical_compare(begin(store), end(store), begin(zeros), end(zeros), lt));
    assert!(lexicographical_compare(begin(zeros), end(zeros), begin(store), end(store), lt));
    assert!(
        lexicographical_compare(begin(store), at(store, 2), begin(store), end(store), lt),
        "A proper prefix should order first."
    );
    assert!(!lexicographical_compare(begin(store), end(store), begin(store), at(store, 2), lt));
    assert!(
        !lexicographical_compare(begin(store), end(store), begin(store), end(store), lt),
        "Equal ranges shouldn't order before each other."
    );
    assert!(lexicographical_compare(begin(zeros), begin(zeros), begin(zeros), end(zeros), lt));
}

#[test]
fn test_next_permutation() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);

    let expected = [
        [1, 2, 3, 2],
        [1, 3, 2, 2],
        [2, 1, 2, 3],
        [2, 1, 3, 2],
        [2, 2, 1, 3],
        [2, 2, 3, 1],
        [2, 3, 1, 2],
        [2, 3, 2, 1],
        [3, 1, 2, 2],
        [3, 2, 1, 2],
        [3, 2, 2, 1],
    ];
    for permutation in expected {
        assert!(next_permutation(begin(store), end(store), lt));
        assert_eq!(contents(store), permutation);
    }
    assert!(
        !next_permutation(begin(store), end(store), lt),
        "The greatest permutation should have no successor."
    );
    assert_eq!(contents(store), [1, 2, 2, 3], "The range should wrap to ascending order.");
}

#[test]
fn test_prev_permutation() {
    let mut values = [3, 2, 1];
    let store = cells(&mut values);

    for permutation in [[3, 1, 2], [2, 3, 1], [2, 1, 3], [1, 3, 2], [1, 2, 3]] {
        assert!(prev_permutation(begin(store), end(store), lt));
        assert_eq!(contents(store), permutation);
    }
    assert!(!prev_permutation(begin(store), end(store), lt));
    assert_eq!(contents(store), [3, 2, 1], "The range should wrap to descending order.");
}

#[test]
fn test_permutation_enumeration() {
    let mut values = [1, 1, 2, 2, 3];
    let store = cells(&mut values);

    let mut seen = vec![contents(store)];
    while next_permutation(begin(store), end(store), lt) {
        seen.push(contents(store));
    }
    assert_eq!(seen.len(), 30, "Every distinct permutation of the multiset should be visited.");
    assert!(
        seen.windows(2).all(|pair| pair[0] < pair[1]),
        "Permutations should be visited in strictly increasing lexicographical order."
    );
    assert_eq!(contents(store), [1, 1, 2, 2, 3]);

    let mut backwards = 1;
    reverse(begin(store), end(store));
    while prev_permutation(begin(store), end(store), lt) {
        backwards += 1;
    }
    assert_eq!(backwards, 30, "prev_permutation should mirror next_permutation.");

    let mut values = [5, 4, 4];
    let store = cells(&mut values);
    assert!(next_permutation(begin(store), end(store), gt), "The comparator defines the order.");
    assert_eq!(contents(store), [4, 5, 4]);
}

#[test]
fn test_trivial_permutations() {
    let mut values = [7];
    let store = cells(&mut values);
    assert!(!next_permutation(begin(store), end(store), lt));
    assert!(!prev_permutation(begin(store), end(store), lt));
    assert!(!next_permutation(begin(store), begin(store), lt));
    assert_eq!(contents(store), [7]);
}
