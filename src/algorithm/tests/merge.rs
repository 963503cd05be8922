use super::{XorShift, contents, lt};
use crate::algorithm::*;
use crate::cursor::{at, begin, cells, end};

#[test]
fn test_merge() {
    let mut a = [1, 2, 2, 3];
    let mut b = [1, 3, 3, 4];
    let mut out = [0; 8];
    let a = cells(&mut a);
    let b = cells(&mut b);
    let out = cells(&mut out);

    let out_end = merge(begin(a), end(a), begin(b), end(b), begin(out), lt);
    assert_eq!(out_end, end(out));
    assert_eq!(contents(out), [1, 1, 2, 2, 3, 3, 3, 4]);

    let out_end = merge(begin(a), begin(a), begin(b), end(b), begin(out), lt);
    assert_eq!(out_end.index(), 4, "Merging with an empty range should be a copy.");
}

#[test]
fn test_merge_stability() {
    let mut a = [(1, 'a'), (2, 'a'), (2, 'a')];
    let mut b = [(1, 'b'), (2, 'b'), (3, 'b')];
    let mut out = [(0, ' '); 6];
    let a = cells(&mut a);
    let b = cells(&mut b);
    let out = cells(&mut out);

    merge(begin(a), end(a), begin(b), end(b), begin(out), |x, y| x.0 < y.0);
    assert_eq!(
        contents(out),
        [(1, 'a'), (1, 'b'), (2, 'a'), (2, 'a'), (2, 'b'), (3, 'b')],
        "Ties should be taken from the first range first."
    );
}

#[test]
fn test_inplace_merge() {
    let mut values = [1, 2, 2, 3, 1, 3, 3, 4];
    let store = cells(&mut values);
    inplace_merge(begin(store), at(store, 4), end(store), lt);
    assert_eq!(contents(store), [1, 1, 2, 2, 3, 3, 3, 4]);

    inplace_merge(begin(store), begin(store), end(store), lt);
    inplace_merge(begin(store), end(store), end(store), lt);
    assert_eq!(contents(store), [1, 1, 2, 2, 3, 3, 3, 4]);

    let mut pairs = [(2, 0), (2, 1), (5, 2), (1, 3), (2, 4), (2, 5), (6, 6)];
    let store = cells(&mut pairs);
    inplace_merge(begin(store), at(store, 3), end(store), |x, y| x.0 < y.0);
    assert_eq!(
        contents(store),
        [(1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (5, 2), (6, 6)],
        "inplace_merge should be stable."
    );

    let mut rng = XorShift(0x5eed_cafe);
    for split in [1, 13, 64, 120] {
        let mut values: Vec<i32> = (0..128).map(|_| rng.below(40) as i32).collect();
        values[..split].sort();
        values[split..].sort();
        let mut expected = values.clone();
        expected.sort();

        let store = cells(&mut values);
        inplace_merge(begin(store), at(store, split), end(store), lt);
        assert_eq!(contents(store), expected, "Uneven halves should merge ({split}).");
    }
}

#[test]
fn test_includes() {
    let mut values = [1, 2, 2, 3];
    let store = cells(&mut values);
    let mut subset = [2, 3];
    let subset = cells(&mut subset);
    let mut too_many = [2, 2, 2];
    let too_many = cells(&mut too_many);
    let mut missing = [4];
    let missing = cells(&mut missing);

    assert!(includes(begin(store), end(store), begin(subset), end(subset), lt));
    assert!(
        !includes(begin(store), end(store), begin(too_many), end(too_many), lt),
        "includes should respect multiplicities."
    );
    assert!(!includes(begin(store), end(store), begin(missing), end(missing), lt));
    assert!(includes(begin(store), end(store), begin(missing), begin(missing), lt));
    assert!(!includes(begin(store), begin(store), begin(subset), end(subset), lt));
}

#[test]
fn test_set_operations() {
    let mut a = [1, 2, 2, 3];
    let mut b = [1, 3, 3, 4];
    let mut out = [0; 8];
    let a = cells(&mut a);
    let b = cells(&mut b);
    let out = cells(&mut out);

    let out_end = set_union(begin(a), end(a), begin(b), end(b), begin(out), lt);
    assert_eq!(out_end.index(), 6);
    assert_eq!(contents(out), [1, 2, 2, 3, 3, 4, 0, 0]);

    fill(begin(out), end(out), 0);
    let out_end = set_intersection(begin(a), end(a), begin(b), end(b), begin(out), lt);
    assert_eq!(out_end.index(), 2);
    assert_eq!(contents(out)[..2], [1, 3]);

    fill(begin(out), end(out), 0);
    let out_end = set_difference(begin(a), end(a), begin(b), end(b), begin(out), lt);
    assert_eq!(out_end.index(), 2);
    assert_eq!(contents(out)[..2], [2, 2]);

    fill(begin(out), end(out), 0);
    let out_end = set_symmetric_difference(begin(a), end(a), begin(b), end(b), begin(out), lt);
    assert_eq!(out_end.index(), 4);
    assert_eq!(contents(out)[..4], [2, 2, 3, 4]);

    let out_end = set_intersection(begin(a), end(a), begin(b), begin(b), begin(out), lt);
    assert_eq!(out_end, begin(out), "Intersecting with nothing should write nothing.");
    let out_end = set_difference(begin(a), end(a), begin(b), begin(b), begin(out), lt);
    assert_eq!(out_end.index(), 4);
    assert_eq!(contents(out)[..4], [1, 2, 2, 3]);
}
