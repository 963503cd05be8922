#![cfg(test)]

use std::cell::Cell;

mod merge;
mod modify;
mod partition;
mod permutation;

/// Snapshots a cell store so that it can be compared while cursors still borrow it.
fn contents<T: Copy>(store: &[Cell<T>]) -> Vec<T> {
    store.iter().map(Cell::get).collect()
}

fn lt(a: &i32, b: &i32) -> bool {
    a < b
}

fn gt(a: &i32, b: &i32) -> bool {
    a > b
}

fn eq(a: &i32, b: &i32) -> bool {
    a == b
}

fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

/// A deterministic xorshift source for shuffles and generated input.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}
