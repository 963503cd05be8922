use std::cell::Cell;
use std::collections::VecDeque;

use crate::util::error::IndexOutOfBounds;

/// The capability every back-end provides to the algorithm suite: a fixed-length, randomly
/// indexable sequence that can be written through a shared reference.
///
/// Writing through `&self` is what lets any number of [`Cursor`](super::Cursor)s address the same
/// store at once. The store is expected to be used from a single thread for the duration of an
/// algorithm; none of the provided implementations are [`Sync`].
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `read` | `O(1)` |
/// | `write` | `O(1)` |
/// | `swap` | `O(1)` |
pub trait Store {
    /// The element type. Elements are moved by bitwise copy.
    type Item: Copy;

    /// Returns the number of elements in the store. This must not change while a cursor over the
    /// store is alive.
    fn len(&self) -> usize;

    /// Returns true if the store has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`, or [`None`] if `index` is out of bounds.
    fn read(&self, index: usize) -> Option<Self::Item>;

    /// Overwrites the element at `index` with `value`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= self.len()`, leaving the store untouched.
    fn write(&self, index: usize, value: Self::Item) -> Result<(), IndexOutOfBounds>;

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] for the first index that is out of bounds, leaving the store
    /// untouched.
    fn swap(&self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        let first = self.read(a).ok_or(IndexOutOfBounds { index: a, len })?;
        let second = self.read(b).ok_or(IndexOutOfBounds { index: b, len })?;
        self.write(a, second)?;
        self.write(b, first)
    }
}

/// Views a mutable slice as a slice of [`Cell`]s, the form in which plain arrays are used as a
/// [`Store`]. The returned slice borrows `slice` mutably for its whole lifetime.
///
/// # Examples
/// ```
/// # use cursor_algorithm::cursor::{self, cells};
/// let mut values = [3, 1, 2];
/// let store = cells(&mut values);
/// cursor::begin(store).set(7);
/// assert_eq!(values, [7, 1, 2]);
/// ```
pub fn cells<T>(slice: &mut [T]) -> &[Cell<T>] {
    Cell::from_mut(slice).as_slice_of_cells()
}

impl<T: Copy> Store for [Cell<T>] {
    type Item = T;

    fn len(&self) -> usize {
        <[Cell<T>]>::len(self)
    }

    fn read(&self, index: usize) -> Option<T> {
        self.get(index).map(Cell::get)
    }

    fn write(&self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        match self.get(index) {
            Some(cell) => {
                cell.set(value);
                Ok(())
            },
            None => Err(IndexOutOfBounds { index, len: <[Cell<T>]>::len(self) }),
        }
    }

    fn swap(&self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        let len = <[Cell<T>]>::len(self);
        let first = self.get(a).ok_or(IndexOutOfBounds { index: a, len })?;
        let second = self.get(b).ok_or(IndexOutOfBounds { index: b, len })?;
        first.swap(second);
        Ok(())
    }
}

impl<T: Copy, const N: usize> Store for [Cell<T>; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn read(&self, index: usize) -> Option<T> {
        self.as_slice().read(index)
    }

    fn write(&self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        self.as_slice().write(index, value)
    }

    fn swap(&self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        Store::swap(self.as_slice(), a, b)
    }
}

impl<T: Copy> Store for Vec<Cell<T>> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn read(&self, index: usize) -> Option<T> {
        self.as_slice().read(index)
    }

    fn write(&self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        self.as_slice().write(index, value)
    }

    fn swap(&self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        Store::swap(self.as_slice(), a, b)
    }
}

// VecDeque isn't contiguous, so it goes through its own indexing rather than a slice.
impl<T: Copy> Store for VecDeque<Cell<T>> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn read(&self, index: usize) -> Option<T> {
        self.get(index).map(Cell::get)
    }

    fn write(&self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        match self.get(index) {
            Some(cell) => {
                cell.set(value);
                Ok(())
            },
            None => Err(IndexOutOfBounds { index, len: VecDeque::len(self) }),
        }
    }
}
