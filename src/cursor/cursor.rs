use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ptr;

use super::Store;
use crate::util::error::{CursorError, IndexOutOfBounds, InvertedRange, StoreMismatch};
use crate::util::result::ResultExtension;

/// A position within a [`Store`]: a shared reference to the store and an index into it.
///
/// Cursors are plain values. They are [`Copy`], own nothing and can be created, moved and compared
/// freely; any number of them may address the same store. A cursor is dereferenceable when
/// `0 <= index < len`. The one-past-the-end position (`index == len`) may be held and compared, but
/// reading or writing through it panics.
///
/// Two cursors are equal when they refer to the very same store (by address, not by content) and
/// hold the same index.
///
/// Moving a cursor never checks bounds. Only [`get`](Cursor::get), [`set`](Cursor::set) and
/// [`swap_with`](Cursor::swap_with) touch the store.
pub struct Cursor<'a, S: Store + ?Sized> {
    pub(crate) store: &'a S,
    pub(crate) index: usize,
}

/// Creates a cursor at the first element of `store`.
pub const fn begin<S: Store + ?Sized>(store: &S) -> Cursor<'_, S> {
    Cursor { store, index: 0 }
}

/// Creates a cursor one past the last element of `store`.
pub fn end<S: Store + ?Sized>(store: &S) -> Cursor<'_, S> {
    Cursor { store, index: store.len() }
}

/// Creates a cursor at `index` within `store`. It is up to the caller to ensure that
/// `index <= store.len()` before the cursor is dereferenced.
pub const fn at<S: Store + ?Sized>(store: &S, index: usize) -> Cursor<'_, S> {
    Cursor { store, index }
}

/// Returns `last.index() - first.index()`. The cursors are assumed to address the same store, see
/// [`Cursor::try_distance`] for a checked version.
pub const fn distance<S: Store + ?Sized>(first: Cursor<'_, S>, last: Cursor<'_, S>) -> isize {
    last.index.wrapping_sub(first.index) as isize
}

/// Returns the length of the range `[first, last)` after checking that it is well formed. This is
/// the only place where a range is validated; the algorithms themselves trust their input.
///
/// # Errors
/// - [`CursorError::StoreMismatch`] if the cursors address different stores.
/// - [`CursorError::IndexOutOfBounds`] if `last` lies past the end of the store.
/// - [`CursorError::InvertedRange`] if `first` lies after `last`.
pub fn range_len<S: Store + ?Sized>(first: Cursor<'_, S>, last: Cursor<'_, S>) -> Result<usize, CursorError> {
    first.try_distance(last)?;
    let len = last.store.len();
    if last.index > len {
        return Err(IndexOutOfBounds { index: last.index, len }.into());
    }
    if first.index > last.index {
        return Err(InvertedRange { first: first.index, last: last.index }.into());
    }
    Ok(span(first, last))
}

/// The unsigned length of the range `[first, last)`. A malformed range (`first` after `last`) wraps
/// to a huge length and faults on the first out of bounds access.
pub(crate) const fn span<S: Store + ?Sized>(first: Cursor<'_, S>, last: Cursor<'_, S>) -> usize {
    last.index.wrapping_sub(first.index)
}

impl<'a, S: Store + ?Sized> Cursor<'a, S> {
    /// Returns the store this cursor addresses.
    pub const fn store(&self) -> &'a S {
        self.store
    }

    /// Returns the index of this cursor within its store.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns a cursor offset by `delta` elements. No bounds checking is performed; an offset that
    /// leaves the store produces a cursor which panics when dereferenced.
    #[must_use]
    pub const fn advance(self, delta: isize) -> Cursor<'a, S> {
        Cursor {
            store: self.store,
            index: self.index.wrapping_add_signed(delta),
        }
    }

    /// Returns a cursor `count` elements further into the store. Like [`advance`](Cursor::advance)
    /// this is unchecked.
    #[must_use]
    pub const fn forward(self, count: usize) -> Cursor<'a, S> {
        Cursor {
            store: self.store,
            index: self.index.wrapping_add(count),
        }
    }

    /// Returns a cursor `count` elements back towards the start of the store. Unchecked.
    #[must_use]
    pub const fn back(self, count: usize) -> Cursor<'a, S> {
        Cursor {
            store: self.store,
            index: self.index.wrapping_sub(count),
        }
    }

    /// Returns a cursor one element further into the store.
    #[must_use]
    pub const fn next(self) -> Cursor<'a, S> {
        self.advance(1)
    }

    /// Returns a cursor one element back towards the start of the store.
    #[must_use]
    pub const fn prev(self) -> Cursor<'a, S> {
        self.advance(-1)
    }

    /// Returns the signed number of elements from `self` to `other`, the same as
    /// [`distance(self, other)`](distance).
    pub const fn distance_to(self, other: Cursor<'_, S>) -> isize {
        distance(self, other)
    }

    /// Returns the signed number of elements from `self` to `other`.
    ///
    /// # Errors
    /// Returns [`StoreMismatch`] if the cursors don't address the same store.
    pub fn try_distance(self, other: Cursor<'_, S>) -> Result<isize, StoreMismatch> {
        if ptr::eq(self.store, other.store) {
            Ok(distance(self, other))
        } else {
            Err(StoreMismatch)
        }
    }

    /// Returns a copy of the element under this cursor.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the cursor isn't dereferenceable.
    pub fn try_get(&self) -> Result<S::Item, IndexOutOfBounds> {
        self.store.read(self.index).ok_or(IndexOutOfBounds {
            index: self.index,
            len: self.store.len(),
        })
    }

    /// Returns a copy of the element under this cursor.
    ///
    /// # Panics
    /// Panics if the cursor isn't dereferenceable.
    #[track_caller]
    pub fn get(&self) -> S::Item {
        self.try_get().throw()
    }

    /// Overwrites the element under this cursor.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the cursor isn't dereferenceable.
    pub fn try_set(&self, value: S::Item) -> Result<(), IndexOutOfBounds> {
        self.store.write(self.index, value)
    }

    /// Overwrites the element under this cursor.
    ///
    /// # Panics
    /// Panics if the cursor isn't dereferenceable.
    #[track_caller]
    pub fn set(&self, value: S::Item) {
        self.try_set(value).throw()
    }

    /// Swaps the element under this cursor with the one under `other`, which may address a
    /// different store with the same item type.
    ///
    /// # Panics
    /// Panics if either cursor isn't dereferenceable.
    #[track_caller]
    pub fn swap_with<S2>(&self, other: Cursor<'_, S2>)
    where
        S2: Store<Item = S::Item> + ?Sized,
    {
        let ours = self.get();
        let theirs = other.get();
        self.set(theirs);
        other.set(ours);
    }
}

impl<S: Store + ?Sized> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Store + ?Sized> Copy for Cursor<'_, S> {}

impl<S: Store + ?Sized> PartialEq for Cursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.store, other.store) && self.index == other.index
    }
}

impl<S: Store + ?Sized> Eq for Cursor<'_, S> {}

impl<S: Store + ?Sized> Hash for Cursor<'_, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.store, state);
        self.index.hash(state);
    }
}

impl<S: Store + ?Sized> Debug for Cursor<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("store", &(self.store as *const S as *const ()))
            .field("index", &self.index)
            .finish()
    }
}
