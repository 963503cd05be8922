//! Error types produced by fallible cursor and buffer operations.
//!
//! Most algorithms never return these. They surface as panic messages (via
//! [`ResultExtension::throw`](super::result::ResultExtension::throw)) when a caller breaks a range
//! contract, or as the `Err` side of the `try_` methods on [`Cursor`](crate::cursor::Cursor).

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A store was indexed outside of `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the store at the time of the access.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for store with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Two cursors which were expected to address the same store address different ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreMismatch;

impl Display for StoreMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursors refer to different stores!")
    }
}

impl Error for StoreMismatch {}

/// A range whose first cursor lies after its last cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertedRange {
    /// The index of the first cursor.
    pub first: usize,
    /// The index of the last cursor.
    pub last: usize,
}

impl Display for InvertedRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Range starts at {} but ends at {}!", self.first, self.last)
    }
}

impl Error for InvertedRange {}

/// The memory layout of a requested allocation would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Any error that can be produced while validating a range, see
/// [`range_len`](crate::cursor::range_len).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CursorError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`StoreMismatch`].
    StoreMismatch(StoreMismatch),
    /// See [`InvertedRange`].
    InvertedRange(InvertedRange),
}
