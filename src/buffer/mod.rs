//! A module containing [`Buffer`], the interop back-end for the algorithm suite.
//!
//! [`Buffer`] mirrors the kind of fixed-length native container that game engines share with the
//! GPU: one raw allocation, a stable base pointer and element access by index. It implements
//! [`Store`](crate::cursor::Store) directly, so it needs no [`Cell`](std::cell::Cell) wrapping.

mod buffer;

pub use buffer::*;
