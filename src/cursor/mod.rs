//! The [`Cursor`] value type, the [`Store`] capability it addresses and the range primitives used
//! to create and move cursors.
//!
//! A range is never materialized. It is simply a pair of cursors `(first, last)` over the same
//! store, with `first.index() <= last.index()`, denoting the half-open interval `[first, last)`.
#![warn(missing_docs)]

mod cursor;
mod store;

pub use cursor::*;
pub use store::*;
