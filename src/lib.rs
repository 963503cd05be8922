//! This crate is a set of generic algorithms in the style of C++'s `<iterator>` and `<algorithm>`,
//! operating on half-open ranges described by pairs of value-type cursors.
//!
//! # Purpose
//! A [`Cursor`](cursor::Cursor) is nothing more than a reference to a store and an index. Cursors
//! are [`Copy`], never own anything and never allocate, so every algorithm here runs without
//! touching the allocator. That makes them usable in hot loops (think per-frame game code) where an
//! allocation, or a boxed iterator adaptor, is not acceptable.
//!
//! # Method
//! The algorithms are written exactly once against the [`Store`](cursor::Store) capability: a
//! fixed-length, randomly indexable sequence that can be written through a shared reference. Plain
//! arrays and slices (of [`Cell`](std::cell::Cell)s), [`Vec`]s and
//! [`VecDeque`](std::collections::VecDeque)s of cells and the interop [`Buffer`](buffer::Buffer)
//! all implement it, and every algorithm is monomorphized per back-end.
//!
//! Writing through `&self` is what allows several cursors to address the same store at once, which
//! is the whole point of the cursor model: `copy_backward` within one array, `transform` in place,
//! `inplace_merge` and so on.
//!
//! Elements are required to be [`Copy`]. Algorithms move elements by bitwise copy, so there is no
//! way for a user-provided `Clone` implementation to allocate (or observe a half-mutated store).
//!
//! # Error Handling
//! Most of this crate can't fail in a way that is worth reporting. Following the C++ model, the
//! caller promises that ranges are well formed and that sorted-input preconditions hold. Breaking
//! the first promise leads to an out of bounds access, which panics with an
//! [`IndexOutOfBounds`](util::error::IndexOutOfBounds) message. Breaking the second promise produces
//! unspecified (but memory safe) output.
//!
//! Where an operation can sensibly be asked to fail instead, a `try_` variant returns a strongly
//! typed [`Result`] instead.
//!
//! # Dependencies
//! This crate depends on `derive_more` for the repetitive parts of its error types, and nothing
//! else.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithm;
#[cfg(feature = "buffer")]
pub mod buffer;
pub mod cursor;

pub mod util;
