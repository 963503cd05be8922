//! Supporting types shared between the cursor, buffer and algorithm modules. Only [`error`] is
//! public, everything else is internal plumbing.
#![warn(missing_docs)]

pub mod error;
pub(crate) mod panic;
pub(crate) mod result;
