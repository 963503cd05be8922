use std::error::Error;

/// Turns a checked store access back into the unchecked, panicking form used by the algorithm
/// suite.
pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`], or panics with the [`Display`](std::fmt::Display) message of the error
    /// itself, reported at the caller's location.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
