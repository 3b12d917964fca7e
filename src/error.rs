use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Error type for the fallible sort entry points.
///
/// Sorting itself is total, the only thing that can go wrong is not getting a sequence at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The sequence to sort is absent, e.g. `None` or a null pointer.
    InvalidArgument(&'static str),
}

impl SortError {
    /// Status code reported across the C ABI, see [`crate::ffi::lomuto_quicksort_i32`].
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => -1,
        }
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
        }
    }
}

impl Error for SortError {}
