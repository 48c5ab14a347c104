//! String-layer error types.

use std::error::Error;
use std::fmt;

use darray_core::AllocError;

/// Errors from building a string out of format arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringError {
    /// The string could not grow to hold the formatted text.
    Allocation(AllocError),
    /// A formatting trait implementation returned an error.
    Format,
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(err) => write!(f, "string allocation failed: {err}"),
            Self::Format => write!(f, "formatting failed"),
        }
    }
}

impl Error for StringError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            Self::Format => None,
        }
    }
}

impl From<AllocError> for StringError {
    fn from(err: AllocError) -> Self {
        Self::Allocation(err)
    }
}
