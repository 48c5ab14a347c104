//! Error types for buffer allocation and allocator configuration.

use std::error::Error;
use std::fmt;

/// Errors reported when an allocator cannot satisfy a request.
///
/// Every variant is an allocation failure: the request was rejected and the
/// memory block involved is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The allocator could not provide a block of the requested size.
    AllocationFailure {
        /// Size of the block that was requested, in bytes.
        requested_bytes: usize,
    },
    /// The requested element count does not fit in addressable memory.
    CapacityOverflow {
        /// Number of elements that was requested.
        requested_elements: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure { requested_bytes } => {
                write!(f, "allocation failure: could not allocate {requested_bytes} bytes")
            }
            Self::CapacityOverflow { requested_elements } => {
                write!(
                    f,
                    "allocation failure: {requested_elements} elements exceed addressable memory"
                )
            }
        }
    }
}

impl Error for AllocError {}

/// Failure of an operation that consumed a buffer in order to grow it.
///
/// Carries the buffer back to the caller exactly as it was before the call,
/// together with the allocation error that stopped the operation.
#[must_use = "the buffer is returned inside the error and is dropped if ignored"]
pub struct GrowError<B> {
    buffer: B,
    error: AllocError,
}

impl<B> GrowError<B> {
    /// Wrap a returned buffer and the error that caused the failure.
    pub fn new(buffer: B, error: AllocError) -> Self {
        Self { buffer, error }
    }

    /// The allocation error.
    pub fn error(&self) -> AllocError {
        self.error
    }

    /// Borrow the returned buffer.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Take back the buffer, discarding the error.
    pub fn into_buffer(self) -> B {
        self.buffer
    }

    /// Split into the returned buffer and the error.
    pub fn into_parts(self) -> (B, AllocError) {
        (self.buffer, self.error)
    }

    /// Convert the carried buffer, keeping the error.
    pub fn map_buffer<C>(self, f: impl FnOnce(B) -> C) -> GrowError<C> {
        GrowError {
            buffer: f(self.buffer),
            error: self.error,
        }
    }
}

impl<B> fmt::Debug for GrowError<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<B> fmt::Display for GrowError<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<B> Error for GrowError<B> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl<B> From<GrowError<B>> for AllocError {
    fn from(err: GrowError<B>) -> Self {
        err.error
    }
}

/// Errors from validating an [`AllocConfig`](crate::config::AllocConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A byte budget of zero cannot hold any buffer.
    ZeroBudget,
    /// An environment variable held a value that is not a byte count.
    InvalidEnv {
        /// Name of the variable.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBudget => write!(f, "allocation budget must be greater than zero"),
            Self::InvalidEnv { var, value } => {
                write!(f, "invalid value for {var}: '{value}' is not a byte count")
            }
        }
    }
}

impl Error for ConfigError {}
