//! Construction from format arguments.

use std::fmt::{self, Write};

use darray_core::{AllocError, Allocator, Heap};

use crate::error::StringError;
use crate::string::DString;

/// `fmt::Write` target appending to a string it owns.
///
/// A refused allocation is parked in `error` and the string is dropped, so
/// the formatting machinery only ever sees `fmt::Error`. Output after the
/// first `0x00` is discarded.
struct FormatSink<A: Allocator> {
    string: Option<DString<A>>,
    error: Option<AllocError>,
    terminated: bool,
}

impl<A: Allocator> Write for FormatSink<A> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.terminated {
            return Ok(());
        }
        let bytes = match memchr::memchr(0, s.as_bytes()) {
            Some(end) => {
                self.terminated = true;
                &s.as_bytes()[..end]
            }
            None => s.as_bytes(),
        };
        let string = self.string.take().ok_or(fmt::Error)?;
        match string.append(bytes) {
            Ok(string) => {
                self.string = Some(string);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.error());
                Err(fmt::Error)
            }
        }
    }
}

impl DString {
    /// Build a string from format arguments; see [`dformat!`](crate::dformat).
    ///
    /// Like [`from_bytes`](DString::from_bytes), the string ends at the
    /// first `0x00` of the formatted text.
    pub fn from_format(args: fmt::Arguments<'_>) -> Result<Self, StringError> {
        Self::from_format_in(args, Heap)
    }
}

impl<A: Allocator> DString<A> {
    /// Build a string from format arguments, allocated through `alloc`.
    pub fn from_format_in(args: fmt::Arguments<'_>, alloc: A) -> Result<Self, StringError> {
        let mut sink = FormatSink {
            string: Some(Self::from_empty_in(alloc)?),
            error: None,
            terminated: false,
        };
        let written = sink.write_fmt(args);
        if let Some(err) = sink.error {
            return Err(StringError::Allocation(err));
        }
        match (written, sink.string) {
            (Ok(()), Some(string)) => Ok(string),
            _ => Err(StringError::Format),
        }
    }
}
