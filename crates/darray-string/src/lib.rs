//! Null-terminated growable byte strings.
//!
//! A [`DString`] is a [`DArray<u8>`](darray_buffer::DArray) that always ends
//! in a `0x00` terminator, so its storage can be handed to code expecting
//! classic null-terminated text. The terminator is not part of the visible
//! bytes: a `DString` holding `"abc"` has length 3 and a buffer of 4 bytes.
//!
//! Every mutation goes through the buffer's own primitives (`resize`,
//! `insert_range`, `remove_range`), and every operation that may grow the
//! string consumes it and hands it back, as buffers do.
//!
//! ```
//! use darray_string::DString;
//!
//! let s = DString::from_bytes(b"hello")?;
//! let s = s.concat_bytes(b", world")?;
//! assert_eq!(s.find(b"world"), Some(7));
//!
//! let mut s = s.replace_all(b"l", b"L")?;
//! s.to_uppercase();
//! assert_eq!(s, "HELLO, WORLD");
//! assert_eq!(s.as_bytes_with_nul().last(), Some(&0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Byte-slice arguments are read up to their first `0x00`, the way
//! null-terminated text is read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod format;
pub mod search;
pub mod string;

pub use error::StringError;
pub use string::DString;

/// Build a [`DString`] from format arguments, like `format!`.
///
/// Expands to [`DString::from_format`], returning
/// `Result<DString, StringError>`.
///
/// ```
/// let s = darray_string::dformat!("{}-{:03}", "id", 7)?;
/// assert_eq!(s, "id-007");
/// # Ok::<(), darray_string::StringError>(())
/// ```
#[macro_export]
macro_rules! dformat {
    ($($arg:tt)*) => {
        $crate::DString::from_format(::std::format_args!($($arg)*))
    };
}
