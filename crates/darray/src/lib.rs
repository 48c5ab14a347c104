//! darray: growable buffers and null-terminated strings.
//!
//! This is the facade crate that re-exports the public API of the darray
//! sub-crates. For most users, adding `darray` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use darray::prelude::*;
//!
//! // Buffers grow by 1.3x, never below ten elements.
//! let numbers = DArray::<i32>::allocate(0)?;
//! let mut numbers = numbers.push(1)?.push(2)?.push(3)?;
//! assert_eq!(numbers.capacity(), MIN_CAPACITY);
//! assert_eq!(numbers.remove(1), 2);
//! assert_eq!(numbers, [1, 3]);
//!
//! // Strings keep a trailing 0x00 behind their visible bytes.
//! let greeting = DString::from_bytes(b"hello")?.concat_bytes(b" world")?;
//! assert_eq!(greeting.len(), 11);
//! assert_eq!(greeting.as_bytes_with_nul()[11], 0);
//!
//! // A byte budget caps every buffer built from the same allocator.
//! let alloc = AllocConfig::with_max_bytes(64).build()?;
//! let small = DArray::<u8, _>::allocate_in(16, alloc.clone())?;
//! assert!(DArray::<u8, _>::allocate_in(64, alloc).is_err());
//! drop(small);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `darray-core` | Growth policy, allocators, configuration, errors |
//! | [`buffer`] | `darray-buffer` | `DArray`, its control block and iterator |
//! | [`string`] | `darray-string` | `DString`, substring search, `dformat!` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growth policy, allocators, configuration, and errors (`darray-core`).
///
/// [`types::grow_capacity`] is the capacity formula every buffer follows;
/// [`types::Heap`] and [`types::Budget`] are the provided allocators.
pub use darray_core as types;

/// The growable buffer (`darray-buffer`).
///
/// [`buffer::DArray`] is also available in the [`prelude`].
pub use darray_buffer as buffer;

/// Null-terminated strings (`darray-string`).
///
/// Includes [`string::DString`] and the substring [`string::search`]
/// helpers.
pub use darray_string as string;

pub use darray_string::dformat;

/// Common imports for typical darray usage.
///
/// ```rust
/// use darray::prelude::*;
///
/// let s = DString::from_bytes(b"Mixed")?;
/// let mut s = s.replace_all(b"x", b"ck")?;
/// s.to_lowercase();
/// assert_eq!(s, "micked");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod prelude {
    // Core
    pub use darray_core::{
        grow_capacity, AllocConfig, AllocError, Allocator, Budget, ConfigError,
        ConfiguredAllocator, GrowError, Heap, GROWTH_FACTOR, MIN_CAPACITY,
    };

    // Buffer
    pub use darray_buffer::DArray;

    // String
    pub use darray_string::{DString, StringError};
}
