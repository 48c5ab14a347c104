//! Growable contiguous buffers.
//!
//! [`DArray`] holds `Copy` elements in one contiguous region and grows by
//! the policy in [`darray_core::growth`]. Every operation that may
//! reallocate consumes the buffer and returns it, so no reference into the
//! old storage can outlive a reallocation. On failure the untouched buffer
//! comes back inside a [`GrowError`](darray_core::GrowError):
//!
//! ```
//! use darray_buffer::DArray;
//!
//! let buffer = DArray::<i32>::allocate(0)?;
//! let buffer = buffer.push(1)?.push(2)?.push(3)?;
//! assert_eq!(buffer.len(), 3);
//! assert_eq!(buffer.capacity(), 10);
//!
//! let mut buffer = buffer;
//! assert_eq!(buffer.remove(1), 2);
//! assert_eq!(buffer.as_slice(), &[1, 3]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod control;
pub mod iter;

pub use array::DArray;
pub use control::ControlBlock;
pub use iter::Iter;
