//! Core types shared by the darray workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! growth policy every buffer follows, the [`Allocator`] collaborator that
//! buffers reallocate through, allocator configuration, and the error types
//! reported when an allocation cannot be satisfied.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod config;
pub mod error;
pub mod growth;

pub use alloc::{Allocator, Budget, Heap};
pub use config::{AllocConfig, ConfiguredAllocator};
pub use error::{AllocError, ConfigError, GrowError};
pub use growth::{grow_capacity, GROWTH_FACTOR, MIN_CAPACITY};
