//! Test utilities for darray development.
//!
//! Provides allocator fixtures ([`FailingAllocator`], [`CountingAllocator`])
//! for exercising failure paths and reallocation counts of buffers and
//! strings without exhausting real memory.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingAllocator, FailingAllocator};
