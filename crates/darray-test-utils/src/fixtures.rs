//! Reusable allocator fixtures.
//!
//! - [`FailingAllocator`]: grants a fixed number of requests, then fails.
//! - [`CountingAllocator`]: grants everything and counts the calls.
//!
//! Clones share their counters, so a test can keep a handle on the fixture
//! after moving a clone into a buffer.

use std::cell::Cell;
use std::rc::Rc;

use darray_core::growth::checked_bytes;
use darray_core::{AllocError, Allocator, Heap};

/// Fails deterministically after a configurable number of successful
/// `grow` calls.
///
/// Useful for checking that an operation leaves its input untouched when
/// an allocation in the middle of it is refused.
#[derive(Clone, Debug)]
pub struct FailingAllocator {
    succeed_count: Rc<Cell<usize>>,
    calls: Rc<Cell<usize>>,
}

impl FailingAllocator {
    /// Create an allocator that grants `succeed_count` requests then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count: Rc::new(Cell::new(succeed_count)),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// How many times `grow()` has been called, including refused calls.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Grant `count` more requests, counting from now.
    pub fn allow(&self, count: usize) {
        self.succeed_count.set(self.calls.get() + count);
    }

    /// Refuse every request from now on.
    pub fn fail_from_now(&self) {
        self.allow(0);
    }

    /// Count one request and decide whether it is granted.
    fn admit<T>(&self, new_capacity: usize) -> Result<(), AllocError> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n >= self.succeed_count.get() {
            let requested_bytes = checked_bytes(new_capacity, std::mem::size_of::<T>())?;
            return Err(AllocError::AllocationFailure { requested_bytes });
        }
        Ok(())
    }
}

impl Allocator for FailingAllocator {
    fn grow<T>(
        &self,
        block: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        self.admit::<T>(new_capacity)?;
        Heap.grow(block, old_capacity, new_capacity)
    }

    fn shrink<T>(
        &self,
        block: &mut Vec<T>,
        new_len: usize,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        self.admit::<T>(new_capacity)?;
        Heap.shrink(block, new_len, old_capacity, new_capacity)
    }

    fn release<T>(&self, block: Vec<T>, capacity: usize) {
        Heap.release(block, capacity);
    }
}

/// Grants every request and records how many reallocations and releases
/// happened.
#[derive(Clone, Debug, Default)]
pub struct CountingAllocator {
    grows: Rc<Cell<usize>>,
    shrinks: Rc<Cell<usize>>,
    releases: Rc<Cell<usize>>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `grow()` calls so far.
    pub fn grows(&self) -> usize {
        self.grows.get()
    }

    /// Number of `shrink()` calls so far.
    pub fn shrinks(&self) -> usize {
        self.shrinks.get()
    }

    /// Number of `release()` calls so far.
    pub fn releases(&self) -> usize {
        self.releases.get()
    }

    /// Reset all counters.
    pub fn reset(&self) {
        self.grows.set(0);
        self.shrinks.set(0);
        self.releases.set(0);
    }
}

impl Allocator for CountingAllocator {
    fn grow<T>(
        &self,
        block: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        self.grows.set(self.grows.get() + 1);
        Heap.grow(block, old_capacity, new_capacity)
    }

    fn shrink<T>(
        &self,
        block: &mut Vec<T>,
        new_len: usize,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        self.shrinks.set(self.shrinks.get() + 1);
        Heap.shrink(block, new_len, old_capacity, new_capacity)
    }

    fn release<T>(&self, block: Vec<T>, capacity: usize) {
        self.releases.set(self.releases.get() + 1);
        Heap.release(block, capacity);
    }
}
