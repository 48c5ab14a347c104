//! The allocator collaborator that buffers reallocate through.
//!
//! A buffer never allocates on its own: every change of capacity goes
//! through [`Allocator::grow`] or [`Allocator::shrink`], and the storage is
//! handed back with [`Allocator::release`] when the buffer is freed. Two allocators are
//! provided:
//!
//! - [`Heap`]: the global allocator, reporting failure instead of aborting.
//! - [`Budget`]: the global allocator behind a byte ceiling shared by every
//!   buffer created from clones of the same budget.

use std::cell::Cell;
use std::mem;
use std::rc::Rc;

use tracing::debug;

use crate::error::AllocError;
use crate::growth::checked_bytes;

/// Source of storage for buffers.
///
/// Implementations must be side-effect free on failure: when `grow` or
/// `shrink` returns an error, `block` is exactly as it was before the call
/// (same elements, same capacity).
pub trait Allocator: Clone {
    /// Make `block` able to hold `new_capacity` elements.
    ///
    /// `old_capacity` is the capacity the caller previously obtained for
    /// this block (0 for a fresh block), and `new_capacity >= old_capacity`.
    /// On success `block.capacity() >= new_capacity`; elements are kept.
    fn grow<T>(
        &self,
        block: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError>;

    /// Cut `block` down to its first `new_len` elements and release storage
    /// beyond `new_capacity`.
    ///
    /// Requires `new_capacity < old_capacity`, `new_len <= block.len()` and
    /// `new_len <= new_capacity`. Elements are only dropped once the request
    /// is granted.
    fn shrink<T>(
        &self,
        block: &mut Vec<T>,
        new_len: usize,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError>;

    /// Free a block whose capacity was last set to `capacity` by
    /// [`grow`](Allocator::grow).
    fn release<T>(&self, block: Vec<T>, capacity: usize);
}

/// The global allocator with fallible growth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Heap;

impl Allocator for Heap {
    fn grow<T>(
        &self,
        block: &mut Vec<T>,
        _old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        let requested_bytes = checked_bytes(new_capacity, mem::size_of::<T>())?;
        if new_capacity > block.capacity() {
            block
                .try_reserve_exact(new_capacity - block.len())
                .map_err(|_| AllocError::AllocationFailure { requested_bytes })?;
        }
        Ok(())
    }

    fn shrink<T>(
        &self,
        block: &mut Vec<T>,
        new_len: usize,
        _old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        block.truncate(new_len);
        block.shrink_to(new_capacity);
        Ok(())
    }

    fn release<T>(&self, block: Vec<T>, _capacity: usize) {
        drop(block);
    }
}

#[derive(Debug)]
struct BudgetState {
    limit: usize,
    in_use: Cell<usize>,
}

/// A byte ceiling over the global allocator.
///
/// Clones share one account, so a budget can cap the total footprint of
/// many buffers. Accounting is by logical capacity (`capacity *
/// element_size`), which is what a buffer asks for. A budget is not `Send`:
/// buffers drawing on the same account belong to one thread.
#[derive(Clone, Debug)]
pub struct Budget {
    state: Rc<BudgetState>,
}

impl Budget {
    /// Create a budget allowing at most `limit` bytes to be held at once.
    pub fn new(limit: usize) -> Self {
        Self {
            state: Rc::new(BudgetState {
                limit,
                in_use: Cell::new(0),
            }),
        }
    }

    /// Byte ceiling of this budget.
    pub fn limit(&self) -> usize {
        self.state.limit
    }

    /// Bytes currently held by buffers drawing on this budget.
    pub fn in_use(&self) -> usize {
        self.state.in_use.get()
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.state.limit.saturating_sub(self.in_use())
    }
}

impl Allocator for Budget {
    fn grow<T>(
        &self,
        block: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        let element_size = mem::size_of::<T>();
        let old_bytes = old_capacity.saturating_mul(element_size);
        let new_bytes = checked_bytes(new_capacity, element_size)?;
        let in_use = self.in_use().saturating_sub(old_bytes);
        let next = in_use
            .checked_add(new_bytes)
            .filter(|&next| new_bytes <= old_bytes || next <= self.state.limit)
            .ok_or_else(|| {
                debug!(
                    requested_bytes = new_bytes,
                    in_use = self.in_use(),
                    limit = self.state.limit,
                    "allocation budget exceeded"
                );
                AllocError::AllocationFailure {
                    requested_bytes: new_bytes,
                }
            })?;
        Heap.grow(block, old_capacity, new_capacity)?;
        self.state.in_use.set(next);
        Ok(())
    }

    fn shrink<T>(
        &self,
        block: &mut Vec<T>,
        new_len: usize,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        let element_size = mem::size_of::<T>();
        let old_bytes = old_capacity.saturating_mul(element_size);
        let new_bytes = checked_bytes(new_capacity, element_size)?;
        Heap.shrink(block, new_len, old_capacity, new_capacity)?;
        let in_use = self.in_use().saturating_sub(old_bytes);
        self.state.in_use.set(in_use.saturating_add(new_bytes));
        Ok(())
    }

    fn release<T>(&self, block: Vec<T>, capacity: usize) {
        let bytes = capacity.saturating_mul(mem::size_of::<T>());
        self.state
            .in_use
            .set(self.in_use().saturating_sub(bytes));
        drop(block);
    }
}
