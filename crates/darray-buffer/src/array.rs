//! The growable buffer.
//!
//! A [`DArray`] owns a contiguous run of `Copy` elements plus the metadata
//! the growth policy needs: a logical capacity and the allocator it grows
//! through. Capacity is chosen exclusively by
//! [`grow_capacity`](darray_core::grow_capacity) (or exactly, for the
//! `_exact` operations), never by the standard library's own growth.
//!
//! # Ownership
//!
//! Operations that may reallocate (`resize`, `resize_exact`, `reserve`,
//! `push`, `insert`, `insert_range`, `concat`) take `self` by value and
//! return the buffer on success. On failure they return a
//! [`GrowError`] holding the buffer exactly as it was before the call.
//! Operations that never reallocate (`pop`, `remove`, `remove_range`,
//! `swap`, `fill`) take `&mut self`.
//!
//! # Invariants
//!
//! `len() <= capacity()` at all times, and the backing storage can hold
//! `capacity()` elements, so pushes and inserts within capacity never
//! allocate.

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

use darray_core::growth::{grow_capacity, required_length};
use darray_core::{AllocError, Allocator, GrowError, Heap};
use tracing::{debug, trace};

use crate::control::ControlBlock;
use crate::iter::Iter;

/// A growable buffer of `Copy` elements.
///
/// Dereferences to `[T]`, so it can be indexed and sliced like an array.
pub struct DArray<T, A: Allocator = Heap> {
    /// Live elements. `data.len()` is the buffer length.
    data: Vec<T>,
    /// Logical capacity, as last granted by the allocator.
    capacity: usize,
    alloc: A,
}

impl<T: Copy> DArray<T> {
    /// Allocate a buffer of `count` elements on the heap.
    ///
    /// Capacity follows the growth policy. Elements hold `T::default()`
    /// until the caller writes them.
    ///
    /// ```
    /// # use darray_buffer::DArray;
    /// let buffer = DArray::<u64>::allocate(12)?;
    /// assert_eq!(buffer.len(), 12);
    /// assert_eq!(buffer.capacity(), 15);
    /// # Ok::<(), darray_core::AllocError>(())
    /// ```
    pub fn allocate(count: usize) -> Result<Self, AllocError>
    where
        T: Default,
    {
        Self::allocate_in(count, Heap)
    }

    /// Allocate a buffer of `count` elements with capacity exactly `count`.
    pub fn allocate_exact(count: usize) -> Result<Self, AllocError>
    where
        T: Default,
    {
        Self::allocate_exact_in(count, Heap)
    }

    /// Copy `items` into a new buffer whose capacity is exactly
    /// `items.len()`.
    pub fn from_slice(items: &[T]) -> Result<Self, AllocError> {
        Self::from_slice_in(items, Heap)
    }
}

impl<T: Copy, A: Allocator> DArray<T, A> {
    /// Allocate a buffer of `count` elements through `alloc`.
    ///
    /// See [`DArray::allocate`].
    pub fn allocate_in(count: usize, alloc: A) -> Result<Self, AllocError>
    where
        T: Default,
    {
        Self::filled_in(count, grow_capacity(count), alloc)
    }

    /// Allocate a buffer of `count` elements with capacity exactly `count`
    /// through `alloc`.
    pub fn allocate_exact_in(count: usize, alloc: A) -> Result<Self, AllocError>
    where
        T: Default,
    {
        Self::filled_in(count, count, alloc)
    }

    /// Copy `items` into a new exact-fit buffer allocated through `alloc`.
    pub fn from_slice_in(items: &[T], alloc: A) -> Result<Self, AllocError> {
        let mut array = Self::unallocated(alloc);
        array.reallocate(items.len())?;
        array.data.extend_from_slice(items);
        Ok(array)
    }

    fn filled_in(count: usize, capacity: usize, alloc: A) -> Result<Self, AllocError>
    where
        T: Default,
    {
        let mut array = Self::unallocated(alloc);
        array.reallocate(capacity)?;
        array.data.resize(count, T::default());
        Ok(array)
    }

    fn unallocated(alloc: A) -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            alloc,
        }
    }

    /// Free the buffer and its data region.
    ///
    /// Equivalent to dropping it; spelled out for call sites that want the
    /// end of a buffer's lifetime to be explicit.
    pub fn release(self) {
        drop(self);
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the buffer holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size in bytes of one element.
    #[inline]
    pub fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Snapshot of the buffer's metadata.
    pub fn control(&self) -> ControlBlock {
        ControlBlock {
            element_size: self.element_size(),
            length: self.len(),
            capacity: self.capacity,
        }
    }

    /// The allocator this buffer grows through.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// The live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Forward iterator over the live elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.data)
    }

    /// Copy the buffer into a new one with the same capacity, allocated
    /// through a clone of this buffer's allocator.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = Self::unallocated(self.alloc.clone());
        copy.reallocate(self.capacity)?;
        copy.data.extend_from_slice(&self.data);
        Ok(copy)
    }

    /// Change the length to `new_count`, setting capacity to
    /// `grow_capacity(new_count)`.
    ///
    /// Always reallocates, so shrinking also shrinks capacity (never below
    /// [`MIN_CAPACITY`](darray_core::MIN_CAPACITY)). Elements below
    /// `new_count` are kept; added elements hold `T::default()`.
    pub fn resize(self, new_count: usize) -> Result<Self, GrowError<Self>>
    where
        T: Default,
    {
        self.consume(|array| array.resize_to(new_count, grow_capacity(new_count)))
    }

    /// Change the length and capacity to exactly `new_count`.
    pub fn resize_exact(self, new_count: usize) -> Result<Self, GrowError<Self>>
    where
        T: Default,
    {
        self.consume(|array| array.resize_to(new_count, new_count))
    }

    /// Ensure at least `extra` more elements fit without reallocating.
    ///
    /// Does nothing when the capacity already suffices; otherwise grows to
    /// `grow_capacity(len + extra)`. Never changes the length.
    pub fn reserve(self, extra: usize) -> Result<Self, GrowError<Self>> {
        self.consume(|array| array.reserve_for(extra))
    }

    /// Append `value`.
    ///
    /// A full buffer first reserves room for one more element, which
    /// applies the growth policy. Amortized O(1).
    pub fn push(self, value: T) -> Result<Self, GrowError<Self>> {
        self.consume(|array| {
            if array.len() == array.capacity {
                array.reserve_for(1)?;
            }
            array.data.push(value);
            Ok(())
        })
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Insert `value` at `index`, shifting later elements back by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(self, index: usize, value: T) -> Result<Self, GrowError<Self>> {
        self.assert_insert_index(index);
        self.consume(|array| {
            array.reserve_for(1)?;
            array.data.insert(index, value);
            Ok(())
        })
    }

    /// Insert a copy of `items` at `index`, shifting later elements back by
    /// `items.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_range(self, index: usize, items: &[T]) -> Result<Self, GrowError<Self>> {
        self.assert_insert_index(index);
        self.consume(|array| {
            array.reserve_for(items.len())?;
            array.data.extend_from_slice(items);
            array.data[index..].rotate_right(items.len());
            Ok(())
        })
    }

    /// Remove and return the element at `index`, shifting later elements
    /// forward by one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len();
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        self.data.remove(index)
    }

    /// Remove the `count` elements starting at `index`, shifting later
    /// elements forward.
    ///
    /// # Panics
    ///
    /// Panics if `index + count > len()`.
    pub fn remove_range(&mut self, index: usize, count: usize) {
        let len = self.len();
        assert!(
            index <= len && count <= len - index,
            "removal range {index}+{count} out of bounds for len {len}"
        );
        self.data.drain(index..index + count);
    }

    /// Exchange the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Append a copy of `items`.
    ///
    /// Capacity is recomputed as for [`resize`](Self::resize) to the new
    /// length.
    pub fn concat(self, items: &[T]) -> Result<Self, GrowError<Self>> {
        self.consume(|array| {
            let new_len = required_length(array.len(), items.len())?;
            array.reallocate(grow_capacity(new_len))?;
            array.data.extend_from_slice(items);
            Ok(())
        })
    }

    /// Overwrite every live element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Run `op` on the buffer, handing the buffer back inside the error if
    /// it fails. `op` must not modify the buffer before its last fallible
    /// step.
    #[inline]
    fn consume(
        mut self,
        op: impl FnOnce(&mut Self) -> Result<(), AllocError>,
    ) -> Result<Self, GrowError<Self>> {
        match op(&mut self) {
            Ok(()) => Ok(self),
            Err(error) => Err(GrowError::new(self, error)),
        }
    }

    fn assert_insert_index(&self, index: usize) {
        let len = self.len();
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
    }

    fn resize_to(&mut self, new_count: usize, capacity: usize) -> Result<(), AllocError>
    where
        T: Default,
    {
        self.reallocate(capacity)?;
        self.data.resize(new_count, T::default());
        Ok(())
    }

    fn reserve_for(&mut self, extra: usize) -> Result<(), AllocError> {
        let required = required_length(self.len(), extra)?;
        if self.capacity >= required {
            return Ok(());
        }
        self.reallocate(grow_capacity(required))
    }

    /// Set the logical capacity to `capacity` through the allocator.
    ///
    /// Shrinking below `len()` drops the elements past `capacity`, only
    /// once the allocator has granted the request.
    fn reallocate(&mut self, capacity: usize) -> Result<(), AllocError> {
        trace!(
            element_size = self.element_size(),
            old_capacity = self.capacity,
            new_capacity = capacity,
            "reallocating buffer"
        );
        let result = if capacity < self.capacity {
            let keep = self.len().min(capacity);
            self.alloc.shrink(&mut self.data, keep, self.capacity, capacity)
        } else {
            self.alloc.grow(&mut self.data, self.capacity, capacity)
        };
        if let Err(error) = result {
            debug!(%error, length = self.len(), "buffer reallocation failed");
            return Err(error);
        }
        self.capacity = capacity;
        Ok(())
    }
}

impl<T, A: Allocator> Drop for DArray<T, A> {
    fn drop(&mut self) {
        let block = mem::take(&mut self.data);
        self.alloc.release(block, self.capacity);
    }
}

impl<T, A: Allocator> Deref for DArray<T, A> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T, A: Allocator> DerefMut for DArray<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, A: Allocator> AsRef<[T]> for DArray<T, A> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, A: Allocator> AsMut<[T]> for DArray<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T: Copy, A: Allocator> IntoIterator for &'a DArray<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for DArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<DArray<T, B>> for DArray<T, A> {
    fn eq(&self, other: &DArray<T, B>) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, A: Allocator> Eq for DArray<T, A> {}

impl<T: PartialEq, A: Allocator> PartialEq<[T]> for DArray<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.data == other
    }
}

impl<T: PartialEq, A: Allocator, const N: usize> PartialEq<[T; N]> for DArray<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use darray_core::{Budget, MIN_CAPACITY};

    fn counting(n: i32) -> DArray<i32> {
        let values: Vec<i32> = (0..n).collect();
        DArray::from_slice(&values).unwrap()
    }

    #[test]
    fn allocate_applies_growth_policy() {
        let small = DArray::<i32>::allocate(3).unwrap();
        assert_eq!(small.len(), 3);
        assert_eq!(small.capacity(), MIN_CAPACITY);

        let large = DArray::<i32>::allocate(100).unwrap();
        assert_eq!(large.len(), 100);
        assert_eq!(large.capacity(), 130);
    }

    #[test]
    fn allocate_exact_has_no_padding() {
        let buffer = DArray::<u16>::allocate_exact(7).unwrap();
        assert_eq!(buffer.len(), 7);
        assert_eq!(buffer.capacity(), 7);
    }

    #[test]
    fn allocated_elements_are_writable() {
        let mut buffer = DArray::<usize>::allocate(10).unwrap();
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = i;
        }
        assert_eq!(buffer[9], 9);
    }

    #[test]
    fn element_size_and_control_block() {
        let ints = DArray::<i32>::allocate(10).unwrap();
        let floats = DArray::<f64>::allocate(2).unwrap();
        assert_eq!(ints.element_size(), 4);
        assert_eq!(floats.element_size(), 8);
        assert_eq!(
            ints.control(),
            ControlBlock {
                element_size: 4,
                length: 10,
                capacity: 13,
            }
        );
    }

    #[test]
    fn resize_preserves_prefix() {
        let buffer = counting(10).resize(100).unwrap();
        assert_eq!(buffer.len(), 100);
        assert_eq!(buffer.capacity(), 130);
        assert_eq!(&buffer[..10], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(buffer[10..].iter().all(|&v| v == 0));
    }

    #[test]
    fn resize_shrink_snaps_capacity_back() {
        let buffer = counting(100).resize(4).unwrap();
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.capacity(), MIN_CAPACITY);
        assert_eq!(buffer, [0, 1, 2, 3]);
    }

    #[test]
    fn shrinking_resize_frees_storage() {
        let values: Vec<i32> = (0..1000).collect();
        let buffer = DArray::from_slice(&values).unwrap().resize(4).unwrap();
        assert_eq!(buffer.capacity(), MIN_CAPACITY);
        assert!(buffer.data.capacity() < 1000);
        assert_eq!(buffer, [0, 1, 2, 3]);

        let buffer = DArray::from_slice(&[1u8; 4096]).unwrap().resize_exact(1).unwrap();
        assert_eq!(buffer.capacity(), 1);
        assert!(buffer.data.capacity() < 4096);
        assert_eq!(buffer, [1]);
    }

    #[test]
    fn shrinking_resize_returns_bytes_to_budget() {
        let budget = Budget::new(8192);
        let buffer = DArray::from_slice_in(&[7u8; 4096], budget.clone()).unwrap();
        assert_eq!(budget.in_use(), 4096);
        let buffer = buffer.resize_exact(1).unwrap();
        assert_eq!(budget.in_use(), 1);
        assert!(buffer.data.capacity() < 4096);
        let buffer = buffer.resize(20).unwrap();
        assert_eq!(budget.in_use(), 26);
        assert_eq!(buffer.len(), 20);
    }

    #[test]
    fn resize_exact_sets_capacity() {
        let buffer = counting(5).resize_exact(3).unwrap();
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer, [0, 1, 2]);
    }

    #[test]
    fn reserve_is_noop_when_satisfied() {
        let buffer = DArray::<i32>::allocate(2).unwrap().reserve(8).unwrap();
        assert_eq!(buffer.capacity(), 10);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn reserve_grows_by_policy() {
        let buffer = DArray::<i32>::allocate(10).unwrap().reserve(5).unwrap();
        assert_eq!(buffer.len(), 10);
        assert_eq!(buffer.capacity(), 19);
    }

    #[test]
    fn push_grows_full_buffer() {
        let buffer = DArray::<i32>::allocate_exact(0).unwrap();
        assert_eq!(buffer.capacity(), 0);
        let buffer = buffer.push(7).unwrap();
        assert_eq!(buffer.capacity(), MIN_CAPACITY);
        assert_eq!(buffer, [7]);
    }

    #[test]
    fn push_then_pop_restores_length() {
        let mut buffer = counting(4).push(42).unwrap();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.pop(), Some(42));
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut buffer = DArray::<i32>::allocate(0).unwrap();
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn insert_shifts_tail() {
        let buffer = counting(4).insert(1, 99).unwrap();
        assert_eq!(buffer, [0, 99, 1, 2, 3]);
        let buffer = buffer.insert(5, 100).unwrap();
        assert_eq!(buffer, [0, 99, 1, 2, 3, 100]);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn insert_past_end_panics() {
        let _ = counting(2).insert(3, 1);
    }

    #[test]
    fn insert_range_in_middle_and_ends() {
        let buffer = counting(4).insert_range(2, &[7, 8, 9]).unwrap();
        assert_eq!(buffer, [0, 1, 7, 8, 9, 2, 3]);
        let buffer = buffer.insert_range(0, &[5]).unwrap();
        assert_eq!(buffer, [5, 0, 1, 7, 8, 9, 2, 3]);
        let buffer = buffer.insert_range(8, &[6, 6]).unwrap();
        assert_eq!(buffer, [5, 0, 1, 7, 8, 9, 2, 3, 6, 6]);
        let buffer = buffer.insert_range(3, &[]).unwrap();
        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn insert_range_grows_to_needed_amount() {
        let buffer = counting(9).insert_range(0, &[1, 2, 3, 4]).unwrap();
        assert_eq!(buffer.len(), 13);
        assert_eq!(buffer.capacity(), 16);
    }

    #[test]
    fn remove_closes_gap() {
        let mut buffer = counting(5);
        assert_eq!(buffer.remove(0), 0);
        assert_eq!(buffer.remove(3), 4);
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn remove_range_closes_gap() {
        let mut buffer = counting(6);
        buffer.remove_range(1, 3);
        assert_eq!(buffer, [0, 4, 5]);
        buffer.remove_range(3, 0);
        assert_eq!(buffer, [0, 4, 5]);
        buffer.remove_range(0, 3);
        assert!(buffer.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn remove_range_past_end_panics() {
        let mut buffer = counting(3);
        buffer.remove_range(2, 2);
    }

    #[test]
    fn remove_never_reallocates() {
        let mut buffer = counting(50);
        let capacity = buffer.capacity();
        buffer.remove_range(0, 40);
        buffer.remove(0);
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn swap_exchanges_elements() {
        let mut buffer = counting(3);
        buffer.swap(0, 2);
        assert_eq!(buffer, [2, 1, 0]);
        buffer.swap(1, 1);
        assert_eq!(buffer, [2, 1, 0]);
    }

    #[test]
    fn concat_appends_copy() {
        let source = [10, 11, 12];
        let buffer = counting(2).concat(&source).unwrap();
        assert_eq!(buffer, [0, 1, 10, 11, 12]);
        assert_eq!(buffer.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn concat_from_another_buffer() {
        let other = counting(3);
        let buffer = counting(10).concat(&other).unwrap();
        assert_eq!(buffer.len(), 13);
        assert_eq!(&buffer[10..], &[0, 1, 2]);
        assert_eq!(buffer.capacity(), 16);
    }

    #[test]
    fn fill_overwrites_live_elements_only() {
        let mut buffer = counting(4);
        let capacity = buffer.capacity();
        buffer.fill(-1);
        assert_eq!(buffer, [-1, -1, -1, -1]);
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn iteration_is_restartable() {
        let buffer = counting(4);
        let first: Vec<i32> = buffer.iter().copied().collect();
        let second: Vec<i32> = (&buffer).into_iter().copied().collect();
        assert_eq!(first, vec![0, 1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn try_clone_is_independent() {
        let original = counting(3);
        let mut copy = original.try_clone().unwrap();
        copy[0] = 100;
        assert_eq!(original, [0, 1, 2]);
        assert_eq!(copy, [100, 1, 2]);
        assert_eq!(copy.capacity(), original.capacity());
    }

    #[test]
    fn debug_lists_elements() {
        assert_eq!(format!("{:?}", counting(3)), "[0, 1, 2]");
    }

    #[test]
    fn zero_sized_elements() {
        let buffer = DArray::<()>::allocate(3).unwrap().push(()).unwrap();
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.element_size(), 0);
    }

    #[test]
    fn release_returns_bytes_to_budget() {
        let budget = Budget::new(1024);
        let buffer = DArray::<u32, _>::allocate_in(5, budget.clone()).unwrap();
        assert_eq!(budget.in_use(), 40);
        buffer.release();
        assert_eq!(budget.in_use(), 0);
    }

    #[test]
    fn failed_push_returns_buffer_unchanged() {
        let budget = Budget::new(40);
        let buffer = DArray::<u32, _>::allocate_exact_in(10, budget.clone()).unwrap();
        let err = buffer.push(1).unwrap_err();
        assert!(matches!(err.error(), AllocError::AllocationFailure { .. }));
        let buffer = err.into_buffer();
        assert_eq!(buffer.len(), 10);
        assert_eq!(buffer.capacity(), 10);
        assert_eq!(budget.in_use(), 40);
    }

    #[test]
    fn allocation_over_budget_fails() {
        let budget = Budget::new(8);
        let err = DArray::<u8, _>::allocate_in(0, budget.clone()).unwrap_err();
        assert_eq!(
            err,
            AllocError::AllocationFailure {
                requested_bytes: 10
            }
        );
        assert_eq!(budget.in_use(), 0);
    }

    #[test]
    fn resize_overflow_reports_capacity_overflow() {
        let err = counting(1).resize(usize::MAX / 2).unwrap_err();
        assert!(matches!(err.error(), AllocError::CapacityOverflow { .. }));
        assert_eq!(err.into_buffer(), [0]);
    }

    #[test]
    fn end_to_end_push_and_remove() {
        let buffer = DArray::<i32>::allocate(0).unwrap();
        let mut buffer = buffer.push(1).unwrap().push(2).unwrap().push(3).unwrap();
        assert_eq!(buffer.len(), 3);
        assert!(buffer.capacity() >= MIN_CAPACITY);
        assert_eq!(buffer.remove(1), 2);
        assert_eq!(buffer, [1, 3]);
        assert_eq!(buffer.len(), 2);
    }
}
