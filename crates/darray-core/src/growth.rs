//! Capacity growth policy.
//!
//! Every buffer picks its capacity for a required length with
//! [`grow_capacity`]: small buffers snap to [`MIN_CAPACITY`], larger ones get
//! [`GROWTH_FACTOR`] times the required length, rounded down. Callers can
//! observe capacities directly, so both constants are part of the public
//! contract.

use crate::error::AllocError;

/// Smallest capacity ever chosen by [`grow_capacity`].
pub const MIN_CAPACITY: usize = 10;

/// Multiplier applied to the required length once it reaches [`MIN_CAPACITY`].
///
/// [`grow_capacity`] evaluates `floor(n * GROWTH_FACTOR)` with integer
/// arithmetic; this constant documents the factor.
pub const GROWTH_FACTOR: f64 = 1.3;

/// Capacity chosen for a buffer that must hold `length` elements.
///
/// Returns `MIN_CAPACITY` when `length < MIN_CAPACITY`, otherwise
/// `floor(length * 1.3)`. Saturates at `usize::MAX`; such a capacity is
/// rejected later by [`checked_bytes`].
///
/// ```
/// use darray_core::grow_capacity;
/// assert_eq!(grow_capacity(0), 10);
/// assert_eq!(grow_capacity(10), 13);
/// assert_eq!(grow_capacity(101), 131);
/// ```
pub const fn grow_capacity(length: usize) -> usize {
    if length < MIN_CAPACITY {
        return MIN_CAPACITY;
    }
    // floor(13n / 10) with n = 10q + r is n + 3q + floor(3r / 10).
    let q = length / 10;
    let r = length % 10;
    length.saturating_add(q.saturating_mul(3)).saturating_add(r * 3 / 10)
}

/// Length after appending `extra` elements to `length`, or a capacity
/// overflow when the sum is not representable.
pub fn required_length(length: usize, extra: usize) -> Result<usize, AllocError> {
    length
        .checked_add(extra)
        .ok_or(AllocError::CapacityOverflow {
            requested_elements: usize::MAX,
        })
}

/// Size in bytes of a data region of `count` elements of `element_size`
/// bytes each.
///
/// Fails with [`AllocError::CapacityOverflow`] when the size exceeds
/// `isize::MAX`, the largest block the global allocator can describe.
pub fn checked_bytes(count: usize, element_size: usize) -> Result<usize, AllocError> {
    count
        .checked_mul(element_size)
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or(AllocError::CapacityOverflow {
            requested_elements: count,
        })
}
