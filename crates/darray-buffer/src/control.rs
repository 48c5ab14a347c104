//! Buffer metadata.

/// Snapshot of a buffer's metadata.
///
/// Obtained in O(1) from [`DArray::control`](crate::DArray::control). The
/// values describe the buffer at the time of the call; any later mutation
/// of the buffer may change them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlBlock {
    /// Size in bytes of one element. Fixed for the buffer's lifetime.
    pub element_size: usize,
    /// Number of live elements.
    pub length: usize,
    /// Number of elements the data region holds without reallocation.
    pub capacity: usize,
}

impl ControlBlock {
    /// Size of the data region in bytes (`capacity * element_size`).
    pub fn data_bytes(&self) -> usize {
        self.capacity * self.element_size
    }

    /// Elements that can be added before the next reallocation.
    pub fn spare(&self) -> usize {
        self.capacity - self.length
    }
}
