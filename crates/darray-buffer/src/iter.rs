//! Forward iteration over a buffer.

use std::iter::FusedIterator;
use std::slice;

/// Forward iterator over the elements of a [`DArray`](crate::DArray).
///
/// Bounds are fixed when the iterator is created: it yields the elements at
/// indices `0..len` as of that moment. The borrow it holds keeps the buffer
/// from being mutated while iteration is in progress. Calling
/// [`DArray::iter`](crate::DArray::iter) again starts a fresh pass.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter(),
        }
    }

    /// Elements not yet yielded.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
