//! The null-terminated string.
//!
//! # Invariant
//!
//! The underlying buffer is never empty and its last byte is `0x00`:
//! `buffer.len() == len() + 1` and `buffer[len()] == 0`. Every operation,
//! including every failure path, leaves the invariant intact.

use std::fmt;
use std::str::FromStr;

use darray_buffer::DArray;
use darray_core::{AllocError, Allocator, GrowError, Heap};
use tracing::trace;

use crate::search;

/// The terminator byte.
const NUL: u8 = 0;

type Finder = fn(&[u8], &[u8]) -> Option<usize>;

/// A growable byte string with a trailing `0x00` terminator.
pub struct DString<A: Allocator = Heap> {
    buffer: DArray<u8, A>,
}

/// `bytes` up to (not including) the first `0x00`.
fn until_nul(bytes: &[u8]) -> &[u8] {
    match memchr::memchr(NUL, bytes) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Whitespace as classified by the C locale.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Byte-wise comparison of null-terminated text, stopping at the first
/// difference or the shared terminator.
fn compare_terminated(a: &[u8], b: &[u8], fold: fn(u8) -> u8) -> i32 {
    let mut i = 0;
    loop {
        let x = fold(a.get(i).copied().unwrap_or(NUL));
        let y = fold(b.get(i).copied().unwrap_or(NUL));
        if x != y || x == NUL {
            return i32::from(x) - i32::from(y);
        }
        i += 1;
    }
}

/// Number of non-overlapping occurrences of `pattern`, scanning left to
/// right. `pattern` must not be empty.
fn count_matches(mut haystack: &[u8], pattern: &[u8], finder: Finder) -> usize {
    let mut count = 0;
    while let Some(offset) = finder(haystack, pattern) {
        count += 1;
        haystack = &haystack[offset + pattern.len()..];
    }
    count
}

impl DString {
    /// The empty string.
    pub fn new() -> Result<Self, AllocError> {
        Self::from_empty_in(Heap)
    }

    /// The empty string. Same as [`new`](Self::new).
    pub fn from_empty() -> Result<Self, AllocError> {
        Self::from_empty_in(Heap)
    }

    /// Copy `source` (up to its first `0x00`) into a new string.
    ///
    /// ```
    /// # use darray_string::DString;
    /// let s = DString::from_bytes(b"abc")?;
    /// assert_eq!(s.len(), 3);
    /// assert_eq!(s.as_bytes_with_nul(), b"abc\0");
    /// # Ok::<(), darray_core::AllocError>(())
    /// ```
    pub fn from_bytes(source: &[u8]) -> Result<Self, AllocError> {
        Self::from_bytes_in(source, Heap)
    }
}

impl<A: Allocator> DString<A> {
    /// The empty string, allocated through `alloc`.
    pub fn from_empty_in(alloc: A) -> Result<Self, AllocError> {
        Self::from_bytes_in(&[], alloc)
    }

    /// Copy `source` (up to its first `0x00`) into a new string allocated
    /// through `alloc`.
    pub fn from_bytes_in(source: &[u8], alloc: A) -> Result<Self, AllocError> {
        let text = until_nul(source);
        let mut buffer = DArray::allocate_in(text.len() + 1, alloc)?;
        buffer[..text.len()].copy_from_slice(text);
        buffer[text.len()] = NUL;
        Ok(Self { buffer })
    }

    /// Copy another string, terminator included, in one block copy.
    ///
    /// The copy is allocated through a clone of `source`'s allocator, with
    /// capacity chosen by the growth policy.
    pub fn from_string(source: &DString<A>) -> Result<Self, AllocError> {
        let bytes = source.as_bytes_with_nul();
        let mut buffer = DArray::allocate_in(bytes.len(), source.allocator().clone())?;
        buffer.copy_from_slice(bytes);
        Ok(Self { buffer })
    }

    fn wrap(buffer: DArray<u8, A>) -> Self {
        debug_assert_eq!(buffer.last(), Some(&NUL));
        Self { buffer }
    }

    /// Free the string.
    pub fn release(self) {
        self.buffer.release();
    }

    /// Number of visible bytes (the terminator excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len() - 1
    }

    /// Whether there are no visible bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity of the underlying buffer in bytes, terminator included.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The allocator the string grows through.
    pub fn allocator(&self) -> &A {
        self.buffer.allocator()
    }

    /// The visible bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len()]
    }

    /// The visible bytes followed by the terminator.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buffer
    }

    /// The visible bytes, mutably. The terminator is out of reach.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.buffer[..len]
    }

    /// Give up the string, keeping its buffer (terminator included).
    pub fn into_inner(self) -> DArray<u8, A> {
        self.buffer
    }

    /// Copy the string, keeping its capacity.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        Ok(Self {
            buffer: self.buffer.try_clone()?,
        })
    }

    /// Append `source` (up to its first `0x00`).
    ///
    /// On failure the string comes back unchanged inside the error.
    pub fn concat_bytes(self, source: &[u8]) -> Result<Self, GrowError<Self>> {
        self.append(until_nul(source))
    }

    /// Append the visible bytes of another string.
    pub fn concat_string<B: Allocator>(self, source: &DString<B>) -> Result<Self, GrowError<Self>> {
        self.append(source.as_bytes())
    }

    /// Append `source` verbatim and re-terminate.
    pub(crate) fn append(self, source: &[u8]) -> Result<Self, GrowError<Self>> {
        let dest_len = self.len();
        let new_len = dest_len + source.len();
        let mut buffer = self
            .buffer
            .resize(new_len + 1)
            .map_err(|err| err.map_buffer(Self::wrap))?;
        buffer[dest_len..new_len].copy_from_slice(source);
        buffer[new_len] = NUL;
        Ok(Self::wrap(buffer))
    }

    /// Compare with null-terminated text `other`.
    ///
    /// Returns the difference of the first differing bytes (negative when
    /// `self` sorts first), or 0 when both are equal up to their
    /// terminators.
    ///
    /// ```
    /// # use darray_string::DString;
    /// let s = DString::from_bytes(b"abc")?;
    /// assert_eq!(s.compare(b"abc"), 0);
    /// assert!(s.compare(b"abd") < 0);
    /// assert!(s.compare(b"ab") > 0);
    /// # Ok::<(), darray_core::AllocError>(())
    /// ```
    pub fn compare(&self, other: &[u8]) -> i32 {
        compare_terminated(self.as_bytes_with_nul(), until_nul(other), |b| b)
    }

    /// Compare like [`compare`](Self::compare), folding ASCII letters to
    /// lowercase first. The result is the difference of the folded bytes.
    pub fn compare_case_insensitive(&self, other: &[u8]) -> i32 {
        compare_terminated(
            self.as_bytes_with_nul(),
            until_nul(other),
            |b| b.to_ascii_lowercase(),
        )
    }

    /// Offset of the first occurrence of `pattern` in the visible bytes.
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        search::find(self.as_bytes(), until_nul(pattern))
    }

    /// Offset of the first ASCII case-insensitive occurrence of `pattern`.
    pub fn find_case_insensitive(&self, pattern: &[u8]) -> Option<usize> {
        search::find_case_insensitive(self.as_bytes(), until_nul(pattern))
    }

    /// Replace every occurrence of `pattern` with `replacement`.
    ///
    /// Occurrences are replaced leftmost first. After each replacement the
    /// search resumes after the inserted text, so a replacement containing
    /// the pattern is never rescanned. An empty pattern replaces nothing.
    ///
    /// The operation is atomic: the growth needed for the result is
    /// reserved before the first edit, and on failure the string comes
    /// back exactly as it was.
    ///
    /// ```
    /// # use darray_string::DString;
    /// let s = DString::from_bytes(b"aaa")?.replace_all(b"a", b"bb")?;
    /// assert_eq!(s, "bbbbbb");
    /// let s = s.replace_all(b"b", b"ab")?;
    /// assert_eq!(s, "abababababab");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn replace_all(self, pattern: &[u8], replacement: &[u8]) -> Result<Self, GrowError<Self>> {
        self.replace_with(until_nul(pattern), until_nul(replacement), search::find)
    }

    /// Replace every ASCII case-insensitive occurrence of `pattern` with
    /// `replacement`. Same policy as [`replace_all`](Self::replace_all).
    pub fn replace_all_case_insensitive(
        self,
        pattern: &[u8],
        replacement: &[u8],
    ) -> Result<Self, GrowError<Self>> {
        self.replace_with(
            until_nul(pattern),
            until_nul(replacement),
            search::find_case_insensitive,
        )
    }

    fn replace_with(
        self,
        pattern: &[u8],
        replacement: &[u8],
        finder: Finder,
    ) -> Result<Self, GrowError<Self>> {
        if pattern.is_empty() {
            return Ok(self);
        }
        let matches = count_matches(self.as_bytes(), pattern, finder);
        if matches == 0 {
            return Ok(self);
        }
        trace!(
            matches,
            pattern_len = pattern.len(),
            replacement_len = replacement.len(),
            "replacing matches"
        );

        let mut buffer = self.buffer;
        if replacement.len() > pattern.len() {
            let growth = match (replacement.len() - pattern.len()).checked_mul(matches) {
                Some(growth) => growth,
                None => {
                    let error = AllocError::CapacityOverflow {
                        requested_elements: usize::MAX,
                    };
                    return Err(GrowError::new(Self::wrap(buffer), error));
                }
            };
            buffer = buffer
                .reserve(growth)
                .map_err(|err| err.map_buffer(Self::wrap))?;
        }

        let mut start = 0;
        for _ in 0..matches {
            let visible = buffer.len() - 1;
            let Some(offset) = finder(&buffer[start..visible], pattern) else {
                break;
            };
            let at = start + offset;
            buffer.remove_range(at, pattern.len());
            // Capacity for the final length is already reserved, so this
            // insert never reallocates.
            buffer = buffer
                .insert_range(at, replacement)
                .map_err(|err| err.map_buffer(Self::wrap))?;
            start = at + replacement.len();
        }
        Ok(Self::wrap(buffer))
    }

    /// Fold every visible ASCII uppercase letter to lowercase, in place.
    pub fn to_lowercase(&mut self) {
        self.as_mut_bytes().make_ascii_lowercase();
    }

    /// Fold every visible ASCII lowercase letter to uppercase, in place.
    pub fn to_uppercase(&mut self) {
        self.as_mut_bytes().make_ascii_uppercase();
    }

    /// Remove leading and trailing whitespace. Never reallocates.
    pub fn trim(&mut self) {
        let bytes = self.as_bytes();
        let end = bytes
            .iter()
            .rposition(|&b| !is_space(b))
            .map_or(0, |last| last + 1);
        let start = bytes[..end]
            .iter()
            .position(|&b| !is_space(b))
            .unwrap_or(end);
        let len = self.len();
        self.buffer.remove_range(end, len - end);
        self.buffer.remove_range(0, start);
    }
}

impl FromStr for DString {
    type Err = AllocError;

    fn from_str(s: &str) -> Result<Self, AllocError> {
        Self::from_bytes(s.as_bytes())
    }
}

impl<A: Allocator> AsRef<[u8]> for DString<A> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<A: Allocator> fmt::Debug for DString<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl<A: Allocator> fmt::Display for DString<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<A: Allocator, B: Allocator> PartialEq<DString<B>> for DString<A> {
    fn eq(&self, other: &DString<B>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Allocator> Eq for DString<A> {}

impl<A: Allocator> PartialEq<[u8]> for DString<A> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<A: Allocator> PartialEq<str> for DString<A> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<A: Allocator> PartialEq<&str> for DString<A> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
