//! Substring search over byte strings.
//!
//! Both searches return the offset of the first occurrence of `needle` in
//! `haystack`, or `None`. An empty needle matches at offset 0.

/// Offset of the first occurrence of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    memchr::memmem::find(haystack, needle)
}

/// Offset of the first occurrence of `needle` in `haystack`, comparing
/// ASCII letters without regard to case.
pub fn find_case_insensitive(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
