//! Deterministic inputs for the darray benchmarks.
//!
//! Every generator takes a seed and drives a [`ChaCha8Rng`], so two runs of
//! the same benchmark operate on identical data:
//!
//! - [`random_values`]: element payloads
//! - [`insertion_indices`] / [`removal_indices`]: valid positions for a
//!   buffer that grows or shrinks by one element per step
//! - [`swap_pairs`]: index pairs within a fixed-length buffer
//! - [`word_corpus`]: space-separated lowercase words for string benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed shared by all benchmarks.
pub const SEED: u64 = 0x5EED_DA44;

/// Sizes for operations that are linear in the element count.
pub const LINEAR_SIZES: [usize; 3] = [100, 100_000, 1_000_000];

/// Sizes for operations that shift the whole buffer on every step.
pub const QUADRATIC_SIZES: [usize; 2] = [100, 10_000];

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `count` random `i32` values.
pub fn random_values(count: usize, seed: u64) -> Vec<i32> {
    let mut rng = rng(seed);
    (0..count).map(|_| rng.gen()).collect()
}

/// Positions for `count` inserts into a buffer that starts empty: the
/// `i`-th index lies in `0..=i`.
pub fn insertion_indices(count: usize, seed: u64) -> Vec<usize> {
    let mut rng = rng(seed);
    (0..count).map(|len| rng.gen_range(0..=len)).collect()
}

/// Positions for `count` removals from a buffer of `count` elements: the
/// `i`-th index lies in `0..count - i`.
pub fn removal_indices(count: usize, seed: u64) -> Vec<usize> {
    let mut rng = rng(seed);
    (0..count).map(|i| rng.gen_range(0..count - i)).collect()
}

/// `count` pairs of indices below `len`.
pub fn swap_pairs(count: usize, len: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = rng(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..len), rng.gen_range(0..len)))
        .collect()
}

/// `words` space-separated words of 2 to 8 letters drawn from `a..=f`.
pub fn word_corpus(words: usize, seed: u64) -> String {
    let mut rng = rng(seed);
    let mut corpus = String::new();
    for i in 0..words {
        if i > 0 {
            corpus.push(' ');
        }
        let len = rng.gen_range(2..=8);
        corpus.extend((0..len).map(|_| char::from(rng.gen_range(b'a'..=b'f'))));
    }
    corpus
}
