//! Random test sequences
//!
//! Uniform draws over a symbol set, seedable for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DotError, DotResult};

/// Nucleotide symbols used by default
pub const DNA_SYMBOLS: &[u8] = b"ATCG";

/// RNG seeded from `seed`, or from system entropy when `None`
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `len` symbols uniformly from `symbols`
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, symbols: &[u8]) -> DotResult<Vec<u8>> {
    if symbols.is_empty() {
        return Err(DotError::invalid_params("Symbol set must not be empty"));
    }
    Ok((0..len)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect())
}
