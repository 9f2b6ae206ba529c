//! Sliding-window k-mer encoding
//!
//! Turns a sequence of symbols into one integer code per window. The alphabet
//! is passed in explicitly so that two sequences encoded one after the other
//! share a single code space and their codes can be compared directly.

use crate::alphabet::KmerAlphabet;
use crate::error::{DotError, DotResult};
use crate::types::{KmerCode, WindowBoundary};

/// An encoded sequence together with the alphabet that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoding {
    pub codes: Vec<KmerCode>,
    pub alphabet: KmerAlphabet,
}

/// Encode `sequence` with windows of length `k`.
///
/// When `prior` is given, its codes are kept and unseen k-mers continue from
/// one past its largest code. Otherwise numbering starts at 0. Degenerate input
/// (`k == 0`, `k >= sequence.len()`, empty sequence) yields no codes.
pub fn encode(sequence: &[u8], k: usize, prior: Option<KmerAlphabet>) -> Encoding {
    let mut alphabet = prior.unwrap_or_default();
    let codes = Encoder::new(k).encode(sequence, &mut alphabet);
    Encoding { codes, alphabet }
}

/// Window parameters for k-mer encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    k: usize,
    boundary: WindowBoundary,
}

impl Encoder {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            boundary: WindowBoundary::default(),
        }
    }

    pub fn with_boundary(k: usize, boundary: WindowBoundary) -> Self {
        Self { k, boundary }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn boundary(&self) -> WindowBoundary {
        self.boundary
    }

    /// Number of windows a sequence of `len` symbols produces
    pub fn window_count(&self, len: usize) -> usize {
        self.boundary.window_count(len, self.k)
    }

    /// Windows of `sequence` in offset order
    pub fn windows<'a>(&self, sequence: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        let k = self.k;
        (0..self.window_count(sequence.len())).map(move |offset| &sequence[offset..offset + k])
    }

    /// Encode `sequence`, adding unseen k-mers to `alphabet`
    pub fn encode(&self, sequence: &[u8], alphabet: &mut KmerAlphabet) -> Vec<KmerCode> {
        let mut codes = Vec::with_capacity(self.window_count(sequence.len()));
        for window in self.windows(sequence) {
            codes.push(alphabet.intern(window));
        }
        codes
    }

    /// Encode `sequence` against a fixed alphabet.
    ///
    /// Fails on the first window whose k-mer the alphabet has never seen.
    pub fn encode_frozen(&self, sequence: &[u8], alphabet: &KmerAlphabet) -> DotResult<Vec<KmerCode>> {
        self.windows(sequence)
            .enumerate()
            .map(|(offset, window)| {
                alphabet
                    .code(window)
                    .ok_or_else(|| DotError::uncovered_kmer(window, offset))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_repeated_kmer() {
        let encoding = encode(b"AAAA", 2, None);
        assert_eq!(encoding.codes, vec![0, 0]);
        assert_eq!(encoding.alphabet.len(), 1);
        assert_eq!(encoding.alphabet.code(b"AA"), Some(0));
    }

    #[test]
    fn test_encode_shared_alphabet() {
        let encoder = Encoder::with_boundary(2, WindowBoundary::Inclusive);
        let mut alphabet = KmerAlphabet::new();

        let first = encoder.encode(b"ATCG", &mut alphabet);
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(alphabet.code(b"AT"), Some(0));
        assert_eq!(alphabet.code(b"TC"), Some(1));
        assert_eq!(alphabet.code(b"CG"), Some(2));

        let second = encoder.encode(b"GCAT", &mut alphabet);
        assert_eq!(second, vec![3, 4, 0]);
        assert_eq!(alphabet.code(b"GC"), Some(3));
        assert_eq!(alphabet.code(b"CA"), Some(4));
        assert_eq!(alphabet.kmer(0), Some(&b"AT"[..]));
    }

    #[test]
    fn test_prior_alphabet_is_extended() {
        let first = encode(b"ATCGA", 2, None);
        assert_eq!(first.codes, vec![0, 1, 2]);

        let second = encode(b"GCATT", 2, Some(first.alphabet));
        assert_eq!(second.codes, vec![3, 4, 0]);
        assert_eq!(second.alphabet.len(), 5);
    }

    #[test]
    fn test_final_window_dropped() {
        // "CG" ends on the last symbol and is not encoded
        let encoding = encode(b"ATCG", 2, None);
        assert_eq!(encoding.codes, vec![0, 1]);
        assert!(!encoding.alphabet.contains(b"CG"));
    }

    #[test]
    fn test_inclusive_boundary() {
        let mut alphabet = KmerAlphabet::new();
        let codes = Encoder::with_boundary(2, WindowBoundary::Inclusive).encode(b"ATCG", &mut alphabet);
        assert_eq!(codes, vec![0, 1, 2]);
        assert_eq!(alphabet.code(b"CG"), Some(2));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(encode(b"", 2, None).codes.is_empty());
        assert!(encode(b"ATCG", 0, None).codes.is_empty());
        assert!(encode(b"ATCG", 4, None).codes.is_empty());
        assert!(encode(b"ATCG", 10, None).codes.is_empty());
        assert!(encode(b"ATCG", 10, None).alphabet.is_empty());
    }

    #[test]
    fn test_degenerate_input_keeps_prior() {
        let prior = encode(b"ATCG", 2, None).alphabet;
        let encoding = encode(b"A", 2, Some(prior.clone()));
        assert!(encoding.codes.is_empty());
        assert_eq!(encoding.alphabet, prior);
    }

    #[test]
    fn test_windows() {
        let encoder = Encoder::new(3);
        let windows: Vec<&[u8]> = encoder.windows(b"ATCGA").collect();
        assert_eq!(windows, vec![&b"ATC"[..], &b"TCG"[..]]);
        assert_eq!(encoder.window_count(5), 2);
    }

    #[test]
    fn test_encode_frozen() {
        let encoder = Encoder::new(2);
        let alphabet = encode(b"ATCGA", 2, None).alphabet;

        assert_eq!(encoder.encode_frozen(b"TCGA", &alphabet), Ok(vec![1, 2]));

        let err = encoder.encode_frozen(b"ATGCA", &alphabet).unwrap_err();
        assert_eq!(
            err,
            DotError::UncoveredKmer {
                kmer: "TG".to_string(),
                offset: 1
            }
        );
    }
}
