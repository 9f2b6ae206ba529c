//! Dot plot pipeline
//!
//! Encodes one or two sequences through a single alphabet and enumerates the
//! matches between them. Optionally drops k-mers that repeat so often they
//! would flood the plot.

use crate::alphabet::KmerAlphabet;
use crate::encode::Encoder;
use crate::error::{DotError, DotResult};
use crate::matches::{pairwise_matches_where, self_matches_where};
use crate::types::{KmerCode, MatchCoords, WindowBoundary};

/// Parameters for k-mer dot plots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotParams {
    /// K-mer size
    pub k: usize,
    /// Window count convention
    pub boundary: WindowBoundary,
    /// Drop k-mers occurring more often than this across the plotted sequences
    pub max_occurrences: Option<usize>,
}

impl Default for DotParams {
    fn default() -> Self {
        Self {
            k: 4,
            boundary: WindowBoundary::DropLast,
            max_occurrences: None,
        }
    }
}

/// Matches of a dot plot plus the alphabet both axes were encoded with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPlot {
    pub coords: MatchCoords,
    pub alphabet: KmerAlphabet,
    /// Encoded length along X
    pub x_len: usize,
    /// Encoded length along Y
    pub y_len: usize,
}

impl DotPlot {
    /// Fraction of matrix cells holding a point
    pub fn density(&self) -> f64 {
        let cells = self.x_len * self.y_len;
        if cells == 0 {
            return 0.0;
        }
        self.coords.len() as f64 / cells as f64
    }
}

/// k-mer dot plotting engine
pub struct DotPlotter {
    params: DotParams,
}

impl DotPlotter {
    pub fn new(params: DotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DotParams {
        &self.params
    }

    fn encoder(&self) -> Encoder {
        Encoder::with_boundary(self.params.k, self.params.boundary)
    }

    fn validate(&self) -> DotResult<()> {
        if self.params.max_occurrences == Some(0) {
            return Err(DotError::invalid_params(
                "max_occurrences must be at least 1",
            ));
        }
        Ok(())
    }

    /// Self-similarity plot of `sequence`
    pub fn self_plot(&self, sequence: &[u8]) -> DotResult<DotPlot> {
        self.validate()?;

        let mut alphabet = KmerAlphabet::new();
        let codes = self.encoder().encode(sequence, &mut alphabet);
        log::debug!(
            "Encoded {} windows of k={} into {} distinct k-mers",
            codes.len(),
            self.params.k,
            alphabet.len()
        );

        let coords = match self.params.max_occurrences {
            Some(max) => {
                let counts = occurrence_counts(&alphabet, &[codes.as_slice()]);
                self_matches_where(&codes, |code| counts[code as usize] <= max)
            }
            None => self_matches_where(&codes, |_| true),
        };
        log::debug!("Found {} self matches", coords.len());

        Ok(DotPlot {
            coords,
            alphabet,
            x_len: codes.len(),
            y_len: codes.len(),
        })
    }

    /// Pairwise plot of `seq_a` (X axis) against `seq_b` (Y axis).
    ///
    /// `seq_b` is encoded with the alphabet built from `seq_a`, so both axes
    /// share one code space.
    pub fn pairwise_plot(&self, seq_a: &[u8], seq_b: &[u8]) -> DotResult<DotPlot> {
        self.validate()?;

        let encoder = self.encoder();
        let mut alphabet = KmerAlphabet::new();
        let codes_a = encoder.encode(seq_a, &mut alphabet);
        let shared = alphabet.len();
        let codes_b = encoder.encode(seq_b, &mut alphabet);
        log::debug!(
            "Encoded {} + {} windows of k={}; second sequence added {} k-mers to {}",
            codes_a.len(),
            codes_b.len(),
            self.params.k,
            alphabet.len() - shared,
            shared
        );

        let coords = match self.params.max_occurrences {
            Some(max) => {
                let counts = occurrence_counts(&alphabet, &[codes_a.as_slice(), codes_b.as_slice()]);
                pairwise_matches_where(&codes_a, &codes_b, |code| counts[code as usize] <= max)
            }
            None => pairwise_matches_where(&codes_a, &codes_b, |_| true),
        };
        log::debug!("Found {} pairwise matches", coords.len());

        Ok(DotPlot {
            coords,
            alphabet,
            x_len: codes_a.len(),
            y_len: codes_b.len(),
        })
    }
}

impl Default for DotPlotter {
    fn default() -> Self {
        Self::new(DotParams::default())
    }
}

/// Occurrences of every code across `sequences`, indexed by code
fn occurrence_counts(alphabet: &KmerAlphabet, sequences: &[&[KmerCode]]) -> Vec<usize> {
    let mut counts = vec![0usize; alphabet.len()];
    for codes in sequences {
        for &code in codes.iter() {
            counts[code as usize] += 1;
        }
    }
    counts
}
