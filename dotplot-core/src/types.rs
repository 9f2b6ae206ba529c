use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer code standing in for one distinct k-mer
pub type KmerCode = u32;

/// Position of a window in an encoded sequence
pub type Position = usize;

/// How many sliding windows a sequence of length `len` yields for a given `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowBoundary {
    /// `len - k` windows; the window ending on the last symbol is skipped
    #[default]
    DropLast,
    /// `len - k + 1` windows, every complete k-mer
    Inclusive,
}

impl WindowBoundary {
    /// Number of windows of length `k` over `len` symbols.
    ///
    /// `k == 0` and windows longer than the sequence give zero.
    pub fn window_count(self, len: usize, k: usize) -> usize {
        if k == 0 || k > len {
            return 0;
        }
        match self {
            WindowBoundary::DropLast => len - k,
            WindowBoundary::Inclusive => len - k + 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WindowBoundary::DropLast => "drop-last",
            WindowBoundary::Inclusive => "inclusive",
        }
    }
}

impl fmt::Display for WindowBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowBoundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "drop-last" | "drop_last" | "droplast" => Ok(WindowBoundary::DropLast),
            "inclusive" => Ok(WindowBoundary::Inclusive),
            other => Err(format!(
                "Unknown window boundary: {}. Expected 'drop-last' or 'inclusive'",
                other
            )),
        }
    }
}

/// Parallel X/Y coordinate vectors, one entry per detected match.
///
/// `(x[i], y[i])` is a single point of the similarity matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCoords {
    pub x: Vec<Position>,
    pub y: Vec<Position>,
}

impl MatchCoords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, x: Position, y: Position) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` points in emission order
    pub fn pairs(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn contains(&self, x: Position, y: Position) -> bool {
        self.pairs().any(|pair| pair == (x, y))
    }

    /// Swap the axes of every point
    pub fn transposed(&self) -> Self {
        Self {
            x: self.y.clone(),
            y: self.x.clone(),
        }
    }

    pub fn into_parts(self) -> (Vec<Position>, Vec<Position>) {
        (self.x, self.y)
    }
}

impl FromIterator<(Position, Position)> for MatchCoords {
    fn from_iter<I: IntoIterator<Item = (Position, Position)>>(iter: I) -> Self {
        let mut coords = MatchCoords::new();
        for (x, y) in iter {
            coords.push(x, y);
        }
        coords
    }
}
