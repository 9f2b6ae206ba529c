//! dotplot core library
//!
//! k-mer encoding, match enumeration and the dot plot pipeline that turns one
//! or two sequences into similarity-matrix coordinates.

pub mod types;
pub mod error;
pub mod alphabet;
pub mod encode;
pub mod matches;
pub mod dotplot;
#[cfg(feature = "random")] pub mod random;

// Re-export commonly used types and functions
pub use types::{KmerCode, MatchCoords, WindowBoundary};
pub use error::{DotError, DotResult};
pub use alphabet::KmerAlphabet;
pub use encode::{encode, Encoder, Encoding};
pub use matches::{
    count_pairwise_matches, count_self_matches, find_pairwise_matches, find_self_matches,
    PositionIndex,
};
pub use dotplot::{DotParams, DotPlot, DotPlotter};

/// Version information for the dotplot core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
