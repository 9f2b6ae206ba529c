//! Error types for the dotplot core

use thiserror::Error;

/// Errors that can occur while encoding sequences or building dot plots
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DotError {
    #[error("Alphabet does not cover k-mer '{kmer}' at offset {offset}")]
    UncoveredKmer { kmer: String, offset: usize },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl DotError {
    pub fn uncovered_kmer(kmer: &[u8], offset: usize) -> Self {
        Self::UncoveredKmer {
            kmer: String::from_utf8_lossy(kmer).into_owned(),
            offset,
        }
    }

    pub fn invalid_params<S: Into<String>>(message: S) -> Self {
        Self::InvalidParams(message.into())
    }
}

pub type DotResult<T> = Result<T, DotError>;
