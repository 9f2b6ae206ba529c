//! Bidirectional k-mer alphabet
//!
//! Maps each distinct k-mer to a small integer code in first-seen order.
//! Both directions are O(1): a hash map for k-mer to code, and a vector indexed
//! by code for the reverse lookup. Inserts update both views in place.
//!
//! Codes are `u32`, so one alphabet holds at most `u32::MAX + 1` k-mers.

use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

use crate::types::KmerCode;

/// Symbol alphabet mapping shared by the encodings of one dot plot.
///
/// Codes are contiguous from 0, so the next free code is always `len()`.
/// Serialized as a list of k-mer strings where the index is the code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct KmerAlphabet {
    codes: HashMap<Vec<u8>, KmerCode>,
    kmers: Vec<Vec<u8>>,
}

impl KmerAlphabet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            codes: HashMap::with_capacity(capacity),
            kmers: Vec::with_capacity(capacity),
        }
    }

    /// Number of distinct k-mers
    pub fn len(&self) -> usize {
        self.kmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }

    /// Code the next unseen k-mer will receive (one past the current maximum),
    /// or `None` once every `KmerCode` is taken
    pub fn next_code(&self) -> Option<KmerCode> {
        code_at(self.kmers.len())
    }

    /// Largest code assigned so far
    pub fn max_code(&self) -> Option<KmerCode> {
        self.kmers.len().checked_sub(1).and_then(code_at)
    }

    /// Code of `kmer`, if it has been seen
    pub fn code(&self, kmer: &[u8]) -> Option<KmerCode> {
        self.codes.get(kmer).copied()
    }

    /// K-mer behind `code`, if assigned
    pub fn kmer(&self, code: KmerCode) -> Option<&[u8]> {
        self.kmers.get(code as usize).map(Vec::as_slice)
    }

    pub fn contains(&self, kmer: &[u8]) -> bool {
        self.codes.contains_key(kmer)
    }

    /// Return the code of `kmer`, assigning the next free code on first sight.
    ///
    /// # Panics
    ///
    /// Panics if a new k-mer arrives after all `u32::MAX + 1` codes are taken.
    pub fn intern(&mut self, kmer: &[u8]) -> KmerCode {
        if let Some(&code) = self.codes.get(kmer) {
            return code;
        }
        let Some(code) = self.next_code() else {
            panic!("k-mer alphabet is full: {} codes assigned", self.kmers.len());
        };
        self.codes.insert(kmer.to_vec(), code);
        self.kmers.push(kmer.to_vec());
        code
    }

    /// Iterate over `(code, kmer)` in code order
    pub fn iter(&self) -> impl Iterator<Item = (KmerCode, &[u8])> + '_ {
        self.kmers
            .iter()
            .enumerate()
            .map(|(code, kmer)| (code as KmerCode, kmer.as_slice()))
    }
}

/// Code for the k-mer stored at `index`, if it fits in a `KmerCode`
fn code_at(index: usize) -> Option<KmerCode> {
    KmerCode::try_from(index).ok()
}

impl<K: AsRef<[u8]>> FromIterator<K> for KmerAlphabet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut alphabet = KmerAlphabet::new();
        for kmer in iter {
            alphabet.intern(kmer.as_ref());
        }
        alphabet
    }
}

// Fails on k-mers that are not valid UTF-8 rather than writing a lossy
// string that would no longer map back to its code.
impl Serialize for KmerAlphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.kmers.len()))?;
        for (code, kmer) in self.kmers.iter().enumerate() {
            let kmer = std::str::from_utf8(kmer).map_err(|_| {
                S::Error::custom(format!(
                    "k-mer {:?} (code {}) is not valid UTF-8",
                    String::from_utf8_lossy(kmer),
                    code
                ))
            })?;
            seq.serialize_element(kmer)?;
        }
        seq.end()
    }
}

impl TryFrom<Vec<String>> for KmerAlphabet {
    type Error = String;

    fn try_from(kmers: Vec<String>) -> Result<Self, Self::Error> {
        let mut alphabet = KmerAlphabet::with_capacity(kmers.len());
        for kmer in kmers {
            if alphabet.contains(kmer.as_bytes()) {
                return Err(format!("Duplicate k-mer in alphabet: {}", kmer));
            }
            alphabet.intern(kmer.as_bytes());
        }
        Ok(alphabet)
    }
}
