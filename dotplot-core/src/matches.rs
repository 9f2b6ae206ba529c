//! Exact match enumeration over encoded sequences
//!
//! Both finders group positions by code once and then emit every pair of
//! positions sharing a code, so the cost is linear in the sequence length plus
//! the number of matches rather than quadratic in the length.

use std::collections::HashMap;

use crate::types::{KmerCode, MatchCoords, Position};

/// Positions of an encoded sequence grouped by code.
///
/// Positions within a group are ascending.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    positions: HashMap<KmerCode, Vec<Position>>,
    indexed: usize,
}

impl PositionIndex {
    pub fn build(codes: &[KmerCode]) -> Self {
        let mut positions: HashMap<KmerCode, Vec<Position>> = HashMap::new();
        for (pos, &code) in codes.iter().enumerate() {
            positions.entry(code).or_insert_with(Vec::new).push(pos);
        }
        Self {
            positions,
            indexed: codes.len(),
        }
    }

    /// Ascending positions holding `code`, empty if it never occurs
    pub fn positions(&self, code: KmerCode) -> &[Position] {
        self.positions.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn occurrences(&self, code: KmerCode) -> usize {
        self.positions(code).len()
    }

    pub fn distinct_codes(&self) -> usize {
        self.positions.len()
    }

    /// Number of positions indexed
    pub fn len(&self) -> usize {
        self.indexed
    }

    pub fn is_empty(&self) -> bool {
        self.indexed == 0
    }

    /// Iterate over `(code, positions)` groups in arbitrary order
    pub fn groups(&self) -> impl Iterator<Item = (KmerCode, &[Position])> + '_ {
        self.positions.iter().map(|(&code, positions)| (code, positions.as_slice()))
    }
}

/// All pairs of positions in `codes` that share a code.
///
/// Points come out row by row: x ascending, then y ascending. The result holds
/// every diagonal point `(x, x)` and is symmetric, since `(x, y)` and `(y, x)`
/// are both emitted, each exactly once.
pub fn find_self_matches(codes: &[KmerCode]) -> MatchCoords {
    self_matches_where(codes, |_| true)
}

/// Pairs `(x, y)` where `seq_a[x] == seq_b[y]`.
///
/// Both sequences must come from one shared alphabet for equal codes to mean
/// equal k-mers. Points come out with x ascending, then y ascending; nothing
/// is mirrored.
pub fn find_pairwise_matches(seq_a: &[KmerCode], seq_b: &[KmerCode]) -> MatchCoords {
    pairwise_matches_where(seq_a, seq_b, |_| true)
}

/// Self matches restricted to codes accepted by `keep`
pub(crate) fn self_matches_where<F>(codes: &[KmerCode], keep: F) -> MatchCoords
where
    F: Fn(KmerCode) -> bool,
{
    let index = PositionIndex::build(codes);
    emit_matches(codes, &index, keep)
}

/// Pairwise matches restricted to codes accepted by `keep`
pub(crate) fn pairwise_matches_where<F>(seq_a: &[KmerCode], seq_b: &[KmerCode], keep: F) -> MatchCoords
where
    F: Fn(KmerCode) -> bool,
{
    let index_b = PositionIndex::build(seq_b);
    emit_matches(seq_a, &index_b, keep)
}

fn emit_matches<F>(rows: &[KmerCode], columns: &PositionIndex, keep: F) -> MatchCoords
where
    F: Fn(KmerCode) -> bool,
{
    let capacity = rows
        .iter()
        .filter(|&&code| keep(code))
        .map(|&code| columns.occurrences(code))
        .sum();
    let mut coords = MatchCoords::with_capacity(capacity);

    for (x, &code) in rows.iter().enumerate() {
        if !keep(code) {
            continue;
        }
        for &y in columns.positions(code) {
            coords.push(x, y);
        }
    }

    coords
}

/// Number of points `find_self_matches` would emit
pub fn count_self_matches(codes: &[KmerCode]) -> usize {
    PositionIndex::build(codes)
        .groups()
        .map(|(_, positions)| positions.len() * positions.len())
        .sum()
}

/// Number of points `find_pairwise_matches` would emit
pub fn count_pairwise_matches(seq_a: &[KmerCode], seq_b: &[KmerCode]) -> usize {
    count_with(&PositionIndex::build(seq_b), seq_a)
}

fn count_with(index: &PositionIndex, codes: &[KmerCode]) -> usize {
    codes.iter().map(|&code| index.occurrences(code)).sum()
}
