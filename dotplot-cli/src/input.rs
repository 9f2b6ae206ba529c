//! Sequence sources for the plot commands
//!
//! A sequence is either given literally on the command line or drawn at
//! random from the configured symbol set. Both must be ASCII: k-mers are
//! byte windows and are written back out as strings.

use anyhow::Result;
use dotplot_core::random::random_sequence;
use rand::rngs::StdRng;

use crate::error::CliError;

/// Resolve one axis' sequence from `--seq`-style text or a `--random` length
pub fn resolve_sequence(
    axis: &str,
    text: Option<String>,
    random_len: Option<usize>,
    rng: &mut StdRng,
    symbols: &str,
) -> Result<Vec<u8>> {
    match (text, random_len) {
        (Some(text), None) => {
            let text = text.trim();
            require_ascii(&format!("{} axis sequence", axis), text)?;
            Ok(text.as_bytes().to_vec())
        }
        (None, Some(len)) => {
            log::info!("Generating random {} sequence of length {}", axis, len);
            let symbols = symbol_set(symbols)?;
            Ok(random_sequence(rng, len, symbols).map_err(CliError::from)?)
        }
        (Some(_), Some(_)) => Err(CliError::validation(format!(
            "give either a sequence or a random length for the {} axis, not both",
            axis
        ))
        .into()),
        (None, None) => Err(CliError::missing_sequence(format!(
            "no sequence given for the {} axis",
            axis
        ))
        .into()),
    }
}

/// Symbols random sequences are drawn from, as bytes
pub fn symbol_set(symbols: &str) -> Result<&[u8]> {
    require_ascii("[random] symbols", symbols)?;
    Ok(symbols.as_bytes())
}

fn require_ascii(what: &str, text: &str) -> Result<(), CliError> {
    match text.char_indices().find(|(_, c)| !c.is_ascii()) {
        Some((offset, c)) => Err(CliError::validation(format!(
            "{} contains non-ASCII character '{}' at byte {}",
            what, c, offset
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotplot_core::random::seeded_rng;

    #[test]
    fn test_literal_sequence() -> Result<()> {
        let mut rng = seeded_rng(Some(1));
        let seq = resolve_sequence("X", Some(" ATCG\n".to_string()), None, &mut rng, "ATCG")?;
        assert_eq!(seq, b"ATCG");
        Ok(())
    }

    #[test]
    fn test_random_sequence() -> Result<()> {
        let mut rng = seeded_rng(Some(1));
        let seq = resolve_sequence("X", None, Some(64), &mut rng, "AC")?;
        assert_eq!(seq.len(), 64);
        assert!(seq.iter().all(|b| *b == b'A' || *b == b'C'));
        Ok(())
    }

    #[test]
    fn test_missing_sequence() {
        let mut rng = seeded_rng(Some(1));
        let err = resolve_sequence("Y", None, None, &mut rng, "ATCG").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingSequence { .. })
        ));
    }

    #[test]
    fn test_conflicting_sources() {
        let mut rng = seeded_rng(Some(1));
        let err = resolve_sequence("X", Some("AT".to_string()), Some(3), &mut rng, "ATCG").unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Validation { .. })));
    }

    #[test]
    fn test_non_ascii_sequence_rejected() {
        let mut rng = seeded_rng(Some(1));
        let err = resolve_sequence("X", Some("ÅÅ".to_string()), None, &mut rng, "ATCG").unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Validation { .. })));
        assert!(err.to_string().contains("non-ASCII character 'Å' at byte 0"));
    }

    #[test]
    fn test_non_ascii_symbols_rejected() {
        let mut rng = seeded_rng(Some(1));
        let err = resolve_sequence("Y", None, Some(10), &mut rng, "ACGÜ").unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Validation { .. })));
        assert_eq!(symbol_set("ACGT").unwrap(), b"ACGT");
    }
}
