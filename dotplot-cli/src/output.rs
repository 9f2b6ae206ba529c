//! Coordinate and alphabet writers
//!
//! Coordinates go to a file or stdout as TSV (`x<TAB>y` with a header line) or
//! as a JSON object `{"x": [...], "y": [...]}`.

use anyhow::{Context, Result};
use clap::ValueEnum;
use dotplot_core::{KmerAlphabet, MatchCoords};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::CliError;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

/// Write `coords` to `out`, or to stdout when `out` is `None`
pub fn write_coords(coords: &MatchCoords, format: OutputFormat, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            let file = File::create(path).map_err(|_| CliError::output(path.to_path_buf()))?;
            let mut writer = BufWriter::new(file);
            write_coords_to(&mut writer, coords, format)
                .with_context(|| format!("Failed to write coordinates to {}", path.display()))?;
            writer.flush()?;
            log::info!("Wrote {} points to {}", coords.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_coords_to(&mut writer, coords, format)
                .context("Failed to write coordinates to stdout")?;
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_coords_to<W: Write>(writer: &mut W, coords: &MatchCoords, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            writeln!(writer, "x\ty")?;
            for (x, y) in coords.pairs() {
                writeln!(writer, "{}\t{}", x, y)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, coords)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Write the alphabet as a JSON array of k-mers; a k-mer's code is its index
pub fn write_alphabet(alphabet: &KmerAlphabet, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|_| CliError::output(path.to_path_buf()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, alphabet)
        .with_context(|| format!("Failed to write alphabet to {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    log::info!("Wrote {} k-mers to {}", alphabet.len(), path.display());
    Ok(())
}
