//! Pairwise command implementation - k-mer matches between two sequences

use anyhow::{Context, Result};
use dotplot_core::random::seeded_rng;
use dotplot_core::DotPlotter;

use crate::commands::PlotArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::input::resolve_sequence;
use crate::output::{write_alphabet, write_coords};

/// Where each axis' sequence comes from
#[derive(Debug, Clone, Default)]
pub struct PairSources {
    pub seq_a: Option<String>,
    pub random_a: Option<usize>,
    pub seq_b: Option<String>,
    pub random_b: Option<usize>,
}

pub fn execute(config: &Config, seed: Option<u64>, sources: PairSources, args: PlotArgs) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let symbols = &config.random.symbols;
    let seq_a = resolve_sequence("X", sources.seq_a, sources.random_a, &mut rng, symbols)?;
    let seq_b = resolve_sequence("Y", sources.seq_b, sources.random_b, &mut rng, symbols)?;

    let params = config.plot_params(&args.overrides());
    log::info!(
        "Pairwise similarity of {} vs {} symbols: k={}, boundary={}",
        seq_a.len(),
        seq_b.len(),
        params.k,
        params.boundary
    );

    let plot = DotPlotter::new(params)
        .pairwise_plot(&seq_a, &seq_b)
        .map_err(CliError::from)
        .context("Failed to compute pairwise matches")?;
    log::info!(
        "{} matches over a {}x{} matrix ({} distinct k-mers)",
        plot.coords.len(),
        plot.x_len,
        plot.y_len,
        plot.alphabet.len()
    );

    let format = args.format.unwrap_or(config.output.format);
    write_coords(&plot.coords, format, args.out.as_deref())?;
    if let Some(path) = args.alphabet_out.as_deref() {
        write_alphabet(&plot.alphabet, path)?;
    }

    Ok(())
}
