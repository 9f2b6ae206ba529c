//! Self command implementation - k-mer self-similarity of one sequence

use anyhow::{Context, Result};
use dotplot_core::random::seeded_rng;
use dotplot_core::DotPlotter;

use crate::commands::PlotArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::input::resolve_sequence;
use crate::output::{write_alphabet, write_coords};

pub fn execute(
    config: &Config,
    seed: Option<u64>,
    seq: Option<String>,
    random: Option<usize>,
    args: PlotArgs,
) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let sequence = resolve_sequence("X", seq, random, &mut rng, &config.random.symbols)?;

    let params = config.plot_params(&args.overrides());
    log::info!(
        "Self-similarity of {} symbols: k={}, boundary={}",
        sequence.len(),
        params.k,
        params.boundary
    );

    let plot = DotPlotter::new(params)
        .self_plot(&sequence)
        .map_err(CliError::from)
        .context("Failed to compute self matches")?;
    log::info!(
        "{} matches over {} windows ({} distinct k-mers)",
        plot.coords.len(),
        plot.x_len,
        plot.alphabet.len()
    );

    let format = args.format.unwrap_or(config.output.format);
    write_coords(&plot.coords, format, args.out.as_deref())?;
    if let Some(path) = args.alphabet_out.as_deref() {
        write_alphabet(&plot.alphabet, path)?;
    }

    Ok(())
}
