//! Demo command implementation - random self and pairwise plots in one go
//!
//! Draws two random sequences, writes the self-similarity of the first and
//! the pairwise matches of the first against the second, both encoded with
//! one shared alphabet.

use anyhow::{Context, Result};
use dotplot_core::random::{random_sequence, seeded_rng};
use dotplot_core::DotPlotter;
use std::path::PathBuf;

use crate::config::{Config, PlotOverrides};
use crate::error::CliError;
use crate::input::symbol_set;
use crate::output::{write_alphabet, write_coords, OutputFormat};

pub fn execute(
    config: &Config,
    seed: Option<u64>,
    k: Option<usize>,
    format: Option<OutputFormat>,
    out_dir: PathBuf,
) -> Result<()> {
    if !out_dir.is_dir() {
        return Err(CliError::validation(format!(
            "output directory does not exist: {}",
            out_dir.display()
        ))
        .into());
    }

    let params = config.plot_params(&PlotOverrides {
        k,
        ..Default::default()
    });
    let format = format.unwrap_or(config.output.format);
    let symbols = symbol_set(&config.random.symbols)?;

    let mut rng = seeded_rng(seed);
    let seq_a = random_sequence(&mut rng, config.random.len_a, symbols).map_err(CliError::from)?;
    let seq_b = random_sequence(&mut rng, config.random.len_b, symbols).map_err(CliError::from)?;
    log::info!(
        "Random sequences of {} and {} symbols, k={}",
        seq_a.len(),
        seq_b.len(),
        params.k
    );

    let plotter = DotPlotter::new(params);

    let self_plot = plotter
        .self_plot(&seq_a)
        .map_err(CliError::from)
        .context("Failed to compute self matches")?;
    log::info!("{}-mer self similarity: {} matches", plotter.params().k, self_plot.coords.len());
    let self_path = out_dir.join(format!("self.{}", format.extension()));
    write_coords(&self_plot.coords, format, Some(&self_path))?;

    let pair_plot = plotter
        .pairwise_plot(&seq_a, &seq_b)
        .map_err(CliError::from)
        .context("Failed to compute pairwise matches")?;
    log::info!("{}-mer pairwise similarity: {} matches", plotter.params().k, pair_plot.coords.len());
    let pair_path = out_dir.join(format!("pairwise.{}", format.extension()));
    write_coords(&pair_plot.coords, format, Some(&pair_path))?;

    write_alphabet(&pair_plot.alphabet, &out_dir.join("alphabet.json"))?;

    Ok(())
}
