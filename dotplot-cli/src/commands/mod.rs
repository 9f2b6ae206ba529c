//! Command implementations for the dotplot CLI

pub mod self_plot;
pub mod pairwise;
pub mod demo;

use clap::Args;
use dotplot_core::WindowBoundary;
use std::path::PathBuf;

use crate::config::PlotOverrides;
use crate::output::OutputFormat;

/// Options shared by the plot commands
#[derive(Args, Debug, Clone, Default)]
pub struct PlotArgs {
    /// K-mer size
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Window count convention (drop-last or inclusive)
    #[arg(long)]
    pub boundary: Option<WindowBoundary>,

    /// Drop k-mers occurring more often than this
    #[arg(long)]
    pub max_occurrences: Option<usize>,

    /// Output format (defaults to the configured format)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Output file for coordinates (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also write the k-mer alphabet as JSON to this file
    #[arg(long)]
    pub alphabet_out: Option<PathBuf>,
}

impl PlotArgs {
    pub fn overrides(&self) -> PlotOverrides {
        PlotOverrides {
            k: self.k,
            boundary: self.boundary,
            max_occurrences: self.max_occurrences,
        }
    }
}
