use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod input;
mod output;

use commands::pairwise::PairSources;
use commands::PlotArgs;
use config::Config;
use error::{print_error_and_exit, CliError};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "dotplot")]
#[command(about = "dotplot - k-mer dot plot coordinates for biological sequences")]
#[command(version)]
#[command(long_about = "
dotplot finds every pair of positions where a k-mer recurs within one sequence
or appears in two sequences, and writes the coordinates for a scatter plot.

Examples:
  dotplot self --seq ATCGATCGGATC -k 3
  dotplot self --random 1000 -k 4 --seed 42 --out self.tsv
  dotplot pairwise --seq-a ATCGATCG --seq-b CGATCGAT -k 3 --format json
  dotplot demo --out-dir plots/
  dotplot config > dotplot.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for random sequences, for reproducible results
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Self-similarity matches of one sequence
    #[command(name = "self")]
    SelfPlot {
        /// Sequence text
        #[arg(long)]
        seq: Option<String>,

        /// Generate a random sequence of this length instead
        #[arg(long, conflicts_with = "seq")]
        random: Option<usize>,

        #[command(flatten)]
        plot: PlotArgs,
    },

    /// Matches between two sequences sharing one k-mer alphabet
    Pairwise {
        /// First sequence text (X axis)
        #[arg(long)]
        seq_a: Option<String>,

        /// Random first sequence of this length
        #[arg(long, conflicts_with = "seq_a")]
        random_a: Option<usize>,

        /// Second sequence text (Y axis)
        #[arg(long)]
        seq_b: Option<String>,

        /// Random second sequence of this length
        #[arg(long, conflicts_with = "seq_b")]
        random_b: Option<usize>,

        #[command(flatten)]
        plot: PlotArgs,
    },

    /// Random self and pairwise plots written to a directory
    Demo {
        /// K-mer size
        #[arg(short, long)]
        k: Option<usize>,

        /// Output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Directory receiving self, pairwise and alphabet files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print an example configuration file
    Config {
        /// Write the configuration here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = Config::load(cli.config.as_deref())?;
    let seed = cli.seed.or(config.general.seed);

    // Execute the requested command
    match cli.command {
        Commands::SelfPlot { seq, random, plot } => {
            commands::self_plot::execute(&config, seed, seq, random, plot)?;
        }

        Commands::Pairwise {
            seq_a,
            random_a,
            seq_b,
            random_b,
            plot,
        } => {
            let sources = PairSources {
                seq_a,
                random_a,
                seq_b,
                random_b,
            };
            commands::pairwise::execute(&config, seed, sources, plot)?;
        }

        Commands::Demo { k, format, out_dir } => {
            commands::demo::execute(&config, seed, k, format, out_dir)?;
        }

        Commands::Config { output } => match output {
            Some(path) => {
                Config::default().save_to_file(&path)?;
                log::info!("Wrote example configuration to {}", path.display());
            }
            None => print!("{}", Config::example_toml()?),
        },
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                log::debug!("{:#}", err);
                print_error_and_exit(cli_err)
            }
            None => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}
