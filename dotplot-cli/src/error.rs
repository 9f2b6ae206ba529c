//! Error handling for the dotplot CLI

use dotplot_core::DotError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dotplot CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("Cannot write output: {path}")]
    Output { path: PathBuf },

    #[error("Missing sequence: {message}")]
    MissingSequence { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Dot plot error: {0}")]
    Plot(#[from] DotError),
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn output(path: PathBuf) -> Self {
        Self::Output { path }
    }

    pub fn missing_sequence<S: Into<String>>(message: S) -> Self {
        Self::MissingSequence { message: message.into() }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialization error: {}", err))
    }
}

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::MissingSequence { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Pass the sequence text directly, e.g. --seq ATCGATCG\n\
                 • Or generate one with --random <LENGTH> (use --seed for reproducible runs)",
            );
        }

        CliError::Output { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the directory for {} exists\n\
                 • Ensure you have write permissions there",
                path.display()
            ));
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your dotplot.toml configuration file\n\
                 • Use 'dotplot config' to generate a sample configuration\n\
                 • Verify that all configuration values are valid",
            );
        }

        CliError::Plot(DotError::InvalidParams(_)) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • --max-occurrences must be at least 1\n\
                 • Random sequences need a non-empty symbol set in [random] symbols",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
