use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "docstring-guard")]
#[command(author, version, about = "Check Python docstrings against PEP 257 conventions")]
#[command(long_about = "Check Python docstrings against PEP 257 conventions.\n\n\
    Exit codes:\n  \
    0 - No violations found\n  \
    1 - Docstring violations found\n  \
    2 - Configuration error or a file could not be read")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Show the full explanation of each violated convention
    #[arg(short, long)]
    pub explain: bool,

    /// Show the end position of each offending docstring
    #[arg(short, long)]
    pub range: bool,

    /// Quote the offending docstring
    #[arg(short, long)]
    pub quote: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// File extensions to check (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(short = 'x', long)]
    pub exclude: Vec<String>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
