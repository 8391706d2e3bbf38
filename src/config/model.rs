use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// How violations are presented.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Show the full rationale of each rule.
    pub explain: bool,

    /// Show the start and end position of each offending docstring.
    pub range: bool,

    /// Quote the offending docstring.
    pub quote: bool,

    pub format: OutputFormat,
}

/// Which files are picked up when walking directories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions checked inside directories (explicit file arguments
    /// are always checked).
    pub extensions: Vec<String>,

    /// Glob patterns excluded from directory walks.
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["py".to_string()],
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub scan: ScanConfig,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
