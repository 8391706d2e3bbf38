use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocstringGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error opening file {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocstringGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
