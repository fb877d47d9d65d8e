use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodingStyleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file already exists: {}. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

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

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Invalid or inconsistent rule configuration.
///
/// Raised while the engine is being built, before any file is looked at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    #[error("rule '{0}' is enabled more than once")]
    DuplicateRule(String),

    #[error("rule '{rule}': {reason}")]
    InvalidParameter { rule: &'static str, reason: String },

    #[error("invalid header pattern '{pattern}': {reason}")]
    InvalidHeaderPattern { pattern: String, reason: String },
}

/// A file that cannot be turned into text.
///
/// Only affects the file it came from; the engine reports it as a diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("file is not valid UTF-8 (invalid byte sequence at offset {offset})")]
    InvalidEncoding { offset: usize },

    #[error("file contains NUL bytes and looks like binary data")]
    BinaryContent,
}

pub type Result<T> = std::result::Result<T, CodingStyleError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
