//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Dictionary file is structurally invalid
    InvalidDictionary(String),
    /// Input file not found or unreadable
    InputUnreadable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidDictionary(msg) => write!(f, "Invalid dictionary: {msg}"),
            CliError::InputUnreadable(path) => write!(f, "Cannot read input: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
