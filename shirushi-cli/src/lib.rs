//! Shirushi CLI library
//!
//! Command-line glue around `shirushi-core`: dictionary file loading,
//! document I/O, and output format selection.

pub mod commands;
pub mod dictionary;
pub mod error;

pub use error::{CliError, CliResult};
