//! Dictionary file loading
//!
//! The on-disk shape is `{"phrase": [{"label": "..."}], ...}`; only the
//! first entry per phrase is used. The file is flattened to phrase -> label
//! pairs before it reaches the matcher.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CliError;

/// One annotation entry attached to a phrase
#[derive(Debug, Deserialize)]
pub struct DictionaryEntry {
    /// Category label assigned to the phrase
    pub label: String,
}

/// Load and flatten a dictionary JSON file
pub fn load(path: &Path) -> Result<Vec<(String, String)>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary file {}", path.display()))?;
    parse(&raw)
}

/// Flatten dictionary JSON to phrase -> label pairs
pub fn parse(raw: &str) -> Result<Vec<(String, String)>> {
    let file: HashMap<String, Vec<DictionaryEntry>> =
        serde_json::from_str(raw).context("dictionary is not valid JSON")?;

    let mut patterns = Vec::with_capacity(file.len());
    for (phrase, entries) in file {
        let entry = entries.into_iter().next().ok_or_else(|| {
            CliError::InvalidDictionary(format!("phrase '{phrase}' has no label"))
        })?;
        patterns.push((phrase, entry.label));
    }
    Ok(patterns)
}
