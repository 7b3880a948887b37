//! Matched phrase occurrences

use serde::Serialize;

use crate::error::{LabelError, Result};

/// A labeled span matched in a text
///
/// Offsets are inclusive and live in the offset space of the text the entity
/// was matched against: character offsets for raw text, character offsets
/// initially for tokenized text (token alignment happens at serialization).
/// Entities are immutable value objects and compare equal by field values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entity {
    /// Inclusive start offset
    pub start_offset: usize,
    /// Inclusive end offset
    pub end_offset: usize,
    /// Category label
    pub label: String,
}

impl Entity {
    /// Create an entity, rejecting inverted ranges
    pub fn new(start_offset: usize, end_offset: usize, label: impl Into<String>) -> Result<Self> {
        if end_offset < start_offset {
            return Err(LabelError::InvalidRange {
                start: start_offset,
                end: end_offset,
            });
        }
        Ok(Self {
            start_offset,
            end_offset,
            label: label.into(),
        })
    }

    /// Number of offset positions the entity covers
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset + 1
    }

    /// Always false: a valid entity covers at least one position
    pub fn is_empty(&self) -> bool {
        false
    }
}
