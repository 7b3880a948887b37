//! Indexed text model
//!
//! Wraps either a raw string or a tokenized document behind one interface:
//! character access for matching, plus offset validation and alignment
//! between character offsets and the text's native offset space (character
//! indices for raw text, token indices for tokenized text).

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::error::{LabelError, Result};

/// A text indexed for offset validation and alignment
///
/// The variant set is closed: raw text, where native offsets are character
/// offsets, and tokenized text, where native offsets are token indices.
/// Construction builds all index structures once; the value is read-only
/// afterwards.
pub struct IndexedText {
    repr: Repr,
}

enum Repr {
    Raw {
        surface: String,
        chars: Vec<char>,
    },
    Tokenized {
        tokens: Vec<String>,
        surface: String,
        chars: Vec<char>,
        /// Character offset of each token's first character -> token index
        start_boundaries: HashMap<usize, usize>,
        /// Character offset of each token's last character -> token index
        end_boundaries: HashMap<usize, usize>,
    },
}

impl IndexedText {
    /// Wrap a raw string; native offsets are character offsets
    pub fn raw(text: impl Into<String>) -> Self {
        let surface = text.into();
        let chars = surface.chars().collect();
        Self {
            repr: Repr::Raw { surface, chars },
        }
    }

    /// Wrap a tokenized document; native offsets are token indices
    ///
    /// `space_after[i]` states whether a single space separates token `i`
    /// from token `i + 1` in the reconstructed surface string. The two
    /// sequences must have the same length.
    pub fn tokenized(tokens: Vec<String>, space_after: Vec<bool>) -> Result<Self> {
        if tokens.len() != space_after.len() {
            return Err(LabelError::TokenSpacingMismatch {
                tokens: tokens.len(),
                flags: space_after.len(),
            });
        }

        let mut surface = String::new();
        for (token, &space) in tokens.iter().zip(&space_after) {
            surface.push_str(token);
            if space {
                surface.push(' ');
            }
        }
        let chars: Vec<char> = surface.chars().collect();

        // Boundaries are derived from the same cursor arithmetic that built
        // the surface string, so tokens containing internal whitespace need
        // no special casing, and empty tokens simply register no boundary.
        let mut start_boundaries = HashMap::new();
        let mut end_boundaries = HashMap::new();
        let mut cursor = 0usize;
        for (index, (token, &space)) in tokens.iter().zip(&space_after).enumerate() {
            let width = token.chars().count();
            if width > 0 {
                start_boundaries.insert(cursor, index);
                end_boundaries.insert(cursor + width - 1, index);
            }
            cursor += width;
            if space {
                cursor += 1;
            }
        }

        Ok(Self {
            repr: Repr::Tokenized {
                tokens,
                surface,
                chars,
                start_boundaries,
                end_boundaries,
            },
        })
    }

    /// Check whether an inclusive character span is legal for this text
    ///
    /// Raw text accepts any in-bounds span. Tokenized text additionally
    /// requires the span to start at some token's first character and end at
    /// some token's last character, which rejects spans straddling or landing
    /// inside a token interior.
    pub fn validate(&self, start_offset: usize, end_offset: usize) -> bool {
        match &self.repr {
            Repr::Raw { chars, .. } => start_offset <= end_offset && end_offset < chars.len(),
            Repr::Tokenized {
                start_boundaries,
                end_boundaries,
                ..
            } => {
                start_offset <= end_offset
                    && start_boundaries.contains_key(&start_offset)
                    && end_boundaries.contains_key(&end_offset)
            }
        }
    }

    /// Convert an inclusive character span to native offsets
    ///
    /// The identity for raw text; for tokenized text the span's boundary
    /// characters are mapped to their token indices. Spans that fail
    /// [`validate`](Self::validate) are rejected with `UnalignableOffset`.
    pub fn align(&self, start_offset: usize, end_offset: usize) -> Result<(usize, usize)> {
        if !self.validate(start_offset, end_offset) {
            return Err(LabelError::UnalignableOffset {
                start: start_offset,
                end: end_offset,
            });
        }
        match &self.repr {
            Repr::Raw { .. } => Ok((start_offset, end_offset)),
            Repr::Tokenized {
                start_boundaries,
                end_boundaries,
                ..
            } => Ok((start_boundaries[&start_offset], end_boundaries[&end_offset])),
        }
    }

    /// The surface string matching runs over
    ///
    /// For tokenized text this is the reconstruction from tokens and
    /// spacing flags, built once at construction.
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Raw { surface, .. } | Repr::Tokenized { surface, .. } => surface,
        }
    }

    /// Number of characters in the surface string
    pub fn char_len(&self) -> usize {
        match &self.repr {
            Repr::Raw { chars, .. } | Repr::Tokenized { chars, .. } => chars.len(),
        }
    }

    /// Character at a character offset, if in bounds
    pub fn char_at(&self, index: usize) -> Option<char> {
        match &self.repr {
            Repr::Raw { chars, .. } | Repr::Tokenized { chars, .. } => chars.get(index).copied(),
        }
    }

    /// Iterate over the characters of the surface string
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        match &self.repr {
            Repr::Raw { chars, .. } | Repr::Tokenized { chars, .. } => chars.iter().copied(),
        }
    }

    /// Length of the native atom sequence: characters for raw text, tokens
    /// for tokenized text
    pub fn atom_len(&self) -> usize {
        match &self.repr {
            Repr::Raw { chars, .. } => chars.len(),
            Repr::Tokenized { tokens, .. } => tokens.len(),
        }
    }

    /// Iterate over the native atoms as text
    pub fn atoms(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        match &self.repr {
            Repr::Raw { chars, .. } => {
                Box::new(chars.iter().map(|c| Cow::Owned(c.to_string())))
            }
            Repr::Tokenized { tokens, .. } => {
                Box::new(tokens.iter().map(|t| Cow::Borrowed(t.as_str())))
            }
        }
    }
}

impl fmt::Debug for IndexedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Raw { surface, .. } => f.debug_tuple("Raw").field(surface).finish(),
            Repr::Tokenized {
                tokens, surface, ..
            } => f
                .debug_struct("Tokenized")
                .field("tokens", tokens)
                .field("surface", surface)
                .finish(),
        }
    }
}
