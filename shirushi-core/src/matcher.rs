//! Dictionary matching over indexed text

use std::collections::HashMap;

use aho_corasick::AhoCorasick;

use crate::entity::Entity;
use crate::error::{LabelError, Result};
use crate::text::IndexedText;

/// Multi-pattern dictionary matcher
///
/// Phrases are literal strings, each carrying a label. The matcher has a
/// two-phase lifecycle: register phrases with [`add`](Self::add), freeze the
/// dictionary with [`compile`](Self::compile), then run
/// [`find`](Self::find) any number of times. A compiled matcher is never
/// mutated by `find` and may be shared across threads.
pub struct DictionaryMatcher {
    phrases: Vec<String>,
    labels: Vec<String>,
    automaton: Option<AhoCorasick>,
}

impl DictionaryMatcher {
    /// Create an empty matcher
    pub fn new() -> Self {
        Self {
            phrases: Vec::new(),
            labels: Vec::new(),
            automaton: None,
        }
    }

    /// Register phrase -> label pairs
    ///
    /// Accepts any iterable mapping, e.g. a `HashMap<String, String>`.
    /// Registering after [`compile`](Self::compile) discards the compiled
    /// automaton; call `compile` again before matching.
    pub fn add<I, P, L>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: Into<String>,
    {
        for (phrase, label) in patterns {
            self.phrases.push(phrase.into());
            self.labels.push(label.into());
        }
        self.automaton = None;
    }

    /// Freeze the dictionary into a search automaton
    pub fn compile(&mut self) -> Result<()> {
        let automaton = AhoCorasick::new(&self.phrases)
            .map_err(|e| LabelError::AutomatonBuild(e.to_string()))?;
        log::debug!("compiled dictionary automaton with {} phrases", self.phrases.len());
        self.automaton = Some(automaton);
        Ok(())
    }

    /// Whether [`compile`](Self::compile) has been called since the last
    /// dictionary change
    pub fn is_compiled(&self) -> bool {
        self.automaton.is_some()
    }

    /// Find every dictionary occurrence in a text
    ///
    /// Runs the automaton over the text's surface string, reporting
    /// overlapping hits, and keeps each hit whose character span the text
    /// validates. Hits that fail validation — spans that straddle or land
    /// inside a token of a tokenized text — are dropped. Emitted entities
    /// stay in character offset space; the output order is unspecified.
    pub fn find(&self, text: &IndexedText) -> Result<Vec<Entity>> {
        let automaton = self.automaton.as_ref().ok_or(LabelError::NotCompiled)?;
        let surface = text.as_str();

        // The automaton reports byte offsets; matching spans whole characters,
        // so every hit boundary lands on a character boundary and these maps
        // cover all of them.
        let mut start_chars = HashMap::new();
        let mut end_chars = HashMap::new();
        for (char_index, (byte_index, ch)) in surface.char_indices().enumerate() {
            start_chars.insert(byte_index, char_index);
            end_chars.insert(byte_index + ch.len_utf8(), char_index);
        }

        let mut entities = Vec::new();
        for hit in automaton.find_overlapping_iter(surface) {
            let (Some(&start), Some(&end)) = (start_chars.get(&hit.start()), end_chars.get(&hit.end()))
            else {
                continue;
            };
            if !text.validate(start, end) {
                log::trace!("dropping unalignable hit at chars ({start}, {end})");
                continue;
            }
            let label = self.labels[hit.pattern().as_usize()].clone();
            entities.push(Entity::new(start, end, label)?);
        }
        Ok(entities)
    }
}

impl Default for DictionaryMatcher {
    fn default() -> Self {
        Self::new()
    }
}
