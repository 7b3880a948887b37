//! Tag-sequence serialization
//!
//! Renders a text plus a resolved, non-overlapping entity set into a
//! standard annotation format: raw JSON spans, or per-atom IOB2 / BILOU /
//! IOBES tag lines. Entities arrive in character offset space and are
//! aligned to the text's native atoms here.

use serde::Serialize;

use crate::entity::Entity;
use crate::error::{LabelError, Result};
use crate::text::IndexedText;

/// An output format for a resolved entity set
pub trait Serializer {
    /// Render the text and its entities as one output string
    fn save(&self, text: &IndexedText, entities: &[Entity]) -> Result<String>;
}

#[derive(Debug, Clone, Copy)]
enum TagScheme {
    Iob2,
    Bilou,
    Iobes,
}

impl TagScheme {
    /// Tag pair for single-atom and span-final positions
    fn unit_and_last(self) -> (&'static str, &'static str) {
        match self {
            // IOB2 has no dedicated tags; the generic B/I shapes apply
            TagScheme::Iob2 => ("B", "I"),
            TagScheme::Bilou => ("U", "L"),
            TagScheme::Iobes => ("S", "E"),
        }
    }
}

/// Tag every native atom, one tag per position
///
/// Each entity is aligned to native offsets first; a position already
/// holding a non-"O" tag means the caller handed over overlapping spans,
/// which is a contract violation surfaced as `OverlappingSpans` rather than
/// silently overwritten.
fn tag_atoms(text: &IndexedText, entities: &[Entity], scheme: TagScheme) -> Result<Vec<String>> {
    let mut tags = vec!["O".to_string(); text.atom_len()];
    for entity in entities {
        let (start, end) = text.align(entity.start_offset, entity.end_offset)?;

        if let Some(position) = (start..=end).find(|&i| tags[i] != "O") {
            return Err(LabelError::OverlappingSpans { position });
        }

        let (unit, last) = scheme.unit_and_last();
        if start == end {
            tags[start] = format!("{unit}-{}", entity.label);
            continue;
        }
        tags[start] = format!("B-{}", entity.label);
        for tag in &mut tags[start + 1..end] {
            *tag = format!("I-{}", entity.label);
        }
        tags[end] = format!("{last}-{}", entity.label);
    }
    Ok(tags)
}

/// One "atom<TAB>tag" line per native atom
fn render_lines(text: &IndexedText, tags: &[String]) -> String {
    text.atoms()
        .zip(tags)
        .map(|(atom, tag)| format!("{atom}\t{tag}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// IOB2: `B-` opens every entity, `I-` continues it
pub struct Iob2Serializer;

impl Serializer for Iob2Serializer {
    fn save(&self, text: &IndexedText, entities: &[Entity]) -> Result<String> {
        let tags = tag_atoms(text, entities, TagScheme::Iob2)?;
        Ok(render_lines(text, &tags))
    }
}

/// BILOU: `U-` for single atoms, `B-`/`I-`/`L-` for longer spans
pub struct BilouSerializer;

impl Serializer for BilouSerializer {
    fn save(&self, text: &IndexedText, entities: &[Entity]) -> Result<String> {
        let tags = tag_atoms(text, entities, TagScheme::Bilou)?;
        Ok(render_lines(text, &tags))
    }
}

/// IOBES: `S-` for single atoms, `B-`/`I-`/`E-` for longer spans
pub struct IobesSerializer;

impl Serializer for IobesSerializer {
    fn save(&self, text: &IndexedText, entities: &[Entity]) -> Result<String> {
        let tags = tag_atoms(text, entities, TagScheme::Iobes)?;
        Ok(render_lines(text, &tags))
    }
}

#[derive(Serialize)]
struct SpanRecord<'a> {
    start_offset: usize,
    end_offset: usize,
    label: &'a str,
}

#[derive(Serialize)]
struct Document<'a> {
    text: Vec<String>,
    tags: Vec<SpanRecord<'a>>,
}

/// Raw spans as one JSON object: `{"text": [...], "tags": [...]}`
///
/// No tag derivation; spans are emitted as native-offset triples.
pub struct JsonlSerializer;

impl Serializer for JsonlSerializer {
    fn save(&self, text: &IndexedText, entities: &[Entity]) -> Result<String> {
        let mut tags = Vec::with_capacity(entities.len());
        for entity in entities {
            let (start, end) = text.align(entity.start_offset, entity.end_offset)?;
            tags.push(SpanRecord {
                start_offset: start,
                end_offset: end,
                label: &entity.label,
            });
        }
        let document = Document {
            text: text.atoms().map(|atom| atom.into_owned()).collect(),
            tags,
        };
        Ok(serde_json::to_string(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_ja() -> IndexedText {
        IndexedText::raw("日本の首都は東京都です。")
    }

    fn tokenized_ja() -> IndexedText {
        let tokens = ["日本", "の", "首都", "は", "東京", "都", "です", "。"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        IndexedText::tokenized(tokens, vec![false; 8]).unwrap()
    }

    fn loc(start: usize, end: usize) -> Entity {
        Entity::new(start, end, "LOC").unwrap()
    }

    #[test]
    fn test_iob2_save() {
        let output = Iob2Serializer.save(&text_ja(), &[loc(6, 8)]).unwrap();
        assert_eq!(
            output,
            "日\tO\n本\tO\nの\tO\n首\tO\n都\tO\nは\tO\n東\tB-LOC\n京\tI-LOC\n都\tI-LOC\nで\tO\nす\tO\n。\tO"
        );
    }

    #[test]
    fn test_bilou_save() {
        let output = BilouSerializer.save(&text_ja(), &[loc(6, 8)]).unwrap();
        assert_eq!(
            output,
            "日\tO\n本\tO\nの\tO\n首\tO\n都\tO\nは\tO\n東\tB-LOC\n京\tI-LOC\n都\tL-LOC\nで\tO\nす\tO\n。\tO"
        );
    }

    #[test]
    fn test_iobes_save() {
        let output = IobesSerializer.save(&text_ja(), &[loc(6, 8)]).unwrap();
        assert_eq!(
            output,
            "日\tO\n本\tO\nの\tO\n首\tO\n都\tO\nは\tO\n東\tB-LOC\n京\tI-LOC\n都\tE-LOC\nで\tO\nす\tO\n。\tO"
        );
    }

    #[test]
    fn test_jsonl_save() {
        let output = JsonlSerializer.save(&text_ja(), &[loc(6, 8)]).unwrap();
        let expected = serde_json::json!({
            "text": ["日", "本", "の", "首", "都", "は", "東", "京", "都", "で", "す", "。"],
            "tags": [{"start_offset": 6, "end_offset": 8, "label": "LOC"}],
        });
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&output).unwrap(),
            expected
        );
    }

    #[test]
    fn test_single_atom_entity_tags() {
        let text = IndexedText::raw("abc");
        let entity = [Entity::new(1, 1, "PER").unwrap()];
        assert_eq!(
            Iob2Serializer.save(&text, &entity).unwrap(),
            "a\tO\nb\tB-PER\nc\tO"
        );
        assert_eq!(
            BilouSerializer.save(&text, &entity).unwrap(),
            "a\tO\nb\tU-PER\nc\tO"
        );
        assert_eq!(
            IobesSerializer.save(&text, &entity).unwrap(),
            "a\tO\nb\tS-PER\nc\tO"
        );
    }

    #[test]
    fn test_tokenized_alignment_in_save() {
        let output = Iob2Serializer.save(&tokenized_ja(), &[loc(6, 8)]).unwrap();
        assert_eq!(
            output,
            "日本\tO\nの\tO\n首都\tO\nは\tO\n東京\tB-LOC\n都\tI-LOC\nです\tO\n。\tO"
        );
    }

    #[test]
    fn test_tokenized_jsonl_uses_token_offsets() {
        let output = JsonlSerializer.save(&tokenized_ja(), &[loc(6, 8)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["tags"][0]["start_offset"], 4);
        assert_eq!(value["tags"][0]["end_offset"], 5);
        assert_eq!(value["text"][4], "東京");
    }

    #[test]
    fn test_overlapping_spans_rejected() {
        let err = Iob2Serializer
            .save(&text_ja(), &[loc(6, 7), loc(7, 8)])
            .unwrap_err();
        assert!(matches!(err, LabelError::OverlappingSpans { position: 7 }));
    }

    #[test]
    fn test_unalignable_entity_rejected() {
        // "京都" straddles the "東京"/"都" token boundary
        let err = Iob2Serializer
            .save(&tokenized_ja(), &[loc(7, 8)])
            .unwrap_err();
        assert!(matches!(
            err,
            LabelError::UnalignableOffset { start: 7, end: 8 }
        ));
    }

    #[test]
    fn test_no_entities_all_outside() {
        let output = Iob2Serializer.save(&IndexedText::raw("ab"), &[]).unwrap();
        assert_eq!(output, "a\tO\nb\tO");
    }
}
