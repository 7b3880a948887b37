//! End-to-end pipeline tests: match, resolve, serialize

use shirushi_core::{
    BilouSerializer, DictionaryMatcher, IndexedText, Iob2Serializer, JsonlSerializer,
    LongestMatch, MaximizedCount, Resolver, Serializer,
};

fn loc_matcher() -> DictionaryMatcher {
    let mut matcher = DictionaryMatcher::new();
    matcher.add(vec![("東京", "LOC"), ("東京都", "LOC"), ("京都", "LOC")]);
    matcher.compile().unwrap();
    matcher
}

fn tokenized_ja() -> IndexedText {
    let tokens = ["日本", "の", "首都", "は", "東京", "都", "です", "。"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    IndexedText::tokenized(tokens, vec![false; 8]).unwrap()
}

#[test]
fn raw_text_longest_match_iob2() {
    let matcher = loc_matcher();
    let text = IndexedText::raw("日本の首都は東京都です。");

    let entities = LongestMatch.resolve(matcher.find(&text).unwrap());
    assert_eq!(entities.len(), 1);
    assert_eq!((entities[0].start_offset, entities[0].end_offset), (6, 8));

    let output = Iob2Serializer.save(&text, &entities).unwrap();
    assert_eq!(
        output,
        "日\tO\n本\tO\nの\tO\n首\tO\n都\tO\nは\tO\n東\tB-LOC\n京\tI-LOC\n都\tI-LOC\nで\tO\nす\tO\n。\tO"
    );
}

#[test]
fn tokenized_text_longest_match_bilou() {
    let matcher = loc_matcher();
    let text = tokenized_ja();

    let entities = LongestMatch.resolve(matcher.find(&text).unwrap());
    let output = BilouSerializer.save(&text, &entities).unwrap();
    assert_eq!(
        output,
        "日本\tO\nの\tO\n首都\tO\nは\tO\n東京\tB-LOC\n都\tL-LOC\nです\tO\n。\tO"
    );
}

#[test]
fn maximized_count_keeps_non_overlapping_hits() {
    let mut matcher = DictionaryMatcher::new();
    matcher.add(vec![("ab", "X"), ("cd", "X"), ("abcd", "Y")]);
    matcher.compile().unwrap();

    let text = IndexedText::raw("abcd");
    let entities = MaximizedCount.resolve(matcher.find(&text).unwrap());
    assert_eq!(entities.len(), 2);
    assert!(entities.iter().all(|e| e.label == "X"));
}

#[test]
fn jsonl_round_trip_through_serde() {
    let matcher = loc_matcher();
    let text = tokenized_ja();

    let entities = LongestMatch.resolve(matcher.find(&text).unwrap());
    let output = JsonlSerializer.save(&text, &entities).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["text"].as_array().unwrap().len(), 8);
    assert_eq!(value["tags"][0]["label"], "LOC");
    assert_eq!(value["tags"][0]["start_offset"], 4);
    assert_eq!(value["tags"][0]["end_offset"], 5);
}

#[test]
fn shared_matcher_across_documents() {
    let matcher = loc_matcher();
    let documents = ["東京です。", "京都です。", "大阪です。"];

    let counts: Vec<usize> = documents
        .iter()
        .map(|doc| {
            let text = IndexedText::raw(*doc);
            LongestMatch.resolve(matcher.find(&text).unwrap()).len()
        })
        .collect();
    assert_eq!(counts, vec![1, 1, 0]);
}
