//! End-to-end checks of the heuristic extractor on realistic prose

use cognito_nlp::{
    analyze_text_structure, batch_process_texts, preprocess_text, FeatureExtractor,
    HeuristicExtractor,
};
use proptest::prelude::*;

const ESSAY: &str = "Machine learning is reshaping scientific research. \
Researchers apply machine learning to protein folding and climate models.\n\n\
However, the models require large datasets. Because data collection is expensive, \
smaller labs struggle. Will open datasets close the gap?";

#[test]
fn test_noun_chunks_cover_key_phrases() {
    let doc = HeuristicExtractor::new().extract(ESSAY).unwrap();
    let chunks: Vec<String> = doc
        .noun_chunks
        .iter()
        .map(|c| c.text.to_lowercase())
        .collect();

    assert!(chunks.iter().any(|c| c == "machine learning"));
    assert!(chunks.iter().any(|c| c.contains("datasets")));
    for chunk in &doc.noun_chunks {
        assert!(chunk.start < chunk.end);
        assert!(chunk.sentence < doc.sentences.len());
    }
}

#[test]
fn test_sentence_text_round_trips_chunks() {
    let doc = HeuristicExtractor::new().extract(ESSAY).unwrap();
    for chunk in &doc.noun_chunks {
        let sentence = doc.sentence_text(chunk);
        let first_word = chunk.text.split_whitespace().next().unwrap();
        assert!(sentence.contains(first_word));
    }
}

#[test]
fn test_structure_of_essay() {
    let structure = analyze_text_structure(&HeuristicExtractor::new(), ESSAY).unwrap();
    assert_eq!(structure.num_paragraphs, 2);
    assert_eq!(structure.sentence_types.questions, 1);
    assert_eq!(structure.sentence_types.complex, 1);
    assert_eq!(structure.transitions, 1);
}

#[test]
fn test_style_examples_serialize_flat() {
    let examples = batch_process_texts(&HeuristicExtractor::new(), &[ESSAY], 10);
    let json = serde_json::to_value(&examples[0]).unwrap();
    assert!(json.get("statistics").is_some());
    assert!(json.get("style_metrics").is_some());
}

#[test]
fn test_common_words_limited() {
    let analysis = preprocess_text(&HeuristicExtractor::new(), ESSAY).unwrap();
    assert!(analysis.common_words.len() <= 10);
    assert_eq!(analysis.common_words[0].0, "machine");
}

proptest! {
    #[test]
    fn prop_extract_never_panics(text in "[a-zA-Z .,!?'\\-\n]{0,200}") {
        let doc = HeuristicExtractor::new().extract(&text).unwrap();
        for sentence in &doc.sentences {
            prop_assert!(sentence.start < sentence.end);
            prop_assert!(sentence.end <= doc.tokens.len());
        }
    }

    #[test]
    fn prop_chunks_are_ordered_and_disjoint(text in "[a-zA-Z .]{0,200}") {
        let doc = HeuristicExtractor::new().extract(&text).unwrap();
        for pair in doc.noun_chunks.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }
}
