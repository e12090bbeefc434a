//! Text, style and structure analyses built on a `FeatureExtractor`
//!
//! Each public function runs the extractor once and summarizes the result.
//! The `*_from_document` variants work on an existing `DocumentAnalysis`.

use crate::lexicon::{self, contains};
use cognito_domain::{
    DocumentAnalysis, FeatureExtractor, PosTag, SentenceTypes, StructureAnalysis, StyleAnalysis,
    StyleExample, StyleMetrics, TextAnalysis, TextStatistics,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Number of frequent words kept in `TextAnalysis::common_words`
pub const COMMON_WORDS_LIMIT: usize = 10;

/// Default cap for `batch_process_texts`
pub const DEFAULT_BATCH_LIMIT: usize = 1000;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Word statistics, frequent lemmas and entities of a text
pub fn preprocess_text<E: FeatureExtractor>(
    extractor: &E,
    text: &str,
) -> Result<TextAnalysis, E::Error> {
    let doc = extractor.extract(text)?;
    Ok(text_analysis_from_document(&doc))
}

/// Build a `TextAnalysis` from extracted features
pub fn text_analysis_from_document(doc: &DocumentAnalysis) -> TextAnalysis {
    let words: Vec<_> = doc.tokens.iter().filter(|t| !t.is_punct).collect();
    let word_count = words.len();
    let avg_word_length = if word_count > 0 {
        let chars: usize = words.iter().map(|t| t.text.chars().count()).sum();
        round2(chars as f64 / word_count as f64)
    } else {
        0.0
    };

    let content: Vec<&str> = doc
        .tokens
        .iter()
        .filter(|t| !t.is_stop && t.is_alpha())
        .map(|t| t.lemma.as_str())
        .collect();

    // First-seen order breaks frequency ties
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for &lemma in &content {
        match index.get(lemma) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(lemma, counts.len());
                counts.push((lemma.to_string(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(COMMON_WORDS_LIMIT);

    let mut pos_distribution = BTreeMap::new();
    for token in &doc.tokens {
        *pos_distribution
            .entry(token.pos.as_str().to_string())
            .or_insert(0) += 1;
    }

    TextAnalysis {
        preprocessed_text: content.join(" "),
        statistics: TextStatistics {
            word_count,
            sentence_count: doc.sentences.len(),
            avg_word_length,
            pos_distribution,
        },
        common_words: counts,
        named_entities: doc
            .entities
            .iter()
            .map(|e| (e.text.clone(), e.label.clone()))
            .collect(),
    }
}

/// Sentence length, verb tenses and punctuation habits of a text
pub fn analyze_writing_style<E: FeatureExtractor>(
    extractor: &E,
    text: &str,
) -> Result<StyleAnalysis, E::Error> {
    let doc = extractor.extract(text)?;
    Ok(style_analysis_from_document(&doc))
}

/// Build a `StyleAnalysis` from extracted features
pub fn style_analysis_from_document(doc: &DocumentAnalysis) -> StyleAnalysis {
    let avg_sentence_length = if doc.sentences.is_empty() {
        None
    } else {
        let total: usize = doc
            .sentences
            .iter()
            .map(|s| doc.sentence_tokens(s).iter().filter(|t| !t.is_punct).count())
            .sum();
        Some(round2(total as f64 / doc.sentences.len() as f64))
    };

    let mut verb_tenses = BTreeMap::new();
    let mut punctuation_usage = BTreeMap::new();
    for token in &doc.tokens {
        if token.pos == PosTag::Verb {
            let label = token.tense.map(|t| t.as_str()).unwrap_or("None");
            *verb_tenses.entry(label.to_string()).or_insert(0) += 1;
        }
        if token.is_punct {
            *punctuation_usage.entry(token.text.clone()).or_insert(0) += 1;
        }
    }

    StyleAnalysis {
        style_metrics: StyleMetrics {
            avg_sentence_length,
            verb_tenses,
            punctuation_usage,
        },
    }
}

/// Paragraph, sentence type and transition counts of a text
pub fn analyze_text_structure<E: FeatureExtractor>(
    extractor: &E,
    text: &str,
) -> Result<StructureAnalysis, E::Error> {
    let doc = extractor.extract(text)?;
    Ok(structure_analysis_from_document(text, &doc))
}

/// Build a `StructureAnalysis` from a text and its extracted features
pub fn structure_analysis_from_document(text: &str, doc: &DocumentAnalysis) -> StructureAnalysis {
    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    let avg_paragraph_length = if paragraphs.is_empty() {
        0.0
    } else {
        let words: usize = paragraphs.iter().map(|p| p.split_whitespace().count()).sum();
        words as f64 / paragraphs.len() as f64
    };

    let mut sentence_types = SentenceTypes::default();
    let mut transitions = 0;
    for sentence in &doc.sentences {
        if sentence.text.contains('?') {
            sentence_types.questions += 1;
        } else if doc
            .sentence_tokens(sentence)
            .iter()
            .any(|t| t.pos == PosTag::SubordConj)
        {
            sentence_types.complex += 1;
        } else {
            sentence_types.statements += 1;
        }

        let has_transition = sentence.text.split_whitespace().any(|word| {
            let word = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            contains(lexicon::TRANSITIONS, &word)
        });
        if has_transition {
            transitions += 1;
        }
    }

    StructureAnalysis {
        num_paragraphs: paragraphs.len(),
        avg_paragraph_length,
        sentence_types,
        transitions,
    }
}

/// Analyze up to `max_texts` texts as style examples
///
/// Texts the extractor rejects are skipped with a warning.
pub fn batch_process_texts<E, S>(extractor: &E, texts: &[S], max_texts: usize) -> Vec<StyleExample>
where
    E: FeatureExtractor,
    E::Error: std::fmt::Display,
    S: AsRef<str>,
{
    let mut examples = Vec::new();
    for (i, text) in texts.iter().take(max_texts).enumerate() {
        match extractor.extract(text.as_ref()) {
            Ok(doc) => examples.push(StyleExample {
                analysis: text_analysis_from_document(&doc),
                style: style_analysis_from_document(&doc),
            }),
            Err(e) => warn!("Skipping style example {}: {}", i, e),
        }
    }
    debug!("Processed {} style examples", examples.len());
    examples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeuristicExtractor;

    const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. \
                          It was a sunny day in the park. \
                          John and Sarah went for a walk while their dog played fetch.";

    #[test]
    fn test_preprocess_statistics() {
        let analysis = preprocess_text(&HeuristicExtractor::new(), SAMPLE).unwrap();
        assert_eq!(analysis.statistics.sentence_count, 3);
        assert_eq!(analysis.statistics.word_count, 29);
        assert!(analysis.statistics.avg_word_length > 3.0);
        assert_eq!(analysis.common_words[0], ("dog".to_string(), 2));
        assert!(!analysis.preprocessed_text.contains("the "));
        assert!(analysis
            .named_entities
            .contains(&("Sarah".to_string(), "NAME".to_string())));
    }

    #[test]
    fn test_preprocess_empty() {
        let analysis = preprocess_text(&HeuristicExtractor::new(), "").unwrap();
        assert_eq!(analysis.statistics.word_count, 0);
        assert_eq!(analysis.statistics.avg_word_length, 0.0);
        assert!(analysis.common_words.is_empty());
    }

    #[test]
    fn test_writing_style() {
        let style = analyze_writing_style(&HeuristicExtractor::new(), SAMPLE).unwrap();
        let metrics = &style.style_metrics;
        assert_eq!(metrics.avg_sentence_length, Some(9.67));
        assert_eq!(metrics.punctuation_usage.get("."), Some(&3));
        assert_eq!(metrics.verb_tenses.get("Past"), Some(&2));
        assert_eq!(style.recommended_tense(), "Past");
    }

    #[test]
    fn test_writing_style_empty() {
        let style = analyze_writing_style(&HeuristicExtractor::new(), "").unwrap();
        assert_eq!(style.style_metrics.avg_sentence_length, None);
        assert!(!style.has_metrics());
    }

    #[test]
    fn test_text_structure() {
        let text = "Why does it matter? Because we care.\n\nHowever, the data is thin. It is late.";
        let structure = analyze_text_structure(&HeuristicExtractor::new(), text).unwrap();
        assert_eq!(structure.num_paragraphs, 2);
        assert_eq!(structure.avg_paragraph_length, 7.5);
        assert_eq!(structure.sentence_types.questions, 1);
        assert_eq!(structure.sentence_types.complex, 1);
        assert_eq!(structure.sentence_types.statements, 2);
        assert_eq!(structure.transitions, 1);
    }

    #[test]
    fn test_batch_respects_limit_and_skips_failures() {
        let extractor = HeuristicExtractor::new().with_max_text_length(20);
        let texts = ["Short text.", "This one is far too long to accept.", "Tiny.", "Extra."];
        let examples = batch_process_texts(&extractor, &texts, 3);
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].analysis.statistics.word_count, 2);
    }
}
