//! Precomputed text and style statistics
//!
//! These types travel with an outline request. Every field has a serde
//! default so partial analyses deserialize cleanly; consumers treat missing
//! data as "unknown", never as an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Basic counts over a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Words, excluding punctuation and whitespace
    #[serde(default)]
    pub word_count: usize,

    /// Sentences
    #[serde(default)]
    pub sentence_count: usize,

    /// Mean characters per word, rounded to 2 places
    #[serde(default)]
    pub avg_word_length: f64,

    /// Token counts per part-of-speech label
    #[serde(default)]
    pub pos_distribution: BTreeMap<String, usize>,
}

/// Linguistic summary of a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Content lemmas joined by spaces (stopwords and punctuation removed)
    #[serde(default)]
    pub preprocessed_text: String,

    /// Counts
    #[serde(default)]
    pub statistics: TextStatistics,

    /// Most frequent content lemmas, most frequent first
    #[serde(default)]
    pub common_words: Vec<(String, usize)>,

    /// `(text, label)` entity mentions
    #[serde(default)]
    pub named_entities: Vec<(String, String)>,
}

impl TextAnalysis {
    /// Analysis carrying only a word count
    pub fn with_word_count(word_count: usize) -> Self {
        Self {
            statistics: TextStatistics {
                word_count,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Style measurements of a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMetrics {
    /// Mean non-punctuation tokens per sentence
    #[serde(default)]
    pub avg_sentence_length: Option<f64>,

    /// Verb counts per tense label
    #[serde(default)]
    pub verb_tenses: BTreeMap<String, usize>,

    /// Counts per punctuation mark
    #[serde(default)]
    pub punctuation_usage: BTreeMap<String, usize>,
}

/// Writing style analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleAnalysis {
    /// Measurements
    #[serde(default)]
    pub style_metrics: StyleMetrics,
}

impl StyleAnalysis {
    /// Tense used by the most verbs, `"Present"` when nothing was counted
    ///
    /// Ties resolve to the first label in key order.
    pub fn recommended_tense(&self) -> String {
        let mut best: Option<(&String, usize)> = None;
        for (tense, &count) in &self.style_metrics.verb_tenses {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((tense, count)),
            }
        }
        best.map(|(tense, _)| tense.clone())
            .unwrap_or_else(|| "Present".to_string())
    }

    /// Whether any metric is present
    pub fn has_metrics(&self) -> bool {
        self.style_metrics.avg_sentence_length.is_some()
            || !self.style_metrics.verb_tenses.is_empty()
    }
}

/// Processed reference text used as a style example
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleExample {
    /// Text statistics of the example
    #[serde(flatten)]
    pub analysis: TextAnalysis,

    /// Style of the example
    #[serde(flatten)]
    pub style: StyleAnalysis,
}

/// Sentence type counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceTypes {
    /// Declarative sentences
    pub statements: usize,
    /// Sentences containing a question mark
    pub questions: usize,
    /// Sentences with a subordinate clause
    pub complex: usize,
}

/// Paragraph and flow structure of a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    /// Non-empty paragraphs (blank-line separated)
    pub num_paragraphs: usize,

    /// Mean words per paragraph
    pub avg_paragraph_length: f64,

    /// Sentence type counts
    pub sentence_types: SentenceTypes,

    /// Sentences containing a transition word
    pub transitions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_tense_majority() {
        let mut style = StyleAnalysis::default();
        style.style_metrics.verb_tenses.insert("Past".to_string(), 2);
        style.style_metrics.verb_tenses.insert("Pres".to_string(), 5);
        assert_eq!(style.recommended_tense(), "Pres");
    }

    #[test]
    fn test_recommended_tense_tie_uses_key_order() {
        let mut style = StyleAnalysis::default();
        style.style_metrics.verb_tenses.insert("Pres".to_string(), 3);
        style.style_metrics.verb_tenses.insert("Past".to_string(), 3);
        assert_eq!(style.recommended_tense(), "Past");
    }

    #[test]
    fn test_recommended_tense_empty() {
        assert_eq!(StyleAnalysis::default().recommended_tense(), "Present");
    }

    #[test]
    fn test_partial_style_deserializes() {
        let style: StyleAnalysis = serde_json::from_str(r#"{"style_metrics": {}}"#).unwrap();
        assert!(!style.has_metrics());

        let style: StyleAnalysis = serde_json::from_str("{}").unwrap();
        assert_eq!(style.style_metrics.avg_sentence_length, None);
    }

    #[test]
    fn test_text_analysis_from_word_count_only() {
        let analysis: TextAnalysis =
            serde_json::from_str(r#"{"statistics": {"word_count": 42}}"#).unwrap();
        assert_eq!(analysis, TextAnalysis::with_word_count(42));
    }

    #[test]
    fn test_style_example_flattened() {
        let example: StyleExample = serde_json::from_str(
            r#"{"statistics": {"word_count": 10}, "style_metrics": {"avg_sentence_length": 12.5}}"#,
        )
        .unwrap();
        assert_eq!(example.analysis.statistics.word_count, 10);
        assert_eq!(example.style.style_metrics.avg_sentence_length, Some(12.5));
    }
}
