//! Request types and ranked topics

use cognito_domain::{StyleAnalysis, StyleExample, TextAnalysis, WritingStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Request to generate an outline
///
/// Only `text` is required; every analysis is best-effort context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlineRequest {
    /// Raw input text
    pub text: String,

    /// Precomputed text statistics
    #[serde(default)]
    pub text_analysis: TextAnalysis,

    /// Precomputed style metrics
    #[serde(default)]
    pub style_analysis: Option<StyleAnalysis>,

    /// Processed reference texts
    #[serde(default)]
    pub style_examples: Vec<StyleExample>,
}

impl OutlineRequest {
    /// Request carrying only the text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the text analysis
    pub fn with_text_analysis(mut self, analysis: TextAnalysis) -> Self {
        self.text_analysis = analysis;
        self
    }

    /// Set the style analysis
    pub fn with_style_analysis(mut self, style: StyleAnalysis) -> Self {
        self.style_analysis = Some(style);
        self
    }

    /// Set the style examples
    pub fn with_style_examples(mut self, examples: Vec<StyleExample>) -> Self {
        self.style_examples = examples;
        self
    }

    /// Writing style recommendation derived from the style analysis
    pub fn writing_style(&self) -> Option<WritingStyle> {
        self.style_analysis.as_ref().map(|style| WritingStyle {
            sentence_length: style.style_metrics.avg_sentence_length.unwrap_or(0.0),
            recommended_tense: style.recommended_tense(),
        })
    }
}

/// A ranked theme of the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Lowercased noun-chunk text
    pub name: String,

    /// Accumulated position-weighted score
    pub score: f64,

    /// Distinct sentences mentioning the topic
    pub context: BTreeSet<String>,
}

impl Topic {
    /// Topic with no occurrences yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0.0,
            context: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognito_domain::StyleMetrics;
    use std::collections::BTreeMap;

    #[test]
    fn test_request_from_minimal_json() {
        let request: OutlineRequest = serde_json::from_str(r#"{"text": "Notes"}"#).unwrap();
        assert_eq!(request.text, "Notes");
        assert_eq!(request.text_analysis.statistics.word_count, 0);
        assert!(request.style_analysis.is_none());
        assert!(request.style_examples.is_empty());
    }

    #[test]
    fn test_request_with_partial_style() {
        let request: OutlineRequest = serde_json::from_str(
            r#"{
                "text": "Notes",
                "style_analysis": {"style_metrics": {"verb_tenses": {"Past": 4}}}
            }"#,
        )
        .unwrap();
        let style = request.writing_style().unwrap();
        assert_eq!(style.sentence_length, 0.0);
        assert_eq!(style.recommended_tense, "Past");
    }

    #[test]
    fn test_writing_style_absent() {
        assert!(OutlineRequest::new("text").writing_style().is_none());
    }

    #[test]
    fn test_writing_style_from_metrics() {
        let style = StyleAnalysis {
            style_metrics: StyleMetrics {
                avg_sentence_length: Some(14.5),
                verb_tenses: BTreeMap::from([
                    ("Past".to_string(), 2),
                    ("Pres".to_string(), 7),
                ]),
                punctuation_usage: BTreeMap::new(),
            },
        };
        let request = OutlineRequest::new("text").with_style_analysis(style);
        let writing = request.writing_style().unwrap();
        assert_eq!(writing.sentence_length, 14.5);
        assert_eq!(writing.recommended_tense, "Pres");
    }
}
