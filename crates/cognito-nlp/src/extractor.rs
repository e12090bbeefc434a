//! Heuristic feature extractor
//!
//! A deterministic, rule-based `FeatureExtractor`. It does not aim at
//! the accuracy of a statistical parser; it aims at stable, explainable
//! noun chunks and tense counts for outline generation.

use crate::chunker;
use crate::error::FeatureExtractionError;
use crate::lexicon::{self, contains};
use crate::tagger;
use crate::tokenizer::{split_sentences, tokenize};
use cognito_domain::{DocumentAnalysis, FeatureExtractor, PosTag, Sentence, Token};
use std::borrow::Cow;
use tracing::debug;

/// Default maximum input length in characters
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 100_000;

/// Rule-based tokenizer, tagger and chunker
#[derive(Debug, Clone)]
pub struct HeuristicExtractor {
    max_text_length: usize,
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicExtractor {
    /// Create an extractor with the default length limit
    pub fn new() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    /// Set the maximum accepted input length in characters
    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    /// Maximum accepted input length in characters
    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    fn validate(&self, text: &str) -> Result<(), FeatureExtractionError> {
        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(FeatureExtractionError::TextTooLong(
                length,
                self.max_text_length,
            ));
        }
        Ok(())
    }
}

fn is_stray_control(c: char) -> bool {
    c.is_control() && !c.is_whitespace()
}

/// Text with non-whitespace control characters (NUL, DEL, ...) removed
fn strip_control_chars(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_stray_control) {
        debug!("Stripping control characters from input");
        Cow::Owned(text.chars().filter(|&c| !is_stray_control(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Lowercase form with plural nouns and third-person verbs reduced
fn lemmatize(text: &str, pos: PosTag) -> String {
    let lower = text.to_lowercase();
    match pos {
        PosTag::Noun => {
            if lower.len() > 4 && lower.ends_with("ies") {
                format!("{}y", &lower[..lower.len() - 3])
            } else if lower.len() > 3
                && lower.ends_with('s')
                && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
            {
                lower[..lower.len() - 1].to_string()
            } else {
                lower
            }
        }
        PosTag::Verb => lower
            .strip_suffix('s')
            .filter(|stem| contains(lexicon::COMMON_VERBS, stem))
            .map(str::to_string)
            .unwrap_or(lower),
        _ => lower,
    }
}

impl FeatureExtractor for HeuristicExtractor {
    type Error = FeatureExtractionError;

    fn extract(&self, text: &str) -> Result<DocumentAnalysis, Self::Error> {
        self.validate(text)?;
        let cleaned = strip_control_chars(text);
        let text = cleaned.as_ref();

        let raw = tokenize(text);
        let spans = split_sentences(&raw);
        let tags = tagger::tag(&raw, &spans);

        let tokens: Vec<Token> = raw
            .iter()
            .zip(tags)
            .map(|(raw_token, (pos, tense))| {
                let lower = raw_token.text.to_lowercase();
                Token {
                    text: raw_token.text.to_string(),
                    lemma: lemmatize(raw_token.text, pos),
                    pos,
                    is_stop: contains(lexicon::STOPWORDS, &lower),
                    is_punct: pos == PosTag::Punctuation,
                    tense,
                }
            })
            .collect();

        let sentences: Vec<Sentence> = spans
            .iter()
            .map(|&(start, end)| Sentence {
                text: text[raw[start].start..raw[end - 1].end].to_string(),
                start,
                end,
            })
            .collect();

        let noun_chunks = chunker::noun_chunks(&tokens, &sentences);
        let entities = chunker::entities(&tokens, &sentences);

        debug!(
            "Extracted {} tokens, {} sentences, {} noun chunks",
            tokens.len(),
            sentences.len(),
            noun_chunks.len()
        );

        Ok(DocumentAnalysis {
            tokens,
            sentences,
            noun_chunks,
            entities,
        })
    }
}
