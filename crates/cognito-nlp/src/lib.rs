//! Cognito NLP
//!
//! Deterministic linguistic preprocessing for the outline pipeline.
//!
//! # Overview
//!
//! [`HeuristicExtractor`] implements the [`FeatureExtractor`] contract with a
//! rule-based tokenizer, part-of-speech tagger and noun-phrase chunker. No
//! models are loaded; identical input always yields identical output.
//!
//! On top of any `FeatureExtractor` this crate builds the text, style and
//! structure summaries that travel with an outline request:
//!
//! - [`preprocess_text`]: word statistics, frequent lemmas, entities
//! - [`analyze_writing_style`]: sentence length, verb tenses, punctuation
//! - [`analyze_text_structure`]: paragraphs, sentence types, transitions
//! - [`batch_process_texts`]: style examples from a corpus
//!
//! # Example Usage
//!
//! ```
//! use cognito_domain::FeatureExtractor;
//! use cognito_nlp::{preprocess_text, HeuristicExtractor};
//!
//! let extractor = HeuristicExtractor::new();
//! let doc = extractor.extract("Machine learning changes research.").unwrap();
//! assert_eq!(doc.sentences.len(), 1);
//!
//! let analysis = preprocess_text(&extractor, "Cats sleep. Dogs bark.").unwrap();
//! assert_eq!(analysis.statistics.sentence_count, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod analysis;
mod chunker;
mod error;
mod extractor;
mod lexicon;
mod tagger;
mod tokenizer;

pub use analysis::{
    analyze_text_structure, analyze_writing_style, batch_process_texts, preprocess_text,
    structure_analysis_from_document, style_analysis_from_document, text_analysis_from_document,
    COMMON_WORDS_LIMIT, DEFAULT_BATCH_LIMIT,
};
pub use error::FeatureExtractionError;
pub use extractor::{HeuristicExtractor, DEFAULT_MAX_TEXT_LENGTH};

// Re-export the contract so callers need only this crate
pub use cognito_domain::FeatureExtractor;
