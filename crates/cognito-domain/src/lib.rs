//! Cognito Domain Layer
//!
//! Value types and collaborator traits shared by every Cognito crate.
//!
//! ## Key Concepts
//!
//! - **DocumentAnalysis**: tokens, sentences, noun chunks and entities produced
//!   by a feature extractor for one input text
//! - **TextAnalysis / StyleAnalysis**: precomputed statistics that accompany an
//!   outline request
//! - **Outline**: ordered sections with key points and suggested lengths
//! - **SuggestedLength**: a `min-max` word range; `min` is the bound that
//!   outline totals are built from
//!
//! ## Architecture
//!
//! - Pure data and logic, no I/O
//! - Trait definitions for the two external collaborators
//!   (`FeatureExtractor`, `LlmProvider`); implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod document;
pub mod outline;
pub mod traits;

// Re-exports for convenience
pub use analysis::{
    SentenceTypes, StructureAnalysis, StyleAnalysis, StyleExample, StyleMetrics, TextAnalysis,
    TextStatistics,
};
pub use document::{DocumentAnalysis, NamedEntity, NounChunk, PosTag, Sentence, Tense, Token};
pub use outline::{Outline, OutlineSection, SuggestedLength, WritingStyle};
pub use traits::{
    FeatureExtractor, GenerationRequest, LlmProvider, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
