//! Cognito Outline
//!
//! Turns free-form notes into a structured document outline.
//!
//! # Overview
//!
//! The generator ranks the topics of a text, asks an LLM for an outline in
//! a small bracket grammar, parses the answer and, when anything goes
//! wrong, builds a deterministic outline from the topics alone. Callers
//! always receive an outline unless the text itself cannot be analyzed.
//!
//! # Architecture
//!
//! ```text
//! Text → FeatureExtractor → TopicRanker → PromptBuilder → LLM
//!                                                          ↓
//!                 Outline ← FallbackOutlineBuilder ← (no sections)
//!                 Outline ← OutlineFormatParser    ← (sections)
//! ```
//!
//! # Key Features
//!
//! - **Topic Ranking**: noun chunks scored by frequency and position
//! - **Single Generation Call**: one attempt per request, under a timeout
//! - **Tolerant Parsing**: a two-state line machine that skips noise
//! - **Deterministic Fallback**: introduction, topic analyses, conclusion
//!
//! # Example Usage
//!
//! ```no_run
//! use cognito_llm::MockProvider;
//! use cognito_nlp::HeuristicExtractor;
//! use cognito_outline::{OutlineConfig, OutlineGenerator, OutlineRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("[Introduction] (Suggested Length: 150-200)\n- Context");
//! let generator = OutlineGenerator::new(llm, HeuristicExtractor::new(), OutlineConfig::default());
//!
//! let outline = generator
//!     .generate_outline(OutlineRequest::new("Notes about composting and soil health."))
//!     .await?;
//!
//! for section in &outline.sections {
//!     println!("{} ({})", section.title, section.suggested_length);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod fallback;
mod generator;
mod parser;
mod prompt;
mod topics;
mod types;


pub use config::OutlineConfig;
pub use error::{GenerationFailure, OutlineError};
pub use fallback::{
    build_fallback_outline, title_case, FallbackOutlineBuilder, FALLBACK_TOTAL_LENGTH,
    PLACEHOLDER_TOPIC,
};
pub use generator::OutlineGenerator;
pub use parser::parse_outline;
pub use prompt::{PromptBuilder, SYSTEM_PROMPT};
pub use topics::{extract_key_topics, TopicRanker, DEFAULT_MAX_TOPICS, DEFAULT_MAX_TOPIC_WORDS};
pub use types::{OutlineRequest, Topic};
