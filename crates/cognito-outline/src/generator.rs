//! Core outline generator

use crate::config::OutlineConfig;
use crate::error::{GenerationFailure, OutlineError};
use crate::fallback::FallbackOutlineBuilder;
use crate::parser::parse_outline;
use crate::prompt::PromptBuilder;
use crate::topics::TopicRanker;
use crate::types::{OutlineRequest, Topic};
use cognito_domain::{FeatureExtractor, GenerationRequest, LlmProvider, Outline, OutlineSection};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The OutlineGenerator turns free-form notes into a structured outline
pub struct OutlineGenerator<L, F>
where
    L: LlmProvider,
    F: FeatureExtractor,
{
    llm_provider: Arc<L>,
    feature_extractor: Arc<F>,
    config: OutlineConfig,
}

impl<L, F> OutlineGenerator<L, F>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Into<GenerationFailure>,
    F: FeatureExtractor,
    F::Error: std::error::Error + Send + Sync + 'static,
{
    /// Create a new OutlineGenerator
    pub fn new(llm_provider: L, feature_extractor: F, config: OutlineConfig) -> Self {
        Self::from_shared(Arc::new(llm_provider), Arc::new(feature_extractor), config)
    }

    /// Create a generator over collaborators shared with other owners
    pub fn from_shared(
        llm_provider: Arc<L>,
        feature_extractor: Arc<F>,
        config: OutlineConfig,
    ) -> Self {
        Self {
            llm_provider,
            feature_extractor,
            config,
        }
    }

    /// Create a generator, rejecting invalid configuration
    pub fn try_new(
        llm_provider: L,
        feature_extractor: F,
        config: OutlineConfig,
    ) -> Result<Self, OutlineError> {
        config.validate().map_err(OutlineError::Config)?;
        Ok(Self::new(llm_provider, feature_extractor, config))
    }

    /// Active configuration
    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Generate an outline
    ///
    /// Only feature extraction errors are returned. Every generation problem
    /// resolves to the fallback outline.
    pub async fn generate_outline(&self, request: OutlineRequest) -> Result<Outline, OutlineError> {
        info!(
            "Starting outline generation, text length {}",
            request.text.len()
        );

        let analysis = self
            .feature_extractor
            .extract(&request.text)
            .map_err(|e| OutlineError::FeatureExtraction(Box::new(e)))?;

        let topics = TopicRanker::from_config(&self.config).rank(&request.text, &analysis);

        let generation = self.build_generation_request(&request, &topics);
        debug!("Prompt length: {} chars", generation.user.len());

        let outline = match self.draft_sections(generation).await {
            Ok(sections) => {
                info!("Parsed {} sections from completion", sections.len());
                Outline::from_sections(sections)
            }
            Err(failure) => {
                warn!("Falling back to topic outline: {}", failure);
                self.fallback_outline(&topics)
            }
        };

        info!(
            "Outline complete: {} sections, total length {}",
            outline.sections.len(),
            outline.total_suggested_length
        );

        Ok(outline.with_writing_style(request.writing_style()))
    }

    /// The outline returned when generation fails for these topics
    pub fn fallback_outline(&self, topics: &[Topic]) -> Outline {
        FallbackOutlineBuilder::new()
            .summing_lengths(self.config.sum_fallback_lengths)
            .build(topics)
    }

    fn build_generation_request(
        &self,
        request: &OutlineRequest,
        topics: &[Topic],
    ) -> GenerationRequest {
        let text = truncate_chars(&request.text, self.config.max_text_length);
        if text.len() < request.text.len() {
            debug!(
                "Prompt text truncated to {} chars",
                self.config.max_text_length
            );
        }

        PromptBuilder::new(text.to_string())
            .with_topics(
                topics
                    .iter()
                    .take(self.config.prompt_topics)
                    .map(|t| t.name.clone())
                    .collect(),
            )
            .with_word_count(request.text_analysis.statistics.word_count)
            .with_style(request.style_analysis.clone())
            .with_style_examples(request.style_examples.clone())
            .build_request(self.config.temperature, self.config.max_tokens)
    }

    /// One generation call, parsed into sections
    async fn draft_sections(
        &self,
        generation: GenerationRequest,
    ) -> Result<Vec<OutlineSection>, GenerationFailure> {
        let completion = timeout(self.config.generation_timeout(), self.call_llm(generation))
            .await
            .map_err(|_| GenerationFailure::Timeout)??;

        if completion.trim().is_empty() {
            return Err(GenerationFailure::Empty);
        }
        debug!("LLM response length: {} chars", completion.len());

        let sections = parse_outline(&completion);
        if sections.is_empty() {
            return Err(GenerationFailure::ParseDegeneracy);
        }
        Ok(sections)
    }

    /// Call the LLM provider
    async fn call_llm(&self, generation: GenerationRequest) -> Result<String, GenerationFailure> {
        let llm = Arc::clone(&self.llm_provider);

        debug!("Calling model '{}'", llm.model_name());

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || llm.generate(&generation).map_err(Into::into))
            .await
            .map_err(|e| GenerationFailure::Service(format!("Task join error: {}", e)))?
    }
}

/// Prefix of `text` holding at most `max_chars` characters
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
