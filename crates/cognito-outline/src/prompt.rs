//! LLM prompt engineering for outline generation

use cognito_domain::{GenerationRequest, StyleAnalysis, StyleExample};

/// System role message for the outline call
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates detailed document outlines.";

/// Builds the generation request for an outline
pub struct PromptBuilder {
    text: String,
    topics: Vec<String>,
    word_count: usize,
    style: Option<StyleAnalysis>,
    style_examples: Vec<StyleExample>,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: String) -> Self {
        Self {
            text,
            topics: Vec::new(),
            word_count: 0,
            style: None,
            style_examples: Vec::new(),
        }
    }

    /// Name the key topics
    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }

    /// Word count of the source, for length guidance
    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = word_count;
        self
    }

    /// Add style metrics
    pub fn with_style(mut self, style: Option<StyleAnalysis>) -> Self {
        self.style = style;
        self
    }

    /// Add reference style examples
    pub fn with_style_examples(mut self, examples: Vec<StyleExample>) -> Self {
        self.style_examples = examples;
        self
    }

    /// Build the user message
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Task
        prompt.push_str("Create a detailed document outline based on the following text.\n\n");

        // 2. The text to outline
        prompt.push_str("Text:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");

        // 3. Topics
        if self.topics.is_empty() {
            prompt.push_str("Key topics identified: none, derive them from the text.\n\n");
        } else {
            prompt.push_str(&format!(
                "Key topics identified: {}\n\n",
                self.topics.join(", ")
            ));
        }

        // 4. Length guidance
        if self.word_count > 0 {
            prompt.push_str(&format!(
                "Length guidance: the source notes contain {} words. Scale the suggested \
                 lengths so the finished document develops them fully.\n\n",
                self.word_count
            ));
        }

        // 5. Style guidance
        prompt.push_str(&self.style_guidance());
        prompt.push('\n');

        // 6. Style examples
        if let Some(summary) = self.style_examples_summary() {
            prompt.push_str(&summary);
            prompt.push_str("\n\n");
        }

        // 7. Output format
        prompt.push_str(FORMAT_INSTRUCTIONS);

        prompt
    }

    /// Build the complete chat request
    pub fn build_request(&self, temperature: f32, max_tokens: u32) -> GenerationRequest {
        GenerationRequest::new(SYSTEM_PROMPT, self.build())
            .with_temperature(temperature)
            .with_max_tokens(max_tokens)
    }

    fn style_guidance(&self) -> String {
        let metrics = match &self.style {
            Some(style) if style.has_metrics() => &style.style_metrics,
            _ => return GENERIC_STYLE_GUIDANCE.to_string(),
        };

        let mut guidance = String::from("Writing style analysis:\n");
        if let Some(length) = metrics.avg_sentence_length {
            guidance.push_str(&format!("- Average sentence length: {:.1} words\n", length));
        }
        if !metrics.verb_tenses.is_empty() {
            let tenses: Vec<String> = metrics
                .verb_tenses
                .iter()
                .map(|(tense, count)| format!("{} {}", tense, count))
                .collect();
            guidance.push_str(&format!("- Verb tenses: {}\n", tenses.join(", ")));
        }
        guidance
    }

    fn style_examples_summary(&self) -> Option<String> {
        if self.style_examples.is_empty() {
            return None;
        }

        let lengths: Vec<f64> = self
            .style_examples
            .iter()
            .filter_map(|e| e.style.style_metrics.avg_sentence_length)
            .collect();

        let mut summary = format!("Style examples: {} reference texts", self.style_examples.len());
        if !lengths.is_empty() {
            let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
            summary.push_str(&format!(", average sentence length {:.1} words", mean));
        }
        summary.push('.');
        Some(summary)
    }
}

const GENERIC_STYLE_GUIDANCE: &str =
    "Writing style: no metrics available. Use clear, direct sentences in a consistent tense.\n";

const FORMAT_INSTRUCTIONS: &str = r#"Include:
1. An introduction section
2. Main body sections for each key topic
3. A conclusion section
4. Three or four specific key points under each section

Format every section exactly like this:

[Section Title] (Suggested Length: 150-200)
- [Key point]
- [Key point]
- [Key point]

Suggested Length is a word range. Use 150-200 for the introduction and the
conclusion and 300-400 for body sections unless the material needs more.
Return only the outline, no commentary."#;
