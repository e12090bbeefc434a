//! Topic extraction and ranking from noun chunks
//!
//! Each qualifying noun chunk adds `1 + position_weight` to its topic, where
//! `position_weight = 1 - start / document_length`. Topics mentioned early
//! and often rank highest.

use crate::config::OutlineConfig;
use crate::types::Topic;
use cognito_domain::DocumentAnalysis;
use std::collections::HashMap;
use tracing::debug;

/// Default number of topics kept
pub const DEFAULT_MAX_TOPICS: usize = 5;

/// Default word limit for a topic
pub const DEFAULT_MAX_TOPIC_WORDS: usize = 3;

/// Ranks noun chunks into topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicRanker {
    max_topics: usize,
    max_topic_words: usize,
}

impl Default for TopicRanker {
    fn default() -> Self {
        Self {
            max_topics: DEFAULT_MAX_TOPICS,
            max_topic_words: DEFAULT_MAX_TOPIC_WORDS,
        }
    }
}

impl TopicRanker {
    /// Create a ranker with explicit limits
    pub fn new(max_topics: usize, max_topic_words: usize) -> Self {
        Self {
            max_topics,
            max_topic_words,
        }
    }

    /// Create a ranker from generator configuration
    pub fn from_config(config: &OutlineConfig) -> Self {
        Self::new(config.max_topics, config.max_topic_words)
    }

    /// Rank the topics of `text`, best first
    ///
    /// Ties keep first-seen order. Blank text yields no topics.
    pub fn rank(&self, text: &str, analysis: &DocumentAnalysis) -> Vec<Topic> {
        if text.trim().is_empty() || analysis.is_empty() {
            return Vec::new();
        }

        let doc_len = analysis.len() as f64;
        let mut topics: Vec<Topic> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for chunk in &analysis.noun_chunks {
            if chunk.root_is_stop || chunk.word_count() > self.max_topic_words {
                continue;
            }

            let key = chunk.text.to_lowercase();
            let position_weight = 1.0 - (chunk.start as f64 / doc_len);

            let slot = match index.get(&key) {
                Some(&slot) => slot,
                None => {
                    index.insert(key.clone(), topics.len());
                    topics.push(Topic::new(key));
                    topics.len() - 1
                }
            };

            let topic = &mut topics[slot];
            topic.score += 1.0 + position_weight;
            let sentence = analysis.sentence_text(chunk);
            if !sentence.is_empty() {
                topic.context.insert(sentence.to_string());
            }
        }

        // Stable: equal scores keep first-seen order
        topics.sort_by(|a, b| b.score.total_cmp(&a.score));
        topics.truncate(self.max_topics);

        debug!(
            "Ranked {} topics: {:?}",
            topics.len(),
            topics.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
        );

        topics
    }
}

/// Rank topics with the default limits (5 topics, 3 words each)
pub fn extract_key_topics(text: &str, analysis: &DocumentAnalysis) -> Vec<Topic> {
    TopicRanker::default().rank(text, analysis)
}
