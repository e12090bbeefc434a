//! Deterministic outline built from ranked topics alone
//!
//! Used whenever the generative step fails or yields nothing parseable.

use crate::types::Topic;
use cognito_domain::{Outline, OutlineSection, SuggestedLength};

/// Topic name used when the text produced no topics
pub const PLACEHOLDER_TOPIC: &str = "the main topic";

/// Total reported by the fallback outline unless lengths are summed
pub const FALLBACK_TOTAL_LENGTH: u32 = 600;

/// Number of topics that get an analysis section
const ANALYSIS_TOPICS: usize = 2;

/// Capitalize the first letter of every alphabetic run, lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }
    result
}

/// Builds the fallback outline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackOutlineBuilder {
    sum_lengths: bool,
}

impl FallbackOutlineBuilder {
    /// Builder reporting the fixed total of 600
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the sum of section minimums instead of the fixed total
    pub fn summing_lengths(mut self, sum_lengths: bool) -> Self {
        self.sum_lengths = sum_lengths;
        self
    }

    /// Build an introduction, up to two analysis sections and a conclusion
    pub fn build(&self, topics: &[Topic]) -> Outline {
        let names: Vec<&str> = topics.iter().map(|t| t.name.as_str()).collect();
        let primary = names.first().copied().unwrap_or(PLACEHOLDER_TOPIC);

        let mut sections = Vec::with_capacity(ANALYSIS_TOPICS + 2);
        sections.push(introduction(primary, names.get(1).copied()));

        if names.is_empty() {
            sections.push(analysis(PLACEHOLDER_TOPIC));
        } else {
            sections.extend(names.iter().take(ANALYSIS_TOPICS).map(|name| analysis(name)));
        }

        sections.push(conclusion(primary));

        let total_suggested_length = if self.sum_lengths {
            Outline::sum_of_minimums(&sections)
        } else {
            FALLBACK_TOTAL_LENGTH
        };

        Outline {
            sections,
            total_suggested_length,
            writing_style: None,
        }
    }
}

fn introduction(primary: &str, secondary: Option<&str>) -> OutlineSection {
    let scope = match secondary {
        Some(secondary) => {
            format!("Introduce the relationship between {} and {}", primary, secondary)
        }
        None => format!("Outline the scope of {}", primary),
    };
    OutlineSection::new("Introduction", SuggestedLength::FRAME).with_key_points([
        format!("Provide background on {}", primary),
        scope,
        "State the purpose and main argument of the document".to_string(),
    ])
}

fn analysis(name: &str) -> OutlineSection {
    OutlineSection::new(format!("Analysis of {}", title_case(name)), SuggestedLength::BODY)
        .with_key_points([
            format!("Examine the key aspects of {}", name),
            format!("Discuss the significance of {}", name),
            format!("Provide examples related to {}", name),
        ])
}

fn conclusion(primary: &str) -> OutlineSection {
    OutlineSection::new("Conclusion", SuggestedLength::FRAME).with_key_points([
        format!("Summarize the main points about {}", primary),
        "Reflect on the broader implications".to_string(),
        "Offer final thoughts and recommendations".to_string(),
    ])
}

/// Fallback outline with the fixed total of 600
pub fn build_fallback_outline(topics: &[Topic]) -> Outline {
    FallbackOutlineBuilder::new().build(topics)
}
