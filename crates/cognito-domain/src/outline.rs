//! Outline model
//!
//! An `Outline` is an ordered list of sections. Each section carries a
//! `SuggestedLength` word range; the outline total is built from the minimum
//! bound of each range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suggested word range for a section, written `min-max`
///
/// `min <= max` is expected but not enforced: ranges are taken as written.
///
/// # Examples
///
/// ```
/// use cognito_domain::SuggestedLength;
///
/// let length: SuggestedLength = "150-200".parse().unwrap();
/// assert_eq!(length.min, 150);
/// assert_eq!(length.to_string(), "150-200");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SuggestedLength {
    /// Lower bound in words
    pub min: u32,
    /// Upper bound in words
    pub max: u32,
}

impl SuggestedLength {
    /// Length used for introduction and conclusion sections
    pub const FRAME: SuggestedLength = SuggestedLength { min: 150, max: 200 };

    /// Length used for body sections
    pub const BODY: SuggestedLength = SuggestedLength { min: 300, max: 400 };

    /// Create a new range
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Read a range from free text
    ///
    /// The text is split on `-` and every piece that parses as an integer is
    /// kept. Exactly two integers make a range; anything else is `None`.
    /// Bounds above `u32::MAX` saturate.
    pub fn from_range_text(text: &str) -> Option<Self> {
        let bounds: Vec<u32> = text
            .split('-')
            .filter_map(|piece| parse_bound(piece.trim()))
            .collect();

        match bounds.as_slice() {
            [min, max] => Some(Self::new(*min, *max)),
            _ => None,
        }
    }

    /// Default length for a section title
    ///
    /// Titles mentioning an introduction or conclusion get `FRAME`, all other
    /// titles get `BODY`.
    pub fn default_for_title(title: &str) -> Self {
        let lowered = title.to_lowercase();
        if lowered.contains("introduction") || lowered.contains("conclusion") {
            Self::FRAME
        } else {
            Self::BODY
        }
    }
}

fn parse_bound(piece: &str) -> Option<u32> {
    match piece.parse::<u32>() {
        Ok(bound) => Some(bound),
        Err(_) if !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_digit()) => {
            Some(u32::MAX)
        }
        Err(_) => None,
    }
}

impl fmt::Display for SuggestedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Error returned when a string is not a `min-max` range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLengthError(String);

impl fmt::Display for ParseLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid suggested length range: '{}'", self.0)
    }
}

impl std::error::Error for ParseLengthError {}

impl FromStr for SuggestedLength {
    type Err = ParseLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_range_text(s).ok_or_else(|| ParseLengthError(s.to_string()))
    }
}

impl From<SuggestedLength> for String {
    fn from(length: SuggestedLength) -> Self {
        length.to_string()
    }
}

impl TryFrom<String> for SuggestedLength {
    type Error = ParseLengthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One section of an outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineSection {
    /// Section title, never empty
    pub title: String,

    /// Key points in presentation order
    pub key_points: Vec<String>,

    /// Suggested word range
    pub suggested_length: SuggestedLength,
}

impl OutlineSection {
    /// Create a section with no key points
    pub fn new(title: impl Into<String>, suggested_length: SuggestedLength) -> Self {
        Self {
            title: title.into(),
            key_points: Vec::new(),
            suggested_length,
        }
    }

    /// Set the key points
    pub fn with_key_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_points = points.into_iter().map(Into::into).collect();
        self
    }
}

/// Style guidance attached to an outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingStyle {
    /// Average sentence length of the source, in words
    pub sentence_length: f64,

    /// Tense the source mostly uses
    pub recommended_tense: String,
}

/// A structured document outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Sections in order
    pub sections: Vec<OutlineSection>,

    /// Total suggested length in words
    pub total_suggested_length: u32,

    /// Style guidance, when a style analysis was available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writing_style: Option<WritingStyle>,
}

impl Outline {
    /// Build an outline whose total is the sum of section minimums
    pub fn from_sections(sections: Vec<OutlineSection>) -> Self {
        let total_suggested_length = Self::sum_of_minimums(&sections);
        Self {
            sections,
            total_suggested_length,
            writing_style: None,
        }
    }

    /// Sum of the minimum bound of every section
    pub fn sum_of_minimums(sections: &[OutlineSection]) -> u32 {
        sections
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.suggested_length.min))
    }

    /// Attach style guidance
    pub fn with_writing_style(mut self, style: Option<WritingStyle>) -> Self {
        self.writing_style = style;
        self
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a written range reads back as the same range
        #[test]
        fn test_display_parse_consistent(min in 0u32..100_000, max in 0u32..100_000) {
            let length = SuggestedLength::new(min, max);
            prop_assert_eq!(length.to_string().parse::<SuggestedLength>(), Ok(length));
        }

        /// Property: range parsing never panics on arbitrary text
        #[test]
        fn test_range_text_total(text in ".*") {
            let _ = SuggestedLength::from_range_text(&text);
        }

        /// Property: outline total equals the sum of section minimums
        #[test]
        fn test_total_matches_sections(mins in proptest::collection::vec(0u32..2_000, 1..8)) {
            let sections: Vec<_> = mins
                .iter()
                .enumerate()
                .map(|(i, &min)| {
                    let length = SuggestedLength::new(min, min + 50);
                    OutlineSection::new(format!("Section {}", i), length)
                })
                .collect();
            let outline = Outline::from_sections(sections);
            prop_assert_eq!(outline.total_suggested_length, mins.iter().sum::<u32>());
        }
    }
}
