//! Parse LLM output into outline sections
//!
//! The expected grammar is line based:
//!
//! ```text
//! [Section Title] (Suggested Length: 150-200)
//! - [Key point]
//! - [Key point]
//! ```
//!
//! Anything that is neither a header nor a bullet under an open section is
//! ignored, so chatter, markdown fences and numbering do not break parsing.

use cognito_domain::{OutlineSection, SuggestedLength};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.+?)\]\s*\(Suggested Length:\s*([^)]*)\)").unwrap()
});

enum ParseState {
    NoOpenSection,
    SectionOpen(OutlineSection),
}

/// Match a section header line, returning the title and the raw range text
fn parse_header(line: &str) -> Option<(&str, &str)> {
    let captures = HEADER.captures(line)?;
    let title = captures.get(1)?.as_str();
    if title.trim().is_empty() {
        return None;
    }
    let range = captures.get(2).map_or("", |m| m.as_str());
    Some((title, range))
}

/// Resolve a range like `300-400`, or the title-based default
fn resolve_length(title: &str, range: &str) -> SuggestedLength {
    SuggestedLength::from_range_text(range).unwrap_or_else(|| {
        debug!("Malformed length range '{}' for section '{}'", range, title);
        SuggestedLength::default_for_title(title)
    })
}

/// Text of a bullet line, without the dash and enclosing brackets
fn parse_bullet(line: &str) -> Option<&str> {
    let point = line
        .strip_prefix('-')?
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    (!point.is_empty()).then_some(point)
}

/// Parse a completion into sections
///
/// Returns an empty list when no header is found; callers treat that as a
/// failed parse.
pub fn parse_outline(response: &str) -> Vec<OutlineSection> {
    let mut sections = Vec::new();
    let mut state = ParseState::NoOpenSection;

    for line in response.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((title, range)) = parse_header(line) {
            if let ParseState::SectionOpen(section) = state {
                sections.push(section);
            }
            state =
                ParseState::SectionOpen(OutlineSection::new(title, resolve_length(title, range)));
            continue;
        }

        if let ParseState::SectionOpen(section) = &mut state {
            if line.starts_with('-') {
                if let Some(point) = parse_bullet(line) {
                    section.key_points.push(point.to_string());
                }
            }
        }
    }

    if let ParseState::SectionOpen(section) = state {
        sections.push(section);
    }

    debug!("Parsed {} sections", sections.len());
    sections
}
