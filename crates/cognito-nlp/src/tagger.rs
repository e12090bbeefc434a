//! Rule-based part-of-speech tagging
//!
//! Closed-class words are looked up; open-class words are guessed from
//! suffixes and the previous tag. Good enough to find noun phrases and verb
//! tenses in plain prose.

use crate::lexicon::{self, contains};
use crate::tokenizer::{RawToken, Span};
use cognito_domain::{PosTag, Tense};
use std::collections::HashSet;

/// Past-tense auxiliaries
const PAST_AUXILIARIES: &[&str] = &[
    "could", "did", "had", "might", "should", "was", "were", "would",
];

fn is_capitalized(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

fn is_closed_class(lower: &str) -> bool {
    contains(lexicon::DETERMINERS, lower)
        || contains(lexicon::PRONOUNS, lower)
        || contains(lexicon::AUXILIARIES, lower)
        || contains(lexicon::COORDINATORS, lower)
        || contains(lexicon::SUBORDINATORS, lower)
        || contains(lexicon::ADPOSITIONS, lower)
        || contains(lexicon::PARTICLES, lower)
        || contains(lexicon::ADVERBS, lower)
}

/// Lowercase forms of words written capitalized in mid-sentence
fn proper_forms(tokens: &[RawToken<'_>], sentences: &[Span]) -> HashSet<String> {
    let mut forms = HashSet::new();
    for &(start, end) in sentences {
        for token in tokens.iter().take(end).skip(start + 1) {
            if is_capitalized(token.text) {
                let lower = token.text.to_lowercase();
                if !is_closed_class(&lower) {
                    forms.insert(lower);
                }
            }
        }
    }
    forms
}

/// Tag every token; tags are returned in token order
pub(crate) fn tag(tokens: &[RawToken<'_>], sentences: &[Span]) -> Vec<(PosTag, Option<Tense>)> {
    let proper = proper_forms(tokens, sentences);
    let mut tags = vec![(PosTag::Other, None); tokens.len()];

    for &(start, end) in sentences {
        let mut prev: Option<PosTag> = None;
        for idx in start..end {
            let next = tokens.get(idx + 1).filter(|_| idx + 1 < end).map(|t| t.text);
            let tagged = tag_word(tokens[idx].text, idx == start, prev, next, &proper);
            tags[idx] = tagged;
            prev = Some(tagged.0);
        }
    }

    tags
}

fn tag_word(
    text: &str,
    sentence_start: bool,
    prev: Option<PosTag>,
    next: Option<&str>,
    proper: &HashSet<String>,
) -> (PosTag, Option<Tense>) {
    if !text.chars().any(char::is_alphanumeric) {
        return (PosTag::Punctuation, None);
    }

    let lower = text.to_lowercase();
    let lower = lower.as_str();

    if text.chars().next().is_some_and(|c| c.is_ascii_digit())
        || contains(lexicon::NUMBER_WORDS, lower)
    {
        return (PosTag::Numeral, None);
    }

    if let Some(tag) = closed_class(lower, next) {
        return tag;
    }

    if is_capitalized(text) {
        let name_like = !sentence_start
            || proper.contains(lower)
            || next.is_some_and(|n| is_capitalized(n) && n.chars().all(char::is_alphanumeric));
        if name_like {
            return (PosTag::ProperNoun, None);
        }
    }

    open_class(lower, prev)
}

fn closed_class(lower: &str, next: Option<&str>) -> Option<(PosTag, Option<Tense>)> {
    let tag = if contains(lexicon::DETERMINERS, lower) {
        (PosTag::Determiner, None)
    } else if contains(lexicon::PRONOUNS, lower) {
        (PosTag::Pronoun, None)
    } else if contains(lexicon::AUXILIARIES, lower) {
        let tense = if PAST_AUXILIARIES.contains(&lower) {
            Tense::Past
        } else {
            Tense::Present
        };
        (PosTag::Auxiliary, Some(tense))
    } else if contains(lexicon::COORDINATORS, lower) {
        (PosTag::CoordConj, None)
    } else if contains(lexicon::SUBORDINATORS, lower) {
        (PosTag::SubordConj, None)
    } else if contains(lexicon::PARTICLES, lower) {
        (PosTag::Particle, None)
    } else if lower == "to"
        && next.is_some_and(|n| contains(lexicon::COMMON_VERBS, &n.to_lowercase()))
    {
        (PosTag::Particle, None)
    } else if contains(lexicon::ADPOSITIONS, lower) {
        (PosTag::Adposition, None)
    } else if contains(lexicon::ADVERBS, lower) {
        (PosTag::Adverb, None)
    } else {
        return None;
    };
    Some(tag)
}

/// Whether `lower` is a third-person singular form of a common verb
fn is_third_person(lower: &str) -> bool {
    if let Some(stem) = lower.strip_suffix("ies") {
        return contains(lexicon::COMMON_VERBS, &format!("{}y", stem));
    }
    lower
        .strip_suffix("es")
        .is_some_and(|stem| contains(lexicon::COMMON_VERBS, stem))
        || lower
            .strip_suffix('s')
            .is_some_and(|stem| contains(lexicon::COMMON_VERBS, stem))
}

fn open_class(lower: &str, prev: Option<PosTag>) -> (PosTag, Option<Tense>) {
    let after_modifier = matches!(
        prev,
        Some(PosTag::Determiner | PosTag::Adjective | PosTag::Adposition | PosTag::Numeral)
    );
    let len = lower.chars().count();

    if contains(lexicon::ADJECTIVES, lower) {
        return (PosTag::Adjective, None);
    }

    if contains(lexicon::IRREGULAR_PAST, lower) {
        return (PosTag::Verb, Some(Tense::Past));
    }

    if contains(lexicon::COMMON_VERBS, lower) {
        return if after_modifier {
            (PosTag::Noun, None)
        } else {
            (PosTag::Verb, Some(Tense::Present))
        };
    }

    if is_third_person(lower) {
        let after_subject = matches!(
            prev,
            Some(PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun | PosTag::Adverb)
        );
        return if after_subject {
            (PosTag::Verb, Some(Tense::Present))
        } else {
            (PosTag::Noun, None)
        };
    }

    if len > 4 && lower.ends_with("ly") && !contains(lexicon::LY_NOUNS, lower) {
        return (PosTag::Adverb, None);
    }

    if len > 4 && lower.ends_with("ed") && !lower.ends_with("eed") {
        return if matches!(prev, Some(PosTag::Determiner | PosTag::Adjective | PosTag::Adverb)) {
            (PosTag::Adjective, None)
        } else {
            (PosTag::Verb, Some(Tense::Past))
        };
    }

    if len > 5 && lower.ends_with("ing") {
        let nominal_context = prev.is_none()
            || after_modifier
            || matches!(prev, Some(PosTag::Noun | PosTag::ProperNoun));
        return if nominal_context && prev != Some(PosTag::Auxiliary) {
            (PosTag::Noun, None)
        } else {
            (PosTag::Verb, Some(Tense::Present))
        };
    }

    const ADJECTIVE_SUFFIXES: &[&str] =
        &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];
    if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return (PosTag::Adjective, None);
    }

    (PosTag::Noun, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{split_sentences, tokenize};

    fn tags_of(text: &str) -> Vec<(String, PosTag)> {
        let tokens = tokenize(text);
        let sentences = split_sentences(&tokens);
        tag(&tokens, &sentences)
            .into_iter()
            .zip(tokens.iter())
            .map(|((pos, _), t)| (t.text.to_string(), pos))
            .collect()
    }

    fn pos(text: &str, word: &str) -> PosTag {
        tags_of(text)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, p)| p)
            .unwrap()
    }

    #[test]
    fn test_closed_class() {
        let text = "The dog and I sat on a mat because it was not warm.";
        assert_eq!(pos(text, "The"), PosTag::Determiner);
        assert_eq!(pos(text, "and"), PosTag::CoordConj);
        assert_eq!(pos(text, "I"), PosTag::Pronoun);
        assert_eq!(pos(text, "on"), PosTag::Adposition);
        assert_eq!(pos(text, "because"), PosTag::SubordConj);
        assert_eq!(pos(text, "was"), PosTag::Auxiliary);
        assert_eq!(pos(text, "not"), PosTag::Particle);
        assert_eq!(pos(text, "."), PosTag::Punctuation);
    }

    #[test]
    fn test_verbs_and_tense() {
        let tokens = tokenize("She walked home. He jumps high.");
        let sentences = split_sentences(&tokens);
        let tags = tag(&tokens, &sentences);
        assert_eq!(tags[1], (PosTag::Verb, Some(Tense::Past)));
        assert_eq!(tags[5], (PosTag::Verb, Some(Tense::Present)));
    }

    #[test]
    fn test_third_person_ies() {
        assert_eq!(pos("Quality varies widely.", "varies"), PosTag::Verb);
        assert_eq!(pos("She worries often.", "worries"), PosTag::Verb);
    }

    #[test]
    fn test_irregular_past() {
        assert_eq!(pos("They went to the park.", "went"), PosTag::Verb);
    }

    #[test]
    fn test_verb_form_after_determiner_is_noun() {
        assert_eq!(pos("We took a walk.", "walk"), PosTag::Noun);
        assert_eq!(pos("The plays were long.", "plays"), PosTag::Noun);
    }

    #[test]
    fn test_proper_nouns() {
        let text = "John and Sarah went for a walk in Paris.";
        assert_eq!(pos(text, "Sarah"), PosTag::ProperNoun);
        assert_eq!(pos(text, "Paris"), PosTag::ProperNoun);
    }

    #[test]
    fn test_sentence_initial_name_seen_elsewhere() {
        let text = "Alice writes code. We like Alice.";
        let tags = tags_of(text);
        assert_eq!(tags[0].1, PosTag::ProperNoun);
    }

    #[test]
    fn test_sentence_initial_common_word() {
        assert_eq!(pos("Cats sleep all day.", "Cats"), PosTag::Noun);
    }

    #[test]
    fn test_compound_gerund_is_noun() {
        assert_eq!(pos("Machine learning is useful.", "learning"), PosTag::Noun);
        assert_eq!(pos("They are learning fast.", "learning"), PosTag::Verb);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(pos("He spoke quickly.", "quickly"), PosTag::Adverb);
        assert_eq!(pos("My family is here.", "family"), PosTag::Noun);
        assert_eq!(pos("A dangerous road.", "dangerous"), PosTag::Adjective);
        assert_eq!(pos("The tired dog.", "tired"), PosTag::Adjective);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(pos("We have 3 cats.", "3"), PosTag::Numeral);
        assert_eq!(pos("We have three cats.", "three"), PosTag::Numeral);
    }

    #[test]
    fn test_infinitive_particle() {
        assert_eq!(pos("I want to learn.", "to"), PosTag::Particle);
        assert_eq!(pos("I went to school.", "to"), PosTag::Adposition);
    }
}
