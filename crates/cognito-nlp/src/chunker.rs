//! Noun-phrase chunking and named-entity spotting over tagged tokens

use crate::lexicon::{self, contains};
use cognito_domain::{NamedEntity, NounChunk, PosTag, Sentence, Token};

fn chunk_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find base noun phrases: `DET? (ADJ|NUM)* (NOUN|PROPN)+`, plus lone pronouns
///
/// The root of a chunk is its last nominal token.
pub(crate) fn noun_chunks(tokens: &[Token], sentences: &[Sentence]) -> Vec<NounChunk> {
    let mut chunks = Vec::new();

    for (sentence_idx, sentence) in sentences.iter().enumerate() {
        let end = sentence.end.min(tokens.len());
        let mut i = sentence.start.min(end);

        while i < end {
            if tokens[i].pos == PosTag::Pronoun {
                chunks.push(NounChunk {
                    text: tokens[i].text.clone(),
                    start: i,
                    end: i + 1,
                    root_is_stop: tokens[i].is_stop,
                    sentence: sentence_idx,
                });
                i += 1;
                continue;
            }

            let start = i;
            let mut j = i;
            if tokens[j].pos == PosTag::Determiner {
                j += 1;
            }
            while j < end && matches!(tokens[j].pos, PosTag::Adjective | PosTag::Numeral) {
                j += 1;
            }
            let nominal_start = j;
            while j < end && tokens[j].pos.is_nominal() {
                j += 1;
            }

            if j > nominal_start {
                chunks.push(NounChunk {
                    text: chunk_text(&tokens[start..j]),
                    start,
                    end: j,
                    root_is_stop: tokens[j - 1].is_stop,
                    sentence: sentence_idx,
                });
                i = j;
            } else {
                i += 1;
            }
        }
    }

    chunks
}

fn entity_label(span: &[Token]) -> &'static str {
    let last = span.last().map(|t| t.lemma.as_str()).unwrap_or("");
    if contains(lexicon::ORG_SUFFIXES, last) {
        "ORG"
    } else if span.iter().any(|t| contains(lexicon::DATE_WORDS, &t.lemma)) {
        "DATE"
    } else {
        "NAME"
    }
}

/// Find entity mentions: runs of proper nouns, and numbers
pub(crate) fn entities(tokens: &[Token], sentences: &[Sentence]) -> Vec<NamedEntity> {
    let mut found = Vec::new();

    for sentence in sentences {
        let end = sentence.end.min(tokens.len());
        let mut i = sentence.start.min(end);

        while i < end {
            match tokens[i].pos {
                PosTag::ProperNoun => {
                    let start = i;
                    while i < end && tokens[i].pos == PosTag::ProperNoun {
                        i += 1;
                    }
                    let span = &tokens[start..i];
                    found.push(NamedEntity {
                        text: chunk_text(span),
                        label: entity_label(span).to_string(),
                    });
                }
                PosTag::Numeral => {
                    found.push(NamedEntity {
                        text: tokens[i].text.clone(),
                        label: "CARDINAL".to_string(),
                    });
                    i += 1;
                }
                _ => i += 1,
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, pos: PosTag) -> Token {
        let lemma = text.to_lowercase();
        Token {
            is_stop: contains(lexicon::STOPWORDS, &lemma),
            text: text.to_string(),
            lemma,
            pos,
            is_punct: pos == PosTag::Punctuation,
            tense: None,
        }
    }

    fn sentence(start: usize, end: usize) -> Sentence {
        Sentence {
            text: String::new(),
            start,
            end,
        }
    }

    #[test]
    fn test_noun_chunks() {
        let tokens = vec![
            token("The", PosTag::Determiner),
            token("quick", PosTag::Adjective),
            token("brown", PosTag::Adjective),
            token("fox", PosTag::Noun),
            token("jumps", PosTag::Verb),
            token("over", PosTag::Adposition),
            token("the", PosTag::Determiner),
            token("dog", PosTag::Noun),
            token(".", PosTag::Punctuation),
        ];
        let chunks = noun_chunks(&tokens, &[sentence(0, 9)]);
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["The quick brown fox", "the dog"]);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, 4);
        assert!(!chunks[0].root_is_stop);
    }

    #[test]
    fn test_pronoun_chunk_root_is_stop() {
        let tokens = vec![token("It", PosTag::Pronoun), token("works", PosTag::Verb)];
        let chunks = noun_chunks(&tokens, &[sentence(0, 2)]);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].root_is_stop);
    }

    #[test]
    fn test_chunks_do_not_cross_sentences() {
        let tokens = vec![
            token("data", PosTag::Noun),
            token(".", PosTag::Punctuation),
            token("science", PosTag::Noun),
        ];
        let chunks = noun_chunks(&tokens, &[sentence(0, 2), sentence(2, 3)]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].sentence, 1);
    }

    #[test]
    fn test_determiner_without_noun() {
        let tokens = vec![token("the", PosTag::Determiner), token("big", PosTag::Adjective)];
        assert!(noun_chunks(&tokens, &[sentence(0, 2)]).is_empty());
    }

    #[test]
    fn test_entities() {
        let tokens = vec![
            token("Acme", PosTag::ProperNoun),
            token("Corp", PosTag::ProperNoun),
            token("hired", PosTag::Verb),
            token("Jane", PosTag::ProperNoun),
            token("Doe", PosTag::ProperNoun),
            token("on", PosTag::Adposition),
            token("Monday", PosTag::ProperNoun),
            token("for", PosTag::Adposition),
            token("12", PosTag::Numeral),
            token("weeks", PosTag::Noun),
        ];
        let found = entities(&tokens, &[sentence(0, tokens.len())]);
        let pairs: Vec<(&str, &str)> = found
            .iter()
            .map(|e| (e.text.as_str(), e.label.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Acme Corp", "ORG"),
                ("Jane Doe", "NAME"),
                ("Monday", "DATE"),
                ("12", "CARDINAL"),
            ]
        );
    }
}
