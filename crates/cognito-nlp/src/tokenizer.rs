//! Word tokenization and sentence segmentation

/// A token as a slice of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// Newlines between the previous token and this one
    pub newlines_before: usize,
}

impl RawToken<'_> {
    /// Whether the token ends a sentence (`.`, `!`, `?` or a run of them)
    pub fn is_terminal(&self) -> bool {
        self.text.chars().all(is_terminal_char)
    }
}

/// Sentence boundaries over a token list, as `[start, end)` token spans
pub(crate) type Span = (usize, usize);

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_terminal_char(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_connector(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

/// Split text into word and punctuation tokens
///
/// Words keep internal apostrophes and hyphens ("don't", "state-of-the-art"),
/// numbers keep internal separators ("3.5", "1,200").
/// Runs of sentence-final punctuation ("...", "?!") form one token; every
/// other punctuation character is its own token.
pub(crate) fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_end = |i: usize| chars.get(i).map(|&(b, _)| b).unwrap_or(text.len());

    let mut tokens = Vec::new();
    let mut newlines = 0;
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if c.is_whitespace() {
            if c == '\n' {
                newlines += 1;
            }
            i += 1;
            continue;
        }

        let mut j = i + 1;
        if is_word_char(c) {
            while j < chars.len() {
                let next = chars[j].1;
                if is_word_char(next) {
                    j += 1;
                } else if is_connector(next)
                    && chars.get(j + 1).is_some_and(|&(_, after)| after.is_alphanumeric())
                {
                    j += 2;
                } else if matches!(next, '.' | ',')
                    && chars[j - 1].1.is_ascii_digit()
                    && chars.get(j + 1).is_some_and(|&(_, after)| after.is_ascii_digit())
                {
                    j += 2;
                } else {
                    break;
                }
            }
        } else if is_terminal_char(c) {
            while j < chars.len() && is_terminal_char(chars[j].1) {
                j += 1;
            }
        }

        let end = byte_end(j);
        tokens.push(RawToken {
            text: &text[start..end],
            start,
            end,
            newlines_before: newlines,
        });
        newlines = 0;
        i = j;
    }

    tokens
}

/// Group tokens into sentences
///
/// A sentence ends after terminal punctuation or before a blank line.
pub(crate) fn split_sentences(tokens: &[RawToken<'_>]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;

    for (idx, token) in tokens.iter().enumerate() {
        if idx > start && token.newlines_before >= 2 {
            spans.push((start, idx));
            start = idx;
        }
        if token.is_terminal() {
            spans.push((start, idx + 1));
            start = idx + 1;
        }
    }

    if start < tokens.len() {
        spans.push((start, tokens.len()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[RawToken<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_words_and_punctuation() {
        let tokens = tokenize("The fox, quickly!");
        assert_eq!(texts(&tokens), vec!["The", "fox", ",", "quickly", "!"]);
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].end, 7);
    }

    #[test]
    fn test_tokenize_keeps_contractions_and_hyphens() {
        let tokens = tokenize("Don't use state-of-the-art tools - ever.");
        assert_eq!(
            texts(&tokens),
            vec!["Don't", "use", "state-of-the-art", "tools", "-", "ever", "."]
        );
    }

    #[test]
    fn test_tokenize_numbers() {
        let tokens = tokenize("It costs 3.5 or 1,200. Done");
        assert_eq!(texts(&tokens), vec!["It", "costs", "3.5", "or", "1,200", ".", "Done"]);
    }

    #[test]
    fn test_tokenize_groups_terminal_runs() {
        let tokens = tokenize("Wait... what?!");
        assert_eq!(texts(&tokens), vec!["Wait", "...", "what", "?!"]);
    }

    #[test]
    fn test_tokenize_counts_newlines() {
        let tokens = tokenize("one\n\ntwo");
        assert_eq!(tokens[1].newlines_before, 2);
    }

    #[test]
    fn test_tokenize_unicode() {
        let tokens = tokenize("café naïve");
        assert_eq!(texts(&tokens), vec!["café", "naïve"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n ").is_empty());
    }

    #[test]
    fn test_split_sentences() {
        let tokens = tokenize("Cats sleep. Dogs bark! Why?");
        let spans = split_sentences(&tokens);
        assert_eq!(spans, vec![(0, 3), (3, 6), (6, 8)]);
    }

    #[test]
    fn test_split_sentences_on_blank_line() {
        let tokens = tokenize("A heading\n\nBody text here");
        let spans = split_sentences(&tokens);
        assert_eq!(spans, vec![(0, 2), (2, 5)]);
    }

    #[test]
    fn test_split_sentences_trailing_fragment() {
        let tokens = tokenize("Done. and then");
        let spans = split_sentences(&tokens);
        assert_eq!(spans, vec![(0, 2), (2, 4)]);
    }
}
