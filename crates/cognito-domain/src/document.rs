//! Document features produced by a feature extractor
//!
//! A `DocumentAnalysis` is the tokenized, tagged view of one input text.
//! Token indices are the shared coordinate system: sentences and noun chunks
//! refer to half-open `[start, end)` token spans.

/// Coarse part-of-speech tag (Universal Dependencies labels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Proper noun
    ProperNoun,
    /// Main verb
    Verb,
    /// Auxiliary verb
    Auxiliary,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Pronoun
    Pronoun,
    /// Determiner
    Determiner,
    /// Preposition or postposition
    Adposition,
    /// Coordinating conjunction
    CoordConj,
    /// Subordinating conjunction
    SubordConj,
    /// Particle
    Particle,
    /// Number
    Numeral,
    /// Punctuation
    Punctuation,
    /// Anything else
    Other,
}

impl PosTag {
    /// Get the Universal Dependencies label
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Auxiliary => "AUX",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Adposition => "ADP",
            PosTag::CoordConj => "CCONJ",
            PosTag::SubordConj => "SCONJ",
            PosTag::Particle => "PART",
            PosTag::Numeral => "NUM",
            PosTag::Punctuation => "PUNCT",
            PosTag::Other => "X",
        }
    }

    /// Whether the tag heads a noun phrase
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// Grammatical tense of a verb token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tense {
    /// Past tense
    Past,
    /// Present tense
    Present,
}

impl Tense {
    /// Morphological feature label (`Past` / `Pres`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Past => "Past",
            Tense::Present => "Pres",
        }
    }
}

/// A single token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Lowercased, lightly normalized form
    pub lemma: String,

    /// Part-of-speech tag
    pub pos: PosTag,

    /// Whether the token is a stopword
    pub is_stop: bool,

    /// Whether the token is punctuation
    pub is_punct: bool,

    /// Verb tense, for verbs only
    pub tense: Option<Tense>,
}

impl Token {
    /// Whether the token is made only of alphabetic characters
    pub fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }
}

/// A sentence, as a token span plus its text
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Sentence text as it appears in the source
    pub text: String,

    /// First token index
    pub start: usize,

    /// One past the last token index
    pub end: usize,
}

impl Sentence {
    /// Number of tokens in the sentence
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A base noun phrase
#[derive(Debug, Clone, PartialEq)]
pub struct NounChunk {
    /// Chunk text (tokens joined by single spaces)
    pub text: String,

    /// First token index
    pub start: usize,

    /// One past the last token index
    pub end: usize,

    /// Whether the grammatical root of the chunk is a stopword
    pub root_is_stop: bool,

    /// Index of the enclosing sentence
    pub sentence: usize,
}

impl NounChunk {
    /// Number of whitespace-separated words in the chunk text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A named entity mention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    /// Mention text
    pub text: String,

    /// Entity label
    pub label: String,
}

/// Full linguistic view of one input text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentAnalysis {
    /// Tokens in document order
    pub tokens: Vec<Token>,

    /// Sentences in document order
    pub sentences: Vec<Sentence>,

    /// Noun chunks in document order
    pub noun_chunks: Vec<NounChunk>,

    /// Named entities in document order
    pub entities: Vec<NamedEntity>,
}

impl DocumentAnalysis {
    /// Document length in tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Text of the sentence that contains `chunk`
    ///
    /// Returns an empty string when the chunk points outside the sentence list.
    pub fn sentence_text(&self, chunk: &NounChunk) -> &str {
        self.sentences
            .get(chunk.sentence)
            .map(|s| s.text.as_str())
            .unwrap_or("")
    }

    /// Tokens of a sentence
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        let end = sentence.end.min(self.tokens.len());
        let start = sentence.start.min(end);
        &self.tokens[start..end]
    }

    /// Number of non-punctuation tokens
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_punct).count()
    }
}
