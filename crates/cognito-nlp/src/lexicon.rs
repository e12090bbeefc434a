//! Closed-class word lists used by the tagger
//!
//! All entries are lowercase. Lists are sorted so lookups can binary search.

/// English stopwords
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyone", "anything", "anywhere", "are", "around", "as", "at", "be", "became", "because",
    "become", "been", "before", "being", "below", "beside", "between", "beyond", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down", "during",
    "each", "either", "else", "enough", "even", "ever", "every", "everyone", "everything",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into",
    "is", "it", "its", "itself", "just", "least", "less", "many", "may", "me", "might", "mine",
    "more", "most", "much", "must", "my", "myself", "neither", "never", "no", "nobody", "none",
    "nor", "not", "nothing", "now", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "our", "ours", "ourselves", "out", "over", "own", "per",
    "perhaps", "quite", "rather", "really", "same", "several", "shall", "she", "should",
    "since", "so", "some", "someone", "something", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "though", "through", "thus", "to", "too", "toward", "towards", "under", "unless",
    "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what",
    "whatever", "when", "where", "whether", "which", "while", "who", "whoever", "whole",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
    "your", "yours", "yourself", "yourselves",
];

pub const DETERMINERS: &[&str] = &[
    "a", "an", "another", "any", "each", "either", "every", "her", "his", "its", "my",
    "neither", "no", "our", "some", "that", "the", "their", "these", "this", "those",
    "whose", "your",
];

pub const PRONOUNS: &[&str] = &[
    "anybody", "anyone", "anything", "everybody", "everyone", "everything", "he", "hers",
    "herself", "him", "himself", "i", "it", "itself", "me", "mine", "myself", "nobody",
    "nothing", "ours", "ourselves", "she", "somebody", "someone", "something", "theirs",
    "them", "themselves", "they", "us", "we", "what", "whatever", "which", "who", "whoever",
    "whom", "you", "yours", "yourself", "yourselves",
];

pub const AUXILIARIES: &[&str] = &[
    "am", "are", "be", "been", "being", "can", "could", "did", "do", "does", "had", "has",
    "have", "having", "is", "may", "might", "must", "shall", "should", "was", "were", "will",
    "would",
];

pub const COORDINATORS: &[&str] = &["and", "but", "nor", "or"];

pub const SUBORDINATORS: &[&str] = &[
    "although", "because", "if", "once", "since", "though", "unless", "until", "whereas",
    "whether", "while",
];

pub const ADPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "as", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite",
    "down", "during", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "per", "through", "throughout", "to", "toward", "towards",
    "under", "upon", "via", "with", "within", "without",
];

pub const PARTICLES: &[&str] = &["n't", "not"];

pub const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "consequently", "even", "ever",
    "furthermore", "here", "how", "however", "just", "maybe", "meanwhile", "moreover",
    "never", "nevertheless", "now", "often", "only", "perhaps", "quite", "rather", "so",
    "sometimes", "soon", "still", "then", "there", "therefore", "thus", "today", "too",
    "usually", "very", "when", "where", "why", "yet",
];

pub const ADJECTIVES: &[&str] = &[
    "able", "bad", "best", "better", "big", "black", "blue", "bright", "brown", "certain",
    "cheap", "clear", "dark", "deep", "different", "early", "easy", "expensive", "few",
    "first", "free", "full", "general", "good", "great", "green", "happy", "hard", "high",
    "human", "important", "key", "large", "last", "late", "lazy", "little", "local", "long",
    "main", "major", "many", "much", "new", "next", "old", "open", "other", "own", "public",
    "quick", "real", "recent", "red", "right", "sad", "same", "several", "short", "simple",
    "small", "social", "specific", "strong", "sunny", "true", "various", "white", "whole",
    "young",
];

/// Words ending in -ly that are not adverbs
pub const LY_NOUNS: &[&str] = &[
    "ally", "anomaly", "apply", "assembly", "belly", "bully", "butterfly", "daily", "early",
    "family", "friendly", "holy", "italy", "jelly", "july", "likely", "lonely", "lovely",
    "monopoly", "only", "rally", "reply", "supply", "ugly",
];

/// Base and third-person forms of frequent verbs
pub const COMMON_VERBS: &[&str] = &[
    "add", "affect", "allow", "apply", "argue", "ask", "become", "begin", "believe",
    "break", "bring", "build", "buy", "call", "change", "choose", "come", "consider",
    "continue", "create", "cut", "depend", "describe", "develop", "discuss", "draw",
    "drive", "eat", "explain", "fall", "feel", "find", "get", "give", "go", "goes", "grow",
    "happen", "hear", "help", "hold", "improve", "include", "jump", "keep", "know", "lead",
    "learn", "leave", "let", "lie", "like", "live", "look", "lose", "love", "make",
    "matter", "mean", "meet", "move", "need", "offer", "own", "pay", "plan", "play",
    "predict", "produce", "provide", "put", "read", "reduce", "remain", "require", "return",
    "rise", "run", "say", "says", "see", "seem", "send", "set", "share", "show", "sit",
    "speak", "spend", "stand", "start", "struggle", "suggest", "support", "take", "talk",
    "tell", "think", "try", "turn", "understand", "use", "vary", "walk", "want", "wear",
    "work", "worry", "write",
];

/// Irregular past-tense forms
pub const IRREGULAR_PAST: &[&str] = &[
    "ate", "became", "began", "bought", "brought", "built", "came", "caught", "chose", "drew",
    "drove", "fell", "felt", "flew", "fought", "found", "gave", "got", "grew", "heard", "held",
    "kept", "knew", "led", "left", "lost", "made", "meant", "met", "paid", "ran", "said",
    "sang", "sat", "saw", "sent", "slept", "sold", "sought", "spent", "spoke", "stood",
    "swam", "taught", "thought", "told", "took", "understood", "went", "won", "wore",
    "wrote",
];

pub const NUMBER_WORDS: &[&str] = &[
    "eight", "eighty", "eleven", "fifty", "five", "forty", "four", "hundred", "million",
    "nine", "ninety", "seven", "seventy", "six", "sixty", "ten", "thirty", "thousand",
    "three", "twelve", "twenty", "two",
];

pub const ORG_SUFFIXES: &[&str] = &[
    "agency", "association", "co", "company", "corp", "corporation", "foundation", "inc",
    "institute", "labs", "ltd", "university",
];

pub const DATE_WORDS: &[&str] = &[
    "april", "august", "december", "february", "friday", "january", "june", "march",
    "monday", "november", "october", "saturday", "september", "sunday", "thursday",
    "tuesday", "wednesday",
];

/// Discourse transition markers
pub const TRANSITIONS: &[&str] = &[
    "although", "consequently", "furthermore", "however", "meanwhile", "moreover",
    "nevertheless", "therefore",
];

/// Whether `word` (lowercase) is in a sorted list
pub fn contains(list: &[&str], word: &str) -> bool {
    list.binary_search(&word).is_ok()
}
