use std::collections::HashSet;

use super::Preprocessor;
use crate::bayes::tokenize;

/// The 100 most common English words, most frequent first
pub const COMMON_ENGLISH_WORDS: [&str; 100] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "people", "into", "year", "your",
    "good", "some", "could", "them", "see", "other", "than", "then", "now", "look", "only",
    "come", "its", "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these", "give", "day",
    "most", "us",
];

/// Drops tokens found among the `top_n` most common English words,
/// compared case-insensitively
pub struct RemoveCommonWords {
    top_n: usize,
    words: HashSet<&'static str>,
}

impl RemoveCommonWords {
    pub fn new(top_n: usize) -> Self {
        let top_n = top_n.min(COMMON_ENGLISH_WORDS.len());
        Self {
            top_n,
            words: COMMON_ENGLISH_WORDS[..top_n].iter().copied().collect(),
        }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }
}

impl Preprocessor for RemoveCommonWords {
    fn name(&self) -> &str {
        "remove-common-words"
    }

    fn transform(&self, text: &str) -> String {
        tokenize(text)
            .filter(|word| !self.words.contains(word.to_lowercase().as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
