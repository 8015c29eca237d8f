//! Vocabulary: distinct tokens across all training messages

use std::collections::HashSet;

use super::tokenize;

/// Distinct tokens in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Vocabulary {
    /// Build from one message list per class
    pub fn from_messages(message_lists: &[&[String]]) -> Self {
        let mut vocabulary = Self::default();
        for messages in message_lists {
            for msg in messages.iter() {
                for word in tokenize(msg) {
                    vocabulary.insert(word);
                }
            }
        }
        vocabulary
    }

    fn insert(&mut self, word: &str) {
        if !self.index.contains(word) {
            self.index.insert(word.to_string());
            self.words.push(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_appearance_order() {
        let ham = strings(&["hello there", "there friend"]);
        let spam = strings(&["free hello"]);
        let vocab = Vocabulary::from_messages(&[&ham, &spam]);

        let words: Vec<&str> = vocab.iter().collect();
        assert_eq!(words, vec!["hello", "there", "friend", "free"]);
    }

    #[test]
    fn test_disjoint_lists_size() {
        let ham = strings(&["a b c", "c d"]);
        let spam = strings(&["e f", "f g  h"]);
        let vocab = Vocabulary::from_messages(&[&ham, &spam]);
        assert_eq!(vocab.len(), 8);
    }

    #[test]
    fn test_idempotent() {
        let ham = strings(&["ok lar", "ok then"]);
        let spam = strings(&["win cash"]);
        let a = Vocabulary::from_messages(&[&ham, &spam]);
        let b = Vocabulary::from_messages(&[&ham, &spam]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input() {
        let vocab = Vocabulary::from_messages(&[]);
        assert!(vocab.is_empty());
        assert!(!vocab.contains(""));
    }

    #[test]
    fn test_contains() {
        let ham = strings(&["free  money"]);
        let vocab = Vocabulary::from_messages(&[&ham]);
        assert!(vocab.contains("free"));
        assert!(vocab.contains("money"));
        assert!(!vocab.contains("Free"));
        assert!(!vocab.contains(""));
    }
}
