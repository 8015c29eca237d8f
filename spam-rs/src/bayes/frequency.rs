//! Per-class word occurrence counts

use std::collections::HashMap;

use super::tokenize;

/// Token occurrence counts for one class's training messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
}

impl FrequencyTable {
    /// Count every token occurrence across all messages
    pub fn from_messages(messages: &[String]) -> Self {
        let mut counts = HashMap::new();
        for msg in messages {
            for word in tokenize(msg) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `word`, zero when unseen
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct tokens recorded
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The `n` most frequent tokens, highest first. Equal counts are ordered
    /// by token so the result is stable across runs.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u32)> {
        let mut pairs: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs.truncate(n);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_across_messages() {
        let messages = vec!["free money".to_string(), "free gift".to_string()];
        let table = FrequencyTable::from_messages(&messages);

        assert_eq!(table.count("free"), 2);
        assert_eq!(table.count("money"), 1);
        assert_eq!(table.count("gift"), 1);
        assert_eq!(table.count("absent"), 0);
        assert_eq!(table.distinct(), 3);
    }

    #[test]
    fn test_repeated_token_in_one_message() {
        let messages = vec!["go go go".to_string()];
        let table = FrequencyTable::from_messages(&messages);
        assert_eq!(table.count("go"), 3);
        assert_eq!(table.distinct(), 1);
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::from_messages(&[]);
        assert_eq!(table.distinct(), 0);
        assert!(table.most_common(5).is_empty());
    }

    #[test]
    fn test_most_common() {
        let messages = vec![
            "call now call".to_string(),
            "txt now call".to_string(),
            "b a".to_string(),
        ];
        let table = FrequencyTable::from_messages(&messages);
        let top = table.most_common(4);
        assert_eq!(top, vec![("call", 3), ("now", 2), ("a", 1), ("b", 1)]);
    }
}
