//! Laplace-smoothed per-token likelihoods

use std::collections::HashMap;

use super::frequency::FrequencyTable;
use super::vocabulary::Vocabulary;

/// Likelihood of each vocabulary token within one class
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityTable {
    probabilities: HashMap<String, f64>,
}

impl ProbabilityTable {
    /// For every vocabulary token `t`:
    ///
    /// ```text
    /// p(t) = (count(t) + 1) / (distinct tokens in class + vocabulary size)
    /// ```
    ///
    /// The denominator uses the number of distinct tokens in the class, not
    /// the total occurrence count.
    pub fn estimate(frequency: &FrequencyTable, vocabulary: &Vocabulary) -> Self {
        let denominator = (frequency.distinct() + vocabulary.len()) as f64;
        let probabilities = vocabulary
            .iter()
            .map(|word| {
                let p = (frequency.count(word) as f64 + 1.0) / denominator;
                (word.to_string(), p)
            })
            .collect();

        Self { probabilities }
    }

    /// Likelihood of a vocabulary token, `None` outside the vocabulary
    pub fn get(&self, word: &str) -> Option<f64> {
        self.probabilities.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}
