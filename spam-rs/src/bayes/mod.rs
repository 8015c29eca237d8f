//! Naive Bayes engine
//!
//! Vocabulary construction, per-class word counts, Laplace-smoothed
//! likelihoods and log-space scoring for the two-class ham/spam model.

pub mod classifier;
pub mod frequency;
pub mod model;
pub mod probability;
pub mod vocabulary;

pub use classifier::Scores;
pub use frequency::FrequencyTable;
pub use model::{ClassModel, TrainingSet};
pub use probability::ProbabilityTable;
pub use vocabulary::Vocabulary;

/// Split a message into whitespace-delimited tokens, dropping empty ones
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
