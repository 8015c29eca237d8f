use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

use super::Preprocessor;
use crate::bayes::tokenize;

/// Reduces each token to its Snowball English stem
pub struct Stemmer {
    stemmer: SnowballStemmer,
}

impl Stemmer {
    pub fn new() -> Self {
        Self {
            stemmer: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor for Stemmer {
    fn name(&self) -> &str {
        "stemmer"
    }

    /// Tokens are lowercased before stemming and rejoined with single spaces
    fn transform(&self, text: &str) -> String {
        tokenize(text)
            .map(|word| self.stemmer.stem(&word.to_lowercase()).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
