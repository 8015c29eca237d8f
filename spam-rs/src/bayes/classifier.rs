//! Log-space scoring and the ham/spam decision rule

use super::model::TrainingSet;
use super::tokenize;
use crate::corpus::Class;

/// Base-10 log-likelihood sums for a message under each class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub ham: f64,
    pub spam: f64,
}

impl Scores {
    /// Ham only when it strictly wins; ties go to spam
    pub fn decide(&self) -> Class {
        if self.ham > self.spam {
            Class::Ham
        } else {
            Class::Spam
        }
    }
}

impl TrainingSet {
    /// Sum log10 likelihoods of every in-vocabulary token per class.
    /// Out-of-vocabulary tokens contribute nothing.
    pub fn score(&self, text: &str) -> Scores {
        let mut scores = Scores { ham: 0.0, spam: 0.0 };

        for word in tokenize(text) {
            if !self.vocabulary.contains(word) {
                continue;
            }
            if let (Some(p_ham), Some(p_spam)) =
                (self.ham.probability.get(word), self.spam.probability.get(word))
            {
                scores.ham += p_ham.log10();
                scores.spam += p_spam.log10();
            }
        }

        scores
    }

    /// Predict the class of a raw message
    pub fn classify(&self, text: &str) -> Class {
        self.score(text).decide()
    }
}
