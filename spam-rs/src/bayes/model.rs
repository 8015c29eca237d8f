//! Trained two-class model

use tracing::debug;

use super::frequency::FrequencyTable;
use super::probability::ProbabilityTable;
use super::vocabulary::Vocabulary;
use crate::corpus::Class;
use crate::error::{Result, SpamError};

/// Statistics for one class
#[derive(Debug, Clone)]
pub struct ClassModel {
    /// Training messages in this class
    pub message_count: usize,
    /// Share of all training messages, in (0, 1]
    pub prior: f64,
    /// Token occurrences in this class
    pub frequency: FrequencyTable,
    /// Smoothed likelihood of each vocabulary token in this class
    pub probability: ProbabilityTable,
}

impl ClassModel {
    fn build(messages: &[String], total: usize, vocabulary: &Vocabulary) -> Self {
        let frequency = FrequencyTable::from_messages(messages);
        let probability = ProbabilityTable::estimate(&frequency, vocabulary);

        Self {
            message_count: messages.len(),
            prior: messages.len() as f64 / total as f64,
            frequency,
            probability,
        }
    }
}

/// Complete model: both classes plus the shared vocabulary
#[derive(Debug, Clone)]
pub struct TrainingSet {
    pub total_messages: usize,
    pub ham: ClassModel,
    pub spam: ClassModel,
    pub vocabulary: Vocabulary,
}

impl TrainingSet {
    /// Train on each class's messages.
    ///
    /// Fails with [`SpamError::DegenerateStatistic`] when either class has no
    /// messages, since its prior would fall outside (0, 1].
    pub fn train(ham: &[String], spam: &[String]) -> Result<Self> {
        let total_messages = ham.len() + spam.len();
        if total_messages == 0 {
            return Err(SpamError::DegenerateStatistic(
                "no training messages".to_string(),
            ));
        }
        for (class, messages) in [(Class::Ham, ham), (Class::Spam, spam)] {
            if messages.is_empty() {
                return Err(SpamError::DegenerateStatistic(format!(
                    "no {} training messages",
                    class
                )));
            }
        }

        let vocabulary = Vocabulary::from_messages(&[ham, spam]);
        let training_set = Self {
            total_messages,
            ham: ClassModel::build(ham, total_messages, &vocabulary),
            spam: ClassModel::build(spam, total_messages, &vocabulary),
            vocabulary,
        };

        debug!(
            "Trained on {} messages ({} ham, {} spam), vocabulary of {} words",
            total_messages,
            training_set.ham.message_count,
            training_set.spam.message_count,
            training_set.vocabulary.len()
        );

        Ok(training_set)
    }
}
