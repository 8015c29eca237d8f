//! Batch evaluation against labeled test cases

use serde::Serialize;

use crate::bayes::TrainingSet;
use crate::corpus::{Class, LabeledCase};

/// Outcome tally for a labeled test set.
///
/// `incorrect_ham` counts messages predicted ham that were actually spam;
/// `incorrect_spam` counts messages predicted spam that were actually ham.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub total: usize,
    pub correct_ham: usize,
    pub correct_spam: usize,
    pub incorrect_ham: usize,
    pub incorrect_spam: usize,
    /// `correct_ham / (correct_ham + incorrect_spam)`, `None` if undefined
    pub accuracy_ham: Option<f64>,
    /// `correct_spam / (correct_spam + incorrect_ham)`, `None` if undefined
    pub accuracy_spam: Option<f64>,
}

impl EvaluationResult {
    /// Classify every case and tally predicted against true class
    pub fn evaluate(training_set: &TrainingSet, cases: &[LabeledCase]) -> Self {
        let mut result = Self {
            total: cases.len(),
            ..Default::default()
        };

        for case in cases {
            result.record(training_set.classify(&case.text), case.true_class);
        }

        // Pairs each correct count with the other bucket's error count
        result.accuracy_ham = ratio(result.correct_ham, result.correct_ham + result.incorrect_spam);
        result.accuracy_spam =
            ratio(result.correct_spam, result.correct_spam + result.incorrect_ham);

        result
    }

    fn record(&mut self, predicted: Class, actual: Class) {
        match (predicted, actual) {
            (Class::Ham, Class::Ham) => self.correct_ham += 1,
            (Class::Ham, Class::Spam) => self.incorrect_ham += 1,
            (Class::Spam, Class::Spam) => self.correct_spam += 1,
            (Class::Spam, Class::Ham) => self.incorrect_spam += 1,
        }
    }

    /// Share of all cases classified correctly, `None` for an empty test set
    pub fn overall_accuracy(&self) -> Option<f64> {
        ratio(self.correct_ham + self.correct_spam, self.total)
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TrainingSet {
        let ham = vec![
            "see you at lunch".to_string(),
            "ok call me later".to_string(),
        ];
        let spam = vec![
            "win free prize now".to_string(),
            "free cash claim now".to_string(),
        ];
        TrainingSet::train(&ham, &spam).unwrap()
    }

    #[test]
    fn test_record_buckets() {
        let mut result = EvaluationResult::default();
        result.record(Class::Ham, Class::Ham);
        result.record(Class::Ham, Class::Spam);
        result.record(Class::Spam, Class::Spam);
        result.record(Class::Spam, Class::Ham);
        result.record(Class::Spam, Class::Ham);

        assert_eq!(result.correct_ham, 1);
        assert_eq!(result.incorrect_ham, 1);
        assert_eq!(result.correct_spam, 1);
        assert_eq!(result.incorrect_spam, 2);
    }

    #[test]
    fn test_evaluate() {
        let set = model();
        let cases = vec![
            LabeledCase::new("see you later", Class::Ham),
            LabeledCase::new("free prize", Class::Spam),
            LabeledCase::new("call me", Class::Ham),
            LabeledCase::new("lunch", Class::Spam),
        ];
        let result = EvaluationResult::evaluate(&set, &cases);

        assert_eq!(result.total, 4);
        assert_eq!(result.correct_ham, 2);
        assert_eq!(result.correct_spam, 1);
        assert_eq!(result.incorrect_ham, 1);
        assert_eq!(result.incorrect_spam, 0);
        assert_eq!(
            result.correct_ham + result.correct_spam + result.incorrect_ham + result.incorrect_spam,
            result.total
        );
        assert_eq!(result.accuracy_ham, Some(1.0));
        assert_eq!(result.accuracy_spam, Some(0.5));
        assert_eq!(result.overall_accuracy(), Some(0.75));
    }

    #[test]
    fn test_empty_test_set_is_undefined() {
        let result = EvaluationResult::evaluate(&model(), &[]);
        assert_eq!(result.total, 0);
        assert_eq!(result.accuracy_ham, None);
        assert_eq!(result.accuracy_spam, None);
        assert_eq!(result.overall_accuracy(), None);
    }

    #[test]
    fn test_one_sided_accuracy() {
        let cases = vec![LabeledCase::new("free prize", Class::Spam)];
        let result = EvaluationResult::evaluate(&model(), &cases);
        assert_eq!(result.correct_spam, 1);
        assert_eq!(result.accuracy_ham, None);
        assert_eq!(result.accuracy_spam, Some(1.0));
    }
}
