//! Experiment variant runner

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::evaluation::EvaluationResult;
use crate::bayes::TrainingSet;
use crate::corpus::{Class, Experiment, Mode};
use crate::error::Result;
use crate::preprocess::{Variant, VariantRegistry};

/// What a variant run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Outcome {
    /// Batch mode tally
    Evaluation(EvaluationResult),
    /// Single-message verdict
    Prediction { class: Class },
}

/// Model and outcome for one preprocessing variant
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub name: String,
    pub training_set: TrainingSet,
    pub outcome: Outcome,
}

impl AnalysisResult {
    /// Train on the experiment and evaluate it according to its mode
    pub fn from_experiment(name: impl Into<String>, experiment: &Experiment) -> Result<Self> {
        let training_set = TrainingSet::train(&experiment.ham, &experiment.spam)?;

        let outcome = match &experiment.mode {
            Mode::Batch(cases) => {
                Outcome::Evaluation(EvaluationResult::evaluate(&training_set, cases))
            }
            Mode::SingleMessage(text) => Outcome::Prediction {
                class: training_set.classify(text),
            },
        };

        Ok(Self {
            name: name.into(),
            training_set,
            outcome,
        })
    }

    pub fn evaluation(&self) -> Option<&EvaluationResult> {
        match &self.outcome {
            Outcome::Evaluation(result) => Some(result),
            Outcome::Prediction { .. } => None,
        }
    }

    pub fn prediction(&self) -> Option<Class> {
        match self.outcome {
            Outcome::Prediction { class } => Some(class),
            Outcome::Evaluation(_) => None,
        }
    }
}

/// Runs every registered variant on its own copy of an experiment
pub struct Runner {
    registry: VariantRegistry,
    parallel: bool,
}

impl Runner {
    pub fn new(registry: VariantRegistry) -> Self {
        Self {
            registry,
            parallel: false,
        }
    }

    /// Run variants on the rayon thread pool. Results keep registry order.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// One result per variant, in registry order
    pub fn run(&self, experiment: &Experiment) -> Result<Vec<AnalysisResult>> {
        info!(
            "Running {} variants over {} training messages",
            self.registry.len(),
            experiment.training_len()
        );

        let variants = self.registry.variants();
        if self.parallel {
            variants
                .par_iter()
                .map(|variant| run_variant(variant, experiment))
                .collect()
        } else {
            variants
                .iter()
                .map(|variant| run_variant(variant, experiment))
                .collect()
        }
    }
}

fn run_variant(variant: &Variant, experiment: &Experiment) -> Result<AnalysisResult> {
    debug!("Starting variant: {:?}", variant);

    let mut copy = experiment.clone();
    variant.apply(&mut copy);
    let result = AnalysisResult::from_experiment(variant.name.clone(), &copy)?;

    info!(
        "{}: vocabulary of {} words",
        result.name,
        result.training_set.vocabulary.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::LabeledCase;
    use crate::preprocess::RemovePunctuation;

    fn experiment(mode: Mode) -> Experiment {
        Experiment::new(
            vec!["hello there friend".to_string()],
            vec!["free money now".to_string(), "free gift now".to_string()],
            mode,
        )
    }

    #[test]
    fn test_single_message_outcome() {
        let ex = experiment(Mode::SingleMessage("free".to_string()));
        let result = AnalysisResult::from_experiment("plain", &ex).unwrap();
        assert_eq!(result.name, "plain");
        assert_eq!(result.prediction(), Some(Class::Spam));
        assert!(result.evaluation().is_none());
    }

    #[test]
    fn test_batch_outcome() {
        let ex = experiment(Mode::Batch(vec![
            LabeledCase::new("hello friend", Class::Ham),
            LabeledCase::new("free gift", Class::Spam),
        ]));
        let result = AnalysisResult::from_experiment("plain", &ex).unwrap();
        let eval = result.evaluation().unwrap();
        assert_eq!(eval.correct_ham, 1);
        assert_eq!(eval.correct_spam, 1);
        assert_eq!(result.prediction(), None);
    }

    #[test]
    fn test_variant_does_not_leak() {
        let mut registry = VariantRegistry::new();
        registry.push(Variant::new("stripped").then(RemovePunctuation::new()));
        registry.push(Variant::new("plain"));

        let ex = Experiment::new(
            vec!["hi!".to_string()],
            vec!["win!".to_string()],
            Mode::SingleMessage("hi".to_string()),
        );
        let results = Runner::new(registry).run(&ex).unwrap();

        assert!(results[0].training_set.vocabulary.contains("hi"));
        assert!(results[1].training_set.vocabulary.contains("hi!"));
        assert!(!results[1].training_set.vocabulary.contains("hi"));
        assert_eq!(ex.ham, vec!["hi!"]);
    }

    #[test]
    fn test_error_propagates() {
        let ex = Experiment::new(vec![], vec![], Mode::SingleMessage("x".to_string()));
        let result = Runner::new(VariantRegistry::standard(100)).run(&ex);
        assert!(result.is_err());
    }
}
