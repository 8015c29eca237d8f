//! Serializable summaries of variant results

use serde::Serialize;

use super::runner::{AnalysisResult, Outcome};
use crate::bayes::ClassModel;

/// Per-class training summary
#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub messages: usize,
    pub prior: f64,
    pub distinct_words: usize,
    pub top_words: Vec<(String, u32)>,
}

impl ClassSummary {
    fn from_model(model: &ClassModel, top_words: usize) -> Self {
        Self {
            messages: model.message_count,
            prior: model.prior,
            distinct_words: model.frequency.distinct(),
            top_words: model
                .frequency
                .most_common(top_words)
                .into_iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect(),
        }
    }
}

/// Summary of one variant run
#[derive(Debug, Clone, Serialize)]
pub struct VariantReport {
    pub name: String,
    pub vocabulary_size: usize,
    pub training_messages: usize,
    pub ham: ClassSummary,
    pub spam: ClassSummary,
    pub outcome: Outcome,
    /// Batch mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_accuracy: Option<f64>,
}

impl VariantReport {
    pub fn from_result(result: &AnalysisResult, top_words: usize) -> Self {
        let set = &result.training_set;
        Self {
            name: result.name.clone(),
            vocabulary_size: set.vocabulary.len(),
            training_messages: set.total_messages,
            ham: ClassSummary::from_model(&set.ham, top_words),
            spam: ClassSummary::from_model(&set.spam, top_words),
            outcome: result.outcome.clone(),
            overall_accuracy: result.evaluation().and_then(|e| e.overall_accuracy()),
        }
    }
}

/// All variant summaries, in run order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub variants: Vec<VariantReport>,
}

impl Report {
    pub fn new(results: &[AnalysisResult], message: Option<String>, top_words: usize) -> Self {
        Self {
            message,
            variants: results
                .iter()
                .map(|r| VariantReport::from_result(r, top_words))
                .collect(),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
