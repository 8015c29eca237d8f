//! Evaluation and variant runs
//!
//! Trains one model per preprocessing variant and either scores a labeled
//! test set or classifies a single message with it.

pub mod evaluation;
pub mod report;
pub mod runner;

pub use evaluation::EvaluationResult;
pub use report::{ClassSummary, Report, VariantReport};
pub use runner::{AnalysisResult, Outcome, Runner};
