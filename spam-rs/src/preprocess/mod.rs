//! Text preprocessing
//!
//! Transforms rewrite every message of an experiment in place. Variants chain
//! transforms under a name, and a registry holds variants in run order.

pub mod common_words;
pub mod punctuation;
pub mod stemmer;
pub mod variant;

pub use common_words::{RemoveCommonWords, COMMON_ENGLISH_WORDS};
pub use punctuation::RemovePunctuation;
pub use stemmer::Stemmer;
pub use variant::{Variant, VariantRegistry};

use crate::corpus::Experiment;

/// A text transform applied to a whole experiment
pub trait Preprocessor: Send + Sync {
    /// Short human-readable name
    fn name(&self) -> &str;

    /// Rewrite a single message
    fn transform(&self, text: &str) -> String;

    /// Rewrite every message of the experiment
    fn process(&self, experiment: &mut Experiment) {
        experiment.map_texts(|text| self.transform(text));
    }
}
