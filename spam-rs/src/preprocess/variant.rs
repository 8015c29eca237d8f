//! Named preprocessing variants

use std::sync::Arc;

use super::{Preprocessor, RemoveCommonWords, RemovePunctuation, Stemmer};
use crate::corpus::Experiment;

/// A named chain of transforms, applied in order
#[derive(Clone)]
pub struct Variant {
    pub name: String,
    pub steps: Vec<Arc<dyn Preprocessor>>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Append a transform to the chain
    pub fn then(mut self, step: impl Preprocessor + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    pub fn apply(&self, experiment: &mut Experiment) {
        for step in &self.steps {
            step.process(experiment);
        }
    }
}

impl std::fmt::Debug for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let steps: Vec<&str> = self.steps.iter().map(|s| s.name()).collect();
        f.debug_struct("Variant")
            .field("name", &self.name)
            .field("steps", &steps)
            .finish()
    }
}

/// Ordered list of variants
#[derive(Debug, Clone, Default)]
pub struct VariantRegistry {
    variants: Vec<Variant>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five standard variants, in run order:
    ///
    /// 1. no preprocessing
    /// 2. punctuation removed
    /// 3. stemmed
    /// 4. stemmed, then punctuation removed
    /// 5. `common_words` most common English words removed
    pub fn standard(common_words: usize) -> Self {
        let remove_common = RemoveCommonWords::new(common_words);
        let mut registry = Self::new();
        registry.push(Variant::new("Default Analysis (no preprocessing)"));
        registry.push(Variant::new("No Punctuation Analysis").then(RemovePunctuation::new()));
        registry.push(Variant::new("Stemmer Analysis").then(Stemmer::new()));
        registry.push(
            Variant::new("Stemmer and No Punctuation Analysis")
                .then(Stemmer::new())
                .then(RemovePunctuation::new()),
        );
        registry.push(
            Variant::new(format!(
                "Remove {} Most Common English Words",
                remove_common.top_n()
            ))
            .then(remove_common),
        );
        registry
    }

    pub fn push(&mut self, variant: Variant) {
        self.variants.push(variant);
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
