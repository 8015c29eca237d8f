use regex::Regex;

use super::Preprocessor;

/// Strips every Unicode punctuation character
pub struct RemovePunctuation {
    pattern: Regex,
}

impl RemovePunctuation {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\p{P}").expect("valid punctuation pattern"),
        }
    }
}

impl Default for RemovePunctuation {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor for RemovePunctuation {
    fn name(&self) -> &str {
        "remove-punctuation"
    }

    fn transform(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}
