//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpamError};
use crate::preprocess::COMMON_ENGLISH_WORDS;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the labeled corpus lives and how it is split
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Path to the corpus file, one `<label><delimiter><text>` record per line
    #[serde(default = "default_corpus_path")]
    pub path: String,
    /// Separator between class label and message text
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Share of shuffled records used for training in batch mode
    #[serde(default = "default_train_ratio")]
    pub train_ratio: f64,
    /// Fixed shuffle seed for reproducible splits
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Number of common English words removed by the common-words variant
    #[serde(default = "default_common_words")]
    pub common_words: usize,
    /// Number of most frequent words per class shown in single-message reports
    #[serde(default = "default_top_words")]
    pub top_words: usize,
    /// Run the variants on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// One of `pretty`, `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_corpus_path() -> String {
    "trainingData.data".to_string()
}

fn default_delimiter() -> String {
    "\t".to_string()
}

fn default_train_ratio() -> f64 {
    0.75
}

fn default_common_words() -> usize {
    100
}

fn default_top_words() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            delimiter: default_delimiter(),
            train_ratio: default_train_ratio(),
            seed: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            common_words: default_common_words(),
            top_words: default_top_words(),
            parallel: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SpamError::Config(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| SpamError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.corpus.delimiter.is_empty() {
            return Err(SpamError::Config("delimiter must not be empty".to_string()));
        }

        let ratio = self.corpus.train_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(SpamError::Config(format!(
                "train_ratio must be in (0, 1], got {}",
                ratio
            )));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "compact" | "json") {
            return Err(SpamError::Config(format!(
                "unknown log format: {}",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Common-word count clamped to the bundled list
    pub fn common_words(&self) -> usize {
        self.analysis.common_words.min(COMMON_ENGLISH_WORDS.len())
    }
}
