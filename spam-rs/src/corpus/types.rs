//! Corpus types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    /// Legitimate message
    Ham,
    /// Unsolicited message
    Spam,
}

impl Class {
    pub fn as_str(&self) -> &'static str {
        match self {
            Class::Ham => "ham",
            Class::Spam => "spam",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Class {
    type Err = String;

    /// Exact, case-sensitive match on the corpus labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ham" => Ok(Class::Ham),
            "spam" => Ok(Class::Spam),
            other => Err(other.to_string()),
        }
    }
}

/// One parsed corpus line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub class: Class,
    pub text: String,
}

/// A test message with its known class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCase {
    pub text: String,
    pub true_class: Class,
}

impl LabeledCase {
    pub fn new(text: impl Into<String>, true_class: Class) -> Self {
        Self {
            text: text.into(),
            true_class,
        }
    }
}

/// What the experiment is evaluated against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Score every labeled case and tally the outcomes
    Batch(Vec<LabeledCase>),
    /// Classify one message
    SingleMessage(String),
}

/// Training messages per class plus the evaluation mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    pub ham: Vec<String>,
    pub spam: Vec<String>,
    pub mode: Mode,
}

impl Experiment {
    pub fn new(ham: Vec<String>, spam: Vec<String>, mode: Mode) -> Self {
        Self { ham, spam, mode }
    }

    /// Rewrite every message text in place: both training lists and the
    /// test cases or a message to classify.
    pub fn map_texts<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for msg in self.ham.iter_mut().chain(self.spam.iter_mut()) {
            *msg = f(msg);
        }

        match &mut self.mode {
            Mode::Batch(cases) => {
                for case in cases.iter_mut() {
                    case.text = f(&case.text);
                }
            }
            Mode::SingleMessage(text) => *text = f(text),
        }
    }

    /// Number of training messages across both classes
    pub fn training_len(&self) -> usize {
        self.ham.len() + self.spam.len()
    }
}
