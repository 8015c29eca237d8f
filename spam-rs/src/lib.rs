//! spam-rs: Naive Bayes SMS spam classifier
//!
//! Trains a two-class (ham/spam) Naive Bayes model on a labeled corpus and
//! compares how text preprocessing affects it.
//!
//! # Features
//!
//! - **Model**: vocabulary, per-class word counts, Laplace-smoothed likelihoods
//! - **Scoring**: base-10 log-space sums, compared directly; ties go to spam
//! - **Evaluation**: confusion buckets and per-class accuracy for a test split,
//!   or a single verdict for one message
//! - **Variants**: the same pipeline rerun under each preprocessing chain
//!   (punctuation stripping, stemming, common-word removal)
//!
//! # Example
//!
//! ```
//! use spam_rs::analysis::Runner;
//! use spam_rs::corpus::{Class, Experiment, Mode};
//! use spam_rs::preprocess::VariantRegistry;
//!
//! let experiment = Experiment::new(
//!     vec!["hello there friend".to_string()],
//!     vec!["free money now".to_string(), "free gift now".to_string()],
//!     Mode::SingleMessage("free".to_string()),
//! );
//!
//! let results = Runner::new(VariantRegistry::standard(100))
//!     .run(&experiment)
//!     .unwrap();
//!
//! assert_eq!(results.len(), 5);
//! assert_eq!(results[0].prediction(), Some(Class::Spam));
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`corpus`]: Corpus parsing and train/test splitting
//! - [`bayes`]: Naive Bayes model and classifier
//! - [`preprocess`]: Text transforms and variant registry
//! - [`analysis`]: Evaluation and variant runner

pub mod analysis;
pub mod bayes;
pub mod config;
pub mod corpus;
pub mod error;
pub mod preprocess;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
