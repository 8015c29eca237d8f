//! Corpus loading
//!
//! Parses labeled `<class><delimiter><text>` records and splits them into an
//! experiment of training messages plus either test cases or a single message to classify.

pub mod parser;
pub mod types;

pub use parser::{parse_records, Corpus};
pub use types::*;
