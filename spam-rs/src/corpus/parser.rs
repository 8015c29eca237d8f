//! Corpus parser
//!
//! Each non-empty line holds `<class><delimiter><message>`. Lines without the
//! delimiter carry no class and are skipped. An unknown class label or an
//! empty message after a valid label aborts the whole parse.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use super::types::*;
use crate::error::{Result, SpamError};

/// Parse labeled records from a reader
pub fn parse_records<R: Read>(reader: R, delimiter: &str) -> Result<Vec<Record>> {
    if delimiter.is_empty() {
        return Err(SpamError::Config("delimiter must not be empty".to_string()));
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        // Invalid UTF-8 (e.g. Latin-1 currency bytes) becomes U+FFFD
        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim_end_matches('\n').trim_end_matches('\r');

        if line.is_empty() {
            continue;
        }

        let Some((label, text)) = line.split_once(delimiter) else {
            warn!("Skipped line {} because it has no class: {}", line_no, line);
            skipped += 1;
            continue;
        };

        let class = label
            .parse::<Class>()
            .map_err(|label| SpamError::UnknownClassLabel {
                line: line_no,
                label,
            })?;

        if text.is_empty() {
            return Err(SpamError::MalformedRecord {
                line: line_no,
                reason: "empty message text".to_string(),
            });
        }

        records.push(Record {
            class,
            text: text.to_string(),
        });
    }

    debug!("Parsed {} records, skipped {} lines", records.len(), skipped);
    Ok(records)
}

/// A parsed, labeled corpus
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load a corpus from a file
    pub fn from_file<P: AsRef<Path>>(path: P, delimiter: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let corpus = Self::from_reader(file, delimiter)?;
        info!("Loaded {} records from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: &str) -> Result<Self> {
        Ok(Self::new(parse_records(reader, delimiter)?))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shuffle the records and build an experiment.
    ///
    /// With a message to classify every record becomes training data. Otherwise the
    /// first `floor(len * train_ratio)` shuffled records train and the rest
    /// become test cases.
    pub fn experiment(
        &self,
        message: Option<String>,
        train_ratio: f64,
        seed: Option<u64>,
    ) -> Experiment {
        let mut records = self.records.clone();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        records.shuffle(&mut rng);

        let train_len = match message {
            Some(_) => records.len(),
            None => ((records.len() as f64) * train_ratio).floor() as usize,
        };
        let test_records = records.split_off(train_len.min(records.len()));

        let mut ham = Vec::new();
        let mut spam = Vec::new();
        for record in records {
            match record.class {
                Class::Ham => ham.push(record.text),
                Class::Spam => spam.push(record.text),
            }
        }

        let mode = match message {
            Some(text) => Mode::SingleMessage(text),
            None => Mode::Batch(
                test_records
                    .into_iter()
                    .map(|r| LabeledCase::new(r.text, r.class))
                    .collect(),
            ),
        };

        Experiment::new(ham, spam, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "ham\tOk lar...\nspam\tFree entry now\n\nham\tSee you soon\n";

    #[test]
    fn test_parse_records() {
        let records = parse_records(SAMPLE.as_bytes(), "\t").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].class, Class::Ham);
        assert_eq!(records[0].text, "Ok lar...");
        assert_eq!(records[1].class, Class::Spam);
    }

    #[test]
    fn test_parse_skips_classless_line() {
        let records = parse_records("no delimiter here\nspam\tWin\n".as_bytes(), "\t").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "Win");
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = parse_records("ham\tHi\nSPAM\tWin\n".as_bytes(), "\t").unwrap_err();
        match err {
            SpamError::UnknownClassLabel { line, label } => {
                assert_eq!(line, 2);
                assert_eq!(label, "SPAM");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_empty_text_aborts() {
        let err = parse_records("ham\tHi\n\nspam\t\n".as_bytes(), "\t").unwrap_err();
        assert!(matches!(err, SpamError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_parse_custom_delimiter() {
        let records = parse_records("spam;;call now;;today\n".as_bytes(), ";;").unwrap();
        assert_eq!(records[0].class, Class::Spam);
        assert_eq!(records[0].text, "call now;;today");
    }

    #[test]
    fn test_parse_invalid_utf8_line_is_kept() {
        let input: &[u8] = b"ham\thello\nspam\twin \xa3100 now\nham\tbye\n";
        let records = parse_records(input, "\t").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].class, Class::Spam);
        assert_eq!(records[1].text, "win \u{FFFD}100 now");
        assert_eq!(records[2].text, "bye");
    }

    #[test]
    fn test_parse_line_numbers_after_invalid_utf8() {
        let input: &[u8] = b"ham\t\xa3\xa3\nbogus\tx\n";
        let err = parse_records(input, "\t").unwrap_err();
        assert!(matches!(err, SpamError::UnknownClassLabel { line: 2, .. }));
    }

    #[test]
    fn test_parse_no_trailing_newline() {
        let records = parse_records("ham\tlast line".as_bytes(), "\t").unwrap();
        assert_eq!(records[0].text, "last line");
    }

    #[test]
    fn test_parse_crlf() {
        let records = parse_records("ham\thello\r\nspam\tbuy\r\n".as_bytes(), "\t").unwrap();
        assert_eq!(records[0].text, "hello");
        assert_eq!(records[1].text, "buy");
    }

    #[test]
    fn test_experiment_single_message_uses_all_records() {
        let corpus = Corpus::from_reader(SAMPLE.as_bytes(), "\t").unwrap();
        let ex = corpus.experiment(Some("free".to_string()), 0.75, Some(1));
        assert_eq!(ex.ham.len(), 2);
        assert_eq!(ex.spam.len(), 1);
        assert_eq!(ex.mode, Mode::SingleMessage("free".to_string()));
    }

    #[test]
    fn test_experiment_batch_split() {
        let lines: String = (0..8)
            .map(|i| format!("{}\tmessage {}\n", if i % 2 == 0 { "ham" } else { "spam" }, i))
            .collect();
        let corpus = Corpus::from_reader(lines.as_bytes(), "\t").unwrap();
        let ex = corpus.experiment(None, 0.75, Some(42));

        assert_eq!(ex.training_len(), 6);
        match ex.mode {
            Mode::Batch(cases) => assert_eq!(cases.len(), 2),
            Mode::SingleMessage(_) => panic!("expected batch mode"),
        }
    }

    #[test]
    fn test_experiment_seed_is_reproducible() {
        let lines: String = (0..20).map(|i| format!("ham\tmsg {}\n", i)).collect();
        let corpus = Corpus::from_reader(lines.as_bytes(), "\t").unwrap();
        let a = corpus.experiment(None, 0.5, Some(9));
        let b = corpus.experiment(None, 0.5, Some(9));
        assert_eq!(a, b);
    }
}
