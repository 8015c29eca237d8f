//! Command-line front end
//!
//! ```bash
//! # Train on 75% of the corpus, evaluate on the rest
//! spam-rs --file trainingData.data
//!
//! # Train on the whole corpus and classify one message
//! spam-rs --file trainingData.data --message "free 2 txt"
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use spam_rs::analysis::{ClassSummary, Outcome, Report, Runner};
use spam_rs::config::{Config, LoggingConfig};
use spam_rs::corpus::Corpus;
use spam_rs::preprocess::VariantRegistry;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Naive Bayes spam classification experiments", long_about = None)]
struct Cli {
    /// Configuration file (used when present)
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Corpus file, one `<class><delimiter><text>` record per line
    #[arg(short, long)]
    file: Option<String>,

    /// Delimiter between class and text. The two characters `\t` are read as
    /// a tab; no other escapes are translated.
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Classify this message instead of evaluating a test split
    #[arg(short, long)]
    message: Option<String>,

    /// Shuffle seed for a reproducible split
    #[arg(long)]
    seed: Option<u64>,

    /// Run variants in parallel
    #[arg(long)]
    parallel: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        Config::from_file(&cli.config)
            .with_context(|| format!("loading {}", cli.config.display()))?
    } else {
        Config::default()
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    init_logging(&config.logging);
    info!("Corpus: {}", config.corpus.path);

    let corpus = Corpus::from_file(&config.corpus.path, &config.corpus.delimiter)
        .with_context(|| format!("cannot parse file {}", config.corpus.path))?;
    let experiment = corpus.experiment(
        cli.message.clone(),
        config.corpus.train_ratio,
        config.corpus.seed,
    );

    let runner = Runner::new(VariantRegistry::standard(config.common_words()))
        .parallel(config.analysis.parallel);
    let results = runner.run(&experiment)?;
    let report = Report::new(&results, cli.message.clone(), config.analysis.top_words);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
        println!("\nDone.");
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(file) = &cli.file {
        config.corpus.path = file.clone();
    }
    if let Some(delimiter) = &cli.delimiter {
        config.corpus.delimiter = unescape(delimiter);
    }
    if cli.seed.is_some() {
        config.corpus.seed = cli.seed;
    }
    if cli.parallel {
        config.analysis.parallel = true;
    }
}

/// Only `\t` is translated; a config-file delimiter is used as written
fn unescape(delimiter: &str) -> String {
    delimiter.replace("\\t", "\t")
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.pretty().init(),
    }
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "undefined".to_string(),
    }
}

fn print_report(report: &Report) {
    for variant in &report.variants {
        println!("{}", style(format!("Analysis: {}", variant.name)).cyan().underlined());
        println!("Vocabulary has {} words", variant.vocabulary_size);
        println!("\nTraining Set:");
        println!(
            "\t{} of {} messages were spam ({:.2}%)\n",
            variant.spam.messages,
            variant.training_messages,
            variant.spam.prior * 100.0
        );

        match &variant.outcome {
            Outcome::Evaluation(eval) => {
                println!("Test Set:");
                println!("\tCorrect Ham: {}", eval.correct_ham);
                println!("\tCorrect Spam: {}", eval.correct_spam);
                println!("\tIncorrect Ham (actually was spam): {}", eval.incorrect_ham);
                println!("\tIncorrect Spam (actually was ham): {}", eval.incorrect_spam);
                println!("\tPercentage Correct Ham: {}", percent(eval.accuracy_ham));
                println!("\tPercentage Correct Spam: {}", percent(eval.accuracy_spam));
                println!(
                    "\t{}",
                    style(format!("Overall Accuracy: {}", percent(variant.overall_accuracy)))
                        .green()
                        .bold()
                );
            }
            Outcome::Prediction { class } => {
                print_top_words("HAM", &variant.ham);
                print_top_words("SPAM", &variant.spam);
                let message = report.message.as_deref().unwrap_or_default();
                println!("{} {}", style("Text Message:").red().bold(), message);
                println!("{} {}", style("Classifies as:").red().bold(), class);
            }
        }
        println!();
    }
}

fn print_top_words(label: &str, summary: &ClassSummary) {
    println!(
        "{}",
        style(format!("The {} most common {} words", summary.top_words.len(), label))
            .green()
            .bold()
    );
    for (word, count) in &summary.top_words {
        println!("{}\t\t {}", style("Word").blue().bold(), word);
        println!("{}\t {}", style("Word frequency").blue().bold(), count);
    }
    println!();
}
