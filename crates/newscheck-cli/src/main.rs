mod gate;
mod render;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use newscheck_core::LabelMap;
use newscheck_model::Classifier;
use tracing::info;

/// newscheck - article credibility classification
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing vectorizer.json and model.json
    #[arg(short, long, default_value = "model")]
    model_dir: PathBuf,

    /// Read article text from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Minimum word count before classification runs
    #[arg(long, default_value_t = 50)]
    min_words: usize,

    /// The artifact emits numeric class labels ("0"/"1") rather than
    /// "REAL"/"FAKE" strings
    #[arg(long)]
    numeric_labels: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let label_map = if args.numeric_labels {
        LabelMap::zero_one()
    } else {
        LabelMap::real_fake_strings()
    };

    // Loaded once, before any input is read; absence is reported up front
    // rather than discovered per request.
    let classifier = Classifier::load(&args.model_dir, label_map)
        .with_context(|| format!("loading scoring artifact from {}", args.model_dir.display()))?;
    if !classifier.is_ready() {
        anyhow::bail!(
            "cannot run prediction: no scoring artifact in {}",
            args.model_dir.display()
        );
    }

    let article = read_article(args.input.as_deref())?;

    match gate::check(&article, args.min_words) {
        gate::GateDecision::Empty => {
            anyhow::bail!("please provide some text to analyze");
        }
        gate::GateDecision::TooShort { words, min_words } => {
            anyhow::bail!(
                "please provide at least {min_words} words ({words} entered) for a reliable prediction"
            );
        }
        gate::GateDecision::Pass => {}
    }

    let verdict = classifier
        .classify(&article)
        .context("running classification")?;
    info!(%verdict, "classification complete");

    println!("{}", render::verdict_report(verdict));
    Ok(())
}

fn read_article(input: Option<&std::path::Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading article from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading article from stdin")?;
            Ok(text)
        }
    }
}
