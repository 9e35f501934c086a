//! word-index
//!
//! Counts words in text files (or standard input) and prints them in
//! alphabetical order.
//!
//! # Usage
//!
//! ```bash
//! word-index README.md DESIGN.md --format list --top 10
//! cat notes.txt | RUST_LOG=word_index=debug word-index --format stats
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_index::{Format, WordIndex, render};

#[derive(Parser, Debug)]
#[command(name = "word-index")]
#[command(about = "Count words and list them in alphabetical order")]
struct Cli {
    /// Text files to index; standard input is read when none are given
    inputs: Vec<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = Format::List)]
    format: Format,

    /// Only list the N most frequent words
    #[arg(long, short = 'n')]
    top: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_index=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut index = WordIndex::new();

    if cli.inputs.is_empty() {
        index.add_stdin()?;
    } else {
        for path in &cli.inputs {
            index.add_file(path)?;
        }
    }

    tracing::debug!(
        distinct = index.counts().size(),
        depth = index.counts().max_depth(),
        "index built"
    );
    print!("{}", render(&index, cli.format, cli.top));
    Ok(())
}
