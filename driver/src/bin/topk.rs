use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use driver::{init_logger, load_stopwords, read_lines, split_shards};
use freq::config::{default_workers, DEFAULT_MIN_TOKEN_LEN, DEFAULT_TOP_K};
use freq::{JobConfig, Pipeline};
use itertools::Itertools;
use tracing::info;

#[derive(Parser, Debug)]
struct Cli {
    /// Stopword list, one word per line
    #[arg(short, long)]
    stopwords: PathBuf,
    /// Number of entries to keep
    #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
    k: usize,
    /// Tokens must be strictly longer than this many characters
    #[arg(short, long, default_value_t = DEFAULT_MIN_TOKEN_LEN)]
    min_len: usize,
    #[arg(short, long, default_value_t = default_workers())]
    workers: usize,
    /// Re-split the whole input into this many shards instead of one
    /// shard per file
    #[arg(long)]
    shards: Option<usize>,
    /// Emit the full merged table instead of the top k entries
    #[arg(long)]
    full: bool,
    #[arg(short, long, default_value = "topk-out")]
    output: PathBuf,
    input_files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logger();
    let cli = Cli::parse();

    // stopwords and inputs load before any counting starts, so an
    // unreadable file aborts the run with nothing partial written
    let stopwords = load_stopwords(&cli.stopwords)?;
    let cfg = JobConfig {
        top_k: cli.k,
        min_token_len: cli.min_len,
        workers: cli.workers,
    };
    let pipeline = Pipeline::new(cfg, &stopwords)?;

    let mut shards = Vec::with_capacity(cli.input_files.len());
    for path in &cli.input_files {
        shards.push(read_lines(path)?);
    }
    let shards = match cli.shards {
        Some(n) => split_shards(shards.into_iter().flatten().collect(), n),
        None => shards,
    };
    info!(shards = shards.len(), workers = cli.workers, "starting run");

    let started = Instant::now();
    let mut out = BufWriter::new(
        File::create(&cli.output)
            .with_context(|| format!("creating output {}", cli.output.display()))?,
    );
    if cli.full {
        let global = pipeline.aggregate(shards).await?;
        for (term, count) in global
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        {
            writeln!(out, "{} {}", term, count)?;
        }
    } else {
        for (term, count) in pipeline.run(shards).await? {
            writeln!(out, "{} {}", term, count)?;
        }
    }
    info!(
        elapsed = ?started.elapsed(),
        output = %cli.output.display(),
        "run complete"
    );
    Ok(())
}
