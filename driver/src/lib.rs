//! Job driver: logging, corpus and stopword file I/O, shard splitting.
//! Scheduling and counting live in the `freq` crate.

use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;

/// Installs the global subscriber. The returned guard must stay alive
/// for the duration of the run or buffered log lines are lost.
pub fn init_logger() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let timer = LocalTime::new(format_description!("[hour]:[minute]:[second]"));
    tracing_subscriber::fmt()
        .with_timer(timer)
        .with_writer(writer)
        .with_max_level(tracing::Level::INFO)
        .init();
    guard
}

pub fn load_stopwords(path: &Path) -> Result<Vec<String>> {
    let raw = read_to_string(path)
        .with_context(|| format!("reading stopword list {}", path.display()))?;
    Ok(raw.lines().map(str::to_string).collect())
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let raw =
        read_to_string(path).with_context(|| format!("reading input {}", path.display()))?;
    Ok(raw.lines().map(str::to_string).collect())
}

/// Re-partitions one input into at most `n` shards of near-equal line
/// counts. Every line lands in exactly one shard, in order.
pub fn split_shards(lines: Vec<String>, n: usize) -> Vec<Vec<String>> {
    let per_shard = (lines.len() + n.max(1) - 1) / n.max(1);
    let mut shards = Vec::new();
    let mut iter = lines.into_iter();
    loop {
        let chunk: Vec<String> = iter.by_ref().take(per_shard.max(1)).collect();
        if chunk.is_empty() {
            break;
        }
        shards.push(chunk);
    }
    shards
}
