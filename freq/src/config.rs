use anyhow::{ensure, Result};
use std::thread;

pub const DEFAULT_TOP_K: usize = 100;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 6;

pub fn default_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Per-run settings, fixed before any shard is processed.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Number of entries in the final result.
    pub top_k: usize,
    /// Tokens must be strictly longer than this many characters.
    pub min_token_len: usize,
    /// Concurrent counting workers.
    pub workers: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            workers: default_workers(),
        }
    }
}

impl JobConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.workers > 0, "at least one counting worker is required");
        Ok(())
    }
}
