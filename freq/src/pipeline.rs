use std::sync::Arc;

use anyhow::{Context, Result};
use crossbeam_queue::ArrayQueue;
use tracing::{debug, info};

use crate::config::JobConfig;
use crate::table::{FrequencyTable, ShardCounter};
use crate::tokenize::TokenFilter;
use crate::topk::top_k;

/// Fan-out/fan-in aggregation over a set of input shards.
///
/// Shards wait in a shared queue; each worker pops shards, counts them
/// through the shared filter, and combines its per-shard tables into one
/// worker-local table, so only one table per worker crosses the merge
/// boundary. The driver then folds the worker tables into the global
/// table by ownership transfer. No stage shares a mutable table with
/// another, so no locking is involved anywhere.
pub struct Pipeline {
    cfg: JobConfig,
    filter: Arc<TokenFilter>,
}

impl Pipeline {
    /// Validates the configuration and loads the stopword set, both
    /// before any shard is touched. Every table produced by this
    /// pipeline descends from the one filter built here, so tables from
    /// differently-configured runs can never meet in a merge.
    pub fn new<I>(cfg: JobConfig, stopwords: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        cfg.validate()?;
        let filter = Arc::new(TokenFilter::from_lines(stopwords, cfg.min_token_len));
        Ok(Self { cfg, filter })
    }

    fn count_shard<S>(filter: &TokenFilter, shard: S) -> FrequencyTable
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut counter = ShardCounter::new();
        for unit in shard {
            for token in filter.tokens(unit.as_ref()) {
                counter.observe(token);
            }
        }
        counter.finalize()
    }

    /// Runs the counting stages and returns the unreduced global table,
    /// for callers that want full counts rather than the top k.
    pub async fn aggregate<S>(&self, shards: Vec<S>) -> Result<FrequencyTable>
    where
        S: IntoIterator + Send + 'static,
        S::Item: AsRef<str>,
    {
        if shards.is_empty() {
            return Ok(FrequencyTable::new());
        }

        let n_shards = shards.len();
        let pending = Arc::new(ArrayQueue::new(n_shards));
        for shard in shards {
            assert!(pending.push(shard).is_ok());
        }

        let workers = self.cfg.workers.min(n_shards);
        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let pending = Arc::clone(&pending);
            let filter = Arc::clone(&self.filter);
            handles.push(tokio::task::spawn_blocking(move || {
                let mut local = FrequencyTable::new();
                let mut drained = 0usize;
                while let Some(shard) = pending.pop() {
                    local.merge(Self::count_shard(&filter, shard));
                    drained += 1;
                }
                debug!(worker, shards = drained, terms = local.len(), "worker combined");
                local
            }));
        }

        // a lost worker would silently lose its shards' counts, so a
        // panic anywhere fails the whole run
        let mut global = FrequencyTable::new();
        for handle in handles {
            let local = handle.await.context("counting worker panicked")?;
            global.merge(local);
        }
        info!(shards = n_shards, terms = global.len(), "global merge complete");
        Ok(global)
    }

    /// Full pipeline: aggregate all shards, then reduce to the top k
    /// entries, descending by count.
    pub async fn run<S>(&self, shards: Vec<S>) -> Result<Vec<(String, u64)>>
    where
        S: IntoIterator + Send + 'static,
        S::Item: AsRef<str>,
    {
        let global = self.aggregate(shards).await?;
        Ok(top_k(global, self.cfg.top_k))
    }
}
