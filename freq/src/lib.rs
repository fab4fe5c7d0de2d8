//! Word-frequency aggregation: per-shard counting, associative table
//! merge, and bounded top-k selection.

pub mod config;
pub mod pipeline;
pub mod table;
pub mod tokenize;
pub mod topk;

pub use config::JobConfig;
pub use pipeline::Pipeline;
pub use table::{FrequencyTable, ShardCounter};
pub use tokenize::TokenFilter;
pub use topk::top_k;
