use std::collections::{hash_map, HashMap};

/// Shard-local accumulator. Owned by exactly one worker while its shard
/// is processed; `finalize` consumes it, so a finalized counter can
/// never be observed into again.
#[derive(Debug, Default)]
pub struct ShardCounter {
    counts: HashMap<String, u64>,
}

impl ShardCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Snapshots the shard's counts as an immutable table ready for
    /// merging.
    pub fn finalize(self) -> FrequencyTable {
        FrequencyTable {
            counts: self.counts,
        }
    }
}

/// A term -> count mapping. Partial tables cover one shard or worker;
/// the global table is the fold of all of them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `other` into `self` per term, consuming `other`. Associative
    /// and commutative, so any grouping of pairwise merges over a set of
    /// partial tables produces the same result; merging an empty table
    /// is an identity.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (term, n) in other.counts {
            *self.counts.entry(term).or_insert(0) += n;
        }
    }

    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, &n)| (term.as_str(), n))
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl FromIterator<(String, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (term, n) in iter {
            *table.counts.entry(term).or_insert(0) += n;
        }
        table
    }
}
