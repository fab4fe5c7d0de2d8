use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::table::FrequencyTable;

/// Selects the `k` highest-count entries from `table`, descending by
/// count, using a bounded min-heap: O(V log k) time and O(k) memory for
/// vocabulary size V, instead of sorting the whole vocabulary.
///
/// Entries tied on count compare on the term itself, so the boundary
/// tie-break is deterministic run-to-run even though no particular
/// choice among equal-count terms is promised.
pub fn top_k(table: FrequencyTable, k: usize) -> Vec<(String, u64)> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<(u64, String)>> = BinaryHeap::with_capacity(k);
    for (term, count) in table {
        if heap.len() < k {
            heap.push(Reverse((count, term)));
            continue;
        }
        let evict = match heap.peek() {
            Some(Reverse(min)) => (count, &term) > (min.0, &min.1),
            None => unreachable!("heap holds k > 0 entries"),
        };
        if evict {
            heap.pop();
            heap.push(Reverse((count, term)));
        }
    }

    // ascending over Reverse is descending over (count, term)
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((count, term))| (term, count))
        .collect()
}
