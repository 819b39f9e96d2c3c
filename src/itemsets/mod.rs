pub mod candidates;
pub mod count;

use crate::error::{MineError, Result};
use crate::transactions::TransactionStore;
use crate::types::{ItemId, Itemset, ItemsetCounts, SupportCount};
use tracing::debug;

/// The frequent-pattern table accumulated over a whole mining run.
///
/// Insert-only: once an itemset is accepted at some level it stays for the
/// lifetime of the run, because later levels and rule derivation look up
/// the supports of earlier levels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentPatterns {
    counts: ItemsetCounts,
}

impl FrequentPatterns {
    pub fn support_count(&self, itemset: &[ItemId]) -> Option<SupportCount> {
        self.counts.get(itemset).copied()
    }

    pub fn contains(&self, itemset: &[ItemId]) -> bool {
        self.counts.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, SupportCount)> {
        self.counts.iter().map(|(itemset, &count)| (itemset, count))
    }

    pub fn counts(&self) -> &ItemsetCounts {
        &self.counts
    }

    fn absorb(&mut self, level: ItemsetCounts) {
        self.counts.extend(level);
    }
}

impl From<ItemsetCounts> for FrequentPatterns {
    fn from(counts: ItemsetCounts) -> Self {
        Self { counts }
    }
}

/// Level-wise mining loop: seed with the frequent singletons, then
/// repeatedly join, prune, count and filter until a level comes up empty.
/// Itemset size is bounded by the widest transaction, so the loop
/// terminates on any finite store.
pub fn mine_patterns(
    store: &TransactionStore,
    min_support_pct: f64,
    max_len: Option<usize>,
) -> Result<FrequentPatterns> {
    if store.is_empty() {
        return Err(MineError::EmptyTransactions);
    }

    let mut patterns = FrequentPatterns::default();
    let mut frequent = count::frequent_singletons(store, min_support_pct);
    let mut size = 1;

    while !frequent.is_empty() {
        debug!("level {}: {} frequent itemsets", size, frequent.len());

        if max_len.map_or(false, |cap| size >= cap) {
            patterns.absorb(frequent);
            break;
        }

        size += 1;
        let next_candidates = candidates::join_and_prune(&frequent, size);
        debug!("level {}: {} candidates to count", size, next_candidates.len());

        patterns.absorb(frequent);
        frequent = count::frequent_filter(store, min_support_pct, &next_candidates);
    }

    Ok(patterns)
}
