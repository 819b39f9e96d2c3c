use crate::transactions::{contains_sorted, TransactionStore};
use crate::types::{ItemCounts, Itemset, ItemsetCounts, SupportCount};
use rayon::prelude::*;
use std::collections::HashMap;

/// Count every distinct item across the store and keep those meeting the
/// threshold, emitted as 1-itemset counts to seed the level-wise loop.
pub fn frequent_singletons(store: &TransactionStore, min_support_pct: f64) -> ItemsetCounts {
    let num_transactions = store.len() as f64;
    let mut item_counts: ItemCounts = HashMap::new();

    for transaction in store.transactions() {
        for &item in transaction {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }

    item_counts
        .into_iter()
        .filter(|&(_, count)| meets_threshold(count, num_transactions, min_support_pct))
        .map(|(item, count)| (vec![item], count))
        .collect()
}

/// Scan the store against a candidate list and keep the candidates meeting
/// the threshold, with their counts. Per-candidate scans are independent,
/// so they run in parallel without changing the result.
pub fn frequent_filter(
    store: &TransactionStore,
    min_support_pct: f64,
    candidates: &[Itemset],
) -> ItemsetCounts {
    let num_transactions = store.len() as f64;

    candidates
        .par_iter()
        .filter_map(|candidate| {
            let count = store
                .transactions()
                .iter()
                .filter(|transaction| {
                    transaction.len() >= candidate.len()
                        && contains_sorted(transaction, candidate)
                })
                .count() as SupportCount;

            // A candidate contained in no transaction never gets a table
            // entry, whatever the threshold.
            if count > 0 && meets_threshold(count, num_transactions, min_support_pct) {
                Some((candidate.clone(), count))
            } else {
                None
            }
        })
        .collect()
}

/// Inclusive at the boundary: a support percentage exactly equal to the
/// threshold counts as frequent.
pub(crate) fn meets_threshold(
    count: SupportCount,
    num_transactions: f64,
    min_support_pct: f64,
) -> bool {
    f64::from(count) / num_transactions * 100.0 >= min_support_pct
}
