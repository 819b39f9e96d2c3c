use crate::transactions::contains_sorted;
use crate::types::{ItemId, Itemset, ItemsetCounts};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Pairwise self-join of the previous level's frequent itemsets, filtered
/// by the subset-pruning test.
///
/// A union of two frequent itemsets with exactly `size` items becomes a
/// candidate only when all `size` of its (size-1)-item subsets are
/// themselves frequent, checked by counting how many itemsets of the
/// previous level it contains. The same union can arise from many pairs;
/// the output is deduplicated and sorted.
pub fn join_and_prune(frequent: &ItemsetCounts, size: usize) -> Vec<Itemset> {
    let itemsets: Vec<&Itemset> = frequent.keys().collect();
    let mut candidates: BTreeSet<Itemset> = BTreeSet::new();

    for i in 0..itemsets.len() {
        for j in 0..i {
            let joined = union_sorted(itemsets[i], itemsets[j]);
            if joined.len() != size || candidates.contains(&joined) {
                continue;
            }

            let frequent_subsets = itemsets
                .iter()
                .filter(|itemset| contains_sorted(&joined, itemset))
                .count();
            if frequent_subsets == size {
                candidates.insert(joined);
            }
        }
    }

    candidates.into_iter().collect()
}

/// Union of two sorted itemsets, itself sorted and deduplicated.
fn union_sorted(first: &[ItemId], second: &[ItemId]) -> Itemset {
    itertools::merge(first.iter().copied(), second.iter().copied())
        .dedup()
        .collect()
}
