pub mod rule;

pub use rule::Rule;

use crate::error::{MineError, Result};
use crate::itemsets::FrequentPatterns;
use crate::transactions::TransactionStore;
use crate::types::{ItemId, Itemset, SupportCount};

/// Derive every association rule from a frequent-pattern table.
///
/// Each itemset of size k splits into its 2^k - 2 ordered
/// (antecedent, consequent) bipartitions via a k-bit mask. A mask and its
/// complement are distinct masks, so both orientations of every split are
/// emitted.
pub fn derive_rules(store: &TransactionStore, patterns: &FrequentPatterns) -> Result<Vec<Rule>> {
    if store.is_empty() {
        return Err(MineError::EmptyTransactions);
    }

    let num_transactions = store.len() as f64;
    let mut rules = Vec::new();

    for (pattern, pattern_count) in patterns.iter() {
        if pattern.len() < 2 {
            continue;
        }

        for mask in 1..(1_usize << pattern.len()) - 1 {
            let (antecedent, consequent) = split_by_mask(pattern, mask);
            let antecedent_count = support_of(patterns, &antecedent)?;
            let consequent_count = support_of(patterns, &consequent)?;

            let support = f64::from(pattern_count) / num_transactions * 100.0;
            let confidence = f64::from(pattern_count) / f64::from(antecedent_count) * 100.0;
            let lift = f64::from(pattern_count) * num_transactions
                / (f64::from(antecedent_count) * f64::from(consequent_count));

            rules.push(Rule {
                antecedent,
                consequent,
                support,
                confidence,
                lift,
            });
        }
    }

    Ok(rules)
}

/// Both sides of a split are non-empty subsets of a frequent itemset, so
/// both must already be in the table; a miss is a broken invariant.
fn support_of(patterns: &FrequentPatterns, itemset: &Itemset) -> Result<SupportCount> {
    patterns
        .support_count(itemset)
        .ok_or_else(|| MineError::MissingSubset(itemset.clone()))
}

/// Bit i of `mask` sends `pattern[i]` to the consequent; clear bits build
/// the antecedent. Elements are taken in stored order, least significant
/// bit first, so both halves stay sorted.
fn split_by_mask(pattern: &[ItemId], mask: usize) -> (Itemset, Itemset) {
    let mut antecedent = Itemset::with_capacity(pattern.len());
    let mut consequent = Itemset::with_capacity(pattern.len());

    for (position, &item) in pattern.iter().enumerate() {
        if mask >> position & 1 == 1 {
            consequent.push(item);
        } else {
            antecedent.push(item);
        }
    }

    (antecedent, consequent)
}
