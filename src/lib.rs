//! Level-wise frequent-itemset mining and association-rule derivation.
//!
//! Transactions go in as plain integer item-id sequences; out come a
//! queryable table of every itemset whose support meets a minimum
//! percentage of the transaction count, and the association rules between
//! co-occurring items, each annotated with support, confidence and lift.
//!
//! ```
//! use rulemine::{derive_rules, mine, TransactionStore};
//!
//! let store = TransactionStore::from_transactions(vec![
//!     vec![1, 2],
//!     vec![2, 3],
//!     vec![1, 3],
//! ]);
//!
//! let patterns = mine(&store, 50.0)?;
//! assert_eq!(patterns.support_count(&[2]), Some(2));
//!
//! // no pair reaches 50% support, so there is nothing to split into rules
//! let rules = derive_rules(&store, &patterns)?;
//! assert!(rules.is_empty());
//! # Ok::<(), rulemine::MineError>(())
//! ```

pub mod error;
pub mod itemsets;
pub mod rules;
pub mod transactions;
pub mod types;

pub use error::{MineError, Result};
pub use itemsets::FrequentPatterns;
pub use rules::{derive_rules, Rule};
pub use transactions::TransactionStore;
pub use types::{ItemId, Itemset, ItemsetCounts, SupportCount, Transaction};

use itemsets::mine_patterns;

/// Mine every itemset whose support meets `min_support_pct`, a percentage
/// of the transaction count in [0, 100].
///
/// A threshold above 100 yields an empty table; a threshold at or below
/// zero yields every itemset occurring in at least one transaction.
pub fn mine(store: &TransactionStore, min_support_pct: f64) -> Result<FrequentPatterns> {
    mine_patterns(store, min_support_pct, None)
}

/// Like [`mine`], but stops after the level of `max_len`-item itemsets.
/// A bound below one behaves as one.
pub fn mine_bounded(
    store: &TransactionStore,
    min_support_pct: f64,
    max_len: usize,
) -> Result<FrequentPatterns> {
    mine_patterns(store, min_support_pct, Some(max_len))
}
