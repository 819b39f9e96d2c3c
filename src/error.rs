use crate::types::Itemset;
use thiserror::Error;

/// Failures defined for a mining run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MineError {
    /// Support is a fraction of the transaction count, so an empty
    /// collection has no defined support for anything.
    #[error("transaction collection is empty")]
    EmptyTransactions,

    /// A support lookup during rule derivation found no entry for a subset
    /// of a frequent itemset. Every such subset must have been inserted at
    /// an earlier level, so a miss means candidate generation is broken.
    #[error("itemset {0:?} is missing from the frequent-pattern table")]
    MissingSubset(Itemset),
}

pub type Result<T> = std::result::Result<T, MineError>;
