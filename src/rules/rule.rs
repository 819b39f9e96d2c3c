use crate::types::Itemset;
use std::fmt::{self, Display, Formatter};

/// One antecedent => consequent association drawn from a frequent itemset.
///
/// `support` and `confidence` are percentages in [0, 100]; `lift` is the
/// plain ratio of observed to expected co-occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} => {:?} (support {:.2}%, confidence {:.2}%)",
            self.antecedent, self.consequent, self.support, self.confidence
        )
    }
}
