use itertools::Itertools;
use proptest::collection::vec;
use proptest::prelude::*;
use rulemine::{derive_rules, mine, mine_bounded, SupportCount, TransactionStore};

fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    vec(vec(0_usize..8, 1..6), 1..12)
}

proptest! {
    #[test]
    fn mined_counts_match_a_brute_force_scan(
        raw in transactions_strategy(),
        min_support_pct in 0.0_f64..100.0,
    ) {
        let store = TransactionStore::from_transactions(raw);
        let patterns = mine(&store, min_support_pct).unwrap();
        let num_transactions = store.len() as f64;

        for (itemset, count) in patterns.iter() {
            let scanned = store
                .transactions()
                .iter()
                .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
                .count() as SupportCount;

            prop_assert_eq!(count, scanned);
            prop_assert!(f64::from(count) / num_transactions * 100.0 >= min_support_pct);
        }
    }

    #[test]
    fn every_proper_subset_of_a_frequent_itemset_is_frequent(
        raw in transactions_strategy(),
        min_support_pct in 0.0_f64..100.0,
    ) {
        let store = TransactionStore::from_transactions(raw);
        let patterns = mine(&store, min_support_pct).unwrap();

        for (itemset, count) in patterns.iter() {
            for subset in itemset.iter().copied().powerset() {
                if subset.is_empty() || subset.len() == itemset.len() {
                    continue;
                }

                let subset_count = patterns.support_count(&subset);
                prop_assert!(
                    subset_count.is_some(),
                    "{:?} frequent but {:?} absent",
                    itemset,
                    subset
                );
                prop_assert!(subset_count.unwrap() >= count);
            }
        }
    }

    #[test]
    fn rule_metrics_stay_in_bounds(
        raw in transactions_strategy(),
        min_support_pct in 0.0_f64..100.0,
    ) {
        let store = TransactionStore::from_transactions(raw);
        let patterns = mine(&store, min_support_pct).unwrap();
        let rules = derive_rules(&store, &patterns).unwrap();

        for rule in rules {
            prop_assert!(rule.confidence >= 0.0);
            prop_assert!(rule.confidence <= 100.0 + 1e-9);
            // count(antecedent) <= num_transactions, so confidence >= support
            prop_assert!(rule.confidence + 1e-9 >= rule.support);
            prop_assert!(!rule.antecedent.is_empty());
            prop_assert!(!rule.consequent.is_empty());
            prop_assert!(rule
                .antecedent
                .iter()
                .all(|item| !rule.consequent.contains(item)));

            let mut union = rule.antecedent.clone();
            union.extend(&rule.consequent);
            union.sort_unstable();
            prop_assert!(patterns.contains(&union));
        }
    }

    #[test]
    fn bounded_mining_never_exceeds_the_cap(
        raw in transactions_strategy(),
        cap in 1_usize..4,
    ) {
        let store = TransactionStore::from_transactions(raw);
        let patterns = mine_bounded(&store, 0.0, cap).unwrap();

        for (itemset, _) in patterns.iter() {
            prop_assert!(itemset.len() <= cap);
        }
    }

    #[test]
    fn raising_the_threshold_only_shrinks_the_table(
        raw in transactions_strategy(),
        low in 0.0_f64..50.0,
        high in 50.0_f64..100.0,
    ) {
        let store = TransactionStore::from_transactions(raw);
        let at_low = mine(&store, low).unwrap();
        let at_high = mine(&store, high).unwrap();

        for (itemset, count) in at_high.iter() {
            prop_assert_eq!(at_low.support_count(itemset), Some(count));
        }
    }
}
