// BasketMiner - core/miner.rs
//
// Stage 3 entry point: transactions in, MiningOutcome out.
//
// Encoding covers the full item universe of the transaction list. The two
// empty outcomes (nothing frequent, no rule confident enough) are ordinary
// results, not errors.

use crate::core::apriori;
use crate::core::encoder;
use crate::core::model::{MiningOutcome, MiningParams, TransactionList};
use crate::core::rules;

/// Mine association rules from `transactions` under `params`.
pub fn mine(transactions: &TransactionList, params: &MiningParams) -> MiningOutcome {
    let table = encoder::encode(transactions);
    let itemsets = apriori::frequent_itemsets(&table, params.min_support, params.max_len);

    if itemsets.is_empty() {
        tracing::info!(
            min_support = params.min_support,
            "No frequent itemsets at this support"
        );
        return MiningOutcome::NoFrequentItemsets;
    }

    let universe = table.universe().to_vec();
    let rules = rules::association_rules(&itemsets, &universe, params.min_confidence);

    tracing::info!(
        itemsets = itemsets.len(),
        rules = rules.len(),
        min_support = params.min_support,
        min_confidence = params.min_confidence,
        "Mining complete"
    );

    if rules.is_empty() {
        MiningOutcome::NoRules { universe, itemsets }
    } else {
        MiningOutcome::Rules {
            universe,
            itemsets,
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(items: &[&[&str]]) -> TransactionList {
        items
            .iter()
            .map(|t| t.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn params(min_support: f64, min_confidence: f64) -> MiningParams {
        MiningParams::new(min_support, min_confidence, None).unwrap()
    }

    #[test]
    fn test_no_frequent_itemsets_outcome() {
        let outcome = mine(&tx(&[&["a"], &["b"], &["c"], &["d"]]), &params(0.5, 0.5));
        assert_eq!(outcome, MiningOutcome::NoFrequentItemsets);
        assert!(outcome.rules().is_empty());
    }

    #[test]
    fn test_single_transaction_single_item() {
        let outcome = mine(&tx(&[&["only"]]), &params(0.5, 0.5));
        match outcome {
            MiningOutcome::NoRules { universe, itemsets } => {
                assert_eq!(universe, vec!["only".to_string()]);
                assert_eq!(itemsets.len(), 1);
                assert_eq!(itemsets[0].support, 1.0);
            }
            other => panic!("expected NoRules, got {other:?}"),
        }
    }

    #[test]
    fn test_no_rules_at_high_confidence() {
        // a and b each appear in 3 of 4 baskets, together in 2: confidence 2/3.
        let outcome = mine(
            &tx(&[&["a", "b"], &["a", "b"], &["a"], &["b"]]),
            &params(0.5, 0.9),
        );
        assert!(matches!(outcome, MiningOutcome::NoRules { .. }), "got {outcome:?}");
        assert_eq!(outcome.itemsets().len(), 3);
    }

    #[test]
    fn test_rules_outcome() {
        let outcome = mine(
            &tx(&[&["bread", "milk"], &["bread", "butter"], &["bread", "milk", "butter"]]),
            &params(0.5, 0.5),
        );
        assert_eq!(outcome.itemsets().len(), 5);
        assert_eq!(outcome.rules().len(), 4);
        assert_eq!(outcome.universe(), &["bread", "butter", "milk"]);
    }
}
