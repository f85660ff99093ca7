// BasketMiner - core/rules.rs
//
// Association rule derivation from frequent itemsets, plus rule ordering
// and presentation helpers.
//
// Every frequent itemset of size >= 2 is split into each non-empty proper
// subset (antecedent) and its complement (consequent). By the Apriori
// property every such subset is itself frequent, so its support is always
// available from the itemset list.

use crate::core::model::{
    meets_threshold, AssociationRule, FrequentItemset, RuleRecord, RuleRow,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Separator between items on one side of a rule.
const ITEM_SEPARATOR: &str = ", ";

/// Separator between antecedent and consequent.
const RULE_ARROW: &str = " -> ";

/// Derive all rules with confidence >= `min_confidence`, in display order
/// (see [`sort_rules`]).
pub fn association_rules(
    itemsets: &[FrequentItemset],
    universe: &[String],
    min_confidence: f64,
) -> Vec<AssociationRule> {
    let support_of: HashMap<&[usize], f64> = itemsets
        .iter()
        .map(|f| (f.items.as_slice(), f.support))
        .collect();

    let mut rules = Vec::new();

    for itemset in itemsets.iter().filter(|f| f.items.len() >= 2) {
        let len = itemset.items.len();
        if len >= u64::BITS as usize {
            tracing::warn!(size = len, "Itemset too large to split into rules; skipping");
            continue;
        }
        // Masks 1..(2^len - 1) are the non-empty proper subsets.
        for mask in 1..((1u64 << len) - 1) {
            let (antecedent, consequent): (Vec<(usize, usize)>, Vec<(usize, usize)>) = itemset
                .items
                .iter()
                .copied()
                .enumerate()
                .partition(|&(pos, _)| mask & (1u64 << pos) != 0);
            let antecedent: Vec<usize> = antecedent.into_iter().map(|(_, i)| i).collect();
            let consequent: Vec<usize> = consequent.into_iter().map(|(_, i)| i).collect();

            let (Some(&antecedent_support), Some(&consequent_support)) = (
                support_of.get(antecedent.as_slice()),
                support_of.get(consequent.as_slice()),
            ) else {
                // Only reachable when the itemset list is not downward
                // closed, e.g. hand-built input.
                tracing::debug!(?antecedent, ?consequent, "Subset support unavailable; skipping");
                continue;
            };

            let confidence = itemset.support / antecedent_support;
            if !meets_threshold(confidence, min_confidence) {
                continue;
            }

            rules.push(score(
                antecedent,
                consequent,
                itemset.support,
                antecedent_support,
                consequent_support,
            ));
        }
    }

    sort_rules(&mut rules, universe);
    rules
}

fn score(
    antecedent: Vec<usize>,
    consequent: Vec<usize>,
    support: f64,
    antecedent_support: f64,
    consequent_support: f64,
) -> AssociationRule {
    let confidence = support / antecedent_support;
    let conviction = if confidence >= 1.0 {
        None
    } else {
        Some((1.0 - consequent_support) / (1.0 - confidence))
    };
    AssociationRule {
        antecedent,
        consequent,
        support,
        confidence,
        antecedent_support,
        consequent_support,
        lift: confidence / consequent_support,
        leverage: support - antecedent_support * consequent_support,
        conviction,
    }
}

/// Deterministic display order: confidence descending, then support
/// descending, then smaller antecedents first, then combination text.
pub fn sort_rules(rules: &mut [AssociationRule], universe: &[String]) {
    rules.sort_by_cached_key(|r| {
        (
            DescendingF64(r.confidence),
            DescendingF64(r.support),
            r.antecedent.len(),
            combination(r, universe),
        )
    });
}

/// Total-ordered wrapper that sorts larger values first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DescendingF64(f64);

impl Eq for DescendingF64 {}

impl PartialOrd for DescendingF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DescendingF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}

/// Item labels for a list of universe indices.
pub fn labels(items: &[usize], universe: &[String]) -> Vec<String> {
    items
        .iter()
        .filter_map(|&i| universe.get(i).cloned())
        .collect()
}

/// Human-readable form `"a, b -> c"`.
pub fn combination(rule: &AssociationRule, universe: &[String]) -> String {
    format!(
        "{}{RULE_ARROW}{}",
        labels(&rule.antecedent, universe).join(ITEM_SEPARATOR),
        labels(&rule.consequent, universe).join(ITEM_SEPARATOR)
    )
}

/// Display/export rows for `rules`, order preserved.
pub fn to_rows(rules: &[AssociationRule], universe: &[String]) -> Vec<RuleRow> {
    rules
        .iter()
        .map(|r| RuleRow {
            combination: combination(r, universe),
            support: r.support,
            confidence: r.confidence,
        })
        .collect()
}

/// Full records (all scores, item names) for `rules`, order preserved.
pub fn to_records(rules: &[AssociationRule], universe: &[String]) -> Vec<RuleRecord> {
    rules
        .iter()
        .map(|r| RuleRecord {
            antecedents: labels(&r.antecedent, universe),
            consequents: labels(&r.consequent, universe),
            combination: combination(r, universe),
            antecedent_support: r.antecedent_support,
            consequent_support: r.consequent_support,
            support: r.support,
            confidence: r.confidence,
            lift: r.lift,
            leverage: r.leverage,
            conviction: r.conviction,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::apriori::frequent_itemsets;
    use crate::core::encoder::encode;

    fn mine(items: &[&[&str]], min_support: f64, min_confidence: f64) -> (Vec<String>, Vec<AssociationRule>) {
        let table = encode(
            &items
                .iter()
                .map(|t| t.iter().map(|s| s.to_string()).collect())
                .collect(),
        );
        let itemsets = frequent_itemsets(&table, min_support, None);
        let universe = table.universe().to_vec();
        let rules = association_rules(&itemsets, &universe, min_confidence);
        (universe, rules)
    }

    const BASKETS: &[&[&str]] = &[
        &["bread", "milk"],
        &["bread", "butter"],
        &["bread", "milk", "butter"],
    ];

    #[test]
    fn test_bread_milk_butter_rules_in_display_order() {
        let (universe, rules) = mine(BASKETS, 0.5, 0.5);
        let rows = to_rows(&rules, &universe);
        let names: Vec<&str> = rows.iter().map(|r| r.combination.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "butter -> bread",
                "milk -> bread",
                "bread -> butter",
                "bread -> milk",
            ]
        );
        assert!((rows[0].confidence - 1.0).abs() < 1e-12);
        assert!((rows[0].support - 2.0 / 3.0).abs() < 1e-12);
        assert!((rows[2].confidence - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_formula_and_disjoint_sides() {
        let data: &[&[&str]] = &[
            &["a", "b", "c"],
            &["a", "b"],
            &["a", "c"],
            &["b", "c"],
            &["a", "b", "c", "d"],
        ];
        let table = encode(
            &data
                .iter()
                .map(|t| t.iter().map(|s| s.to_string()).collect())
                .collect(),
        );
        let itemsets = frequent_itemsets(&table, 0.2, None);
        let rules = association_rules(&itemsets, table.universe(), 0.1);
        assert!(!rules.is_empty());
        for r in &rules {
            assert!(!r.antecedent.is_empty() && !r.consequent.is_empty());
            assert!(r.antecedent.iter().all(|i| !r.consequent.contains(i)));
            let mut union = r.antecedent.clone();
            union.extend(&r.consequent);
            union.sort_unstable();
            let expected = table.support(&union) / table.support(&r.antecedent);
            assert!((r.confidence - expected).abs() < 1e-12);
            assert!((r.support - table.support(&union)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_raising_confidence_never_adds_rules() {
        let mut previous = usize::MAX;
        for step in 1..=10 {
            let (_, rules) = mine(BASKETS, 0.3, step as f64 / 10.0);
            assert!(rules.len() <= previous);
            previous = rules.len();
        }
    }

    #[test]
    fn test_single_item_transaction_has_no_rules() {
        let (_, rules) = mine(&[&["solo"]], 0.5, 0.1);
        assert!(rules.is_empty());
    }

    #[test]
    fn test_scores_for_certain_rule() {
        let (universe, rules) = mine(BASKETS, 0.5, 1.0);
        let record = &to_records(&rules, &universe)[0];
        assert_eq!(record.antecedents, vec!["butter"]);
        assert_eq!(record.consequents, vec!["bread"]);
        assert!((record.lift - 1.0).abs() < 1e-12);
        assert!(record.leverage.abs() < 1e-12);
        assert_eq!(record.conviction, None);
    }

    #[test]
    fn test_multi_item_sides_are_comma_joined() {
        let (universe, rules) = mine(&[&["a", "b", "c"], &["a", "b", "c"]], 0.5, 0.5);
        let rows = to_rows(&rules, &universe);
        assert!(rows.iter().any(|r| r.combination == "a, b -> c"));
        assert!(rows.iter().any(|r| r.combination == "a -> b, c"));
    }
}
