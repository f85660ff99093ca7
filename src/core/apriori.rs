// BasketMiner - core/apriori.rs
//
// Level-wise frequent itemset enumeration (Apriori).
//
// Level 1 keeps single items whose support reaches the minimum. Level k
// joins two frequent (k-1)-itemsets that share their first k-2 items,
// drops candidates with any infrequent (k-1)-subset, then counts support
// against the encoded table. Enumeration stops when a level comes back
// empty or the optional length cap is reached.
//
// Itemsets are sorted universe indices, so output order is: by size, then
// lexically by item index.

use crate::core::encoder::EncodedTable;
use crate::core::model::{meets_threshold, FrequentItemset};
use std::collections::HashSet;

/// Enumerate every itemset with support >= `min_support`.
pub fn frequent_itemsets(
    table: &EncodedTable,
    min_support: f64,
    max_len: Option<usize>,
) -> Vec<FrequentItemset> {
    let n = table.transaction_count();
    if n == 0 {
        return Vec::new();
    }

    let measure = |items: Vec<usize>| -> Option<FrequentItemset> {
        let count = table.support_count(&items);
        let support = count as f64 / n as f64;
        meets_threshold(support, min_support).then_some(FrequentItemset {
            items,
            count,
            support,
        })
    };

    let mut level: Vec<FrequentItemset> = (0..table.universe().len())
        .filter_map(|col| measure(vec![col]))
        .collect();

    let mut all = Vec::new();
    let mut k = 1;

    while !level.is_empty() {
        tracing::debug!(size = k, frequent = level.len(), "Apriori level complete");
        let at_cap = max_len.is_some_and(|cap| k >= cap);
        let candidates = if at_cap {
            Vec::new()
        } else {
            generate_candidates(&level)
        };
        all.append(&mut level);
        if candidates.is_empty() {
            break;
        }
        level = candidates.into_iter().filter_map(&measure).collect();
        k += 1;
    }

    all
}

/// Join step plus subset pruning for the next level.
///
/// `level` holds frequent k-itemsets in lexical order; the result holds
/// (k+1)-candidates, also in lexical order.
fn generate_candidates(level: &[FrequentItemset]) -> Vec<Vec<usize>> {
    let known: HashSet<&[usize]> = level.iter().map(|f| f.items.as_slice()).collect();
    let mut out = Vec::new();

    for (i, left) in level.iter().enumerate() {
        let k = left.items.len();
        let prefix = &left.items[..k - 1];
        for right in &level[i + 1..] {
            // Sorted input: once the prefix differs no later itemset can match.
            if &right.items[..k - 1] != prefix {
                break;
            }
            let mut candidate = left.items.clone();
            candidate.push(right.items[k - 1]);
            if all_subsets_frequent(&candidate, &known) {
                out.push(candidate);
            }
        }
    }

    out
}

/// True when every subset obtained by dropping one item is frequent.
fn all_subsets_frequent(candidate: &[usize], known: &HashSet<&[usize]>) -> bool {
    // Dropping either of the last two items yields the two join parents.
    (0..candidate.len().saturating_sub(2)).all(|skip| {
        let subset: Vec<usize> = candidate
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &c)| c)
            .collect();
        known.contains(subset.as_slice())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoder::encode;

    fn table(items: &[&[&str]]) -> EncodedTable {
        encode(
            &items
                .iter()
                .map(|t| t.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn labels(t: &EncodedTable, f: &FrequentItemset) -> Vec<String> {
        f.items.iter().map(|&i| t.universe()[i].clone()).collect()
    }

    #[test]
    fn test_bread_milk_butter_itemsets() {
        let t = table(&[
            &["bread", "milk"],
            &["bread", "butter"],
            &["bread", "milk", "butter"],
        ]);
        let found = frequent_itemsets(&t, 0.5, None);
        let named: Vec<(Vec<String>, usize)> =
            found.iter().map(|f| (labels(&t, f), f.count)).collect();
        assert_eq!(
            named,
            vec![
                (vec!["bread".to_string()], 3),
                (vec!["butter".to_string()], 2),
                (vec!["milk".to_string()], 2),
                (vec!["bread".to_string(), "butter".to_string()], 2),
                (vec!["bread".to_string(), "milk".to_string()], 2),
            ]
        );
        assert!((found[0].support - 1.0).abs() < 1e-12);
        assert!((found[1].support - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_support_matches_brute_force_count() {
        let raw: &[&[&str]] = &[
            &["a", "b", "c"],
            &["a", "b"],
            &["a", "c", "d"],
            &["b", "c", "d"],
            &["a", "b", "c", "d"],
            &["d"],
        ];
        let t = table(raw);
        for f in frequent_itemsets(&t, 0.1, None) {
            let names = labels(&t, &f);
            let expected = raw
                .iter()
                .filter(|tx| names.iter().all(|n| tx.contains(&n.as_str())))
                .count();
            assert_eq!(f.count, expected, "itemset {names:?}");
            assert!((f.support - expected as f64 / raw.len() as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_finds_three_item_set_and_prunes() {
        let t = table(&[
            &["a", "b", "c"],
            &["a", "b", "c"],
            &["a", "b"],
            &["c"],
        ]);
        let found = frequent_itemsets(&t, 0.5, None);
        assert!(found.iter().any(|f| f.items.len() == 3 && f.count == 2));
        assert!(found.iter().all(|f| f.count >= 2));
    }

    #[test]
    fn test_max_len_caps_itemset_size() {
        let t = table(&[&["a", "b", "c"], &["a", "b", "c"]]);
        let found = frequent_itemsets(&t, 0.5, Some(2));
        assert_eq!(found.iter().map(|f| f.items.len()).max(), Some(2));
        assert_eq!(found.len(), 6);
    }

    #[test]
    fn test_nothing_frequent() {
        let t = table(&[&["a"], &["b"], &["c"]]);
        assert!(frequent_itemsets(&t, 0.5, None).is_empty());
    }

    #[test]
    fn test_raising_support_never_adds_itemsets() {
        let t = table(&[
            &["a", "b", "c"],
            &["a", "b"],
            &["a", "c"],
            &["b", "c"],
            &["a"],
        ]);
        let mut previous = usize::MAX;
        for step in 1..=10 {
            let n = frequent_itemsets(&t, step as f64 / 10.0, None).len();
            assert!(n <= previous, "support {step}/10 gave {n} > {previous}");
            previous = n;
        }
    }
}
