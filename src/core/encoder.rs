// BasketMiner - core/encoder.rs
//
// One-hot encoding of transactions into a boolean presence table.
//
// The table is stored column-wise: each item owns a bitset with one bit per
// transaction. The support count of an itemset is the population count of
// the AND of its item columns.

use crate::core::model::TransactionList;
use std::collections::{BTreeSet, HashMap};

const WORD_BITS: usize = u64::BITS as usize;

/// Boolean item-presence table over the full item universe.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedTable {
    /// Distinct item labels, sorted. Column `i` belongs to `universe[i]`.
    universe: Vec<String>,

    /// Number of rows (transactions).
    transaction_count: usize,

    /// One bitset per universe item, `words_per_column` words each.
    columns: Vec<Vec<u64>>,
}

impl EncodedTable {
    /// Item labels in column order.
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Column index of `label`, if it is in the universe.
    #[cfg(test)]
    pub fn column_of(&self, label: &str) -> Option<usize> {
        self.universe
            .binary_search_by(|known| known.as_str().cmp(label))
            .ok()
    }

    /// True iff transaction `row` contains item `col`.
    #[cfg(test)]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.columns
            .get(col)
            .and_then(|bits| bits.get(row / WORD_BITS))
            .map(|word| word & (1u64 << (row % WORD_BITS)) != 0)
            .unwrap_or(false)
    }

    /// Presence flags of one transaction across all columns.
    #[cfg(test)]
    pub fn row(&self, row: usize) -> Vec<bool> {
        (0..self.universe.len())
            .map(|col| self.contains(row, col))
            .collect()
    }

    /// Number of transactions containing every item in `items`.
    ///
    /// An empty itemset is contained in every transaction.
    pub fn support_count(&self, items: &[usize]) -> usize {
        let Some((&first, rest)) = items.split_first() else {
            return self.transaction_count;
        };
        let base = &self.columns[first];
        base.iter()
            .enumerate()
            .map(|(w, &word)| {
                rest.iter()
                    .fold(word, |acc, &col| acc & self.columns[col][w])
                    .count_ones() as usize
            })
            .sum()
    }

    /// Support of `items` as a fraction of all transactions.
    #[cfg(test)]
    pub fn support(&self, items: &[usize]) -> f64 {
        if self.transaction_count == 0 {
            return 0.0;
        }
        self.support_count(items) as f64 / self.transaction_count as f64
    }
}

/// Encode `transactions` into a presence table.
///
/// The universe holds exactly the distinct labels present, sorted lexically.
pub fn encode(transactions: &TransactionList) -> EncodedTable {
    let universe: Vec<String> = transactions
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let column_index: HashMap<&str, usize> = universe
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();

    let transaction_count = transactions.len();
    let words = transaction_count.div_ceil(WORD_BITS);
    let mut columns = vec![vec![0u64; words]; universe.len()];

    for (row, tx) in transactions.iter().enumerate() {
        for item in tx {
            if let Some(&col) = column_index.get(item.as_str()) {
                columns[col][row / WORD_BITS] |= 1u64 << (row % WORD_BITS);
            }
        }
    }

    tracing::debug!(
        transactions = transaction_count,
        items = universe.len(),
        "Encoded transaction table"
    );

    EncodedTable {
        universe,
        transaction_count,
        columns,
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

    #[test]
    fn test_universe_is_sorted_distinct_items() {
        let table = encode(&tx(&[&["milk", "bread"], &["butter", "bread", "bread"]]));
        assert_eq!(table.universe(), &["bread", "butter", "milk"]);
        assert_eq!(table.transaction_count(), 2);
    }

    #[test]
    fn test_rows_reflect_presence() {
        let table = encode(&tx(&[&["milk", "bread"], &["butter"]]));
        // columns: bread, butter, milk
        assert_eq!(table.row(0), vec![true, false, true]);
        assert_eq!(table.row(1), vec![false, true, false]);
    }

    #[test]
    fn test_support_count_across_word_boundary() {
        // 130 transactions spans three 64-bit words.
        let mut list = Vec::new();
        for i in 0..130 {
            let mut t = vec!["a".to_string()];
            if i % 2 == 0 {
                t.push("b".to_string());
            }
            list.push(t);
        }
        let table = encode(&list);
        let a = table.column_of("a").unwrap();
        let b = table.column_of("b").unwrap();
        assert_eq!(table.support_count(&[a]), 130);
        assert_eq!(table.support_count(&[b]), 65);
        assert_eq!(table.support_count(&[a, b]), 65);
        assert!((table.support(&[a, b]) - 0.5).abs() < 1e-12);
        assert!(table.contains(128, b));
        assert!(!table.contains(129, b));
    }

    #[test]
    fn test_empty_itemset_is_in_every_transaction() {
        let table = encode(&tx(&[&["x"], &["y"]]));
        assert_eq!(table.support_count(&[]), 2);
    }

    #[test]
    fn test_empty_transaction_list() {
        let table = encode(&Vec::new());
        assert!(table.universe().is_empty());
        assert_eq!(table.support(&[]), 0.0);
    }
}
