// BasketMiner - core/transactions.rs
//
// Stage 2: group table rows by transaction id into item lists.
//
// Output order is the order in which each id first appears in the file.
// Items keep file order within a transaction; duplicates are kept and
// collapse to a single presence bit later in the encoder.

use crate::core::model::{ColumnSpec, TransactionList, TransactionTable};
use crate::util::error::LoadError;
use std::collections::HashMap;

fn find_header(headers: &[String], name: &str) -> Option<usize> {
    let wanted = name.trim();
    headers.iter().position(|h| h.eq_ignore_ascii_case(wanted))
}

/// Resolve `(id_index, item_index)` for `spec` against the table header.
///
/// Header names match case-insensitively. When neither configured name is
/// present and the file has exactly two columns, they are taken
/// positionally as (id, item).
pub fn resolve_columns(
    table: &TransactionTable,
    spec: &ColumnSpec,
) -> Result<(usize, usize), LoadError> {
    let id = find_header(&table.headers, &spec.transaction_id);
    let item = find_header(&table.headers, &spec.item);

    match (id, item) {
        (Some(id), Some(item)) if id != item => Ok((id, item)),
        (Some(id), Some(_)) => Err(LoadError::SameColumn {
            path: table.source.clone(),
            column: table.headers[id].clone(),
        }),
        (None, None) if table.headers.len() == 2 => {
            tracing::info!(
                id_column = %table.headers[0],
                item_column = %table.headers[1],
                "Configured columns not found; using the two file columns positionally"
            );
            Ok((0, 1))
        }
        (None, _) => Err(LoadError::MissingColumn {
            path: table.source.clone(),
            role: "transaction id",
            column: spec.transaction_id.clone(),
            available: table.headers.clone(),
        }),
        (Some(_), _) => Err(LoadError::MissingColumn {
            path: table.source.clone(),
            role: "item",
            column: spec.item.clone(),
            available: table.headers.clone(),
        }),
    }
}

/// Group rows into transactions.
pub fn build_transactions(
    table: &TransactionTable,
    spec: &ColumnSpec,
) -> Result<TransactionList, LoadError> {
    let (id_col, item_col) = resolve_columns(table, spec)?;

    let mut index_of: HashMap<&str, usize> = HashMap::new();
    let mut transactions: TransactionList = Vec::new();

    for (row_idx, row) in table.rows.iter().enumerate() {
        let id = row.get(id_col).map(String::as_str).unwrap_or("");
        let item = row.get(item_col).map(String::as_str).unwrap_or("");

        if id.is_empty() {
            return Err(LoadError::EmptyField {
                path: table.source.clone(),
                row: row_idx + 1,
                column: table.headers[id_col].clone(),
            });
        }
        if item.is_empty() {
            return Err(LoadError::EmptyField {
                path: table.source.clone(),
                row: row_idx + 1,
                column: table.headers[item_col].clone(),
            });
        }

        match index_of.get(id) {
            Some(&slot) => transactions[slot].push(item.to_string()),
            None => {
                index_of.insert(id, transactions.len());
                transactions.push(vec![item.to_string()]);
            }
        }
    }

    tracing::debug!(
        rows = table.row_count(),
        transactions = transactions.len(),
        "Grouped rows into transactions"
    );

    Ok(transactions)
}
