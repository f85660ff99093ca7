// BasketMiner - app/analysis.rs
//
// One analysis run: load -> build transactions -> mine -> present.
//
// Runs synchronously on the caller's thread. Nothing is cached between
// runs; every call re-reads the file. `run_headless` is the --export entry
// point used by main.rs.

use crate::core::model::{ColumnSpec, MiningOutcome, MiningParams, RuleRecord, RuleRow, RunSummary};
use crate::core::{export, loader, miner, rules, transactions};
use crate::util::constants;
use crate::util::error::{self, ExportError};
use std::fs::File;
use std::path::Path;
use std::time::Instant;

/// Everything produced by a successful run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub outcome: MiningOutcome,
    pub summary: RunSummary,
    /// Display rows, one per rule, in display order. Empty for the two
    /// empty outcomes.
    pub rows: Vec<RuleRow>,
}

impl AnalysisResult {
    /// Full rule records for JSON export.
    pub fn records(&self) -> Vec<RuleRecord> {
        rules::to_records(self.outcome.rules(), self.outcome.universe())
    }

    /// Advisory message for an empty outcome.
    pub fn advisory(&self) -> Option<&'static str> {
        advisory(&self.outcome)
    }
}

/// User-facing warning for the two empty outcomes; `None` when rules exist.
pub fn advisory(outcome: &MiningOutcome) -> Option<&'static str> {
    match outcome {
        MiningOutcome::NoFrequentItemsets => Some(constants::MSG_NO_FREQUENT_ITEMSETS),
        MiningOutcome::NoRules { .. } => Some(constants::MSG_NO_RULES),
        MiningOutcome::Rules { .. } => None,
    }
}

/// Run the full pipeline over `path`.
///
/// Parameter and load failures abort before any mining happens.
pub fn run(
    path: &Path,
    columns: &ColumnSpec,
    params: &MiningParams,
) -> error::Result<AnalysisResult> {
    params.validate()?;

    let started = Instant::now();
    tracing::info!(
        path = %path.display(),
        id_column = %columns.transaction_id,
        item_column = %columns.item,
        min_support = params.min_support,
        min_confidence = params.min_confidence,
        max_len = ?params.max_len,
        "Analysis started"
    );

    let table = loader::load_table(path).map_err(|e| {
        tracing::warn!(error = %e, "Failed to load transaction file");
        e
    })?;
    let transactions = transactions::build_transactions(&table, columns).map_err(|e| {
        tracing::warn!(error = %e, "Failed to build transactions");
        e
    })?;

    let outcome = miner::mine(&transactions, params);
    let rows = rules::to_rows(outcome.rules(), outcome.universe());

    let summary = RunSummary {
        rows_read: table.row_count(),
        transaction_count: transactions.len(),
        universe_size: outcome.universe().len(),
        itemset_count: outcome.itemsets().len(),
        rule_count: rows.len(),
        params: *params,
        duration: started.elapsed(),
        finished_at: chrono::Local::now(),
    };

    if let Some(msg) = advisory(&outcome) {
        tracing::warn!(advisory = msg, "Analysis produced no rules");
    }
    tracing::info!(
        transactions = summary.transaction_count,
        itemsets = summary.itemset_count,
        rules = summary.rule_count,
        elapsed_ms = summary.duration.as_millis() as u64,
        "Analysis finished"
    );

    Ok(AnalysisResult {
        outcome,
        summary,
        rows,
    })
}

/// Output format of a rule export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The three displayed columns.
    Csv,
    /// Every score, as an array of objects.
    Json,
}

/// Write the rules of `result` to `dest`.
///
/// Fails with `NothingToExport` for the two empty outcomes; no file is
/// created in that case.
pub fn export_rules(
    result: &AnalysisResult,
    dest: &Path,
    format: ExportFormat,
) -> Result<usize, ExportError> {
    if result.rows.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let file = File::create(dest).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    match format {
        ExportFormat::Csv => export::export_csv(&result.rows, file, dest),
        ExportFormat::Json => export::export_json(&result.records(), file, dest),
    }
}

/// What a headless run did.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessOutcome {
    /// Rules were written to the export file.
    Exported { rules: usize, transactions: usize },
    /// The run produced no rules; nothing was written.
    Empty { advisory: &'static str },
}

/// Mine `file` and write the rules to `dest` in `format`.
///
/// An empty outcome writes no file and is not an error.
pub fn run_headless(
    file: &Path,
    dest: &Path,
    columns: &ColumnSpec,
    params: &MiningParams,
    format: ExportFormat,
) -> error::Result<HeadlessOutcome> {
    let result = run(file, columns, params)?;
    if let Some(advisory) = result.advisory() {
        return Ok(HeadlessOutcome::Empty { advisory });
    }
    let rules = export_rules(&result, dest, format)?;
    Ok(HeadlessOutcome::Exported {
        rules,
        transactions: result.summary.transaction_count,
    })
}

/// Process exit status for the result of `run_headless`.
pub fn exit_code(result: &error::Result<HeadlessOutcome>) -> i32 {
    match result {
        Ok(_) => constants::EXIT_SUCCESS,
        Err(_) => constants::EXIT_FAILURE,
    }
}
