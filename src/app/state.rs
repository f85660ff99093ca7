// BasketMiner - app/state.rs
//
// Application state management. Holds the chosen input file, column
// selection, thresholds, and the result of the most recent run.
// Owned by the eframe::App implementation.

use crate::app::analysis::{self, AnalysisResult, ExportFormat};
use crate::core::loader;
use crate::core::model::{ColumnSpec, MiningParams};
use crate::platform::config::AppConfig;
use crate::util::error::{ExportError, MinerError};
use std::path::{Path, PathBuf};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// File chosen by the user (None until one is picked).
    pub input_path: Option<PathBuf>,

    /// Header names of `input_path`, for the column pickers.
    pub available_columns: Vec<String>,

    /// Column names from config or the command line. Restored when a newly
    /// opened file lacks the current selection.
    pub configured_columns: ColumnSpec,

    /// Column names used for the next run.
    pub columns: ColumnSpec,

    /// Thresholds used for the next run.
    pub params: MiningParams,

    /// File picked in the sidebar, consumed by gui.rs on the next frame.
    pub pending_input: Option<PathBuf>,

    /// Run requested from the sidebar, consumed by gui.rs on the next frame.
    pub request_run: bool,

    /// Result of the most recent successful run.
    pub result: Option<AnalysisResult>,

    /// Error of the most recent failed run. Mutually exclusive with `result`.
    pub last_error: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (configuration problems).
    pub warnings: Vec<String>,

    /// Whether to show the run summary dialog.
    pub show_summary: bool,

    /// Whether to show the frequent itemsets window.
    pub show_itemsets: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// UI body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from the validated configuration.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            input_path: None,
            available_columns: Vec::new(),
            configured_columns: config.columns.clone(),
            columns: config.columns.clone(),
            params: config.params,
            pending_input: None,
            request_run: false,
            result: None,
            last_error: None,
            status_message: "Ready. Open a transaction CSV to begin.".to_string(),
            warnings: Vec::new(),
            show_summary: false,
            show_itemsets: false,
            show_about: false,
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            debug_mode,
        }
    }

    /// Select a new input file and read its header row.
    ///
    /// Previous results are discarded. The current column selection is kept
    /// when the new header contains both names. Otherwise the configured
    /// names are restored, and if those are absent too, a two-column file
    /// defaults to (first, second).
    pub fn select_input(&mut self, path: PathBuf) {
        self.clear_results();
        match loader::read_headers(&path) {
            Ok(headers) => {
                self.columns = pick_columns(&headers, &self.columns, &self.configured_columns);
                tracing::debug!(
                    id_column = %self.columns.transaction_id,
                    item_column = %self.columns.item,
                    "Columns selected for new input"
                );
                self.status_message = format!(
                    "Selected '{}' ({} columns).",
                    display_name(&path),
                    headers.len()
                );
                self.available_columns = headers;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read header row");
                self.available_columns.clear();
                self.columns = self.configured_columns.clone();
                self.last_error = Some(MinerError::from(e).to_string());
                self.status_message = "Could not read the selected file.".to_string();
            }
        }
        self.input_path = Some(path);
    }

    /// Run the analysis on the selected file with the current settings.
    ///
    /// Does nothing when no file is selected.
    pub fn run_analysis(&mut self) {
        let Some(path) = self.input_path.clone() else {
            self.status_message = "Select a CSV file first.".to_string();
            return;
        };
        self.clear_results();

        match analysis::run(&path, &self.columns, &self.params) {
            Ok(result) => {
                self.status_message = match result.advisory() {
                    Some(msg) => msg.to_string(),
                    None => format!(
                        "{} rules from {} transactions in {:.2}s",
                        result.summary.rule_count,
                        result.summary.transaction_count,
                        result.summary.duration.as_secs_f64()
                    ),
                };
                self.result = Some(result);
            }
            Err(e) => {
                self.status_message = "Analysis failed.".to_string();
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Forget the last result and error.
    pub fn clear_results(&mut self) {
        self.result = None;
        self.last_error = None;
        self.show_summary = false;
        self.show_itemsets = false;
    }

    /// True when there are rules to display or export.
    pub fn has_rules(&self) -> bool {
        self.result.as_ref().is_some_and(|r| !r.rows.is_empty())
    }

    /// Write the current rule table to `dest` as CSV.
    pub fn export_csv_to(&mut self, dest: &Path) -> Result<usize, ExportError> {
        self.export_to(dest, ExportFormat::Csv)
    }

    /// Write the current rules with all scores to `dest` as JSON.
    pub fn export_json_to(&mut self, dest: &Path) -> Result<usize, ExportError> {
        self.export_to(dest, ExportFormat::Json)
    }

    fn export_to(&mut self, dest: &Path, format: ExportFormat) -> Result<usize, ExportError> {
        let result = self.result.as_ref().ok_or(ExportError::NothingToExport)?;
        let n = analysis::export_rules(result, dest, format)?;
        self.status_message = format!("Exported {n} rules to '{}'.", display_name(dest));
        Ok(n)
    }
}

/// Column selection for a newly opened file with `headers`.
fn pick_columns(headers: &[String], current: &ColumnSpec, configured: &ColumnSpec) -> ColumnSpec {
    let present = |spec: &ColumnSpec| {
        contains_ignore_case(headers, &spec.transaction_id)
            && contains_ignore_case(headers, &spec.item)
    };
    if present(current) {
        current.clone()
    } else if present(configured) || headers.len() != 2 {
        configured.clone()
    } else {
        ColumnSpec {
            transaction_id: headers[0].clone(),
            item: headers[1].clone(),
        }
    }
}

fn contains_ignore_case(headers: &[String], name: &str) -> bool {
    headers.iter().any(|h| h.eq_ignore_ascii_case(name.trim()))
}

/// File name of `path` for status messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), false)
    }

    #[test]
    fn test_run_without_file_is_noop() {
        let mut s = state();
        s.run_analysis();
        assert!(s.result.is_none());
        assert!(s.last_error.is_none());
    }

    #[test]
    fn test_select_input_reads_headers() {
        let f = csv_file("TransactionNo,Items,DateTime\n1,Bread,09:00\n");
        let mut s = state();
        s.select_input(f.path().to_path_buf());
        assert_eq!(s.available_columns, vec!["TransactionNo", "Items", "DateTime"]);
        assert_eq!(s.columns, ColumnSpec::default());
    }

    #[test]
    fn test_select_two_column_file_picks_positional_columns() {
        let f = csv_file("basket,product\n1,tea\n");
        let mut s = state();
        s.select_input(f.path().to_path_buf());
        assert_eq!(s.columns.transaction_id, "basket");
        assert_eq!(s.columns.item, "product");
    }

    #[test]
    fn test_default_schema_file_after_two_column_file_restores_columns() {
        let two_col = csv_file("basket,product\nA,tea\nA,scone\nB,tea\nB,scone\n");
        let standard = csv_file(
            "TransactionNo,Items,DateTime\n1,tea,09:00\n1,scone,09:00\n2,tea,09:05\n2,scone,09:05\n",
        );
        let mut s = state();
        s.params = MiningParams::new(0.5, 0.5, None).unwrap();

        s.select_input(two_col.path().to_path_buf());
        s.run_analysis();
        assert!(s.has_rules(), "{:?}", s.last_error);
        assert_eq!(s.columns.transaction_id, "basket");

        s.select_input(standard.path().to_path_buf());
        assert_eq!(s.columns, ColumnSpec::default());
        s.run_analysis();
        assert!(s.last_error.is_none(), "{:?}", s.last_error);
        assert!(s.has_rules());
    }

    #[test]
    fn test_selection_kept_when_new_file_has_same_columns() {
        let first = csv_file("Order,Product,Qty\n1,tea,1\n");
        let second = csv_file("Product,Order\ntea,7\n");
        let mut s = state();
        s.select_input(first.path().to_path_buf());
        s.columns = ColumnSpec {
            transaction_id: "Order".to_string(),
            item: "Product".to_string(),
        };
        s.select_input(second.path().to_path_buf());
        assert_eq!(s.columns.transaction_id, "Order");
        assert_eq!(s.columns.item, "Product");
    }

    #[test]
    fn test_configured_columns_restored_for_wide_file() {
        let two_col = csv_file("basket,product\nA,tea\n");
        let wide = csv_file("Date,Store,Sku\n2024-01-01,1,tea\n");
        let mut s = state();
        s.select_input(two_col.path().to_path_buf());
        s.select_input(wide.path().to_path_buf());
        assert_eq!(s.columns, s.configured_columns);
    }

    #[test]
    fn test_successful_run_then_export() {
        let f = csv_file("TransactionNo,Items\n1,a\n1,b\n2,a\n2,b\n3,a\n");
        let mut s = state();
        s.params = MiningParams::new(0.5, 0.5, None).unwrap();
        s.select_input(f.path().to_path_buf());
        s.run_analysis();
        assert!(s.last_error.is_none(), "{:?}", s.last_error);
        assert!(s.has_rules());

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("rules.csv");
        let n = s.export_csv_to(&dest).unwrap();
        assert_eq!(n, s.result.as_ref().unwrap().rows.len());
        let text = std::fs::read_to_string(&dest).unwrap();
        assert!(text.starts_with("Combination,Support,Confidence"));
        assert!(text.contains("b -> a"));
    }

    #[test]
    fn test_failed_run_sets_error_and_blocks_export() {
        let f = csv_file("Items,Qty,Price\nBread,1,2\n");
        let mut s = state();
        s.select_input(f.path().to_path_buf());
        s.run_analysis();
        assert!(s.result.is_none());
        assert!(s.last_error.as_deref().unwrap_or("").contains("TransactionNo"));

        let dir = tempfile::tempdir().unwrap();
        let err = s.export_csv_to(&dir.path().join("x.csv")).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));
    }

    #[test]
    fn test_empty_outcome_sets_advisory_status() {
        let f = csv_file("TransactionNo,Items\n1,a\n2,b\n3,c\n");
        let mut s = state();
        s.params = MiningParams::new(0.5, 0.5, None).unwrap();
        s.select_input(f.path().to_path_buf());
        s.run_analysis();
        assert!(!s.has_rules());
        assert_eq!(
            s.status_message,
            crate::util::constants::MSG_NO_FREQUENT_ITEMSETS
        );
    }
}
