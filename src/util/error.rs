// BasketMiner - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// Empty mining outcomes (no frequent itemsets, no rules) are NOT errors;
// they are variants of `core::model::MiningOutcome`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all BasketMiner operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum MinerError {
    /// The transaction file could not be read into transactions.
    Load(LoadError),

    /// Mining parameters are out of range.
    Params(ParamsError),

    /// Export operation failed.
    Export(ExportError),
}

impl fmt::Display for MinerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Error loading file: {e}"),
            Self::Params(e) => write!(f, "Invalid parameters: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for MinerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Params(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised while turning an input file into a transaction list.
///
/// Every variant aborts the current run; nothing downstream is computed.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io { path: PathBuf, source: io::Error },

    /// The file exceeds the maximum accepted size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The content is not valid delimited text (bad quoting, ragged rows,
    /// invalid UTF-8).
    Csv { path: PathBuf, source: csv::Error },

    /// The file has no header row.
    MissingHeader { path: PathBuf },

    /// The file has a header but no data rows.
    NoRows { path: PathBuf },

    /// A required column is not present in the header.
    MissingColumn {
        path: PathBuf,
        role: &'static str,
        column: String,
        available: Vec<String>,
    },

    /// The transaction id and item resolve to the same header.
    SameColumn { path: PathBuf, column: String },

    /// A data row has an empty transaction id or item field.
    /// `row` is the 1-based data row number (the header is not counted).
    EmptyField {
        path: PathBuf,
        row: usize,
        column: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Csv { path, source } => {
                write!(f, "'{}' is not valid CSV: {source}", path.display())
            }
            Self::MissingHeader { path } => {
                write!(f, "'{}' has no header row", path.display())
            }
            Self::NoRows { path } => {
                write!(f, "'{}' contains a header but no data rows", path.display())
            }
            Self::MissingColumn {
                path,
                role,
                column,
                available,
            } => write!(
                f,
                "'{}' has no {role} column '{column}'. Available columns: {}",
                path.display(),
                available.join(", ")
            ),
            Self::SameColumn { path, column } => write!(
                f,
                "'{}': column '{column}' is selected as both transaction id and item. \
                 The id and item columns must differ",
                path.display()
            ),
            Self::EmptyField { path, row, column } => write!(
                f,
                "'{}' data row {row}: empty value in column '{column}'",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for MinerError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Parameter errors
// ---------------------------------------------------------------------------

/// Errors related to mining parameter validation.
#[derive(Debug, PartialEq)]
pub enum ParamsError {
    /// A threshold lies outside (0, 1] or is not a finite number.
    ThresholdOutOfRange { name: &'static str, value: f64 },

    /// The maximum itemset length is zero or above the supported limit.
    MaxLenOutOfRange { value: usize, max: usize },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdOutOfRange { name, value } => {
                write!(f, "{name} = {value} is out of range. Expected a value in (0, 1]")
            }
            Self::MaxLenOutOfRange { value, max } => {
                write!(f, "max_len = {value} is out of range. Expected 1-{max}")
            }
        }
    }
}

impl std::error::Error for ParamsError {}

impl From<ParamsError> for MinerError {
    fn from(e: ParamsError) -> Self {
        Self::Params(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// There are no rules to export.
    NothingToExport,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::NothingToExport => {
                write!(f, "No association rules to export. Run the analysis first.")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::NothingToExport => None,
        }
    }
}

impl From<ExportError> for MinerError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// These never stop the application: `platform::config::load_config`
/// collects them as warnings and falls back to defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for BasketMiner results.
pub type Result<T> = std::result::Result<T, MinerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_column_lists_available_headers() {
        let e = LoadError::MissingColumn {
            path: PathBuf::from("data.csv"),
            role: "transaction id",
            column: "TransactionNo".to_string(),
            available: vec!["Items".to_string(), "DateTime".to_string()],
        };
        let msg = e.to_string();
        assert!(msg.contains("TransactionNo"));
        assert!(msg.contains("Items, DateTime"));
    }

    #[test]
    fn test_load_error_wraps_into_miner_error_with_source() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: MinerError = LoadError::Io {
            path: PathBuf::from("x.csv"),
            source: io,
        }
        .into();
        assert!(e.to_string().starts_with("Error loading file:"));
        assert!(e.source().is_some());
    }

    #[test]
    fn test_same_column_message_names_the_column() {
        let e = LoadError::SameColumn {
            path: PathBuf::from("data.csv"),
            column: "Items".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("'Items'"));
        assert!(msg.contains("must differ"));
        assert!(!msg.contains("has no"));
    }
}
