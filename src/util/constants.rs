// BasketMiner - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "BasketMiner";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "BasketMiner";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input limits
// =============================================================================

/// Largest transaction file accepted by the loader (1 GiB).
pub const MAX_INPUT_FILE_BYTES: u64 = 1024 * 1024 * 1024;

/// Default name of the transaction identifier column.
pub const DEFAULT_ID_COLUMN: &str = "TransactionNo";

/// Default name of the item label column.
pub const DEFAULT_ITEM_COLUMN: &str = "Items";

// =============================================================================
// Mining thresholds
// =============================================================================

/// Minimum support slider: lower bound.
pub const MIN_SUPPORT_LOWER: f64 = 0.01;

/// Minimum support slider: upper bound.
pub const MIN_SUPPORT_UPPER: f64 = 0.5;

/// Minimum support slider: step.
pub const MIN_SUPPORT_STEP: f64 = 0.01;

/// Default minimum support.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.02;

/// Minimum confidence slider: lower bound.
pub const MIN_CONFIDENCE_LOWER: f64 = 0.1;

/// Minimum confidence slider: upper bound.
pub const MIN_CONFIDENCE_UPPER: f64 = 1.0;

/// Minimum confidence slider: step.
pub const MIN_CONFIDENCE_STEP: f64 = 0.1;

/// Default minimum confidence.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Absolute tolerance applied when comparing a computed support or
/// confidence against its threshold. Slider arithmetic produces values such
/// as 0.30000000000000004, which must still admit a ratio of exactly 0.3.
pub const THRESHOLD_EPSILON: f64 = 1e-9;

/// Largest itemset size selectable for the optional length cap.
pub const MAX_ITEMSET_LEN_LIMIT: usize = 16;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Decimal places used when rendering support/confidence in the table.
pub const DISPLAY_PRECISION: usize = 4;

// =============================================================================
// Messages
// =============================================================================

/// Advisory shown when no itemset reaches the minimum support.
pub const MSG_NO_FREQUENT_ITEMSETS: &str =
    "No frequent itemsets found with the given minimum support.";

/// Advisory shown when no rule reaches the minimum confidence.
pub const MSG_NO_RULES: &str = "No association rules found with the given minimum confidence.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Process exit status of a headless run that produced rules or an empty
/// outcome.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status of a headless run that failed on input or export.
pub const EXIT_FAILURE: i32 = 1;

// =============================================================================
// Export / configuration
// =============================================================================

/// Suggested file name for the CSV rule export.
pub const DEFAULT_EXPORT_CSV_NAME: &str = "association_rules.csv";

/// Suggested file name for the JSON rule export.
pub const DEFAULT_EXPORT_JSON_NAME: &str = "association_rules.json";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
