// BasketMiner - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use crate::util::error::ParamsError;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Input table
// =============================================================================

/// Row-oriented contents of a delimited input file.
///
/// One row per (transaction id, item) record. Transaction ids repeat across
/// rows; nothing here is grouped yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionTable {
    /// File the table was read from (used in error messages).
    pub source: PathBuf,

    /// Header names in file order.
    pub headers: Vec<String>,

    /// Data rows. Every row has exactly `headers.len()` fields.
    pub rows: Vec<Vec<String>>,
}

impl TransactionTable {
    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Which columns carry the transaction id and the item label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub transaction_id: String,
    pub item: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            transaction_id: constants::DEFAULT_ID_COLUMN.to_string(),
            item: constants::DEFAULT_ITEM_COLUMN.to_string(),
        }
    }
}

// =============================================================================
// Transactions
// =============================================================================

/// Item labels of one transaction, in file order. Never empty.
pub type Transaction = Vec<String>;

/// Ordered sequence of transactions (order of first id occurrence).
pub type TransactionList = Vec<Transaction>;

// =============================================================================
// Parameters
// =============================================================================

/// Thresholds for one mining run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningParams {
    /// Minimum fraction of transactions an itemset must appear in.
    pub min_support: f64,

    /// Minimum confidence a rule must reach.
    pub min_confidence: f64,

    /// Optional cap on itemset size. `None` mines itemsets of any size.
    pub max_len: Option<usize>,
}

impl Default for MiningParams {
    fn default() -> Self {
        Self {
            min_support: constants::DEFAULT_MIN_SUPPORT,
            min_confidence: constants::DEFAULT_MIN_CONFIDENCE,
            max_len: None,
        }
    }
}

impl MiningParams {
    /// Build validated parameters. Both thresholds must lie in (0, 1].
    pub fn new(
        min_support: f64,
        min_confidence: f64,
        max_len: Option<usize>,
    ) -> Result<Self, ParamsError> {
        let params = Self {
            min_support,
            min_confidence,
            max_len,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check both thresholds and the optional length cap.
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_threshold("min_support", self.min_support)?;
        check_threshold("min_confidence", self.min_confidence)?;
        if let Some(len) = self.max_len {
            if !(1..=constants::MAX_ITEMSET_LEN_LIMIT).contains(&len) {
                return Err(ParamsError::MaxLenOutOfRange {
                    value: len,
                    max: constants::MAX_ITEMSET_LEN_LIMIT,
                });
            }
        }
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ParamsError::ThresholdOutOfRange { name, value })
    }
}

/// True when `value` reaches `threshold`, allowing for slider rounding.
pub fn meets_threshold(value: f64, threshold: f64) -> bool {
    value + constants::THRESHOLD_EPSILON >= threshold
}

// =============================================================================
// Mining results
// =============================================================================

/// An itemset whose support reached the minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset {
    /// Sorted indices into the item universe.
    pub items: Vec<usize>,

    /// Number of transactions containing every item.
    pub count: usize,

    /// `count / transaction_count`.
    pub support: f64,
}

/// A derived rule `antecedent -> consequent`.
///
/// Both sides are non-empty, disjoint, and hold sorted universe indices.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub antecedent: Vec<usize>,
    pub consequent: Vec<usize>,

    /// Support of `antecedent ∪ consequent`.
    pub support: f64,

    /// `support / antecedent_support`.
    pub confidence: f64,

    pub antecedent_support: f64,
    pub consequent_support: f64,

    /// `confidence / consequent_support`.
    pub lift: f64,

    /// `support - antecedent_support * consequent_support`.
    pub leverage: f64,

    /// `(1 - consequent_support) / (1 - confidence)`; `None` when the
    /// confidence is 1 and the ratio is unbounded.
    pub conviction: Option<f64>,
}

/// Presentation row: the three columns shown in the table and exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleRow {
    /// `"a, b -> c"`.
    pub combination: String,
    pub support: f64,
    pub confidence: f64,
}

/// Full rule record used by the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleRecord {
    pub antecedents: Vec<String>,
    pub consequents: Vec<String>,
    pub combination: String,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: Option<f64>,
}

/// Result of a mining run. Both empty variants are valid outcomes, not
/// errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MiningOutcome {
    /// No itemset reached the minimum support.
    NoFrequentItemsets,

    /// Frequent itemsets exist, but no rule reached the minimum confidence.
    NoRules {
        universe: Vec<String>,
        itemsets: Vec<FrequentItemset>,
    },

    /// At least one rule survived both thresholds.
    Rules {
        universe: Vec<String>,
        itemsets: Vec<FrequentItemset>,
        rules: Vec<AssociationRule>,
    },
}

impl MiningOutcome {
    /// Frequent itemsets found, if any.
    pub fn itemsets(&self) -> &[FrequentItemset] {
        match self {
            Self::NoFrequentItemsets => &[],
            Self::NoRules { itemsets, .. } | Self::Rules { itemsets, .. } => itemsets,
        }
    }

    /// Surviving rules, if any.
    pub fn rules(&self) -> &[AssociationRule] {
        match self {
            Self::Rules { rules, .. } => rules,
            _ => &[],
        }
    }

    /// Item labels indexed by the itemsets and rules.
    pub fn universe(&self) -> &[String] {
        match self {
            Self::NoFrequentItemsets => &[],
            Self::NoRules { universe, .. } | Self::Rules { universe, .. } => universe,
        }
    }
}

/// Statistics about a completed run, shown in the Run Summary window.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rows_read: usize,
    pub transaction_count: usize,
    pub universe_size: usize,
    pub itemset_count: usize,
    pub rule_count: usize,
    pub params: MiningParams,
    pub duration: Duration,
    pub finished_at: DateTime<Local>,
}
