// BasketMiner - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::{ColumnSpec, MiningParams};
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for BasketMiner configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/basketminer/ or %APPDATA%\BasketMiner\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[mining]` section.
    pub mining: MiningSection,
    /// `[columns]` section.
    pub columns: ColumnsSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[mining]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct MiningSection {
    /// Initial minimum support.
    pub min_support: Option<f64>,
    /// Initial minimum confidence.
    pub min_confidence: Option<f64>,
    /// Initial itemset length cap.
    pub max_len: Option<usize>,
}

/// `[columns]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ColumnsSection {
    /// Name of the transaction id column.
    pub transaction_id: Option<String>,
    /// Name of the item column.
    pub item: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Initial mining thresholds.
    pub params: MiningParams,
    /// Initial column names.
    pub columns: ColumnSpec,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            params: MiningParams::default(),
            columns: ColumnSpec::default(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

fn out_of_range(field: &str, value: impl ToString, expected: String) -> ConfigError {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    }
}

/// Load and validate `config.toml` from `config_dir`.
///
/// Returns the validated configuration and any non-fatal problems. A missing
/// file yields defaults with no warnings (first run).
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path,
                source: e,
            };
            tracing::warn!(error = %err, "Could not read config file; using defaults");
            return (AppConfig::default(), vec![err]);
        }
    };

    let result = parse_config(&content, &config_path);
    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    result
}

/// Parse and validate config text. `path` is used only in error messages.
pub fn parse_config(content: &str, path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            };
            tracing::warn!(error = %err, "Failed to parse config; using defaults");
            return (AppConfig::default(), vec![err]);
        }
    };

    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Mining: min_support --
    if let Some(v) = raw.mining.min_support {
        if (constants::MIN_SUPPORT_LOWER..=constants::MIN_SUPPORT_UPPER).contains(&v) {
            config.params.min_support = v;
        } else {
            warnings.push(out_of_range(
                "mining.min_support",
                v,
                format!(
                    "{}-{} (default {})",
                    constants::MIN_SUPPORT_LOWER,
                    constants::MIN_SUPPORT_UPPER,
                    constants::DEFAULT_MIN_SUPPORT
                ),
            ));
        }
    }

    // -- Mining: min_confidence --
    if let Some(v) = raw.mining.min_confidence {
        if (constants::MIN_CONFIDENCE_LOWER..=constants::MIN_CONFIDENCE_UPPER).contains(&v) {
            config.params.min_confidence = v;
        } else {
            warnings.push(out_of_range(
                "mining.min_confidence",
                v,
                format!(
                    "{}-{} (default {})",
                    constants::MIN_CONFIDENCE_LOWER,
                    constants::MIN_CONFIDENCE_UPPER,
                    constants::DEFAULT_MIN_CONFIDENCE
                ),
            ));
        }
    }

    // -- Mining: max_len --
    if let Some(v) = raw.mining.max_len {
        if (1..=constants::MAX_ITEMSET_LEN_LIMIT).contains(&v) {
            config.params.max_len = Some(v);
        } else {
            warnings.push(out_of_range(
                "mining.max_len",
                v,
                format!("1-{} (default unlimited)", constants::MAX_ITEMSET_LEN_LIMIT),
            ));
        }
    }

    // -- Columns --
    if let Some(name) = raw.columns.transaction_id {
        if name.trim().is_empty() {
            warnings.push(out_of_range(
                "columns.transaction_id",
                "",
                format!("a column name (default {})", constants::DEFAULT_ID_COLUMN),
            ));
        } else {
            config.columns.transaction_id = name.trim().to_string();
        }
    }
    if let Some(name) = raw.columns.item {
        if name.trim().is_empty() {
            warnings.push(out_of_range(
                "columns.item",
                "",
                format!("a column name (default {})", constants::DEFAULT_ITEM_COLUMN),
            ));
        } else {
            config.columns.item = name.trim().to_string();
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(out_of_range(
                "ui.theme",
                other,
                "\"dark\" or \"light\" (default dark)".to_string(),
            )),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(out_of_range(
                "ui.font_size",
                size,
                format!(
                    "{}-{} (default {})",
                    constants::MIN_FONT_SIZE,
                    constants::MAX_FONT_SIZE,
                    constants::DEFAULT_FONT_SIZE
                ),
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(out_of_range(
                "logging.level",
                level,
                "error, warn, info, debug, trace (default info)".to_string(),
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (AppConfig, Vec<ConfigError>) {
        parse_config(text, Path::new("config.toml"))
    }

    #[test]
    fn test_empty_config_is_default() {
        let (config, warnings) = parse("");
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_are_applied() {
        let (config, warnings) = parse(
            r#"
            [mining]
            min_support = 0.05
            min_confidence = 0.7
            max_len = 3

            [columns]
            transaction_id = "Order"
            item = "Product"

            [ui]
            theme = "Light"
            font_size = 16.0

            [logging]
            level = "DEBUG"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.params.min_support, 0.05);
        assert_eq!(config.params.min_confidence, 0.7);
        assert_eq!(config.params.max_len, Some(3));
        assert_eq!(config.columns.transaction_id, "Order");
        assert_eq!(config.columns.item, "Product");
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let (config, warnings) = parse(
            r#"
            [mining]
            min_support = 0.9
            min_confidence = 0.0
            max_len = 0

            [ui]
            theme = "neon"
            "#,
        );
        assert_eq!(warnings.len(), 4);
        assert_eq!(config.params, MiningParams::default());
        assert!(config.dark_mode);
        assert!(warnings[0].to_string().contains("mining.min_support"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_, warnings) = parse("[future]\nshiny = true\n");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_single_warning() {
        let (config, warnings) = parse("[mining\nmin_support = ");
        assert_eq!(config, AppConfig::default());
        assert!(matches!(warnings.as_slice(), [ConfigError::TomlParse { .. }]));
    }

    #[test]
    fn test_missing_file_is_silent_default() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }
}
