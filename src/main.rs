// BasketMiner - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Headless export mode (--export)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use basketminer::app;

pub use basketminer::core;
pub use basketminer::platform;
pub use basketminer::ui;
pub use basketminer::util;

use crate::app::analysis::{self, ExportFormat, HeadlessOutcome};
use crate::core::model::{ColumnSpec, MiningParams};
use clap::Parser;
use std::path::PathBuf;

/// BasketMiner - association rule mining for transaction CSV files.
///
/// Opens the GUI by default. With --export the Apriori pipeline runs
/// without a window and the rule table is written straight to disk.
#[derive(Parser, Debug)]
#[command(name = "BasketMiner", version, about)]
struct Cli {
    /// Transaction CSV to load (opens empty if omitted).
    file: Option<PathBuf>,

    /// Minimum support, in (0, 1].
    #[arg(short = 's', long = "min-support")]
    min_support: Option<f64>,

    /// Minimum confidence, in (0, 1].
    #[arg(short = 'c', long = "min-confidence")]
    min_confidence: Option<f64>,

    /// Largest itemset size to mine.
    #[arg(short = 'l', long = "max-len")]
    max_len: Option<usize>,

    /// Name of the transaction identifier column.
    #[arg(long = "id-column")]
    id_column: Option<String>,

    /// Name of the item label column.
    #[arg(long = "item-column")]
    item_column: Option<String>,

    /// Write the rules to this file and exit without opening a window.
    #[arg(short = 'e', long = "export", requires = "file")]
    export: Option<PathBuf>,

    /// Export as JSON with every score instead of CSV.
    #[arg(long = "json", requires = "export")]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take part.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %platform_paths.config_file().display(),
        "BasketMiner starting"
    );
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Configuration warning");
    }

    let params = match MiningParams::new(
        cli.min_support.unwrap_or(config.params.min_support),
        cli.min_confidence.unwrap_or(config.params.min_confidence),
        cli.max_len.or(config.params.max_len),
    ) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(util::constants::EXIT_FAILURE);
        }
    };
    let columns = ColumnSpec {
        transaction_id: cli
            .id_column
            .clone()
            .unwrap_or_else(|| config.columns.transaction_id.clone()),
        item: cli
            .item_column
            .clone()
            .unwrap_or_else(|| config.columns.item.clone()),
    };

    if let (Some(file), Some(dest)) = (cli.file.as_deref(), cli.export.as_deref()) {
        let format = if cli.json {
            ExportFormat::Json
        } else {
            ExportFormat::Csv
        };
        let result = analysis::run_headless(file, dest, &columns, &params, format);
        match result {
            Ok(HeadlessOutcome::Exported {
                rules,
                transactions,
            }) => println!(
                "{rules} rules from {transactions} transactions written to {}",
                dest.display()
            ),
            Ok(HeadlessOutcome::Empty { advisory }) => println!("{advisory}"),
            Err(ref e) => {
                tracing::error!(error = %e, "Headless run failed");
                eprintln!("Error: {e}");
            }
        }
        std::process::exit(analysis::exit_code(&result));
    }

    // Create application state
    let mut state = app::state::AppState::new(&config, cli.debug);
    state.params = params;
    state.configured_columns = columns.clone();
    state.columns = columns;
    state.warnings = config_warnings.iter().map(ToString::to_string).collect();
    if let Some(path) = cli.file {
        state.select_input(path);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::BasketMinerApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch BasketMiner GUI: {e}");
        std::process::exit(util::constants::EXIT_FAILURE);
    }
}
