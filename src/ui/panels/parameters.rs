// BasketMiner - ui/panels/parameters.rs
//
// Left sidebar: input file, column pickers, thresholds, run button.
//
// This panel writes `state.pending_input` and `state.request_run`;
// gui.rs consumes them each frame. No mining happens here.

use crate::app::state::{display_name, AppState};
use crate::util::constants::{
    DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_SUPPORT, MAX_ITEMSET_LEN_LIMIT, MIN_CONFIDENCE_LOWER,
    MIN_CONFIDENCE_STEP, MIN_CONFIDENCE_UPPER, MIN_SUPPORT_LOWER, MIN_SUPPORT_STEP,
    MIN_SUPPORT_UPPER,
};

/// Render the parameters sidebar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Transactions");
    ui.add_space(4.0);

    // =========================================================
    // Input file
    // =========================================================
    ui.horizontal(|ui| {
        if ui.button("Open CSV\u{2026}").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .pick_file()
            {
                state.pending_input = Some(path);
            }
        }
        match state.input_path {
            Some(ref path) => {
                ui.label(egui::RichText::new(display_name(path)).monospace())
                    .on_hover_text(path.display().to_string());
            }
            None => {
                ui.label(egui::RichText::new("No file selected").weak());
            }
        }
    });

    ui.add_space(8.0);

    // =========================================================
    // Columns
    // =========================================================
    egui::Grid::new("column_pickers")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Transaction id:");
            column_picker(
                ui,
                "id_column",
                &mut state.columns.transaction_id,
                &state.available_columns,
            );
            ui.end_row();

            ui.label("Item:");
            column_picker(
                ui,
                "item_column",
                &mut state.columns.item,
                &state.available_columns,
            );
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.separator();

    // =========================================================
    // Thresholds
    // =========================================================
    ui.heading("Thresholds");
    ui.add_space(4.0);

    ui.label("Minimum support:");
    ui.add(
        egui::Slider::new(
            &mut state.params.min_support,
            MIN_SUPPORT_LOWER..=MIN_SUPPORT_UPPER,
        )
        .step_by(MIN_SUPPORT_STEP)
        .fixed_decimals(2),
    )
    .on_hover_text("Fraction of transactions an itemset must appear in.");

    ui.add_space(4.0);
    ui.label("Minimum confidence:");
    ui.add(
        egui::Slider::new(
            &mut state.params.min_confidence,
            MIN_CONFIDENCE_LOWER..=MIN_CONFIDENCE_UPPER,
        )
        .step_by(MIN_CONFIDENCE_STEP)
        .fixed_decimals(1),
    )
    .on_hover_text("Probability of the consequent given the antecedent.");

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let mut capped = state.params.max_len.is_some();
        if ui
            .checkbox(&mut capped, "Limit itemset size")
            .on_hover_text("Skip itemsets larger than this. Speeds up dense data.")
            .changed()
        {
            state.params.max_len = capped.then_some(3);
        }
        if let Some(ref mut len) = state.params.max_len {
            ui.add(egui::DragValue::new(len).range(1..=MAX_ITEMSET_LEN_LIMIT));
        }
    });

    let at_defaults = (state.params.min_support - DEFAULT_MIN_SUPPORT).abs() < f64::EPSILON
        && (state.params.min_confidence - DEFAULT_MIN_CONFIDENCE).abs() < f64::EPSILON
        && state.params.max_len.is_none();
    if !at_defaults && ui.small_button("Reset thresholds").clicked() {
        state.params.min_support = DEFAULT_MIN_SUPPORT;
        state.params.min_confidence = DEFAULT_MIN_CONFIDENCE;
        state.params.max_len = None;
    }

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    // =========================================================
    // Run
    // =========================================================
    let can_run = state.input_path.is_some();
    let run = ui
        .add_enabled(
            can_run,
            egui::Button::new(egui::RichText::new("Load and Apply Apriori").strong())
                .min_size(egui::vec2(ui.available_width(), 30.0)),
        )
        .on_disabled_hover_text("Open a CSV file first.");
    if run.clicked() {
        state.request_run = true;
    }
}

/// Combo box over the file's headers, or a text field before any file has
/// been opened.
fn column_picker(ui: &mut egui::Ui, id: &str, selected: &mut String, options: &[String]) {
    if options.is_empty() {
        ui.add(egui::TextEdit::singleline(selected).desired_width(150.0));
        return;
    }
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_str())
        .width(150.0)
        .show_ui(ui, |ui| {
            for name in options {
                ui.selectable_value(selected, name.clone(), name);
            }
        });
}
