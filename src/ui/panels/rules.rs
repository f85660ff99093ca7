// BasketMiner - ui/panels/rules.rs
//
// Central panel: column legend and the association rule table.
//
// Uses `ScrollArea::show_rows`, which lays out only the rows in view, so
// large rule sets stay cheap to render. When there is nothing to show the
// panel displays the load error or the empty-outcome advisory instead.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::DISPLAY_PRECISION;

/// Render the rule table (central area).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if let Some(ref err) = state.last_error {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(err)
                    .color(theme::error_colour(state.dark_mode))
                    .strong(),
            );
        });
        return;
    }

    let Some(ref result) = state.result else {
        ui.centered_and_justified(|ui| {
            ui.label(
                "No rules yet.\nOpen a transaction CSV, adjust the thresholds, \
                 and press \u{201c}Load and Apply Apriori\u{201d}.",
            );
        });
        return;
    };

    if let Some(msg) = result.advisory() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(format!("\u{26a0} {msg}"))
                    .color(theme::warning_colour(state.dark_mode)),
            );
        });
        return;
    }

    ui.heading(format!("Association Rules Found ({})", result.rows.len()));
    ui.add_space(4.0);
    render_legend(ui);
    ui.add_space(6.0);
    ui.separator();

    // Header row
    let combination_width =
        (ui.available_width() - 2.0 * theme::NUMBER_COLUMN_WIDTH).max(200.0);
    ui.horizontal(|ui| {
        for (title, width) in [
            ("Combination", combination_width),
            ("Support", theme::NUMBER_COLUMN_WIDTH),
            ("Confidence", theme::NUMBER_COLUMN_WIDTH),
        ] {
            ui.add_sized(
                [width, theme::ROW_HEIGHT],
                egui::Label::new(egui::RichText::new(title).strong()),
            );
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("rule_table")
        .auto_shrink([false; 2])
        .show_rows(ui, theme::ROW_HEIGHT, result.rows.len(), |ui, row_range| {
            for idx in row_range {
                let Some(row) = result.rows.get(idx) else {
                    continue;
                };
                ui.horizontal(|ui| {
                    ui.add_sized(
                        [combination_width, theme::ROW_HEIGHT],
                        egui::Label::new(egui::RichText::new(&row.combination).monospace())
                            .truncate(),
                    )
                    .on_hover_text(row.combination.as_str());
                    ui.add_sized(
                        [theme::NUMBER_COLUMN_WIDTH, theme::ROW_HEIGHT],
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{:.prec$}",
                                row.support,
                                prec = DISPLAY_PRECISION
                            ))
                            .monospace(),
                        ),
                    );
                    ui.add_sized(
                        [theme::NUMBER_COLUMN_WIDTH, theme::ROW_HEIGHT],
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{:.prec$}",
                                row.confidence,
                                prec = DISPLAY_PRECISION
                            ))
                            .monospace()
                            .color(theme::confidence_colour(row.confidence, state.dark_mode)),
                        ),
                    );
                });
            }
        });
}

fn render_legend(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("Column legend")
        .default_open(true)
        .show(ui, |ui| {
            legend_line(
                ui,
                "Combination",
                "relation between the items found: the antecedent set is associated with the consequent set.",
            );
            legend_line(
                ui,
                "Support",
                "fraction of transactions that contain every item of the rule.",
            );
            legend_line(
                ui,
                "Confidence",
                "probability that the consequent occurs given that the antecedent occurred.",
            );
        });
}

fn legend_line(ui: &mut egui::Ui, name: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(format!("{name}:")).strong());
        ui.label(egui::RichText::new(text).weak());
    });
}
