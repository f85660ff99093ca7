// BasketMiner - ui/panels/summary.rs
//
// Run summary modal window.
// Shows input statistics, thresholds, and result counts for the last run.
// Configuration warnings are also listed.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the run summary dialog (if state.show_summary is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let mut open = true;
    egui::Window::new("Run Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref result) = state.result {
                let summary = &result.summary;
                ui.strong("Overview");
                egui::Grid::new("summary_overview")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Rows read:");
                        ui.label(summary.rows_read.to_string());
                        ui.end_row();

                        ui.label("Transactions:");
                        ui.label(summary.transaction_count.to_string());
                        ui.end_row();

                        ui.label("Distinct items:");
                        ui.label(summary.universe_size.to_string());
                        ui.end_row();

                        ui.label("Minimum support:");
                        ui.label(format!("{:.2}", summary.params.min_support));
                        ui.end_row();

                        ui.label("Minimum confidence:");
                        ui.label(format!("{:.1}", summary.params.min_confidence));
                        ui.end_row();

                        ui.label("Itemset size limit:");
                        ui.label(
                            summary
                                .params
                                .max_len
                                .map(|n| n.to_string())
                                .unwrap_or_else(|| "none".to_string()),
                        );
                        ui.end_row();

                        ui.label("Frequent itemsets:");
                        ui.label(summary.itemset_count.to_string());
                        ui.end_row();

                        ui.label("Rules:");
                        ui.label(summary.rule_count.to_string());
                        ui.end_row();

                        ui.label("Duration:");
                        ui.label(format!("{:.3}s", summary.duration.as_secs_f64()));
                        ui.end_row();

                        ui.label("Finished:");
                        ui.label(summary.finished_at.format("%Y-%m-%d %H:%M:%S").to_string());
                        ui.end_row();
                    });

                if let Some(msg) = result.advisory() {
                    ui.add_space(6.0);
                    ui.colored_label(theme::warning_colour(state.dark_mode), msg);
                }
            } else {
                ui.label("No analysis has been completed yet.");
            }

            if !state.warnings.is_empty() {
                ui.add_space(8.0);
                ui.separator();
                ui.strong(format!("Warnings ({})", state.warnings.len()));
                egui::ScrollArea::vertical()
                    .id_salt("summary_warnings")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        for warn in &state.warnings {
                            ui.label(
                                egui::RichText::new(warn)
                                    .color(theme::warning_colour(state.dark_mode))
                                    .size(11.5),
                            );
                        }
                    });
            }

            ui.add_space(8.0);
            ui.separator();
            if ui.button("Close").clicked() {
                state.show_summary = false;
            }
        });

    if !open {
        state.show_summary = false;
    }
}
