// BasketMiner - ui/panels/itemsets.rs
//
// Frequent itemsets window: every itemset that reached the minimum support,
// with its transaction count and support. Available even when no rule met
// the confidence threshold.

use crate::app::state::AppState;
use crate::core::rules::labels;
use crate::util::constants::DISPLAY_PRECISION;

/// Render the frequent itemsets window (if `state.show_itemsets` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_itemsets {
        return;
    }

    let mut open = true;
    egui::Window::new("Frequent Itemsets")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| {
            let Some(ref result) = state.result else {
                ui.label("No analysis has been run yet.");
                return;
            };
            let itemsets = result.outcome.itemsets();
            if itemsets.is_empty() {
                ui.label("No itemset reached the minimum support.");
                return;
            }
            let universe = result.outcome.universe();

            ui.label(format!(
                "{} itemsets at minimum support {:.2}",
                itemsets.len(),
                result.summary.params.min_support
            ));
            ui.add_space(4.0);

            egui::ScrollArea::vertical()
                .id_salt("itemset_table")
                .max_height(420.0)
                .show(ui, |ui| {
                    egui::Grid::new("itemset_grid")
                        .num_columns(3)
                        .striped(true)
                        .spacing([16.0, 3.0])
                        .show(ui, |ui| {
                            ui.strong("Itemset");
                            ui.strong("Transactions");
                            ui.strong("Support");
                            ui.end_row();

                            for f in itemsets {
                                ui.label(
                                    egui::RichText::new(labels(&f.items, universe).join(", "))
                                        .monospace(),
                                );
                                ui.label(f.count.to_string());
                                ui.label(format!("{:.prec$}", f.support, prec = DISPLAY_PRECISION));
                                ui.end_row();
                            }
                        });
                });
        });

    if !open {
        state.show_itemsets = false;
    }
}
