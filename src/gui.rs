// BasketMiner - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and consumes the flags they set.

use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;

/// The BasketMiner application.
pub struct BasketMinerApp {
    pub state: AppState,
    /// (dark_mode, font_size) last pushed to the egui context.
    applied_style: Option<(bool, f32)>,
}

impl BasketMinerApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied_style: None,
        }
    }

    fn export_csv_dialog(&mut self) {
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(constants::DEFAULT_EXPORT_CSV_NAME)
            .save_file()
        {
            if let Err(e) = self.state.export_csv_to(&dest) {
                tracing::warn!(error = %e, "CSV export failed");
                self.state.status_message = format!("CSV export failed: {e}");
            }
        }
    }

    fn export_json_dialog(&mut self) {
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(constants::DEFAULT_EXPORT_JSON_NAME)
            .save_file()
        {
            if let Err(e) = self.state.export_json_to(&dest) {
                tracing::warn!(error = %e, "JSON export failed");
                self.state.status_message = format!("JSON export failed: {e}");
            }
        }
    }
}

impl eframe::App for BasketMinerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let style = (self.state.dark_mode, self.state.font_size);
        if self.applied_style != Some(style) {
            ui::theme::apply(ctx, style.0, style.1);
            self.applied_style = Some(style);
        }

        // ---- Handle flags set by the parameters panel ----
        if let Some(path) = self.state.pending_input.take() {
            self.state.select_input(path);
        }
        // The run blocks this frame until mining returns.
        if self.state.request_run {
            self.state.request_run = false;
            self.state.run_analysis();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open CSV\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file()
                        {
                            self.state.pending_input = Some(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_rules = self.state.has_rules();
                    ui.add_enabled_ui(has_rules, |ui| {
                        if ui.button("Export Rules as CSV\u{2026}").clicked() {
                            self.export_csv_dialog();
                            ui.close_menu();
                        }
                        if ui.button("Export Rules as JSON\u{2026}").clicked() {
                            self.export_json_dialog();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Run Summary").clicked() {
                        self.state.show_summary = true;
                        ui.close_menu();
                    }
                    let has_itemsets = self
                        .state
                        .result
                        .as_ref()
                        .is_some_and(|r| !r.outcome.itemsets().is_empty());
                    ui.add_enabled_ui(has_itemsets, |ui| {
                        if ui.button("Frequent Itemsets").clicked() {
                            self.state.show_itemsets = true;
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    ui.checkbox(&mut self.state.dark_mode, "Dark mode");
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref result) = self.state.result {
                        ui.label(format!(
                            "{} transactions \u{00b7} {} items",
                            result.summary.transaction_count, result.summary.universe_size
                        ));
                    }
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").weak());
                    }
                });
            });
        });

        // Left sidebar
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_parameters")
                    .show(ui, |ui| {
                        ui::panels::parameters::render(ui, &mut self.state);
                    });
            });

        // Download button above the table, mirroring File > Export.
        if self.state.has_rules() {
            egui::TopBottomPanel::top("export_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Download Rules as CSV").clicked() {
                        self.export_csv_dialog();
                    }
                });
            });
        }

        // Central panel (rule table)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::rules::render(ui, &self.state);
        });

        // Secondary windows
        ui::panels::summary::render(ctx, &mut self.state);
        ui::panels::itemsets::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }
}
