use super::{EguiApp, style, widgets};
use crate::egui_app::view_model;
use eframe::egui::{self, RichText};

impl EguiApp {
    pub(super) fn render_batch_page(&mut self, ui: &mut egui::Ui) {
        widgets::page_title(ui, "Batch Prediction");
        widgets::card(ui, |ui| {
            widgets::muted(
                ui,
                "Upload a CSV file with one patient per row. Include a name column and every \
                 attribute used by the single prediction form.",
            );
            ui.add_space(12.0);
            ui.label(RichText::new("Upload CSV File").strong());
            let state = &self.controller.ui.batch;
            let submitting = state.submitting;
            let file_label = view_model::file_label(state.selected_file.as_deref());
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!submitting, widgets::action_button("Choose file..."))
                    .clicked()
                {
                    self.controller.pick_batch_file();
                }
                widgets::muted(ui, &file_label);
            });
            ui.add_space(10.0);

            let state = &self.controller.ui.batch;
            if let Some(error) = state.last_error.as_deref() {
                widgets::error_text(ui, error);
            }
            if let Some(success) = state.last_success.as_deref() {
                widgets::success_text(ui, success);
            }

            let can_submit = self.controller.ui.batch.can_submit();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if submitting {
                    "Processing..."
                } else {
                    "Upload and Predict"
                };
                if ui
                    .add_enabled(can_submit, widgets::primary_button(label))
                    .clicked()
                {
                    self.controller.submit_batch();
                }
                if submitting {
                    ui.add(egui::Spinner::new());
                }
            });
        });

        let rows = self
            .controller
            .ui
            .batch
            .result
            .as_ref()
            .map(view_model::batch_rows)
            .unwrap_or_default();
        if rows.is_empty() {
            return;
        }
        ui.add_space(20.0);
        widgets::card(ui, |ui| {
            widgets::section_heading(ui, "Prediction Results");
            let palette = style::palette();
            egui::Grid::new("batch_results")
                .num_columns(3)
                .striped(true)
                .spacing(egui::vec2(32.0, 8.0))
                .show(ui, |ui| {
                    for header in ["NAME", "PREDICTION", "PROBABILITY"] {
                        ui.label(RichText::new(header).small().color(palette.text_muted));
                    }
                    ui.end_row();
                    for row in &rows {
                        ui.label(RichText::new(&row.name).strong());
                        widgets::risk_badge(ui, row.label, row.high_risk);
                        ui.label(&row.probability_text);
                        ui.end_row();
                    }
                });
        });
    }
}
