use super::{EguiApp, style, widgets};
use crate::egui_app::view_model;
use eframe::egui::{self, RichText};

impl EguiApp {
    pub(super) fn render_retraining_page(&mut self, ui: &mut egui::Ui) {
        widgets::page_title(ui, "Model Retraining");
        widgets::card(ui, |ui| {
            widgets::muted(
                ui,
                "Upload a new dataset to retrain the heart disease prediction model. The file \
                 should be in CSV format and include both features and target labels.",
            );
            ui.add_space(12.0);
            ui.label(RichText::new("Upload Training Dataset").strong());
            let state = &self.controller.ui.retraining;
            let submitting = state.submitting;
            let file_label = view_model::file_label(state.selected_file.as_deref());
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!submitting, widgets::action_button("Choose file..."))
                    .clicked()
                {
                    self.controller.pick_retraining_file();
                }
                widgets::muted(ui, &file_label);
            });
            ui.label(
                RichText::new(
                    "The dataset should include all required features and the target variable.",
                )
                .small()
                .color(style::palette().text_muted),
            );
            ui.add_space(10.0);

            let state = &self.controller.ui.retraining;
            if let Some(error) = state.last_error.as_deref() {
                widgets::error_text(ui, error);
            }
            if let Some(success) = state.last_success.as_deref() {
                widgets::success_text(ui, success);
            }

            let can_submit = self.controller.ui.retraining.can_submit();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if submitting {
                    "Retraining Model..."
                } else {
                    "Start Retraining"
                };
                if ui
                    .add_enabled(can_submit, widgets::primary_button(label))
                    .clicked()
                {
                    self.controller.submit_retraining();
                }
                if submitting {
                    ui.add(egui::Spinner::new());
                }
            });
        });

        let Some(response) = self.controller.ui.retraining.result.as_ref() else {
            return;
        };
        let rows = view_model::metric_rows(&response.metrics);
        ui.add_space(20.0);
        widgets::card(ui, |ui| {
            widgets::section_heading(ui, "New Model Metrics");
            egui::Grid::new("retraining_metrics")
                .num_columns(2)
                .striped(true)
                .spacing(egui::vec2(32.0, 6.0))
                .show(ui, |ui| {
                    for row in &rows {
                        ui.label(row.label);
                        ui.label(RichText::new(&row.value).strong());
                        ui.end_row();
                    }
                });
        });
    }
}
