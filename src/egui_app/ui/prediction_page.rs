use super::{EguiApp, style, widgets};
use crate::egui_app::view_model::{self, FieldCaption};
use crate::validation::Field;
use eframe::egui::{self, RichText};

const FIELD_INPUT_WIDTH: f32 = 320.0;

impl EguiApp {
    pub(super) fn render_prediction_page(&mut self, ui: &mut egui::Ui) {
        widgets::page_title(ui, "Heart Disease Prediction");
        widgets::card(ui, |ui| {
            for pair in Field::ALL.chunks(2) {
                ui.columns(2, |columns| {
                    for (column, field) in columns.iter_mut().zip(pair) {
                        self.render_field(column, *field);
                    }
                });
                ui.add_space(10.0);
            }

            if let Some(error) = self.controller.ui.prediction.last_error.clone() {
                widgets::error_text(ui, &error);
                ui.add_space(8.0);
            }
            if let Some(result) = self.controller.ui.prediction.last_result {
                let summary = view_model::risk_summary(&result);
                let (fg, bg) = style::risk_colors(summary.high_risk);
                widgets::banner(
                    ui,
                    &format!("{} ({} probability)", summary.label, summary.probability_text),
                    fg,
                    bg,
                );
                ui.add_space(4.0);
                ui.label(RichText::new(summary.message).color(fg));
                ui.add_space(8.0);
            }

            let submitting = self.controller.ui.prediction.submitting;
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if submitting {
                    "Processing..."
                } else {
                    "Get Prediction"
                };
                if ui
                    .add_enabled(!submitting, widgets::primary_button(label))
                    .clicked()
                {
                    self.controller.submit_prediction();
                }
                if ui
                    .add_enabled(!submitting, widgets::action_button("Reset"))
                    .clicked()
                {
                    self.controller.reset_prediction_form();
                }
                if submitting {
                    ui.add(egui::Spinner::new());
                }
            });
        });
    }

    fn render_field(&mut self, ui: &mut egui::Ui, field: Field) {
        let palette = style::palette();
        ui.label(RichText::new(field.label()).strong());
        let mut value = self.controller.ui.prediction.form.value(field).to_string();
        let changed = if field.is_enumerated() {
            let mut changed = false;
            egui::ComboBox::from_id_salt(("prediction_field", field.index()))
                .width(FIELD_INPUT_WIDTH)
                .selected_text(view_model::option_choice_text(field, &value))
                .show_ui(ui, |ui| {
                    for option in field.options() {
                        if ui
                            .selectable_label(value == option.value, option.label)
                            .clicked()
                        {
                            value = option.value.to_string();
                            changed = true;
                        }
                    }
                });
            changed
        } else {
            ui.add(egui::TextEdit::singleline(&mut value).desired_width(FIELD_INPUT_WIDTH))
                .changed()
        };
        if changed {
            self.controller.on_field_change(field, value);
        }
        match view_model::field_caption(field, &self.controller.ui.prediction.errors) {
            Some(FieldCaption::Error(error)) => widgets::error_text(ui, error),
            Some(FieldCaption::Hint(hint)) => {
                ui.label(RichText::new(hint).small().color(palette.text_muted));
            }
            None => {}
        }
    }
}
