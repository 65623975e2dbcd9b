use super::{EguiApp, style, widgets};
use crate::egui_app::state::Route;
use crate::validation::Field;
use eframe::egui::{self, RichText};

impl EguiApp {
    pub(super) fn render_home(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Advanced Heart Disease").size(34.0).strong());
        ui.label(
            RichText::new("Prediction System")
                .size(34.0)
                .strong()
                .color(palette.accent_indigo),
        );
        ui.add_space(12.0);
        widgets::muted(
            ui,
            "Using machine learning to predict heart disease risk. The model analyzes key \
             health indicators to provide early detection and risk assessment.",
        );
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.add(widgets::primary_button("Start Prediction")).clicked() {
                self.controller.navigate(Route::Prediction);
            }
            if ui.add(widgets::action_button("Batch Upload")).clicked() {
                self.controller.navigate(Route::BatchUpload);
            }
        });
        ui.add_space(28.0);

        widgets::card(ui, |ui| {
            widgets::section_heading(ui, "Dataset Information");
            widgets::muted(
                ui,
                "Each prediction uses the following patient attributes and diagnostic \
                 measurements.",
            );
            ui.add_space(10.0);
            for field in Field::ALL {
                ui.label(RichText::new(format!("{}:", field.label())).strong());
                ui.label(attribute_description(field));
                for option in field.options() {
                    ui.label(format!("    Value {}: {}", option.value, option.label));
                }
                ui.add_space(6.0);
            }
            ui.label(RichText::new("Target:").strong());
            ui.label(
                "Presence (1) or absence (0) of heart disease. Only needed in retraining \
                 uploads.",
            );
        });
    }
}

fn attribute_description(field: Field) -> &'static str {
    match field {
        Field::Age => "Age of the individual in years.",
        Field::Sex => "Binary coded, 1 for male and 0 for female.",
        Field::ChestPainType => "Nominal category of chest pain:",
        Field::RestingBloodPressure => "Resting blood pressure in mm Hg.",
        Field::Cholesterol => "Serum cholesterol in mg/dl.",
        Field::FastingBloodSugar => "Whether fasting blood sugar exceeds 120 mg/dl:",
        Field::RestingEcg => "Resting electrocardiogram result:",
        Field::MaxHeartRate => "Highest heart rate achieved during exercise testing.",
        Field::ExerciseAngina => "Whether exercise induced angina occurred:",
        Field::Oldpeak => "ST depression induced by exercise relative to rest.",
        Field::StSlope => "Slope of the peak exercise ST segment:",
    }
}
