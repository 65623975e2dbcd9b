use super::{EguiApp, style, widgets};
use crate::egui_app::state::Route;
use crate::egui_app::view_model;
use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

const BRAND: &str = "Heart Disease Predictor";

impl EguiApp {
    pub(super) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("nav_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = ui.add(
                        egui::Label::new(
                            RichText::new(BRAND)
                                .size(18.0)
                                .strong()
                                .color(palette.accent_indigo),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if brand.clicked() {
                        self.controller.navigate(Route::Home);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Right-to-left layout, so add links in reverse.
                        for link in view_model::nav_links(self.controller.current_route())
                            .into_iter()
                            .rev()
                        {
                            let text = if link.active {
                                RichText::new(link.label)
                                    .strong()
                                    .color(palette.accent_indigo)
                            } else {
                                RichText::new(link.label).color(palette.text_muted)
                            };
                            if ui.selectable_label(link.active, text).clicked() {
                                self.controller.navigate(link.route);
                            }
                        }
                    });
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_tertiary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(badge_rect, 3.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        3.0,
                        style::section_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    if self.controller.has_jobs_in_flight() {
                        ui.add(egui::Spinner::new().size(12.0));
                    }
                });
            });
    }

    pub(super) fn render_footer(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.separator();
        ui.add_space(8.0);
        ui.columns(2, |columns| {
            columns[0].vertical(|ui| {
                ui.label(RichText::new(BRAND).strong());
                widgets::muted(
                    ui,
                    "Machine-learning risk estimates from standard clinical measurements.",
                );
            });
            columns[1].vertical(|ui| {
                ui.label(RichText::new("Quick Links").strong());
                for route in [Route::Home, Route::Prediction, Route::BatchUpload, Route::Retraining]
                {
                    let label = match route {
                        Route::Home => "Home",
                        Route::Prediction => "Make Prediction",
                        Route::BatchUpload => "Batch Processing",
                        Route::Retraining => "Model Retraining",
                    };
                    if ui.link(label).clicked() {
                        self.controller.navigate(route);
                    }
                }
            });
        });
        ui.add_space(8.0);
        widgets::muted(
            ui,
            "Predictions are informational and do not replace a medical diagnosis.",
        );
    }
}
