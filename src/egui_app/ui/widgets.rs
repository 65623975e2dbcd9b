use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, RichText};

use super::style;

pub(super) fn primary_button(label: &str) -> egui::Button<'_> {
    let palette = style::palette();
    egui::Button::new(RichText::new(label).color(Color32::WHITE).strong())
        .fill(palette.accent_indigo)
        .min_size(egui::vec2(140.0, 32.0))
}

pub(super) fn action_button(label: &str) -> egui::Button<'_> {
    egui::Button::new(RichText::new(label).color(style::palette().text_primary))
}

pub(super) fn page_title(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).size(26.0).strong());
    ui.add_space(16.0);
}

pub(super) fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(18.0).strong());
    ui.add_space(8.0);
}

pub(super) fn muted(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(style::palette().text_muted));
}

/// White rounded panel used for forms and result tables.
pub(super) fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::section_stroke())
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Colored message block, e.g. a risk verdict.
pub(super) fn banner(ui: &mut egui::Ui, text: &str, fg: Color32, bg: Color32) {
    Frame::new()
        .fill(bg)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(fg).strong());
        });
}

pub(super) fn error_text(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(style::palette().danger).small());
}

pub(super) fn success_text(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(style::palette().success));
}

/// Pill-shaped risk label used in tables and summaries.
pub(super) fn risk_badge(ui: &mut egui::Ui, label: &str, high_risk: Option<bool>) {
    let (fg, bg) = high_risk.map_or_else(style::unknown_risk_colors, style::risk_colors);
    Frame::new()
        .fill(bg)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(fg).small().strong());
        });
}
