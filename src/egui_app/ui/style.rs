use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_indigo: Color32,
    pub accent_indigo_soft: Color32,
    pub danger: Color32,
    pub danger_soft: Color32,
    pub success: Color32,
    pub success_soft: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(249, 250, 251),
        bg_secondary: Color32::from_rgb(255, 255, 255),
        bg_tertiary: Color32::from_rgb(243, 244, 246),
        panel_outline: Color32::from_rgb(209, 213, 219),
        text_primary: Color32::from_rgb(17, 24, 39),
        text_muted: Color32::from_rgb(107, 114, 128),
        accent_indigo: Color32::from_rgb(79, 70, 229),
        accent_indigo_soft: Color32::from_rgb(238, 242, 255),
        danger: Color32::from_rgb(185, 28, 28),
        danger_soft: Color32::from_rgb(254, 226, 226),
        success: Color32::from_rgb(21, 128, 61),
        success_soft: Color32::from_rgb(220, 252, 231),
        warning: Color32::from_rgb(180, 83, 9),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_secondary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_indigo;
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_tertiary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent_indigo_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_indigo);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent_indigo);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_secondary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub fn card_fill() -> Color32 {
    palette().bg_secondary
}

/// Foreground and background for a risk badge or banner.
pub fn risk_colors(high_risk: bool) -> (Color32, Color32) {
    let palette = palette();
    if high_risk {
        (palette.danger, palette.danger_soft)
    } else {
        (palette.success, palette.success_soft)
    }
}

pub fn unknown_risk_colors() -> (Color32, Color32) {
    let palette = palette();
    (palette.text_muted, palette.bg_tertiary)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            StatusTone::Idle => "Idle",
            StatusTone::Busy => "Busy",
            StatusTone::Info => "Info",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(156, 163, 175),
        StatusTone::Busy => Color32::from_rgb(79, 70, 229),
        StatusTone::Info => Color32::from_rgb(22, 163, 74),
        StatusTone::Warning => Color32::from_rgb(217, 119, 6),
        StatusTone::Error => Color32::from_rgb(220, 38, 38),
    }
}
