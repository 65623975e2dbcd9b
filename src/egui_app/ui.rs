//! egui renderer for the application UI.

mod batch_page;
mod chrome;
mod home;
mod prediction_page;
mod retraining_page;
pub mod style;
mod update;
mod widgets;

use crate::egui_app::controller::EguiController;
use eframe::egui;

/// Minimum viewport size for the main window.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 560.0);
/// Content column width used by every page.
const CONTENT_WIDTH: f32 = 760.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}
