use std::time::Duration;

use super::{CONTENT_WIDTH, EguiApp, style};
use crate::egui_app::state::Route;
use eframe::egui::{self, Frame, Margin};

// Background jobs report over a channel, so keep repainting while they run.
const JOB_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick();
        self.handle_dropped_files(ctx);
        if self.controller.has_jobs_in_flight() {
            ctx.request_repaint_after(JOB_POLL_INTERVAL);
        }
        self.render_nav_bar(ctx);
        self.render_status(ctx);
        self.render_page(ctx);
    }
}

impl EguiApp {
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        for path in dropped_files.into_iter().filter_map(|file| file.path) {
            self.controller.drop_csv_file(path);
        }
    }

    fn render_page(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(Frame::new().fill(palette.bg_primary))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(CONTENT_WIDTH);
                            Frame::new()
                                .inner_margin(Margin::symmetric(16, 24))
                                .show(ui, |ui| {
                                    ui.with_layout(
                                        egui::Layout::top_down(egui::Align::Min),
                                        |ui| match self.controller.current_route() {
                                            Route::Home => self.render_home(ui),
                                            Route::Prediction => self.render_prediction_page(ui),
                                            Route::BatchUpload => self.render_batch_page(ui),
                                            Route::Retraining => self.render_retraining_page(ui),
                                        },
                                    );
                                });
                            self.render_footer(ui);
                        });
                    });
            });
    }
}
