#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based heart disease prediction client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use pulsepoint::egui_app::controller::EguiController;
use pulsepoint::egui_app::ui::style::StatusTone;
use pulsepoint::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use pulsepoint::logging;
use pulsepoint::orchestrator::SubmissionOrchestrator;
use pulsepoint::prediction_api::HttpPredictionService;
use pulsepoint::settings::{self, ApiConfig, BuildMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match logging::init() {
        Ok(Some(path)) => tracing::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(err) => eprintln!("Logging disabled: {err}"),
    }

    let (settings, settings_warning) = match settings::load_or_default() {
        Ok(settings) => (settings, None),
        Err(err) => {
            tracing::warn!("Using default settings: {err}");
            (
                settings::AppSettings::default(),
                Some(format!("Settings ignored: {err}")),
            )
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_title("Heart Disease Predictor")
        .with_inner_size([980.0, 760.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mode = BuildMode::current();
    let app_result = ApiConfig::resolve(mode, &settings.api).map(|config| {
        tracing::info!("Prediction service: {} ({mode:?})", config.describe());
        let service = Arc::new(HttpPredictionService::new(config.clone()));
        let mut controller = EguiController::new(SubmissionOrchestrator::new(service));
        match settings_warning {
            Some(warning) => controller.set_status(warning, StatusTone::Warning),
            None => controller.set_status(
                format!("Prediction service: {}", config.describe()),
                StatusTone::Idle,
            ),
        }
        controller
    });

    eframe::run_native(
        "Heart Disease Predictor",
        native_options,
        Box::new(move |_cc| match app_result {
            Ok(controller) => Ok(Box::new(EguiApp::new(controller))),
            Err(err) => Ok(Box::new(LaunchError {
                message: format!("Invalid API configuration: {err}"),
            })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
