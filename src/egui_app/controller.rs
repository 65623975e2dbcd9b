//! Bridges the submission orchestrator to the egui UI state.

mod background_jobs;
mod jobs;
mod navigation;
mod prediction;
mod uploads;

#[cfg(test)]
mod test_support;

use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::orchestrator::SubmissionOrchestrator;
use jobs::ControllerJobs;

/// Maintains app state and dispatches submissions to background jobs.
pub struct EguiController {
    pub ui: UiState,
    orchestrator: SubmissionOrchestrator,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(orchestrator: SubmissionOrchestrator) -> Self {
        Self {
            ui: UiState::default(),
            orchestrator,
            jobs: ControllerJobs::new(),
        }
    }

    /// Drain finished background jobs into UI state. Call once per frame.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
    }

    /// True while any submission is waiting on the service.
    pub fn has_jobs_in_flight(&self) -> bool {
        self.jobs.in_flight() > 0
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }
}
