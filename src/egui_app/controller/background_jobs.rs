use super::jobs::JobMessage;
use super::*;

impl EguiController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::PredictionFinished(result) => self.finish_prediction(result),
                JobMessage::BatchFinished(result) => self.finish_batch(result),
                JobMessage::RetrainingFinished(result) => self.finish_retraining(result),
            }
        }
    }
}
