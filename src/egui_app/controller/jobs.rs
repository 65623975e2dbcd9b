use crate::form::PredictionForm;
use crate::orchestrator::SubmissionOrchestrator;
use crate::prediction_api::{
    BatchPredictionResult, PredictionResult, RetrainingResponse, SubmitError,
};
use std::{
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(Result<PredictionResult, SubmitError>),
    BatchFinished(Result<BatchPredictionResult, SubmitError>),
    RetrainingFinished(Result<RetrainingResponse, SubmitError>),
}

/// Background submission threads and the channel they report on.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    in_flight: usize,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = mpsc::channel();
        Self {
            message_tx,
            message_rx,
            in_flight: 0,
        }
    }

    pub(super) fn try_recv_message(&mut self) -> Result<JobMessage, TryRecvError> {
        let message = self.message_rx.try_recv()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Ok(message)
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(super) fn begin_prediction(
        &mut self,
        orchestrator: SubmissionOrchestrator,
        form: PredictionForm,
    ) {
        self.spawn(move || JobMessage::PredictionFinished(orchestrator.submit(&form)));
    }

    pub(super) fn begin_batch(&mut self, orchestrator: SubmissionOrchestrator, path: PathBuf) {
        self.spawn(move || JobMessage::BatchFinished(orchestrator.submit_batch(&path)));
    }

    pub(super) fn begin_retraining(
        &mut self,
        orchestrator: SubmissionOrchestrator,
        path: PathBuf,
    ) {
        self.spawn(move || JobMessage::RetrainingFinished(orchestrator.submit_retraining(&path)));
    }

    fn spawn(&mut self, job: impl FnOnce() -> JobMessage + Send + 'static) {
        self.in_flight += 1;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(job());
        });
    }
}
