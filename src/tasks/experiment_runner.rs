use crate::evaluation::{Estimator, MeanCurve, MeanSample, RunningMeanEstimator};
use crate::streams::TrialStream;
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;

/// Drives a trial stream to exhaustion and tracks the running mean.
///
/// After each outcome the current sample is pushed to the curve and, when a
/// progress channel is attached, sent to it before the next outcome is drawn.
/// One runner performs one run; the sample sequence is not restartable.
pub struct ExperimentRunner {
    stream: Box<dyn TrialStream>,
    estimator: RunningMeanEstimator,
    curve: MeanCurve,
    processed: u64,
    progress_tx: Option<Sender<MeanSample>>,
}

impl ExperimentRunner {
    pub fn new(stream: Box<dyn TrialStream>) -> Result<Self, Error> {
        if stream.trials() == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Stream must plan at least one trial",
            ));
        }

        Ok(Self {
            stream,
            estimator: RunningMeanEstimator::default(),
            curve: MeanCurve::default(),
            processed: 0,
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<MeanSample>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Runs the experiment to completion and returns the final mean.
    pub fn run(&mut self) -> Result<f64, Error> {
        while self.stream.has_more_trials() {
            let Some(outcome) = self.stream.next_outcome() else {
                break;
            };
            self.processed += 1;
            self.estimator.add(outcome.value());

            let sample = MeanSample {
                trial_no: self.processed,
                mean: self.estimator.estimation(),
            };
            if let Some(tx) = &self.progress_tx {
                let _ = tx.send(sample);
            }
            self.curve.push(sample);
        }

        self.curve.latest().map(|s| s.mean).ok_or_else(|| {
            Error::new(ErrorKind::InvalidInput, "Stream yielded no outcomes")
        })
    }

    pub fn curve(&self) -> &MeanCurve {
        &self.curve
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }
}
