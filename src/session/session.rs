use crate::evaluation::MeanSample;
use crate::session::error::SessionError;
use crate::session::experiment_log::ExperimentLog;
use crate::session::experiment_record::ExperimentRecord;
use crate::streams::TrialStream;
use crate::streams::generators::{BernoulliGenerator, DEFAULT_P};
use crate::tasks::ExperimentRunner;
use std::sync::mpsc::Sender;

/// Caller-owned state of one interactive session: the success probability in
/// effect and the append-only experiment history.
///
/// Created at session start, mutated only by completed runs, discarded at
/// session end; nothing is persisted across processes.
#[derive(Debug)]
pub struct Session {
    p: f64,
    log: ExperimentLog,
}

impl Session {
    pub fn new(p: f64) -> Result<Self, SessionError> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(SessionError::InvalidArgument(
                "success probability must be in [0.0, 1.0]".into(),
            ));
        }

        Ok(Self {
            p,
            log: ExperimentLog::default(),
        })
    }

    /// Fair-coin session (`p = 0.5`), the observed default.
    pub fn fair() -> Self {
        Self {
            p: DEFAULT_P,
            log: ExperimentLog::default(),
        }
    }

    #[inline]
    pub fn success_probability(&self) -> f64 {
        self.p
    }

    pub fn log(&self) -> &ExperimentLog {
        &self.log
    }

    /// Runs one experiment of `trials` tosses and records its final mean.
    ///
    /// A rejected `trials` emits no samples and leaves the log unchanged.
    pub fn run_experiment(&mut self, trials: u64) -> Result<ExperimentRecord, SessionError> {
        let generator = self.generator(trials)?;
        self.run_stream_inner(Box::new(generator), None)
    }

    /// Like [`run_experiment`], forwarding each running-mean sample through
    /// `tx` as it is produced.
    ///
    /// [`run_experiment`]: Session::run_experiment
    pub fn run_experiment_with_progress(
        &mut self,
        trials: u64,
        tx: Sender<MeanSample>,
    ) -> Result<ExperimentRecord, SessionError> {
        let generator = self.generator(trials)?;
        self.run_stream_inner(Box::new(generator), Some(tx))
    }

    /// Runs an experiment over an externally supplied stream. The recorded
    /// trial count is the number of outcomes the stream actually produced.
    pub fn run_stream(
        &mut self,
        stream: Box<dyn TrialStream>,
    ) -> Result<ExperimentRecord, SessionError> {
        self.run_stream_inner(stream, None)
    }

    fn generator(&self, trials: u64) -> Result<BernoulliGenerator, SessionError> {
        if trials == 0 {
            return Err(SessionError::InvalidArgument(
                "trial count must be >= 1".into(),
            ));
        }
        Ok(BernoulliGenerator::new(self.p, trials)?)
    }

    fn run_stream_inner(
        &mut self,
        stream: Box<dyn TrialStream>,
        tx: Option<Sender<MeanSample>>,
    ) -> Result<ExperimentRecord, SessionError> {
        let mut runner = ExperimentRunner::new(stream)?;
        if let Some(tx) = tx {
            runner = runner.with_progress(tx);
        }
        let mean = runner.run()?;
        self.log.record(runner.processed(), mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedOutcomeStream;
    use std::sync::mpsc;

    #[test]
    fn new_rejects_out_of_range_probability() {
        assert!(matches!(
            Session::new(-0.01).unwrap_err(),
            SessionError::InvalidArgument(_)
        ));
        assert!(matches!(
            Session::new(1.01).unwrap_err(),
            SessionError::InvalidArgument(_)
        ));
        assert!(matches!(
            Session::new(f64::NAN).unwrap_err(),
            SessionError::InvalidArgument(_)
        ));
        assert!(Session::new(0.0).is_ok());
        assert!(Session::new(1.0).is_ok());
    }

    #[test]
    fn fair_session_uses_default_probability() {
        let session = Session::fair();
        assert_eq!(session.success_probability(), DEFAULT_P);
        assert!(session.log().is_empty());
    }

    #[test]
    fn single_trial_run_records_its_only_sample() {
        let mut session = Session::fair();
        let record = session.run_experiment(1).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.trial_count, 1);
        assert!(record.mean == 0.0 || record.mean == 1.0);
        assert_eq!(session.log().snapshot(), &[record]);
    }

    #[test]
    fn successive_runs_accumulate_ordered_history() {
        let mut session = Session::fair();
        session.run_experiment(10).unwrap();
        session.run_experiment(20).unwrap();
        session.run_experiment(30).unwrap();

        let snapshot = session.log().snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(
            snapshot.iter().map(|r| (r.id, r.trial_count)).collect::<Vec<_>>(),
            vec![(1, 10), (2, 20), (3, 30)]
        );
        assert!(snapshot.iter().all(|r| (0.0..=1.0).contains(&r.mean)));
    }

    #[test]
    fn rejected_trial_count_leaves_log_unchanged_and_emits_nothing() {
        let mut session = Session::fair();
        session.run_experiment(5).unwrap();

        let (tx, rx) = mpsc::channel();
        let err = session.run_experiment_with_progress(0, tx).unwrap_err();
        assert!(matches!(err, SessionError::InvalidArgument(_)));
        assert_eq!(session.log().len(), 1);
        assert!(rx.iter().next().is_none());
    }

    #[test]
    fn progress_samples_match_recorded_mean() {
        let mut session = Session::fair();
        let (tx, rx) = mpsc::channel();
        let record = session.run_experiment_with_progress(50, tx).unwrap();

        let samples: Vec<_> = rx.iter().collect();
        assert_eq!(samples.len(), 50);
        assert_eq!(samples.last().unwrap().mean, record.mean);
        assert_eq!(
            samples.iter().map(|s| s.trial_no).collect::<Vec<_>>(),
            (1..=50).collect::<Vec<u64>>()
        );
    }

    #[test]
    fn scripted_stream_records_exact_mean() {
        let mut session = Session::fair();
        let record = session
            .run_stream(Box::new(FixedOutcomeStream::from_bits(&[1, 0, 1, 1])))
            .unwrap();

        assert_eq!(record.trial_count, 4);
        assert_eq!(record.mean, 0.75);
    }

    #[test]
    fn degenerate_probabilities_record_pinned_means() {
        let mut session = Session::new(0.0).unwrap();
        assert_eq!(session.run_experiment(20).unwrap().mean, 0.0);

        let mut session = Session::new(1.0).unwrap();
        assert_eq!(session.run_experiment(20).unwrap().mean, 1.0);
    }
}
