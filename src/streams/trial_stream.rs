use std::io::Error;

/// Result of a single Bernoulli trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Numeric value of the outcome (0.0 or 1.0), the form consumed by
    /// mean estimators.
    #[inline]
    pub fn value(self) -> f64 {
        if self.is_success() { 1.0 } else { 0.0 }
    }
}

/// Pull-based interface for finite streams of trial outcomes.
///
/// Implementations may draw outcomes from a random source (e.g., a seeded
/// Bernoulli generator) or replay a scripted sequence. A stream plans a fixed
/// number of trials, yields them one at a time, and is exhausted afterwards.
pub trait TrialStream {
    /// Returns the total number of trials this stream will produce.
    ///
    /// The value must remain constant for the lifetime of the stream and be
    /// at least 1 for any stream accepted by a runner.
    fn trials(&self) -> u64;

    /// Indicates whether the stream *may* produce more outcomes.
    ///
    /// This call should be cheap and side effect free. If it returns `false`,
    /// a subsequent call to [`next_outcome`] must return `None`.
    ///
    /// [`next_outcome`]: TrialStream::next_outcome
    fn has_more_trials(&self) -> bool;

    /// Produces the next trial outcome, or `None` if the stream is exhausted.
    ///
    /// Outcomes must be drawn lazily: each call performs exactly one draw, so
    /// a caller observing outcome k has no information about outcome k+1.
    fn next_outcome(&mut self) -> Option<Outcome>;

    /// Resets the stream to its initial state.
    ///
    /// For random generators this re-seeds the RNG with the original seed and
    /// clears internal counters, reproducing the same sequence; for scripted
    /// streams it rewinds to the first outcome.
    fn restart(&mut self) -> Result<(), Error>;
}
