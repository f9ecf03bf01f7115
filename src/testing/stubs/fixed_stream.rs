use crate::streams::{Outcome, TrialStream};
use std::io::Error;

/// Scripted trial stream for deterministic tests.
pub struct FixedOutcomeStream {
    outcomes: Vec<Outcome>,
    idx: usize,
}

impl FixedOutcomeStream {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes, idx: 0 }
    }

    /// Builds a stream from 0/1 bits, any nonzero bit counting as a success.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self::new(
            bits.iter()
                .map(|&b| if b != 0 { Outcome::Success } else { Outcome::Failure })
                .collect(),
        )
    }
}

impl TrialStream for FixedOutcomeStream {
    fn trials(&self) -> u64 {
        self.outcomes.len() as u64
    }

    fn has_more_trials(&self) -> bool {
        self.idx < self.outcomes.len()
    }

    fn next_outcome(&mut self) -> Option<Outcome> {
        if !self.has_more_trials() {
            return None;
        }

        let outcome = self.outcomes[self.idx];
        self.idx += 1;
        Some(outcome)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
