use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::streams::trial_stream::{Outcome, TrialStream};

/// Default success probability: a fair coin.
pub const DEFAULT_P: f64 = 0.5;

/// Draws a fixed number of independent Bernoulli(p) outcomes from a seeded RNG.
#[derive(Debug)]
pub struct BernoulliGenerator {
    seed: u64,
    rng: StdRng,
    p: f64,
    trials: u64,
    produced: u64,
}

impl BernoulliGenerator {
    /// Creates a generator with a seed drawn from the thread RNG, so two
    /// generators built this way produce independent sequences.
    pub fn new(p: f64, trials: u64) -> Result<Self, Error> {
        Self::with_seed(p, trials, rand::rng().random::<u64>())
    }

    /// Creates a generator with an explicit seed for reproducible sequences.
    pub fn with_seed(p: f64, trials: u64, seed: u64) -> Result<Self, Error> {
        if trials == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Trial count must be >= 1",
            ));
        }
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Success probability must be in [0.0, 1.0]",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            p,
            trials,
            produced: 0,
        })
    }

    /// Fair-coin generator (`p = 0.5`).
    pub fn fair(trials: u64) -> Result<Self, Error> {
        Self::new(DEFAULT_P, trials)
    }

    #[inline]
    pub fn success_probability(&self) -> f64 {
        self.p
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TrialStream for BernoulliGenerator {
    fn trials(&self) -> u64 {
        self.trials
    }

    fn has_more_trials(&self) -> bool {
        self.produced < self.trials
    }

    fn next_outcome(&mut self) -> Option<Outcome> {
        if !self.has_more_trials() {
            return None;
        }

        self.produced += 1;
        if self.rng.random_bool(self.p) {
            Some(Outcome::Success)
        } else {
            Some(Outcome::Failure)
        }
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes_from(generator: &mut BernoulliGenerator, n: usize) -> Vec<Outcome> {
        (0..n)
            .map(|_| generator.next_outcome().expect("outcome"))
            .collect()
    }

    #[test]
    fn produces_exactly_n_outcomes_then_none() {
        let mut generator = BernoulliGenerator::with_seed(0.5, 25, 42).unwrap();
        for _ in 0..25 {
            assert!(generator.has_more_trials());
            assert!(generator.next_outcome().is_some());
        }
        assert!(!generator.has_more_trials());
        assert!(generator.next_outcome().is_none());
    }

    #[test]
    fn p_zero_yields_only_failures_and_p_one_only_successes() {
        let mut generator = BernoulliGenerator::with_seed(0.0, 50, 7).unwrap();
        assert!(outcomes_from(&mut generator, 50).iter().all(|o| !o.is_success()));

        let mut generator = BernoulliGenerator::with_seed(1.0, 50, 7).unwrap();
        assert!(outcomes_from(&mut generator, 50).iter().all(|o| o.is_success()));
    }

    #[test]
    fn restart_resets_sequence_with_same_seed() {
        let mut generator = BernoulliGenerator::with_seed(0.5, 100, 12345).unwrap();
        let first = outcomes_from(&mut generator, 60);
        generator.restart().unwrap();
        let second = outcomes_from(&mut generator, 60);
        assert_eq!(first, second);
    }

    #[test]
    fn same_seed_same_sequence_across_generators() {
        let mut a = BernoulliGenerator::with_seed(0.5, 40, 99).unwrap();
        let mut b = BernoulliGenerator::with_seed(0.5, 40, 99).unwrap();
        assert_eq!(a.success_probability(), 0.5);
        assert_eq!(a.trials(), 40);
        assert_eq!(outcomes_from(&mut a, 40), outcomes_from(&mut b, 40));
    }

    #[test]
    fn entropy_seeded_generators_are_independent() {
        // 64 fair draws collide with probability 2^-64 for distinct seeds.
        let mut a = BernoulliGenerator::fair(64).unwrap();
        let mut b = BernoulliGenerator::fair(64).unwrap();
        assert_ne!(a.seed(), b.seed());
        assert_ne!(outcomes_from(&mut a, 64), outcomes_from(&mut b, 64));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let err = BernoulliGenerator::new(0.5, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = BernoulliGenerator::new(-0.1, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = BernoulliGenerator::new(1.1, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = BernoulliGenerator::new(f64::NAN, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
