use crate::evaluation::estimators::Estimator;

/// Streaming mean over 0/1 trial outcomes: `mean = successes / trials`.
///
/// Counters are kept as integers so the mean after k trials is exactly the
/// success count over the first k outcomes divided by k.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunningMeanEstimator {
    trials: u64,
    successes: u64,
}

impl RunningMeanEstimator {
    #[inline]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    #[inline]
    pub fn successes(&self) -> u64 {
        self.successes
    }
}

impl Estimator for RunningMeanEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.trials += 1;
        if v != 0.0 {
            self.successes += 1;
        }
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.trials > 0 {
            self.successes as f64 / self.trials as f64
        } else {
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_estimator_is_nan() {
        let e = RunningMeanEstimator::default();
        assert!(e.estimation().is_nan());
        assert_eq!(e.trials(), 0);
        assert_eq!(e.successes(), 0);
    }

    #[test]
    fn mean_is_exact_ratio_of_counters() {
        let mut e = RunningMeanEstimator::default();
        for v in [1.0, 0.0, 1.0, 1.0] {
            e.add(v);
        }
        assert_eq!(e.trials(), 4);
        assert_eq!(e.successes(), 3);
        assert_eq!(e.estimation(), 0.75);
    }

    #[test]
    fn nan_observations_are_ignored() {
        let mut e = RunningMeanEstimator::default();
        e.add(1.0);
        e.add(f64::NAN);
        assert_eq!(e.trials(), 1);
        assert_eq!(e.estimation(), 1.0);
    }

    #[test]
    fn first_observation_gives_zero_or_one() {
        let mut e = RunningMeanEstimator::default();
        e.add(0.0);
        assert_eq!(e.estimation(), 0.0);

        let mut e = RunningMeanEstimator::default();
        e.add(1.0);
        assert_eq!(e.estimation(), 1.0);
    }
}
