use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Running mean observed after the `trial_no`-th outcome of a run (1-indexed).
///
/// The sequence of samples is ordered by `trial_no` but the `mean` values are
/// not themselves monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanSample {
    pub trial_no: u64,
    pub mean: f64,
}

impl Display for MeanSample {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "trial={}, mean={:.6}", self.trial_no, self.mean)
    }
}
