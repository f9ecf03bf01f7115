use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// A completed experiment: its session-unique number, the trial count used,
/// and the final running mean produced by the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub id: u64,
    pub trial_count: u64,
    pub mean: f64,
}

impl Display for ExperimentRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "no={}, iterations={}, mean={:.6}",
            self.id, self.trial_count, self.mean
        )
    }
}
