mod estimators;
mod preview;

pub use estimators::{Estimator, RunningMeanEstimator};
pub use preview::{MeanCurve, MeanSample};
