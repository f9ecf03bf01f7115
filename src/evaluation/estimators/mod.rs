mod estimator;
mod running_mean_estimator;

pub use estimator::Estimator;
pub use running_mean_estimator::RunningMeanEstimator;
