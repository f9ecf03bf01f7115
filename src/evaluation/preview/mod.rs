mod mean_curve;
mod sample;

pub use mean_curve::MeanCurve;
pub use sample::MeanSample;
