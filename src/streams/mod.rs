pub mod generators;
mod trial_stream;

pub use trial_stream::{Outcome, TrialStream};
