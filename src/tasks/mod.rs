mod experiment_runner;

pub use experiment_runner::ExperimentRunner;
