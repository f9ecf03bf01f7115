mod bernoulli_generator;

pub use bernoulli_generator::{BernoulliGenerator, DEFAULT_P};
