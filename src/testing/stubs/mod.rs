mod fixed_stream;

pub use fixed_stream::FixedOutcomeStream;
