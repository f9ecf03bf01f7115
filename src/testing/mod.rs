mod stubs;

pub use stubs::FixedOutcomeStream;
