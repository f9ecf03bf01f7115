pub mod evaluation;
pub mod session;
pub mod streams;
pub mod tasks;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
