mod error;
mod experiment_log;
mod experiment_record;
mod session;

pub use error::SessionError;
pub use experiment_log::{ExperimentLog, LogFormat};
pub use experiment_record::ExperimentRecord;
pub use session::Session;
