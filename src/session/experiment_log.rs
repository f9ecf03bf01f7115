use crate::session::error::SessionError;
use crate::session::experiment_record::ExperimentRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub enum LogFormat {
    Csv,
    Tsv,
    Json,
}

/// Append-only, session-scoped history of completed experiments.
///
/// Ids start at 1 and increase by exactly 1 per record, assigned in creation
/// order; records are never mutated or removed after insertion.
#[derive(Debug)]
pub struct ExperimentLog {
    entries: Vec<ExperimentRecord>,
    next_id: u64,
}

impl ExperimentLog {
    /// Appends a record for a completed run and returns a copy of it.
    ///
    /// All-or-nothing: a rejected `trial_count` leaves the log and the id
    /// counter untouched.
    pub fn record(&mut self, trial_count: u64, mean: f64) -> Result<ExperimentRecord, SessionError> {
        if trial_count == 0 {
            return Err(SessionError::InvalidArgument(
                "trial count must be >= 1".into(),
            ));
        }

        let record = ExperimentRecord {
            id: self.next_id,
            trial_count,
            mean,
        };
        self.next_id += 1;
        self.entries.push(record);
        Ok(record)
    }

    /// All records appended so far, in insertion order.
    pub fn snapshot(&self) -> &[ExperimentRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<ExperimentRecord> {
        self.entries.last().copied()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: LogFormat) -> Result<(), SessionError> {
        match fmt {
            LogFormat::Csv => self.export_with_delimiter(path, ','),
            LogFormat::Tsv => self.export_with_delimiter(path, '\t'),
            LogFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(
        &self,
        path: P,
        delimiter: char,
    ) -> Result<(), SessionError> {
        let mut w = File::create(path)?;
        writeln!(w, "no{d}iterations{d}mean", d = delimiter)?;
        for r in &self.entries {
            writeln!(
                w,
                "{}{d}{}{d}{:.12}",
                r.id,
                r.trial_count,
                r.mean,
                d = delimiter
            )?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), SessionError> {
        let mut w = File::create(path)?;
        serde_json::to_writer_pretty(&mut w, &self.entries)
            .map_err(|e| SessionError::Io(e.into()))?;
        writeln!(w)?;
        Ok(())
    }
}

impl Default for ExperimentLog {
    fn default() -> Self {
        Self {
            entries: vec![],
            next_id: 1,
        }
    }
}
