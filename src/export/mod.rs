//! Filtered CSV export pipeline.
//!
//! Given a snapshot of the inventory and an optional set of filter
//! criteria, select the matching subset, derive a deterministic artifact
//! name from the criteria and the calendar date, serialize the subset in
//! the spreadsheet-locale CSV dialect, and hand the bytes to an artifact
//! sink. Re-running the same criteria on the same day overwrites the same
//! artifact, which makes retries safe.

pub mod criteria;
pub mod csv;
pub mod name;
pub mod sink;

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

use crate::entities::part::Part;

pub use criteria::FilterCriteria;
pub use sink::{ArtifactSink, DirectorySink};

/// The export pipeline, writing artifacts through a sink capability
pub struct Exporter<S: ArtifactSink> {
    sink: S,
}

/// Result of a successful export: where the artifact landed and how many
/// records it holds.
#[derive(Debug)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub selected: usize,
}

impl<S: ArtifactSink> Exporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Export the matching subset of `parts`, dated today.
    ///
    /// Returns the artifact path and the selection count. Never fails on
    /// an empty selection; a header-only document is still a valid extract.
    pub fn export(
        &self,
        parts: &[Part],
        criteria: &FilterCriteria,
    ) -> Result<ExportOutcome, ExportError> {
        self.export_on(parts, criteria, chrono::Local::now().date_naive())
    }

    /// Export with an explicit date, so naming stays a pure function of
    /// (criteria, date) under test.
    pub fn export_on(
        &self,
        parts: &[Part],
        criteria: &FilterCriteria,
        date: NaiveDate,
    ) -> Result<ExportOutcome, ExportError> {
        let selected = criteria.select(parts);
        let file_name = name::artifact_name(criteria, date);
        let document = csv::to_csv(&selected);
        let path = self.sink.write(&file_name, document.as_bytes())?;
        Ok(ExportOutcome {
            path,
            selected: selected.len(),
        })
    }
}

/// Errors surfaced by the export pipeline.
///
/// I/O failures fail the whole call; a partially written file is never
/// reported as a usable artifact. Callers may retry the whole operation.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write artifact '{name}'")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
