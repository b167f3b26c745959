//! Contributor report — the tabular export that carries job metadata per unit,
//! and the join from an item key to its [`MetadataRecord`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::config::ReportConfig;
use crate::error::{Error, Result};
use crate::types::MetadataRecord;

const REQUIRED_COLUMNS: [&str; 4] = ["id", "jobid", "classid", "subclassid"];

/// The columns of one report row that the join uses. Other columns are
/// ignored. Cells are kept as the raw strings from the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportRow {
    pub id: String,
    pub jobid: String,
    pub classid: String,
    pub subclassid: String,
}

/// A loaded report, indexed by `id`.
#[derive(Debug, Default)]
pub struct Report {
    rows: Vec<ReportRow>,
    /// `Some(row)` for ids seen once, `None` for ids seen more than once.
    index: HashMap<String, Option<usize>>,
    skipped: usize,
}

impl Report {
    /// Read the report at `path`.
    pub fn load(path: &Path, settings: &ReportConfig) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::ReportParse(format!("{}: {e}", path.display())))?;
        let report = Self::from_reader(file, settings)?;
        tracing::info!(
            path = %path.display(),
            rows = report.len(),
            skipped = report.skipped(),
            "loaded contributor report"
        );
        Ok(report)
    }

    /// Parse a delimited report with a header row.
    ///
    /// A missing required column or an unreadable stream fails the whole
    /// read. Rows that do not parse are skipped with a warning.
    pub fn from_reader<R: Read>(reader: R, settings: &ReportConfig) -> Result<Self> {
        let delimiter = u8::try_from(settings.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                Error::ReportParse(format!(
                    "delimiter {:?} is not a single ASCII character",
                    settings.delimiter
                ))
            })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ReportParse(e.to_string()))?
            .clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(Error::ReportParse(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let mut rows = Vec::new();
        let mut skipped = 0;
        for result in reader.deserialize::<ReportRow>() {
            match result {
                Ok(row) => rows.push(row),
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                    return Err(Error::ReportParse(e.to_string()));
                }
                Err(e) => {
                    let line = e.position().map(|p| p.line());
                    tracing::warn!(?line, error = %e, "skipping malformed report row");
                    skipped += 1;
                }
            }
        }

        let mut report = Self::from_rows(rows);
        report.skipped = skipped;
        Ok(report)
    }

    /// Build a report from already-parsed rows.
    pub fn from_rows(rows: Vec<ReportRow>) -> Self {
        let mut index: HashMap<String, Option<usize>> = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            index
                .entry(row.id.clone())
                .and_modify(|slot| *slot = None)
                .or_insert(Some(position));
        }
        Self {
            rows,
            index,
            skipped: 0,
        }
    }

    /// Metadata for `identifier`, compared as a string against each row's
    /// `id`. Zero or several matching rows give [`MetadataRecord::empty`].
    pub fn join(&self, identifier: &str) -> MetadataRecord {
        match self.index.get(identifier) {
            Some(Some(position)) => {
                let row = &self.rows[*position];
                MetadataRecord {
                    jobid: row.jobid.clone(),
                    classid: row.classid.clone(),
                    subclassid: row.subclassid.clone(),
                }
            }
            Some(None) => {
                tracing::debug!(identifier, "several report rows match; metadata left empty");
                MetadataRecord::empty()
            }
            None => {
                tracing::debug!(identifier, "no report row matches; metadata left empty");
                MetadataRecord::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows dropped while parsing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
