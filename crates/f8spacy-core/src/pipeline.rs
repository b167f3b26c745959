//! Pipeline — one conversion run from input files to output files.
//!
//! ```text
//! report ─┐
//!         ├─► join ─► intermediate array ──► figure_eight_results.json
//! archive ┘     │
//!               └─► normalise ─► dedupe ──► spacy_input_transformed.json
//! ```
//!
//! Nothing is written until every document has been assembled, so a failed
//! run leaves the data directory as it found it.

use std::path::{Path, PathBuf};

use crate::archive::read_documents;
use crate::assembler::{assemble, dedupe, intermediate_records};
use crate::config::Config;
use crate::error::Result;
use crate::output::{write_intermediate, write_records};
use crate::report::Report;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both output files were written.
    Written(RunSummary),
    /// The archive held no per-item documents; no file was written.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    /// Records in the final file, after deduplication.
    pub records: usize,
    pub duplicates: usize,
    pub intermediate: PathBuf,
    pub output: PathBuf,
}

/// Convert the bundle at `archive_path` using the report at `report_path`.
/// Output paths come from `config.paths`.
pub fn execute(config: &Config, report_path: &Path, archive_path: &Path) -> Result<RunOutcome> {
    let report = Report::load(report_path, &config.report)?;
    let items = read_documents(archive_path, &config.archive)?;

    if items.is_empty() {
        tracing::warn!(
            archive = %archive_path.display(),
            "archive holds no annotation documents; nothing written"
        );
        return Ok(RunOutcome::Empty);
    }

    let assembled = assemble(&items, &report, &config.spans)?;
    let total = assembled.len();
    let records = dedupe(assembled);
    tracing::info!(
        assembled = total,
        kept = records.len(),
        "assembled training records"
    );

    let intermediate = config.paths.intermediate_path();
    let output = config.paths.output_path();
    write_intermediate(&intermediate, &intermediate_records(&items, &report))?;
    write_records(&output, &records)?;

    Ok(RunOutcome::Written(RunSummary {
        documents: items.len(),
        records: records.len(),
        duplicates: total - records.len(),
        intermediate,
        output,
    }))
}
