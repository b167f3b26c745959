//! Record assembler — builds one [`OutputRecord`] per document and removes
//! repeated texts.

use std::collections::HashSet;

use crate::config::SpansConfig;
use crate::error::Result;
use crate::normalizer::{normalize_spans, normalize_tokens};
use crate::report::Report;
use crate::types::{AnnotatedItem, IntermediateRecord, MetadataRecord, OutputRecord};

/// Assemble records in document order. Fails on the first
/// [`InvalidSpan`](crate::Error::InvalidSpan) under the `fail` policy.
pub fn assemble(
    items: &[AnnotatedItem],
    report: &Report,
    settings: &SpansConfig,
) -> Result<Vec<OutputRecord>> {
    items
        .iter()
        .map(|item| assemble_one(item, report.join(&item.identifier), settings))
        .collect()
}

/// Build the record for a single document with already-joined metadata.
pub fn assemble_one(
    item: &AnnotatedItem,
    meta: MetadataRecord,
    settings: &SpansConfig,
) -> Result<OutputRecord> {
    let document = &item.document;
    Ok(OutputRecord {
        text: document.text.clone(),
        entities: normalize_spans(&document.spans, &item.entry, settings)?,
        meta,
        tokens: normalize_tokens(&document.tokens),
    })
}

/// Keep the first record for each distinct `text`, preserving order.
pub fn dedupe(records: Vec<OutputRecord>) -> Vec<OutputRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let first = seen.insert(record.text.clone());
            if !first {
                tracing::debug!(text = %record.text, "dropping duplicate text");
            }
            first
        })
        .collect()
}

/// The vendor documents with their joined metadata, in document order.
pub fn intermediate_records(items: &[AnnotatedItem], report: &Report) -> Vec<IntermediateRecord> {
    items
        .iter()
        .map(|item| IntermediateRecord {
            document: item.document.clone(),
            seek_metadata: report.join(&item.identifier),
        })
        .collect()
}
