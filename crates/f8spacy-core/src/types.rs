//! Core types for f8spacy-core.
//!
//! This module defines the vendor-side shapes read from the archive
//! ([`RawAnnotationDocument`], [`RawSpan`], [`RawToken`]), the report-side
//! [`MetadataRecord`], and the normalised training shapes written out
//! ([`OutputRecord`], [`NormalizedSpan`], [`NormalizedToken`]).

use serde::{Deserialize, Deserializer, Serialize};

/// One per-item annotation document as exported by Figure Eight.
///
/// Only `text`, `spans`, and `tokens` are interpreted. Every other top-level
/// key is kept in `extra` so the intermediate artifact carries the full
/// vendor payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnnotationDocument {
    pub text: String,
    /// Missing or `null` in the source is read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spans: Vec<RawSpan>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tokens: Vec<RawToken>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A labelled run of tokens inside a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpan {
    /// `"human"` for contributor labels; anything else is a machine
    /// pre-annotation. Absent or `null` means not human.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_by: Option<String>,
    /// Only required on human spans; see
    /// [`normalize_spans`](crate::normalizer::normalize_spans).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classname: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tokens: Vec<RawToken>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A vendor token with inclusive character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToken {
    pub text: String,
    #[serde(rename = "startIdx")]
    pub start_idx: usize,
    #[serde(rename = "endIdx")]
    pub end_idx: usize,
}

/// Job metadata joined from the contributor report.
///
/// Either all three fields come from exactly one report row, or all three are
/// empty (see [`MetadataRecord::empty`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub jobid: String,
    pub classid: String,
    pub subclassid: String,
}

impl MetadataRecord {
    /// The record used when an identifier has zero or several report rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.jobid.is_empty() && self.classid.is_empty() && self.subclassid.is_empty()
    }
}

/// A spaCy entity triple: `[start, end, label]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedSpan(pub usize, pub usize, pub String);

impl NormalizedSpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self(start, end, label.into())
    }

    pub fn start(&self) -> usize {
        self.0
    }

    pub fn end(&self) -> usize {
        self.1
    }

    pub fn label(&self) -> &str {
        &self.2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedToken {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl From<&RawToken> for NormalizedToken {
    fn from(token: &RawToken) -> Self {
        Self {
            text: token.text.clone(),
            start: token.start_idx,
            end: token.end_idx,
        }
    }
}

/// One line of the final NDJSON training file.
///
/// Field order is the wire order: `text`, `entities`, `meta`, `tokens`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub text: String,
    pub entities: Vec<NormalizedSpan>,
    pub meta: MetadataRecord,
    pub tokens: Vec<NormalizedToken>,
}

/// A document read from the archive together with its per-item key and the
/// entry it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedItem {
    /// Entry name inside the archive. Unlike `identifier` it is unique, so
    /// span errors report it.
    pub entry: String,
    pub identifier: String,
    pub document: RawAnnotationDocument,
}

/// One element of the intermediate JSON array: the vendor document plus the
/// joined report metadata under `seek_metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateRecord {
    #[serde(flatten)]
    pub document: RawAnnotationDocument,
    pub seek_metadata: MetadataRecord,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
