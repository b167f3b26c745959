//! Normalizer — projects vendor spans and tokens into spaCy offsets.
//!
//! Only human-annotated spans survive. A span's offsets run from its first
//! token's `startIdx` to its last token's `endIdx`; single-token spans follow
//! the same rule.

use crate::config::{InvalidSpanPolicy, SpansConfig};
use crate::error::{Error, Result};
use crate::types::{NormalizedSpan, NormalizedToken, RawSpan, RawToken};

/// Normalise the spans of one document, preserving input order.
///
/// `entry` is the archive entry of the document, used in
/// [`Error::InvalidSpan`] and in logs. Non-human spans are dropped without
/// looking at their label or tokens. A human span with no tokens or no
/// `classname` is handled according to [`SpansConfig::on_invalid_span`].
pub fn normalize_spans(
    spans: &[RawSpan],
    entry: &str,
    settings: &SpansConfig,
) -> Result<Vec<NormalizedSpan>> {
    let mut normalized = Vec::with_capacity(spans.len());

    for (span_index, span) in spans.iter().enumerate() {
        if span.annotated_by.as_deref() != Some(settings.human_annotator.as_str()) {
            continue;
        }
        let checked = match (span_bounds(span), span.classname.as_deref()) {
            (None, _) => Err("has no tokens"),
            (_, None) => Err("has no classname"),
            (Some((start, end)), Some(label)) => Ok(NormalizedSpan::new(start, end, label)),
        };
        match (checked, settings.on_invalid_span) {
            (Ok(span), _) => normalized.push(span),
            (Err(reason), InvalidSpanPolicy::Fail) => {
                return Err(Error::InvalidSpan {
                    entry: entry.to_string(),
                    span_index,
                    reason,
                })
            }
            (Err(reason), InvalidSpanPolicy::Skip) => {
                tracing::warn!(entry, span_index, reason, "skipping invalid span");
            }
        }
    }

    Ok(normalized)
}

/// `(first.startIdx, last.endIdx)`, or `None` when the span has no tokens.
pub fn span_bounds(span: &RawSpan) -> Option<(usize, usize)> {
    let first = span.tokens.first()?;
    let last = span.tokens.last()?;
    Some((first.start_idx, last.end_idx))
}

/// One-to-one projection of vendor tokens.
pub fn normalize_tokens(tokens: &[RawToken]) -> Vec<NormalizedToken> {
    tokens.iter().map(NormalizedToken::from).collect()
}
