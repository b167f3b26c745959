//! Domain-specific assertion macros for f8spacy harnesses.
//!
//! These wrap `pretty_assertions` and say which record broke which output
//! invariant.

/// Assert the `[start, end, label]` triples of an `OutputRecord`.
///
/// ```rust
/// assert_entities!(record, [(0, 4, "ORG"), (11, 23, "PERSON")]);
/// ```
#[macro_export]
macro_rules! assert_entities {
    ($record:expr, [$(($start:expr, $end:expr, $label:expr)),* $(,)?]) => {{
        let record: &f8spacy_core::OutputRecord = &$record;
        let expected: Vec<f8spacy_core::NormalizedSpan> = vec![
            $(f8spacy_core::NormalizedSpan::new($start, $end, $label)),*
        ];
        pretty_assertions::assert_eq!(
            record.entities, expected,
            "entities of record {:?} differ", record.text
        );
    }};
}

/// Assert that a record's metadata is all empty strings.
#[macro_export]
macro_rules! assert_meta_empty {
    ($record:expr) => {{
        let record: &f8spacy_core::OutputRecord = &$record;
        if !record.meta.is_empty() {
            panic!(
                "assert_meta_empty! failed for record {:?}: {:?}",
                record.text, record.meta
            );
        }
    }};
}

/// Assert that no two records share a `text`.
pub fn assert_unique_texts(records: &[f8spacy_core::OutputRecord]) {
    let mut seen = std::collections::HashSet::new();
    for record in records {
        assert!(
            seen.insert(record.text.as_str()),
            "text {:?} appears more than once in output",
            record.text
        );
    }
}
