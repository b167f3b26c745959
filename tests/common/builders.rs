//! Test builders — ergonomic constructors for vendor spans, tokens, and items.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use f8spacy_core::{AnnotatedItem, RawAnnotationDocument, RawSpan, RawToken};

pub fn token(text: &str, start: usize, end: usize) -> RawToken {
    RawToken {
        text: text.to_string(),
        start_idx: start,
        end_idx: end,
    }
}

pub fn span(annotated_by: &str, classname: &str, tokens: Vec<RawToken>) -> RawSpan {
    loose_span(Some(annotated_by), Some(classname), tokens)
}

/// A span whose annotator or label may be missing, as some exports have.
pub fn loose_span(
    annotated_by: Option<&str>,
    classname: Option<&str>,
    tokens: Vec<RawToken>,
) -> RawSpan {
    RawSpan {
        annotated_by: annotated_by.map(str::to_string),
        classname: classname.map(str::to_string),
        tokens,
        extra: Default::default(),
    }
}

pub fn human(classname: &str, tokens: Vec<RawToken>) -> RawSpan {
    span("human", classname, tokens)
}

pub fn machine(classname: &str, tokens: Vec<RawToken>) -> RawSpan {
    span("machine", classname, tokens)
}

/// Split `text` on single spaces into tokens with `[start, end)` offsets.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    for word in text.split(' ') {
        tokens.push(token(word, offset, offset + word.len()));
        offset += word.len() + 1;
    }
    tokens
}

/// Fluent builder for [`AnnotatedItem`] fixtures.
pub struct ItemBuilder {
    identifier: String,
    text: String,
    spans: Vec<RawSpan>,
    tokens: Vec<RawToken>,
}

impl ItemBuilder {
    pub fn new(identifier: &str, text: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            text: text.to_string(),
            spans: Vec::new(),
            tokens: Vec::new(),
        }
    }

    pub fn span(mut self, span: RawSpan) -> Self {
        self.spans.push(span);
        self
    }

    pub fn tokenized(mut self) -> Self {
        self.tokens = tokenize(&self.text);
        self
    }

    pub fn build(self) -> AnnotatedItem {
        AnnotatedItem {
            entry: format!("f8_job/json/units/{}_unit.json", self.identifier),
            identifier: self.identifier,
            document: RawAnnotationDocument {
                text: self.text,
                spans: self.spans,
                tokens: self.tokens,
                extra: Default::default(),
            },
        }
    }
}
