//! f8spacy — Figure Eight to spaCy converter.
//!
//! Reads a Figure Eight export bundle (a zip of per-unit annotation JSON) and
//! the matching contributor report, and writes spaCy-style NER training
//! records as newline-delimited JSON. The pipeline layers live in
//! [`f8spacy_core`]; this crate adds the command-line shell.
//!
//! # Architecture
//!
//! ```text
//! Cli ──► Config ──► pipeline::execute ──► RunOutcome ──► exit code
//! ```

pub mod cli;

pub use cli::{init_logging, Cli};
pub use f8spacy_core::pipeline::{RunOutcome, RunSummary};
