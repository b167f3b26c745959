//! f8spacy-core — Figure Eight to spaCy conversion library.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Archive ──► Report join ──► Normalizer ──► Assembler ──► Output
//!    │                                                       ▲
//!    └──────────────── intermediate artifact ────────────────┘
//! ```
//!
//! Everything runs on the calling thread. [`pipeline::execute`] wires the
//! layers together for one run.

pub mod archive;
pub mod assembler;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    AnnotatedItem, IntermediateRecord, MetadataRecord, NormalizedSpan, NormalizedToken,
    OutputRecord, RawAnnotationDocument, RawSpan, RawToken,
};
