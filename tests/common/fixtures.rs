//! Static vendor payloads and helpers that lay out a data directory.
//!
//! Entry paths follow the Figure Eight bundle layout, where the fourth
//! path segment starts with the unit id: `<job>/json/units/<id>_unit.json`.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Unit 1790866402: two human spans, one machine span.
pub const DOC_ACME: &str = r#"{
  "text": "Acme hired Ada Lovelace",
  "unit_id": 1790866402,
  "spans": [
    {"annotated_by": "human", "classname": "ORG",
     "tokens": [{"text": "Acme", "startIdx": 0, "endIdx": 4}]},
    {"annotated_by": "machine", "classname": "ORG",
     "tokens": [{"text": "hired", "startIdx": 5, "endIdx": 10}]},
    {"annotated_by": "human", "classname": "PERSON",
     "tokens": [{"text": "Ada", "startIdx": 11, "endIdx": 14},
                {"text": "Lovelace", "startIdx": 15, "endIdx": 23}]}
  ],
  "tokens": [
    {"text": "Acme", "startIdx": 0, "endIdx": 4},
    {"text": "hired", "startIdx": 5, "endIdx": 10},
    {"text": "Ada", "startIdx": 11, "endIdx": 14},
    {"text": "Lovelace", "startIdx": 15, "endIdx": 23}
  ]
}"#;

/// Unit 1790866403: no spans, tokens present.
pub const DOC_OSLO: &str = r#"{
  "text": "Snow in Oslo",
  "spans": null,
  "tokens": [
    {"text": "Snow", "startIdx": 0, "endIdx": 4},
    {"text": "in", "startIdx": 5, "endIdx": 7},
    {"text": "Oslo", "startIdx": 8, "endIdx": 12}
  ]
}"#;

/// Unit 1790866404: same text as [`DOC_ACME`], different unit.
pub const DOC_ACME_AGAIN: &str = r#"{
  "text": "Acme hired Ada Lovelace",
  "spans": [],
  "tokens": []
}"#;

/// Unit 1790866402 as some exports ship it: a `null` annotator and a machine
/// span without a label.
pub const DOC_LOOSE_SPANS: &str = r#"{
  "text": "Acme hired Ada Lovelace",
  "spans": [
    {"annotated_by": null, "classname": "ORG",
     "tokens": [{"text": "Acme", "startIdx": 0, "endIdx": 4}]},
    {"annotated_by": "machine",
     "tokens": [{"text": "hired", "startIdx": 5, "endIdx": 10}]},
    {"annotated_by": "human", "classname": "PERSON",
     "tokens": [{"text": "Ada", "startIdx": 11, "endIdx": 14},
                {"text": "Lovelace", "startIdx": 15, "endIdx": 23}]}
  ],
  "tokens": []
}"#;

/// A human span with no tokens.
pub const DOC_EMPTY_SPAN: &str = r#"{
  "text": "Nothing here",
  "spans": [{"annotated_by": "human", "classname": "ORG", "tokens": []}],
  "tokens": [{"text": "Nothing", "startIdx": 0, "endIdx": 7}]
}"#;

pub const AGGREGATE: &str = r#"{"units": 3, "agreement": 0.82}"#;

/// Report with one row per unit, except 1790866405 which appears twice.
pub const REPORT_CSV: &str = "\
id,jobid,classid,subclassid,worker_trust
1790866402,900,3,31,0.9
1790866403,900,4,41,0.8
1790866404,901,5,51,0.7
1790866405,902,6,61,0.6
1790866405,903,7,71,0.5
";

pub fn unit_path(id: &str) -> String {
    format!("f8_job_1790/json/units/{id}_unit.json")
}

pub const AGGREGATE_PATH: &str = "f8_job_1790/json/aggregated/aggregated_results.json";

/// Build an in-memory zip. Names ending in `/` become directory entries.
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, body) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// The standard bundle: a directory entry, an aggregate, and three units.
pub fn standard_entries() -> Vec<(String, &'static str)> {
    vec![
        ("f8_job_1790/json/units/".to_string(), ""),
        (AGGREGATE_PATH.to_string(), AGGREGATE),
        (unit_path("1790866402"), DOC_ACME),
        (unit_path("1790866403"), DOC_OSLO),
        (unit_path("1790866404"), DOC_ACME_AGAIN),
    ]
}

/// A data directory holding `report.csv` and `bundle.zip`.
pub struct DataDir {
    pub dir: tempfile::TempDir,
}

impl DataDir {
    pub fn new(report: &str, entries: &[(String, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("report.csv"), report).unwrap();
        let borrowed: Vec<(&str, &str)> = entries.iter().map(|(n, b)| (n.as_str(), *b)).collect();
        std::fs::write(dir.path().join("bundle.zip"), zip_bytes(&borrowed)).unwrap();
        Self { dir }
    }

    pub fn standard() -> Self {
        Self::new(REPORT_CSV, &standard_entries())
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn report(&self) -> PathBuf {
        self.path().join("report.csv")
    }

    pub fn bundle(&self) -> PathBuf {
        self.path().join("bundle.zip")
    }

    pub fn intermediate(&self) -> PathBuf {
        self.path().join("figure_eight_results.json")
    }

    pub fn output(&self) -> PathBuf {
        self.path().join("spacy_input_transformed.json")
    }

    /// Default config pointed at this directory.
    pub fn config(&self) -> f8spacy_core::config::Config {
        let mut config = f8spacy_core::config::Config::defaults();
        config.paths.data_dir = self.path().to_path_buf();
        config
    }
}
