//! Configuration types for f8spacy.
//!
//! [`Config::load`] layers an optional `~/.config/f8spacy/config.toml` (or an
//! explicit file) over the embedded defaults. [`Config::defaults`] returns the
//! same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
data_dir          = "data/raw"
intermediate_file = "figure_eight_results.json"
output_file       = "spacy_input_transformed.json"

[archive]
aggregate_marker = "aggregated"
id_segment       = 3
id_delimiter     = "_"

[report]
delimiter = ","

[spans]
human_annotator = "human"
on_invalid_span = "fail"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub archive: ArchiveConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub spans: SpansConfig,
}

/// `[paths]` section. Input and output file names resolve against `data_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_intermediate_file")]
    pub intermediate_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data/raw") }
fn default_intermediate_file() -> String { "figure_eight_results.json".to_string() }
fn default_output_file() -> String { "spacy_input_transformed.json".to_string() }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            intermediate_file: default_intermediate_file(),
            output_file: default_output_file(),
        }
    }
}

impl PathsConfig {
    pub fn intermediate_path(&self) -> PathBuf {
        self.data_dir.join(&self.intermediate_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }

    /// Resolve a user-supplied input name against `data_dir`. Absolute paths
    /// are returned unchanged.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(name)
    }
}

/// `[archive]` section: how entries are filtered and keyed.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    /// Entries whose name contains this substring are vendor summaries.
    #[serde(default = "default_aggregate_marker")]
    pub aggregate_marker: String,
    /// Zero-based `/`-separated path segment holding the item key.
    #[serde(default = "default_id_segment")]
    pub id_segment: usize,
    /// The key is the part of the segment before the first delimiter.
    #[serde(default = "default_id_delimiter")]
    pub id_delimiter: String,
}

fn default_aggregate_marker() -> String { "aggregated".to_string() }
fn default_id_segment() -> usize { 3 }
fn default_id_delimiter() -> String { "_".to_string() }

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            aggregate_marker: default_aggregate_marker(),
            id_segment: default_id_segment(),
            id_delimiter: default_id_delimiter(),
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_delimiter() -> char { ',' }

impl Default for ReportConfig {
    fn default() -> Self {
        Self { delimiter: default_delimiter() }
    }
}

/// `[spans]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SpansConfig {
    #[serde(default = "default_human_annotator")]
    pub human_annotator: String,
    #[serde(default)]
    pub on_invalid_span: InvalidSpanPolicy,
}

fn default_human_annotator() -> String { "human".to_string() }

impl Default for SpansConfig {
    fn default() -> Self {
        Self {
            human_annotator: default_human_annotator(),
            on_invalid_span: InvalidSpanPolicy::default(),
        }
    }
}

/// What to do with a human span that has no tokens or no `classname`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidSpanPolicy {
    /// Abort the run with [`Error::InvalidSpan`](crate::Error::InvalidSpan).
    #[default]
    Fail,
    /// Drop the span and log a warning.
    Skip,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, then `explicit` if given (it must exist),
    /// otherwise the user config file if present.
    pub fn load(explicit: Option<&Path>) -> crate::Result<Self> {
        let user_file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("f8spacy")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
