//! Archive reader — yields per-item annotation documents from a Figure Eight
//! export bundle.
//!
//! The bundle is a zip of JSON documents, one per annotated unit, plus
//! vendor-computed aggregate entries which are skipped. Each document's key is
//! taken from a fixed segment of its entry path (see [`extract_identifier`]).

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::config::ArchiveConfig;
use crate::error::{Error, Result};
use crate::types::{AnnotatedItem, RawAnnotationDocument};

/// An opened export bundle.
pub struct AnnotationArchive<R> {
    zip: ZipArchive<R>,
    settings: ArchiveConfig,
}

impl AnnotationArchive<BufReader<File>> {
    /// Open the bundle at `path`.
    pub fn open(path: &Path, settings: ArchiveConfig) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::archive(path.display().to_string(), e))?;
        Self::from_reader(BufReader::new(file), &path.display().to_string(), settings)
    }
}

impl<R: Read + Seek> AnnotationArchive<R> {
    /// Wrap an already-open reader. `name` is only used in error messages.
    pub fn from_reader(reader: R, name: &str, settings: ArchiveConfig) -> Result<Self> {
        let zip = ZipArchive::new(reader).map_err(|e| Error::archive(name, e))?;
        tracing::info!(archive = name, entries = zip.len(), "opened annotation archive");
        Ok(Self { zip, settings })
    }

    /// Lazily parse every per-item document in archive order.
    ///
    /// The first entry that fails to read or parse yields an
    /// [`Error::ArchiveRead`] naming it; callers typically stop there.
    pub fn documents(&mut self) -> Documents<'_, R> {
        Documents {
            zip: &mut self.zip,
            settings: &self.settings,
            next: 0,
        }
    }
}

/// Iterator returned by [`AnnotationArchive::documents`].
pub struct Documents<'a, R> {
    zip: &'a mut ZipArchive<R>,
    settings: &'a ArchiveConfig,
    next: usize,
}

impl<R: Read + Seek> Documents<'_, R> {
    fn read_entry(&mut self, index: usize) -> Result<Option<AnnotatedItem>> {
        let mut file = self
            .zip
            .by_index(index)
            .map_err(|e| Error::archive(format!("#{index}"), e))?;
        let entry = file.name().to_string();

        if file.is_dir() {
            return Ok(None);
        }
        if entry.contains(&self.settings.aggregate_marker) {
            tracing::debug!(entry = %entry, "skipping aggregate entry");
            return Ok(None);
        }

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::archive(entry.as_str(), e))?;
        let document: RawAnnotationDocument =
            serde_json::from_str(&content).map_err(|e| Error::archive(entry.as_str(), e))?;

        let identifier = extract_identifier(&entry, self.settings).ok_or_else(|| {
            Error::archive(
                entry.as_str(),
                format!(
                    "path has no segment {} to take an item id from",
                    self.settings.id_segment
                ),
            )
        })?;

        Ok(Some(AnnotatedItem {
            entry,
            identifier,
            document,
        }))
    }
}

impl<R: Read + Seek> Iterator for Documents<'_, R> {
    type Item = Result<AnnotatedItem>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.zip.len() {
            let index = self.next;
            self.next += 1;
            match self.read_entry(index) {
                Ok(Some(item)) => return Some(Ok(item)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

/// Open the bundle at `path` and parse all of its per-item documents.
pub fn read_documents(path: &Path, settings: &ArchiveConfig) -> Result<Vec<AnnotatedItem>> {
    let mut archive = AnnotationArchive::open(path, settings.clone())?;
    let items = archive.documents().collect::<Result<Vec<_>>>()?;
    tracing::info!(documents = items.len(), "parsed annotation documents");
    Ok(items)
}

/// Take segment `id_segment` of the `/`-separated entry path and return the
/// part before the first `id_delimiter`.
///
/// `job_1/units/batch_a/1790866402_source.json` → `1790866402` with the
/// default settings.
pub fn extract_identifier(entry: &str, settings: &ArchiveConfig) -> Option<String> {
    let segment = entry.split('/').nth(settings.id_segment)?;
    let key = if settings.id_delimiter.is_empty() {
        segment
    } else {
        segment
            .split(settings.id_delimiter.as_str())
            .next()
            .unwrap_or(segment)
    };
    Some(key.to_string())
}
