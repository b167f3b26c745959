//! Output writers for the intermediate JSON array and the final NDJSON file.
//!
//! Both files are written to a temporary file next to the destination and
//! renamed into place, so a failed run never leaves a truncated output. The
//! renamed file keeps the mode of the file it replaces, or gets the mode a
//! plain create under the current umask would give.

use std::fs::{File, OpenOptions, Permissions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::types::{IntermediateRecord, OutputRecord};

/// Write `records` as a single compact JSON array.
pub fn write_intermediate(path: &Path, records: &[IntermediateRecord]) -> Result<()> {
    write_atomically(path, |writer| {
        serde_json::to_writer(&mut *writer, records).map_err(|e| Error::Json {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote intermediate file");
    Ok(())
}

/// Write `records` as newline-delimited JSON, one record per line.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<()> {
    write_atomically(path, |writer| write_ndjson(writer, records, path))?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote training records");
    Ok(())
}

/// Read back an NDJSON file written by [`write_records`]. Blank lines are
/// ignored.
pub fn read_records(path: &Path) -> Result<Vec<OutputRecord>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| Error::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Serialise one value per line to `writer`.
pub fn write_ndjson<W: Write, T: Serialize>(
    writer: &mut W,
    values: &[T],
    path: &Path,
) -> Result<()> {
    for value in values {
        serde_json::to_writer(&mut *writer, value).map_err(|e| Error::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        writer.write_all(b"\n").map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    {
        let mut writer = BufWriter::new(&mut tmp);
        write(&mut writer)?;
        writer.flush().map_err(|e| Error::io(path, e))?;
    }

    let (permissions, placeholder) = match std::fs::metadata(path) {
        Ok(existing) => (existing.permissions(), false),
        Err(_) => (plain_create_permissions(path)?, true),
    };
    tmp.as_file()
        .set_permissions(permissions)
        .map_err(|e| Error::io(path, e))?;

    if let Err(e) = tmp.persist(path) {
        if placeholder {
            let _ = std::fs::remove_file(path);
        }
        return Err(Error::io(path, e.error));
    }
    Ok(())
}

/// Create an empty file at `path` the ordinary way and report its mode. The
/// temp file is renamed over it right after.
fn plain_create_permissions(path: &Path) -> Result<Permissions> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    let permissions = file
        .metadata()
        .map_err(|e| Error::io(path, e))?
        .permissions();
    Ok(permissions)
}
