use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lenta_shared::models::TabularRow;
use serde::Serialize;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> ExportError + '_ {
    move |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).map_err(io_error(dir)),
        _ => Ok(()),
    }
}

/// Writes `rows` as CSV with the row type's header, even when `rows` is
/// empty. Returns the number of data rows written.
pub fn write_table<T: TabularRow>(path: &Path, rows: &[T]) -> Result<usize, ExportError> {
    ensure_parent(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error(path))?;

    writer.write_record(T::HEADERS).map_err(csv_error(path))?;
    for row in rows {
        writer.serialize(row).map_err(csv_error(path))?;
    }
    writer.flush().map_err(io_error(path))?;

    info!(path = %path.display(), rows = rows.len(), "Saved table");
    Ok(rows.len())
}

/// Writes `value` as pretty-printed UTF-8 JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    ensure_parent(path)?;

    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_error(path))?;
    writer.flush().map_err(io_error(path))?;

    info!(path = %path.display(), "Saved JSON");
    Ok(())
}
