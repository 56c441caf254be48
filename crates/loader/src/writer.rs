use crate::error::LoaderError;
use indexmap::IndexMap;
use indices::CompanyIndexSeries;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Computed index series, keyed by company code, in statement-book order.
pub type IndexDocument = IndexMap<String, CompanyIndexSeries>;

/// Writes the index document, creating parent directories as needed.
pub fn write_index_document(
    path: &Path,
    document: &IndexDocument,
    pretty: bool,
) -> Result<(), LoaderError> {
    let io_error = |source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, document)
    } else {
        serde_json::to_writer(&mut writer, document)
    };
    written.map_err(|source| LoaderError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    tracing::info!(path = %path.display(), companies = document.len(), "Wrote index document.");
    Ok(())
}

/// Reads back an index document written by `write_index_document`.
pub fn read_index_document(path: &Path) -> Result<IndexDocument, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoaderError::Json {
        path: path.to_path_buf(),
        source,
    })
}
