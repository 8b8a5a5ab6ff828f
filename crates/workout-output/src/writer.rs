//! Atomic CSV view writing.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;
use workout_model::FlatRow;

use crate::error::{OutputError, Result};
use crate::paths::OutputPaths;
use crate::records::{CleanRecord, FullRecord};

/// Write the full and clean views of `rows`, in the given order.
///
/// With no rows both files are still created, zero bytes long.
pub fn write_views(rows: &[FlatRow], paths: &OutputPaths) -> Result<()> {
    let full = render_full(rows, &paths.full)?;
    write_atomic(&paths.full, &full)?;
    info!(path = %paths.full.display(), row_count = rows.len(), "wrote full view");

    let clean = render_clean(rows, &paths.clean)?;
    write_atomic(&paths.clean, &clean)?;
    info!(path = %paths.clean.display(), row_count = rows.len(), "wrote clean view");
    Ok(())
}

/// Encode the full view. `path` is only used in errors.
pub fn render_full(rows: &[FlatRow], path: &Path) -> Result<Vec<u8>> {
    encode(rows.iter().map(FullRecord::from), path)
}

/// Encode the clean view. `path` is only used in errors.
pub fn render_clean(rows: &[FlatRow], path: &Path) -> Result<Vec<u8>> {
    encode(rows.iter().map(CleanRecord::from), path)
}

fn encode<I, T>(records: I, path: &Path) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    // The header is emitted with the first record, so no rows means no bytes.
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record).map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.into_inner().map_err(|error| OutputError::Io {
        operation: "flush",
        path: path.to_path_buf(),
        source: error.into_error(),
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("csv.tmp");

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|source| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source,
    })?;
    file.write_all(bytes).map_err(|source| OutputError::Io {
        operation: "write",
        path: temp_path.clone(),
        source,
    })?;
    file.sync_all().map_err(|source| OutputError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source,
    })
}
