//! Input path checks.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Verify every input exists before any of them is parsed.
///
/// Returns the first missing path as [`IngestError::FileNotFound`].
pub fn verify_inputs(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        if !path.exists() {
            return Err(IngestError::FileNotFound { path: path.clone() });
        }
    }
    Ok(())
}

/// Name recorded as `source_file` for rows read from `path`.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), ToString::to_string)
}
