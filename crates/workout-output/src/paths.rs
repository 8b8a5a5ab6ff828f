use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Locations of the two output views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub full: PathBuf,
    pub clean: PathBuf,
}

impl OutputPaths {
    /// `<prefix>_full.csv` and `<prefix>_clean.csv`.
    ///
    /// The suffix is appended to the last path component as-is, so a prefix
    /// of `out/week.1` gives `out/week.1_full.csv`.
    pub fn from_prefix(prefix: &Path) -> Self {
        Self {
            full: with_suffix(prefix, "_full.csv"),
            clean: with_suffix(prefix, "_clean.csv"),
        }
    }
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(prefix.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}
