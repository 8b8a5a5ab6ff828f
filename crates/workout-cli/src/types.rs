use std::path::PathBuf;

use workout_model::FlatRow;

/// Per-file counters shown in the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub source_file: String,
    pub path: PathBuf,
    /// Data rows kept after forward fill.
    pub rows_read: usize,
    /// Rows dropped because they precede the first exercise name.
    pub skipped_rows: usize,
    pub date_columns: usize,
    pub cells_seen: usize,
    pub empty_cells: usize,
    pub flat_rows: usize,
}

/// Result of flattening a batch of input files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenRun {
    pub files: Vec<FileSummary>,
    /// Merged rows of every file.
    pub rows: Vec<FlatRow>,
}

impl FlattenRun {
    pub fn total_rows_read(&self) -> usize {
        self.files.iter().map(|file| file.rows_read).sum()
    }

    pub fn total_skipped_rows(&self) -> usize {
        self.files.iter().map(|file| file.skipped_rows).sum()
    }

    pub fn total_cells_seen(&self) -> usize {
        self.files.iter().map(|file| file.cells_seen).sum()
    }

    pub fn total_empty_cells(&self) -> usize {
        self.files.iter().map(|file| file.empty_cells).sum()
    }
}
