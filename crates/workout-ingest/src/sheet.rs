//! Wide workout sheet loading.
//!
//! The first column names the exercise and is blank on continuation rows;
//! every column whose header is a `YYYY.MM.DD` date holds one cell per set.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::dates::{looks_like_date_header, parse_date_header};
use crate::discovery::source_name;
use crate::error::{IngestError, Result};

/// A recognized date column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateColumn {
    /// Position in the source row.
    pub index: usize,
    pub header: String,
    pub date: NaiveDate,
}

/// One data row with its exercise filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based record number within the file, excluding the header.
    pub record: usize,
    pub exercise: String,
    /// 1-based position inside the contiguous block of rows sharing `exercise`.
    pub set_row: usize,
    /// Raw cell text, padded to the header width.
    pub cells: Vec<String>,
}

impl SheetRow {
    /// Raw text of the cell under `column`; empty when the row is short.
    pub fn cell(&self, column: &DateColumn) -> &str {
        self.cells.get(column.index).map_or("", String::as_str)
    }
}

/// A loaded sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// File name recorded on every output row.
    pub source_name: String,
    pub headers: Vec<String>,
    pub date_columns: Vec<DateColumn>,
    pub rows: Vec<SheetRow>,
    /// Rows dropped because no exercise had been named yet.
    pub skipped_rows: usize,
}

impl Sheet {
    /// Header of the exercise column (the first column).
    pub fn exercise_header(&self) -> &str {
        self.headers.first().map_or("", String::as_str)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Decode one field, replacing invalid UTF-8 with U+FFFD.
fn decode_field(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

/// Collect the columns whose header is a valid `YYYY.MM.DD` date.
///
/// The exercise column is never a date column.
pub fn detect_date_columns(headers: &[String]) -> Vec<DateColumn> {
    let mut columns = Vec::new();
    for (index, header) in headers.iter().enumerate().skip(1) {
        match parse_date_header(header) {
            Some(date) => columns.push(DateColumn {
                index,
                header: header.clone(),
                date,
            }),
            None if looks_like_date_header(header) => {
                debug!(header = %header, "date column has an impossible date; ignored");
            }
            None => {}
        }
    }
    columns
}

/// Forward-fill exercise names: a blank value repeats the last non-blank one.
///
/// Values before the first non-blank entry stay `None`.
pub fn forward_fill(values: &[&str]) -> Vec<Option<String>> {
    let mut current: Option<String> = None;
    values
        .iter()
        .map(|value| {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                current = Some(trimmed.to_string());
            }
            current.clone()
        })
        .collect()
}

/// 1-based position of every value within its run of equal neighbours.
pub fn block_positions<T: PartialEq>(values: &[T]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        let position = match idx.checked_sub(1).and_then(|prev| values.get(prev)) {
            Some(previous) if previous == value => positions.last().copied().unwrap_or(0) + 1,
            _ => 1,
        };
        positions.push(position);
    }
    positions
}

/// Read a workout sheet from a CSV file.
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    read_sheet_from_reader(file, &source_name(path), path)
}

/// Read a workout sheet from any reader. `path` is only used in errors.
pub fn read_sheet_from_reader<R: Read>(reader: R, source_name: &str, path: &Path) -> Result<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: PathBuf::from(path),
        source,
    };

    // Byte records so one mistyped byte degrades a single cell, not the file.
    let mut records = reader.byte_records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(csv_error)?
            .iter()
            .map(|field| normalize_header(&decode_field(field)))
            .collect(),
        None => {
            return Err(IngestError::MissingExerciseColumn {
                path: path.to_path_buf(),
            });
        }
    };
    if headers.is_empty() {
        return Err(IngestError::MissingExerciseColumn {
            path: path.to_path_buf(),
        });
    }

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in records {
        let record = record.map_err(csv_error)?;
        let mut row: Vec<String> = record.iter().map(decode_field).collect();
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
        }
        raw_rows.push(row);
    }

    let exercise_values: Vec<&str> = raw_rows
        .iter()
        .map(|row| row.first().map_or("", String::as_str))
        .collect();
    let filled = forward_fill(&exercise_values);
    let positions = block_positions(&filled);

    let mut rows = Vec::with_capacity(raw_rows.len());
    let mut skipped_rows = 0usize;
    for (idx, ((cells, exercise), set_row)) in raw_rows
        .into_iter()
        .zip(filled)
        .zip(positions)
        .enumerate()
    {
        let Some(exercise) = exercise else {
            skipped_rows += 1;
            debug!(record = idx + 1, "row precedes any exercise name; skipped");
            continue;
        };
        rows.push(SheetRow {
            record: idx + 1,
            exercise,
            set_row,
            cells,
        });
    }

    let date_columns = detect_date_columns(&headers);
    info!(
        source_file = %source_name,
        row_count = rows.len(),
        date_column_count = date_columns.len(),
        skipped_rows,
        "sheet loaded"
    );
    Ok(Sheet {
        source_name: source_name.to_string(),
        headers,
        date_columns,
        rows,
        skipped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_fill_repeats_last_name() {
        let filled = forward_fill(&["", "Bench", "", " ", "Squat", ""]);
        assert_eq!(
            filled,
            vec![
                None,
                Some("Bench".to_string()),
                Some("Bench".to_string()),
                Some("Bench".to_string()),
                Some("Squat".to_string()),
                Some("Squat".to_string()),
            ]
        );
    }

    #[test]
    fn block_positions_restart_on_change() {
        let values = ["a", "a", "b", "a", "a", "a"];
        assert_eq!(block_positions(&values), vec![1, 2, 1, 1, 2, 3]);
        assert!(block_positions::<&str>(&[]).is_empty());
    }

    #[test]
    fn header_whitespace_is_collapsed() {
        assert_eq!(normalize_header("\u{feff} Exercise  name "), "Exercise name");
    }

    #[test]
    fn date_columns_skip_first_column() {
        let headers = vec![
            "2024.01.01".to_string(),
            "2024.01.02".to_string(),
            "Notes".to_string(),
        ];
        let columns = detect_date_columns(&headers);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].index, 1);
    }
}
