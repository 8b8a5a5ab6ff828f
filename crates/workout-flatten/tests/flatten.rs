use std::path::Path;

use chrono::NaiveDate;
use insta::assert_snapshot;
use workout_flatten::{flatten_sheet, merge_flattened};
use workout_ingest::{Sheet, read_sheet_from_reader};
use workout_model::{FlatRow, ParserConfig, Side};

fn sheet(name: &str, input: &str) -> Sheet {
    read_sheet_from_reader(input.as_bytes(), name, Path::new(name)).expect("read sheet")
}

fn listing(rows: &[FlatRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{} {} #{} {} {} {}",
                row.date,
                row.exercise,
                row.set_number,
                row.side.map_or("-", |side| side.as_str()),
                row.reps,
                row.source_file
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn bench_cell_becomes_two_sets() {
    let sheet = sheet("bench.csv", "Exercise,2024.01.01\nBench,135lb R12+L9\n");
    let result = flatten_sheet(&sheet, &ParserConfig::default());
    assert_eq!(result.rows.len(), 2);

    let first = &result.rows[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"));
    assert_eq!(first.exercise, "Bench");
    assert_eq!(first.set_number, 1);
    assert_eq!(first.side, Some(Side::Right));
    assert_eq!(first.reps, 12.0);
    assert_eq!(first.weight_lbs, Some(135.0));
    assert_eq!(first.raw_cell, "135lb R12+L9");
    assert_eq!(first.part_idx, 1);

    let second = &result.rows[1];
    assert_eq!(second.set_number, 2);
    assert_eq!(second.side, Some(Side::Left));
    assert_eq!(second.reps, 9.0);
    assert_eq!(second.part_idx, 2);
}

#[test]
fn sets_follow_source_row_then_part_order() {
    let sheet = sheet(
        "log.csv",
        "Exercise,2024.01.01,2024.01.02\n\
         Bench,100lb R12+L9,135lb 10\n\
         ,100lb R10+L8,\n\
         Squat,200lb 5*2,\n",
    );
    let result = flatten_sheet(&sheet, &ParserConfig::default());
    assert_eq!(result.cells_seen, 4);
    assert_eq!(result.empty_cells, 0);
    assert_snapshot!(listing(&result.rows), @r"
    2024-01-01 Bench #1 R 12 log.csv
    2024-01-01 Bench #2 L 9 log.csv
    2024-01-01 Bench #3 R 10 log.csv
    2024-01-01 Bench #4 L 8 log.csv
    2024-01-02 Bench #1 - 10 log.csv
    2024-01-01 Squat #1 - 5 log.csv
    2024-01-01 Squat #2 - 5 log.csv
    ");
}

#[test]
fn parsed_values_never_reorder_sets() {
    let sheet = sheet(
        "order.csv",
        "Exercise,2024.03.01\nRow,50lb 3\n,20lb 20\n,80lb 1\n",
    );
    let result = flatten_sheet(&sheet, &ParserConfig::default());
    let reps: Vec<f64> = result.rows.iter().map(|row| row.reps).collect();
    assert_eq!(reps, vec![3.0, 20.0, 1.0]);
    let sets: Vec<usize> = result.rows.iter().map(|row| row.set_number).collect();
    assert_eq!(sets, vec![1, 2, 3]);
}

#[test]
fn merge_interleaves_files_by_set_number() {
    let a = sheet("a.csv", "Exercise,2024.01.01\nBench,100lb 10+8\n");
    let b = sheet("b.csv", "Exercise,2024.01.01\nBench,50lb 12\nCurl,20lb 15\n");
    let config = ParserConfig::default();
    let merged = merge_flattened(vec![
        flatten_sheet(&b, &config).rows,
        flatten_sheet(&a, &config).rows,
    ]);
    assert_snapshot!(listing(&merged), @r"
    2024-01-01 Bench #1 - 10 a.csv
    2024-01-01 Bench #1 - 12 b.csv
    2024-01-01 Bench #2 - 8 a.csv
    2024-01-01 Curl #1 - 15 b.csv
    ");
}

#[test]
fn merge_of_nothing_is_empty() {
    assert!(merge_flattened(Vec::new()).is_empty());
    assert!(merge_flattened(vec![Vec::new(), Vec::new()]).is_empty());
}
