//! Reader for the digit dataset files.
//!
//! Format:
//! - one sample per line, comma-separated integers, no header
//! - the feature columns come first, the class label is the last column
//! - blank lines are skipped
//! - every row must have the same number of columns

use std::fs;

use crate::error::{DigitError, Result};

/// Reads and parses a dataset file into raw integer rows.
pub fn read_dataset(path: &str) -> Result<Vec<Vec<i32>>> {
    let text = fs::read_to_string(path).map_err(|e| DigitError::from_io(e, path))?;
    parse_dataset(&text)
}

/// Parses dataset text into raw integer rows.
pub fn parse_dataset(text: &str) -> Result<Vec<Vec<i32>>> {
    let mut rows: Vec<Vec<i32>> = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row_num = line_idx + 1;
        let row = parse_row(line, row_num)?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(DigitError::Parse {
                    row: row_num,
                    message: format!("{} columns, expected {}", row.len(), first.len()),
                });
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

fn parse_row(line: &str, row_num: usize) -> Result<Vec<i32>> {
    line.split(',')
        .map(|cell| {
            let cell = cell.trim();
            cell.parse::<i32>().map_err(|_| DigitError::Parse {
                row: row_num,
                message: format!("'{}' is not an integer", cell),
            })
        })
        .collect()
}
