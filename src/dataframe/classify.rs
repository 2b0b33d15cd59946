//! Classification of raw string rows before a DataFrame is built.
//!
//! These are pure functions over the raw input. Header detection is strict:
//! the first row is a header only when *every* one of its cells fails to
//! parse as a number, so a row mixing labels and numbers is treated as data.

/// Whether the cell parses as an `f64`
pub fn is_numeric(cell: &str) -> bool {
    cell.parse::<f64>().is_ok()
}

/// Whether the first row consists entirely of non-numeric cells.
///
/// Returns `false` for empty input.
pub fn has_header_row<S: AsRef<str>>(rows: &[Vec<S>]) -> bool {
    match rows.first() {
        Some(first) => first.iter().all(|cell| !is_numeric(cell.as_ref())),
        None => false,
    }
}

/// Whether any data cell of `column` fails to parse as a number.
///
/// The header row, if detected, is not inspected.
pub fn has_categorical_data<S: AsRef<str>>(rows: &[Vec<S>], column: usize) -> bool {
    let start = if has_header_row(rows) { 1 } else { 0 };
    rows.iter()
        .skip(start)
        .filter_map(|row| row.get(column))
        .any(|cell| !is_numeric(cell.as_ref()))
}

/// Whether the input is non-empty and every row has the same length
pub fn column_counts_match<S: AsRef<str>>(rows: &[Vec<S>]) -> bool {
    match rows.first() {
        Some(first) => rows.iter().all(|row| row.len() == first.len()),
        None => false,
    }
}
