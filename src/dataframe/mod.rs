//! DataFrame: an ordered collection of row-aligned Series.
//!
//! Rows are positional; every Series in a frame has the same length, and
//! every mutating operation re-establishes that before returning.

pub mod classify;
mod display;
mod drop;

use crate::error::{Error, Result};
use crate::series::Series;
use crate::stats::Summary;

use self::classify::{column_counts_match, has_categorical_data, has_header_row};

/// Ordered sequence of equal-length Series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<Series>,
}

impl DataFrame {
    /// Create an empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a DataFrame from rectangular string data.
    ///
    /// The first row is taken as headers when none of its cells is numeric;
    /// otherwise columns are named `"Column 1"`, `"Column 2"`, ... and the
    /// first row is data. A column becomes categorical when any of its data
    /// cells fails to parse as a number.
    ///
    /// # Example
    /// ```rust
    /// use gander::DataFrame;
    ///
    /// let df = DataFrame::from_rows(&[
    ///     vec!["a", "b"],
    ///     vec!["1", "x"],
    ///     vec!["2", "y"],
    /// ]).unwrap();
    /// assert_eq!(df.row_count(), 2);
    /// assert!(df.columns()[1].is_categorical());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        if !column_counts_match(rows) {
            return Err(ragged_input_error(rows));
        }

        let width = rows[0].len();
        let header = has_header_row(rows);

        let (headers, data) = if header {
            let headers: Vec<String> = rows[0].iter().map(|h| h.as_ref().to_string()).collect();
            (headers, &rows[1..])
        } else {
            let headers = (1..=width).map(|i| format!("Column {}", i)).collect();
            (headers, rows)
        };

        log::debug!(
            "building DataFrame: {} rows, {} columns, header row {}",
            data.len(),
            width,
            if header { "detected" } else { "absent" }
        );

        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(x, name)| build_series(name, rows, data, x))
            .collect();

        Ok(DataFrame { columns })
    }

    /// Build a DataFrame from existing Series, which must share one length
    pub fn from_series(columns: Vec<Series>) -> Result<Self> {
        let mut df = DataFrame::new();
        for series in columns {
            df.add_column(series)?;
        }
        Ok(df)
    }

    /// Append a column.
    ///
    /// Fails with [`Error::InconsistentRowCount`] when the frame already has
    /// columns of a different length.
    pub fn add_column(&mut self, series: Series) -> Result<()> {
        if let Some(first) = self.columns.first() {
            if first.len() != series.len() {
                return Err(Error::InconsistentRowCount {
                    expected: first.len(),
                    found: series.len(),
                });
            }
        }
        self.columns.push(series);
        Ok(())
    }

    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    /// Column names in column order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Series::name).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows; 0 for a frame without columns
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Series::len)
    }

    pub fn column(&self, idx: usize) -> Option<&Series> {
        self.columns.get(idx)
    }

    pub fn column_mut(&mut self, idx: usize) -> Option<&mut Series> {
        self.columns.get_mut(idx)
    }

    /// First column with the given name
    pub fn column_by_name(&self, name: &str) -> Option<&Series> {
        self.columns.iter().find(|s| s.name() == name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_by_name(name).is_some()
    }

    /// Values of one row in column order
    pub fn row(&self, idx: usize) -> Option<Vec<f64>> {
        if idx >= self.row_count() {
            return None;
        }
        self.columns.iter().map(|s| s.get(idx)).collect()
    }

    /// Summaries of every numeric column, in column order
    pub fn describe(&self) -> Vec<Summary> {
        self.columns
            .iter()
            .filter(|s| !s.is_categorical())
            .map(Series::summary)
            .collect()
    }
}

fn build_series<S: AsRef<str>>(name: String, rows: &[Vec<S>], data: &[Vec<S>], x: usize) -> Series {
    if has_categorical_data(rows, x) {
        log::trace!("column {} ('{}') is categorical", x, name);
        let values: Vec<&str> = data.iter().map(|row| row[x].as_ref()).collect();
        return Series::categorical(name, &values);
    }

    log::trace!("column {} ('{}') is numeric", x, name);
    let values = data
        .iter()
        .map(|row| row[x].as_ref().parse::<f64>().unwrap_or_default())
        .collect();
    Series::new(name, values)
}

fn ragged_input_error<S: AsRef<str>>(rows: &[Vec<S>]) -> Error {
    let Some(first) = rows.first() else {
        return Error::EmptyInput;
    };
    let expected = first.len();
    rows.iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
        .map_or(Error::EmptyInput, |(row, cells)| Error::RaggedInput {
            row,
            expected,
            found: cells.len(),
        })
}
