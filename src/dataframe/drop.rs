use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::series::Series;

use super::DataFrame;

/// Row and column removal, and whole-frame standardization.
///
/// Every fallible operation validates all of its arguments before touching
/// the frame, so an error leaves the frame unchanged.
impl DataFrame {
    /// Drop rows by position.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if any index is not a valid
    /// row. Repeated indices are dropped once.
    pub fn drop_rows(&mut self, indices: &[usize]) -> Result<()> {
        let size = self.row_count();
        if let Some(&index) = indices.iter().find(|&&i| i >= size) {
            return Err(Error::IndexOutOfBounds { index, size });
        }

        let mut positions = indices.to_vec();
        positions.sort_unstable_by(|a, b| b.cmp(a));
        positions.dedup();

        self.remove_rows(&positions);
        Ok(())
    }

    /// Drop every row for which `predicate` returns true.
    ///
    /// The predicate receives one row's values in column order. Rows are
    /// visited from last to first.
    pub fn drop_rows_where<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&[f64]) -> bool,
    {
        let mut positions = Vec::new();
        let mut row = Vec::with_capacity(self.columns.len());

        for r in (0..self.row_count()).rev() {
            row.clear();
            row.extend(self.columns.iter().map(|s| s.values()[r]));
            if predicate(&row) {
                positions.push(r);
            }
        }

        self.remove_rows(&positions);
    }

    /// Drop columns by position, keeping the order of the rest.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if any index is not a valid
    /// column.
    pub fn drop_columns(&mut self, indices: &[usize]) -> Result<()> {
        let size = self.columns.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= size) {
            return Err(Error::IndexOutOfBounds { index, size });
        }

        log::debug!("dropping columns at {:?}", indices);
        let columns = std::mem::take(&mut self.columns);
        self.columns = columns
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !indices.contains(i))
            .map(|(_, s)| s)
            .collect();
        Ok(())
    }

    /// Drop columns by name.
    ///
    /// All names are checked first; the first unknown one is reported as
    /// [`Error::ColumnNotFound`] and nothing is removed. Names are not
    /// unique, so one name removes every column carrying it.
    pub fn drop_columns_by_name(&mut self, names: &[&str]) -> Result<()> {
        if let Some(missing) = names.iter().find(|&&name| !self.contains_column(name)) {
            return Err(Error::ColumnNotFound(missing.to_string()));
        }

        log::debug!("dropping columns named {:?}", names);
        self.columns.retain(|s| !names.contains(&s.name()));
        Ok(())
    }

    /// Drop every column for which `predicate` returns true
    pub fn drop_columns_where<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&Series) -> bool,
    {
        let before = self.columns.len();
        self.columns.retain(|s| !predicate(s));
        log::debug!("dropped {} columns by predicate", before - self.columns.len());
    }

    /// Standardize every numeric column to z-scores.
    ///
    /// Categorical columns keep their codes unchanged.
    pub fn standardize(&mut self) {
        for series in self.columns.iter_mut().filter(|s| !s.is_categorical()) {
            log::debug!("standardizing column '{}'", series.name());
            // numeric columns only, cannot fail
            let _ = series.standardize();
        }
    }

    /// Remove `positions` (unique, descending) from every column, one task
    /// per column.
    fn remove_rows(&mut self, positions: &[usize]) {
        if positions.is_empty() {
            return;
        }

        log::debug!(
            "dropping {} rows across {} columns",
            positions.len(),
            self.columns.len()
        );
        self.columns
            .par_iter_mut()
            .for_each(|series| series.remove_rows(positions));
    }
}
