mod categorical;

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::stats::descriptive;
use crate::stats::Summary;

pub use self::categorical::Categories;

/// Tag distinguishing numeric Series from categorical ones
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    /// Plain numeric values
    Numeric,
    /// Values are codes of the attached label encoding
    Categorical(Categories),
}

/// A single named column of `f64` values.
///
/// A categorical Series stores one code per row and carries the
/// [`Categories`] that map codes back to their original labels. Every
/// value of a categorical Series is a code present in its encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Column name, not required to be unique within a frame
    name: String,

    /// Values (codes for categorical data)
    values: Vec<f64>,

    kind: ColumnKind,
}

impl Series {
    /// Create a numeric Series from values
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Series {
            name: name.into(),
            values,
            kind: ColumnKind::Numeric,
        }
    }

    /// Create a categorical Series from string values.
    ///
    /// Each distinct string gets the next unused code (0, 1, 2, ...) at its
    /// first occurrence.
    ///
    /// # Example
    /// ```rust
    /// use gander::Series;
    ///
    /// let s = Series::categorical("fruit", &["apple", "pear", "apple"]);
    /// assert!(s.is_categorical());
    /// assert_eq!(s.values(), &[0.0, 1.0, 0.0]);
    /// ```
    pub fn categorical<S: AsRef<str>>(name: impl Into<String>, values: &[S]) -> Self {
        let (categories, codes) = Categories::encode(values);
        Series {
            name: name.into(),
            values: codes,
            kind: ColumnKind::Categorical(categories),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a position
    pub fn get(&self, pos: usize) -> Option<f64> {
        self.values.get(pos).copied()
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self.kind, ColumnKind::Categorical(_))
    }

    /// Label encoding, `None` for numeric data
    pub fn categories(&self) -> Option<&Categories> {
        match &self.kind {
            ColumnKind::Categorical(categories) => Some(categories),
            ColumnKind::Numeric => None,
        }
    }

    /// Original label of the value at `pos` for categorical data
    pub fn label_at(&self, pos: usize) -> Option<&str> {
        let categories = self.categories()?;
        categories.label(self.get(pos)?)
    }

    /// Occurrence count per label.
    ///
    /// Fails with [`Error::NotCategorical`] on numeric data.
    pub fn hist(&self) -> Result<HashMap<String, usize>> {
        match &self.kind {
            ColumnKind::Categorical(categories) => Ok(categories.histogram(&self.values)),
            ColumnKind::Numeric => Err(Error::NotCategorical(self.name.clone())),
        }
    }

    pub fn sum(&self) -> f64 {
        descriptive::sum_impl(&self.values)
    }

    /// Arithmetic mean. `NaN` for an empty Series.
    pub fn mean(&self) -> f64 {
        descriptive::mean_impl(&self.values)
    }

    /// Median of the values; the Series itself is left unsorted
    pub fn median(&self) -> f64 {
        descriptive::median_sorted(&self.sorted())
    }

    /// Every value tied for the highest occurrence count, ascending
    pub fn mode(&self) -> Vec<f64> {
        descriptive::modes_sorted(&self.sorted())
    }

    /// Population variance (divisor N)
    pub fn variance(&self) -> f64 {
        descriptive::variance_impl(&self.values)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.sorted().first().copied().unwrap_or(f64::NAN)
    }

    pub fn max(&self) -> f64 {
        self.sorted().last().copied().unwrap_or(f64::NAN)
    }

    /// `(min, max)`
    pub fn range(&self) -> (f64, f64) {
        let sorted = self.sorted();
        match (sorted.first(), sorted.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// Sorted copy of the values
    pub fn sorted(&self) -> Vec<f64> {
        descriptive::sorted_impl(&self.values)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_values(&self.name, &self.values)
    }

    /// Map `f` over every value into a new vector, leaving the Series untouched
    pub fn apply<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.values.iter().map(|&v| f(v)).collect()
    }

    /// Replace every value with `f(value)`.
    ///
    /// Refused for categorical data, whose values must stay valid codes.
    pub fn transform<F>(&mut self, f: F) -> Result<()>
    where
        F: Fn(f64) -> f64,
    {
        self.ensure_numeric()?;
        for v in self.values.iter_mut() {
            *v = f(*v);
        }
        Ok(())
    }

    /// Rescale the values to z-scores in place.
    ///
    /// A zero-variance Series becomes all zeros. Refused for categorical data.
    pub fn standardize(&mut self) -> Result<()> {
        self.ensure_numeric()?;

        let mean = self.mean();
        let std_dev = self.std_dev();

        if std_dev == 0.0 {
            log::warn!(
                "series '{}' has zero variance, standardizing to zeros",
                self.name
            );
            self.values.iter_mut().for_each(|v| *v = 0.0);
            return Ok(());
        }

        for v in self.values.iter_mut() {
            *v = (*v - mean) / std_dev;
        }
        Ok(())
    }

    /// Remove the given positions. `positions` must be unique, in bounds and
    /// sorted in descending order.
    pub(crate) fn remove_rows(&mut self, positions: &[usize]) {
        for &pos in positions {
            self.values.remove(pos);
        }
    }

    fn ensure_numeric(&self) -> Result<()> {
        if self.is_categorical() {
            return Err(Error::NotNumeric(self.name.clone()));
        }
        Ok(())
    }
}
