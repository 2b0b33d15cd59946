//! Descriptive statistics for gander.
//!
//! The slice-level computations live in [`descriptive`]; this module exposes
//! the [`Summary`] value object that [`Series::summary`](crate::Series::summary)
//! and [`DataFrame::describe`](crate::DataFrame::describe) return.

pub(crate) mod descriptive;

use serde::Serialize;

use crate::error::Result;

/// Descriptive statistics of a single Series.
///
/// Computed on demand and never cached: a Summary is a snapshot of the
/// Series at the time it was requested.
///
/// # Example
/// ```rust
/// use gander::Series;
///
/// let s = Series::new("x", vec![1.0, 2.0, 2.0, 5.0]);
/// let summary = s.summary();
/// assert_eq!(summary.median, 2.0);
/// assert_eq!(summary.mode, vec![2.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Name of the summarized Series
    pub name: String,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (average of the two middle values for even counts)
    pub median: f64,
    /// Every value tied for the highest occurrence count, ascending
    pub mode: Vec<f64>,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Population variance
    pub variance: f64,
}

impl Summary {
    pub(crate) fn from_values(name: &str, values: &[f64]) -> Self {
        let sorted = descriptive::sorted_impl(values);
        let variance = descriptive::variance_impl(values);

        Summary {
            name: name.to_string(),
            mean: descriptive::mean_impl(values),
            median: descriptive::median_sorted(&sorted),
            mode: descriptive::modes_sorted(&sorted),
            min: sorted.first().copied().unwrap_or(f64::NAN),
            max: sorted.last().copied().unwrap_or(f64::NAN),
            std_dev: variance.sqrt(),
            variance,
        }
    }

    /// Serialize the summary as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
