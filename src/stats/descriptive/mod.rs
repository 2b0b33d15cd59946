// Slice-level descriptive statistics shared by Series and DataFrame

use std::cmp::Ordering;

/// Left-to-right sum
pub(crate) fn sum_impl(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |acc, &x| acc + x)
}

/// Arithmetic mean, `NaN` for empty input
pub(crate) fn mean_impl(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    sum_impl(data) / data.len() as f64
}

/// Sorted copy of the data, ascending
pub(crate) fn sorted_impl(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Median of already sorted data
pub(crate) fn median_sorted(sorted: &[f64]) -> f64 {
    let count = sorted.len();
    if count == 0 {
        return f64::NAN;
    }

    if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    }
}

/// All values sharing the highest occurrence count, ascending.
///
/// Works on sorted data so equal values are adjacent.
pub(crate) fn modes_sorted(sorted: &[f64]) -> Vec<f64> {
    let mut modes = Vec::new();
    let mut best = 0usize;

    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut run = 1;
        while i + run < sorted.len() && sorted[i + run] == value {
            run += 1;
        }

        match run.cmp(&best) {
            Ordering::Greater => {
                best = run;
                modes.clear();
                modes.push(value);
            }
            Ordering::Equal => modes.push(value),
            Ordering::Less => {}
        }

        i += run;
    }

    modes
}

/// Population variance (divisor N)
pub(crate) fn variance_impl(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }

    let mean = mean_impl(data);
    let sum_squared_diff = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    sum_squared_diff / data.len() as f64
}
