use crate::{
    helpers::merge_sort::par_merge_sort,
    processor::{SeriesError, executor::Executor, reduce::numeric_values, series::Series},
};

/// Sorted private copy of `values`; the caller's ordering is never touched.
pub fn sorted_copy(executor: &Executor, values: &[f64], sort_threshold: usize) -> Vec<f64> {
    let mut sorted = values.to_vec();
    executor.install(|| par_merge_sort(&mut sorted, sort_threshold));
    sorted
}

/// `sorted` must be non-empty and ascending.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Linear interpolation between the two ranks around `p/100 * (n - 1)`.
///
/// `sorted` must be non-empty and ascending, `p` within `[0, 100]`.
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let idx = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = lower + 1;
    let weight = idx - lower as f64;

    if upper >= sorted.len() {
        return sorted[lower];
    }
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

pub fn median(
    executor: &Executor,
    series: &Series,
    sort_threshold: usize,
) -> Result<f64, SeriesError> {
    let values = numeric_values(series, "median")?;
    Ok(median_of_sorted(&sorted_copy(executor, values, sort_threshold)))
}

pub fn percentile(
    executor: &Executor,
    series: &Series,
    p: f64,
    sort_threshold: usize,
) -> Result<f64, SeriesError> {
    let values = numeric_values(series, "percentile")?;
    if !(0.0..=100.0).contains(&p) {
        return Err(SeriesError::InvalidPercentile(p));
    }
    Ok(percentile_of_sorted(
        &sorted_copy(executor, values, sort_threshold),
        p,
    ))
}
