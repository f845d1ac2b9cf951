use crate::processor::{
    AggregateOp, SeriesError,
    executor::Executor,
    series::{Series, SeriesType},
};

/// Borrows the numeric data of `series`, rejecting text and empty series.
pub(crate) fn numeric_values<'a>(
    series: &'a Series,
    op: &'static str,
) -> Result<&'a [f64], SeriesError> {
    match series {
        Series::Str(_) => Err(SeriesError::WrongColumnType {
            op,
            expected: SeriesType::Float64,
            found: SeriesType::Str,
        }),
        Series::Float64(values) if values.is_empty() => Err(SeriesError::EmptySeries { op }),
        Series::Float64(values) => Ok(values),
    }
}

/// Folds `map(v)` with `combine` over each chunk starting from `identity`,
/// then folds the per-chunk partials the same way on the calling thread.
///
/// `combine` must be associative and commutative with `identity` as its
/// neutral element, otherwise the result depends on the worker count.
pub fn map_reduce<M, C>(
    executor: &Executor,
    values: &[f64],
    identity: f64,
    map: M,
    combine: C,
) -> f64
where
    M: Fn(f64) -> f64 + Sync + Send,
    C: Fn(f64, f64) -> f64 + Sync + Send,
{
    executor
        .map_chunks("reduce", values.len(), |chunk| {
            values[chunk.range()]
                .iter()
                .fold(identity, |acc, &v| combine(acc, map(v)))
        })
        .into_iter()
        .fold(identity, &combine)
}

pub fn reduce<C>(executor: &Executor, values: &[f64], identity: f64, combine: C) -> f64
where
    C: Fn(f64, f64) -> f64 + Sync + Send,
{
    map_reduce(executor, values, identity, |v| v, combine)
}

pub fn sum(executor: &Executor, values: &[f64]) -> f64 {
    reduce(executor, values, 0.0, |a, b| a + b)
}

pub fn product(executor: &Executor, values: &[f64]) -> f64 {
    reduce(executor, values, 1.0, |a, b| a * b)
}

pub fn min(executor: &Executor, values: &[f64]) -> f64 {
    reduce(executor, values, f64::INFINITY, f64::min)
}

pub fn max(executor: &Executor, values: &[f64]) -> f64 {
    reduce(executor, values, f64::NEG_INFINITY, f64::max)
}

/// Caller guarantees `values` is non-empty.
pub fn mean(executor: &Executor, values: &[f64]) -> f64 {
    sum(executor, values) / values.len() as f64
}

/// Population variance around `mean` (divisor = length).
pub fn variance_with_mean(executor: &Executor, values: &[f64], mean: f64) -> f64 {
    let squared = map_reduce(
        executor,
        values,
        0.0,
        |v| {
            let diff = v - mean;
            diff * diff
        },
        |a, b| a + b,
    );
    squared / values.len() as f64
}

pub fn variance(executor: &Executor, values: &[f64]) -> f64 {
    let mean = mean(executor, values);
    variance_with_mean(executor, values, mean)
}

pub fn aggregate(
    executor: &Executor,
    series: &Series,
    op: AggregateOp,
) -> Result<f64, SeriesError> {
    let values = numeric_values(series, op.name())?;

    Ok(match op {
        AggregateOp::Sum => sum(executor, values),
        AggregateOp::Product => product(executor, values),
        AggregateOp::Min => min(executor, values),
        AggregateOp::Max => max(executor, values),
        AggregateOp::Mean => mean(executor, values),
        AggregateOp::Variance => variance(executor, values),
    })
}
