use std::sync::atomic::{AtomicUsize, Ordering};

use crate::processor::{SeriesError, executor::Executor, series::Series};

/// Outcome of parsing one chunk into its private buffer
enum ChunkParse {
    Parsed(Vec<f64>),
    /// First failing global index in the chunk
    Failed(usize),
    /// Stopped after passing a failure already reported by another chunk
    Abandoned,
}

pub(crate) fn parse_number(s: &str) -> Option<f64> {
    fast_float::parse::<f64, _>(s).ok()
}

/// Shortest decimal text that parses back to exactly `v`.
pub(crate) fn format_number(v: f64) -> String {
    v.to_string()
}

/// Parses a text series into a numeric one.
///
/// Nothing is written to `series` until every chunk has parsed cleanly. On
/// failure the series is untouched and the error carries the lowest failing
/// index, independent of worker count and scheduling.
///
/// Workers share `lowest_failure` only as a hint to stop early: a chunk is
/// abandoned once its cursor is past the lowest failure seen so far, which
/// can never hide a smaller one.
pub fn convert_to_numeric(executor: &Executor, series: &mut Series) -> Result<(), SeriesError> {
    let Series::Str(values) = series else {
        return Ok(());
    };
    let values: &[String] = values;

    let lowest_failure = AtomicUsize::new(usize::MAX);
    let partials = executor.map_chunks("convert_to_numeric", values.len(), |chunk| {
        let mut parsed = Vec::with_capacity(chunk.len());
        for idx in chunk.range() {
            if idx > lowest_failure.load(Ordering::Relaxed) {
                return ChunkParse::Abandoned;
            }
            match parse_number(&values[idx]) {
                Some(v) => parsed.push(v),
                None => {
                    lowest_failure.fetch_min(idx, Ordering::Relaxed);
                    return ChunkParse::Failed(idx);
                }
            }
        }
        ChunkParse::Parsed(parsed)
    });

    let mut out = Vec::with_capacity(values.len());
    let mut first_failure: Option<usize> = None;
    for partial in partials {
        match partial {
            ChunkParse::Parsed(chunk) => out.extend(chunk),
            ChunkParse::Failed(idx) => {
                first_failure = Some(first_failure.map_or(idx, |f| f.min(idx)));
            }
            ChunkParse::Abandoned => {}
        }
    }

    if let Some(index) = first_failure {
        return Err(SeriesError::ParseFailure {
            index,
            value: values[index].clone(),
        });
    }

    *series = Series::Float64(out);
    Ok(())
}

/// Formats a numeric series as text. Each worker fills its own range of a
/// freshly allocated buffer.
pub fn convert_to_text(executor: &Executor, series: &mut Series) {
    let Series::Float64(values) = series else {
        return;
    };
    let values: &[f64] = values;

    let mut out = vec![String::new(); values.len()];
    executor.for_each_chunk_mut("convert_to_text", &mut out, |chunk, slots| {
        for (slot, &v) in slots.iter_mut().zip(&values[chunk.range()]) {
            *slot = format_number(v);
        }
    });

    *series = Series::Str(out);
}
