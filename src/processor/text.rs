use regex::Regex;

use crate::processor::{SeriesError, executor::Executor, series::Series};

fn rewrite_in_place<F>(executor: &Executor, op: &'static str, series: &mut Series, rewrite: F)
where
    F: Fn(&str) -> Option<String> + Sync + Send,
{
    let Series::Str(values) = series else {
        return;
    };

    // Chunks are disjoint ranges of the same buffer, so each worker owns
    // the elements it rewrites.
    executor.for_each_chunk_mut(op, values.as_mut_slice(), |_, slice| {
        for value in slice.iter_mut() {
            if let Some(rewritten) = rewrite(value.as_str()) {
                *value = rewritten;
            }
        }
    });
}

/// Replaces every occurrence of `old` with `new` in a text series.
/// Numeric series and an empty `old` are left alone.
pub fn replace(executor: &Executor, series: &mut Series, old: &str, new: &str) {
    if old.is_empty() {
        return;
    }
    rewrite_in_place(executor, "replace", series, |value| {
        value.contains(old).then(|| value.replace(old, new))
    });
}

/// Whole-word pattern for `word`, with regex metacharacters escaped.
pub fn whole_word_pattern(word: &str) -> Result<Regex, SeriesError> {
    Ok(Regex::new(&format!(r"\b{}\b", regex::escape(word)))?)
}

/// Like [`replace`], but only matches `old` between word boundaries.
///
/// The pattern is compiled once and shared read-only by all workers.
pub fn replace_whole_word(
    executor: &Executor,
    series: &mut Series,
    old: &str,
    new: &str,
) -> Result<(), SeriesError> {
    if old.is_empty() || !series.as_str().is_some_and(|v| !v.is_empty()) {
        return Ok(());
    }

    let pattern = whole_word_pattern(old)?;
    rewrite_in_place(executor, "replace_whole_word", series, |value| {
        pattern
            .is_match(value)
            .then(|| pattern.replace_all(value, regex::NoExpand(new)).into_owned())
    });
    Ok(())
}
