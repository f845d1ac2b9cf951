use crate::processor::{
    FilterPredicate, Value,
    executor::Executor,
    series::{Series, SeriesType},
};

/// Scans `values` chunk by chunk and returns the matching global indexes in
/// ascending order.
///
/// Each worker only sees its own range and returns a private, already
/// ordered list; lists are concatenated in chunk order after the join.
pub fn matching_indexes<T, P>(executor: &Executor, values: &[T], predicate: P) -> Vec<usize>
where
    T: Sync,
    P: Fn(&T) -> bool + Sync + Send,
{
    let partials = executor.map_chunks("filter", values.len(), |chunk| {
        values[chunk.range()]
            .iter()
            .enumerate()
            .filter(|(_, v)| predicate(*v))
            .map(|(offset, _)| chunk.start + offset)
            .collect::<Vec<usize>>()
    });

    let mut out = Vec::with_capacity(partials.iter().map(Vec::len).sum());
    for local in partials {
        out.extend(local);
    }
    out
}

/// Keeps the numeric elements matching `predicate`, compacting the series.
///
/// # Panics
/// If `series` is not numeric.
pub fn filter_f64<P>(executor: &Executor, series: &mut Series, predicate: P) -> Vec<usize>
where
    P: Fn(f64) -> bool + Sync + Send,
{
    let Series::Float64(values) = series else {
        panic!("numeric predicate applied to a {} series", series.series_type())
    };
    let indexes = matching_indexes(executor, values.as_slice(), |v| predicate(*v));
    series.retain_indexes(&indexes);
    indexes
}

/// Keeps the text elements matching `predicate`, compacting the series.
///
/// # Panics
/// If `series` is not textual.
pub fn filter_str<P>(executor: &Executor, series: &mut Series, predicate: P) -> Vec<usize>
where
    P: Fn(&str) -> bool + Sync + Send,
{
    let Series::Str(values) = series else {
        panic!("text predicate applied to a {} series", series.series_type())
    };
    let indexes = matching_indexes(executor, values.as_slice(), |v| predicate(v.as_str()));
    series.retain_indexes(&indexes);
    indexes
}

fn expect_float(value: &Value) -> f64 {
    match value {
        Value::Float(v) => *v,
        Value::Str(_) => panic!("text operand in a numeric predicate"),
    }
}

fn expect_str(value: &Value) -> &str {
    match value {
        Value::Str(v) => v,
        Value::Float(_) => panic!("numeric operand in a text predicate"),
    }
}

/// Declarative form of [`filter_f64`] / [`filter_str`].
///
/// # Panics
/// If the predicate operands do not match the series variant, or on
/// `Contains` over a numeric series.
pub fn filter(executor: &Executor, series: &mut Series, predicate: &FilterPredicate) -> Vec<usize> {
    match series.series_type() {
        SeriesType::Float64 => match predicate {
            FilterPredicate::Equals(v) => {
                let t = expect_float(v);
                filter_f64(executor, series, |x| x == t)
            }
            FilterPredicate::GreaterThan(v) => {
                let t = expect_float(v);
                filter_f64(executor, series, |x| x > t)
            }
            FilterPredicate::LessThan(v) => {
                let t = expect_float(v);
                filter_f64(executor, series, |x| x < t)
            }
            FilterPredicate::Between(lo, hi) => {
                let (lo, hi) = (expect_float(lo), expect_float(hi));
                filter_f64(executor, series, |x| x >= lo && x <= hi)
            }
            FilterPredicate::Contains(_) => panic!("Contains is only defined for text series"),
        },
        SeriesType::Str => match predicate {
            FilterPredicate::Equals(v) => {
                let t = expect_str(v).to_string();
                filter_str(executor, series, |x| x == t)
            }
            FilterPredicate::GreaterThan(v) => {
                let t = expect_str(v).to_string();
                filter_str(executor, series, |x| x > t.as_str())
            }
            FilterPredicate::LessThan(v) => {
                let t = expect_str(v).to_string();
                filter_str(executor, series, |x| x < t.as_str())
            }
            FilterPredicate::Between(lo, hi) => {
                let (lo, hi) = (expect_str(lo).to_string(), expect_str(hi).to_string());
                filter_str(executor, series, |x| x >= lo.as_str() && x <= hi.as_str())
            }
            FilterPredicate::Contains(v) => {
                let t = expect_str(v).to_string();
                filter_str(executor, series, |x| x.contains(t.as_str()))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::config::ProcessorConfig;

    fn executor(workers: usize) -> Executor {
        Executor::new(&ProcessorConfig::default().with_workers(workers))
    }

    #[test]
    fn test_filter_greater_than() {
        for workers in 1..=8 {
            let mut series = Series::from(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
            let rows = filter(
                &executor(workers),
                &mut series,
                &FilterPredicate::GreaterThan(Value::Float(15.0)),
            );
            assert_eq!(rows, vec![1, 2, 3, 4]);
            assert_eq!(series, Series::from(vec![20.0, 30.0, 40.0, 50.0]));
        }
    }

    #[test]
    fn test_filter_str_keeps_relative_order() {
        let mut series = Series::from(vec!["apple", "kiwi", "avocado", "plum", "apricot"]);
        let rows = filter_str(&executor(3), &mut series, |s| s.starts_with('a'));
        assert_eq!(rows, vec![0, 2, 4]);
        assert_eq!(series, Series::from(vec!["apple", "avocado", "apricot"]));
    }

    #[test]
    fn test_filter_between_and_contains() {
        let mut series = Series::from(vec![1.0, 5.0, 10.0, 15.0]);
        let rows = filter(
            &executor(2),
            &mut series,
            &FilterPredicate::Between(Value::Float(5.0), Value::Float(10.0)),
        );
        assert_eq!(rows, vec![1, 2]);

        let mut series = Series::from(vec!["red fox", "blue", "fox"]);
        let rows = filter(
            &executor(2),
            &mut series,
            &FilterPredicate::Contains(Value::Str("fox".into())),
        );
        assert_eq!(rows, vec![0, 2]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_filter_no_matches_empties_series() {
        let mut series = Series::from(vec![1.0, 2.0]);
        let rows = filter_f64(&executor(4), &mut series, |x| x > 100.0);
        assert!(rows.is_empty());
        assert_eq!(series, Series::new_float64());
    }

    #[test]
    fn test_filter_empty_series() {
        let mut series = Series::new_str();
        let rows = filter_str(&executor(4), &mut series, |_| true);
        assert!(rows.is_empty());
    }

    #[test]
    #[should_panic(expected = "numeric predicate")]
    fn test_numeric_predicate_on_text_panics() {
        let mut series = Series::from(vec!["1"]);
        filter_f64(&executor(1), &mut series, |_| true);
    }

    #[test]
    #[should_panic(expected = "text operand")]
    fn test_mismatched_operand_panics() {
        let mut series = Series::from(vec![1.0]);
        filter(
            &executor(1),
            &mut series,
            &FilterPredicate::Equals(Value::Str("1".into())),
        );
    }
}
