use crate::processor::{
    AggregateOp, FilterPredicate, SeriesError,
    config::ProcessorConfig,
    convert, filter,
    executor::Executor,
    order_stats, queries,
    reduce::{self, numeric_values},
    series::Series,
    text,
};

/// Runs chunked parallel operations over a [`Series`].
///
/// The processor holds configuration only. Each call resolves its worker
/// count, spins up its own pool, and blocks until every chunk has finished.
///
/// # Examples
///
/// ```rust
/// use columnar_series::{ProcessorConfig, Series, SeriesProcessor};
///
/// let processor = SeriesProcessor::with_config(ProcessorConfig::default().with_workers(4));
/// let mut series = Series::from(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
///
/// assert_eq!(processor.mean(&series).unwrap(), 30.0);
///
/// let kept = processor.filter_f64(&mut series, |v| v > 15.0);
/// assert_eq!(kept, vec![1, 2, 3, 4]);
/// assert_eq!(series.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesProcessor {
    config: ProcessorConfig,
}

impl SeriesProcessor {
    /// Processor using hardware parallelism
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        SeriesProcessor { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    fn executor(&self) -> Executor {
        Executor::new(&self.config)
    }

    /// Reduces a numeric series with `op`.
    ///
    /// # Errors
    /// Returns a [`SeriesError`] if:
    /// - the series is textual (`WrongColumnType`)
    /// - the series is empty (`EmptySeries`)
    pub fn aggregate(&self, series: &Series, op: AggregateOp) -> Result<f64, SeriesError> {
        reduce::aggregate(&self.executor(), series, op)
    }

    pub fn sum(&self, series: &Series) -> Result<f64, SeriesError> {
        self.aggregate(series, AggregateOp::Sum)
    }

    pub fn product(&self, series: &Series) -> Result<f64, SeriesError> {
        self.aggregate(series, AggregateOp::Product)
    }

    pub fn min(&self, series: &Series) -> Result<f64, SeriesError> {
        self.aggregate(series, AggregateOp::Min)
    }

    pub fn max(&self, series: &Series) -> Result<f64, SeriesError> {
        self.aggregate(series, AggregateOp::Max)
    }

    pub fn mean(&self, series: &Series) -> Result<f64, SeriesError> {
        self.aggregate(series, AggregateOp::Mean)
    }

    /// Population variance (divisor = length).
    pub fn variance(&self, series: &Series) -> Result<f64, SeriesError> {
        self.aggregate(series, AggregateOp::Variance)
    }

    /// Population variance around a mean the caller already has.
    pub fn variance_with_mean(&self, series: &Series, mean: f64) -> Result<f64, SeriesError> {
        let values = numeric_values(series, "variance")?;
        Ok(reduce::variance_with_mean(&self.executor(), values, mean))
    }

    pub fn median(&self, series: &Series) -> Result<f64, SeriesError> {
        order_stats::median(&self.executor(), series, self.config.sort_threshold)
    }

    /// `p` is in percent, `[0, 100]`.
    pub fn percentile(&self, series: &Series, p: f64) -> Result<f64, SeriesError> {
        order_stats::percentile(&self.executor(), series, p, self.config.sort_threshold)
    }

    /// Number of elements, for either variant
    pub fn count(&self, series: &Series) -> usize {
        series.len()
    }

    /// Keeps the elements matching `predicate` and returns their original
    /// indexes in ascending order.
    ///
    /// # Panics
    /// If the predicate operand kind does not match the series variant.
    ///
    /// # Example
    /// ```rust
    /// # use columnar_series::{FilterPredicate, Series, SeriesProcessor, Value};
    /// let mut series = Series::from(vec!["b", "a", "c"]);
    /// let rows = SeriesProcessor::new()
    ///     .filter(&mut series, &FilterPredicate::GreaterThan(Value::Str("a".into())));
    /// assert_eq!(rows, vec![0, 2]);
    /// ```
    pub fn filter(&self, series: &mut Series, predicate: &FilterPredicate) -> Vec<usize> {
        filter::filter(&self.executor(), series, predicate)
    }

    /// # Panics
    /// If `series` is not numeric.
    pub fn filter_f64<P>(&self, series: &mut Series, predicate: P) -> Vec<usize>
    where
        P: Fn(f64) -> bool + Sync + Send,
    {
        filter::filter_f64(&self.executor(), series, predicate)
    }

    /// # Panics
    /// If `series` is not textual.
    pub fn filter_str<P>(&self, series: &mut Series, predicate: P) -> Vec<usize>
    where
        P: Fn(&str) -> bool + Sync + Send,
    {
        filter::filter_str(&self.executor(), series, predicate)
    }

    /// Parses a text series into numbers, all or nothing.
    ///
    /// # Errors
    /// `ParseFailure` with the lowest failing index; `series` is unchanged.
    pub fn convert_to_numeric(&self, series: &mut Series) -> Result<(), SeriesError> {
        convert::convert_to_numeric(&self.executor(), series)
    }

    pub fn convert_to_text(&self, series: &mut Series) {
        convert::convert_to_text(&self.executor(), series)
    }

    pub fn replace(&self, series: &mut Series, old: &str, new: &str) {
        text::replace(&self.executor(), series, old, new)
    }

    pub fn replace_whole_word(
        &self,
        series: &mut Series,
        old: &str,
        new: &str,
    ) -> Result<(), SeriesError> {
        text::replace_whole_word(&self.executor(), series, old, new)
    }

    pub fn count_word(&self, series: &Series, word: &str) -> usize {
        queries::count_word(series, word)
    }

    pub fn non_numeric_values(&self, series: &Series) -> Vec<String> {
        queries::non_numeric_values(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::Value;

    #[test]
    fn test_default_uses_hardware_parallelism() {
        let processor = SeriesProcessor::new();
        assert_eq!(processor.config().num_workers, None);
        assert!(processor.executor().workers() >= 1);
    }

    #[test]
    fn test_variance_with_mean_checks_type() {
        let processor = SeriesProcessor::new();
        let err = processor
            .variance_with_mean(&Series::from(vec!["x"]), 0.0)
            .unwrap_err();
        assert!(matches!(err, SeriesError::WrongColumnType { op: "variance", .. }));
    }

    #[test]
    fn test_pipeline() {
        let processor = SeriesProcessor::with_config(ProcessorConfig::default().with_workers(3));
        let mut series = Series::from(vec!["4", "8", "15", "16", "23", "42"]);
        assert!(processor.non_numeric_values(&series).is_empty());

        processor.convert_to_numeric(&mut series).unwrap();
        let rows = processor.filter(&mut series, &FilterPredicate::LessThan(Value::Float(20.0)));
        assert_eq!(rows, vec![0, 1, 2, 3]);
        assert_eq!(processor.count(&series), 4);
        assert_eq!(processor.sum(&series).unwrap(), 43.0);
        assert_eq!(processor.median(&series).unwrap(), 11.5);

        processor.convert_to_text(&mut series);
        processor.replace(&mut series, "1", "one");
        assert_eq!(series, Series::from(vec!["4", "8", "one5", "one6"]));
    }
}
