use columnar_series::{
    AggregateOp, FilterPredicate, ProcessorConfig, Series, SeriesError, SeriesProcessor, Value,
};

fn processor(workers: usize) -> SeriesProcessor {
    SeriesProcessor::with_config(ProcessorConfig::default().with_workers(workers))
}

#[test]
fn test_filter_same_for_every_worker_count() {
    for workers in 1..=8 {
        let mut series = Series::from(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        let rows = processor(workers).filter(
            &mut series,
            &FilterPredicate::GreaterThan(Value::Float(15.0)),
        );
        assert_eq!(rows, vec![1, 2, 3, 4]);
        assert_eq!(series, Series::from(vec![20.0, 30.0, 40.0, 50.0]));
    }
}

#[test]
fn test_convert_round_trip() {
    let p = processor(4);
    let mut series = Series::from(vec!["1.5", "2.0", "3"]);
    p.convert_to_numeric(&mut series).unwrap();
    p.convert_to_text(&mut series);
    assert_eq!(series, Series::from(vec!["1.5", "2", "3"]));
}

#[test]
fn test_convert_failure_is_atomic() {
    for workers in 1..=8 {
        let mut series = Series::from(vec!["1.5", "x", "3"]);
        let err = processor(workers).convert_to_numeric(&mut series).unwrap_err();
        assert!(matches!(err, SeriesError::ParseFailure { index: 1, ref value } if value == "x"));
        assert_eq!(series, Series::from(vec!["1.5", "x", "3"]));
    }
}

#[test]
fn test_order_statistics() {
    let p = processor(4);
    assert_eq!(p.median(&Series::from(vec![1.0, 2.0, 3.0, 4.0])).unwrap(), 2.5);
    assert_eq!(p.median(&Series::from(vec![1.0, 2.0, 3.0])).unwrap(), 2.0);
    assert_eq!(
        p.percentile(&Series::from(vec![10.0, 20.0, 30.0, 40.0]), 50.0)
            .unwrap(),
        25.0
    );
}

#[test]
fn test_median_large_input_uses_parallel_sort() {
    let config = ProcessorConfig::default()
        .with_workers(4)
        .with_sort_threshold(8);
    let p = SeriesProcessor::with_config(config);
    // 0..=1000 shuffled deterministically
    let values: Vec<f64> = (0..1001).map(|i| ((i * 389) % 1001) as f64).collect();
    assert_eq!(p.median(&Series::from(values.clone())).unwrap(), 500.0);
    assert_eq!(p.percentile(&Series::from(values), 10.0).unwrap(), 100.0);
}

#[test]
fn test_population_variance() {
    for workers in 1..=8 {
        let series = Series::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let v = processor(workers).variance(&series).unwrap();
        assert!((v - 4.0).abs() < 1e-12);
    }
}

#[test]
fn test_replace_whole_word_without_match_is_noop() {
    let original = Series::from(vec!["one fish", "two fish", "redfish"]);
    let mut series = original.clone();
    processor(3)
        .replace_whole_word(&mut series, "fis", "cat")
        .unwrap();
    assert_eq!(series, original);
}

#[test]
fn test_errors_for_text_and_empty() {
    let p = processor(2);
    let text = Series::from(vec!["a", "b"]);
    let empty = Series::new_float64();
    for op in [
        AggregateOp::Sum,
        AggregateOp::Product,
        AggregateOp::Min,
        AggregateOp::Max,
        AggregateOp::Mean,
        AggregateOp::Variance,
    ] {
        assert!(matches!(
            p.aggregate(&text, op),
            Err(SeriesError::WrongColumnType { .. })
        ));
        assert!(matches!(
            p.aggregate(&empty, op),
            Err(SeriesError::EmptySeries { .. })
        ));
    }
}

#[test]
fn test_diagnostics_before_conversion() {
    let p = processor(2);
    let mut series = Series::from(vec!["3", "three", "3.0", "III"]);
    assert_eq!(p.non_numeric_values(&series), vec!["three", "III"]);
    assert_eq!(p.count_word(&series, "three"), 1);

    p.filter_str(&mut series, |s| s.parse::<f64>().is_ok());
    p.convert_to_numeric(&mut series).unwrap();
    assert_eq!(p.sum(&series).unwrap(), 6.0);
    assert_eq!(p.count_word(&series, "3"), 0);
    assert!(p.non_numeric_values(&series).is_empty());
}
