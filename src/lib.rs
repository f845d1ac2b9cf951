//! # columnar_series
//!
//! A single homogeneous column ([`Series`]) of either `f64` or `String`
//! values, with every heavy operation split into contiguous chunks and run
//! on a worker pool built for that call. It supports:
//!
//! - Reductions: sum, product, min, max, mean, population variance
//! - Order statistics: median and percentile over a parallel merge sort
//! - Filtering with in-order compaction of the backing buffer
//! - All-or-nothing text to numeric conversion, and numeric to text
//! - Literal and whole-word text replacement, in place
//! - Diagnostics: word counts, values that would not parse as numbers
//!
//! # Execution model
//!
//! - `[0, len)` is split into at most `workers` near-equal chunks
//! - each worker produces a private partial result for its chunk
//! - partials are combined on the calling thread, in chunk order
//!
//! Worker completion order never leaks into results. The worker count comes
//! from [`ProcessorConfig`] and defaults to hardware parallelism.
//!
//! # Example
//!
//! ```rust
//! use columnar_series::{FilterPredicate, Series, SeriesError, SeriesProcessor, Value};
//!
//! fn main() -> Result<(), SeriesError> {
//!     let processor = SeriesProcessor::new();
//!     let mut series = Series::from(vec!["1.5", "2.0", "3"]);
//!
//!     processor.convert_to_numeric(&mut series)?;
//!     println!("mean: {}", processor.mean(&series)?);
//!
//!     let kept = processor.filter(&mut series, &FilterPredicate::GreaterThan(Value::Float(1.6)));
//!     assert_eq!(kept, vec![1, 2]);
//!
//!     processor.convert_to_text(&mut series);
//!     assert_eq!(series, Series::from(vec!["2", "3"]));
//!     Ok(())
//! }
//! ```

mod helpers;
pub mod processor;

pub use processor::{
    AggregateOp, FilterPredicate, SeriesError, Value,
    config::ProcessorConfig,
    partition::{Chunk, partition},
    series::{Series, SeriesType},
    series_processor::SeriesProcessor,
};
