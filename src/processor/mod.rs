use thiserror::Error;

use crate::processor::series::SeriesType;

pub mod config;
pub mod convert;
pub mod executor;
pub mod filter;
pub mod order_stats;
pub mod partition;
pub mod queries;
pub mod reduce;
pub mod series;
pub mod series_processor;
pub mod text;

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("{op} requires a {expected} series, got {found}")]
    WrongColumnType {
        op: &'static str,
        expected: SeriesType,
        found: SeriesType,
    },

    #[error("{op} requires a non-empty series")]
    EmptySeries { op: &'static str },

    #[error("cannot parse {value:?} at index {index} as a number")]
    ParseFailure { index: usize, value: String },

    #[error("percentile must be within [0, 100], got {0}")]
    InvalidPercentile(f64),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Value helper for predicates (owned for simplicity)
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric operand
    Float(f64),
    /// Text operand
    Str(String),
}

impl Value {
    pub fn series_type(&self) -> SeriesType {
        match self {
            Value::Float(_) => SeriesType::Float64,
            Value::Str(_) => SeriesType::Str,
        }
    }
}

/// Filter predicate
///
/// Every operand must carry the same [`Value`] kind as the series it is
/// applied to. `Contains` only makes sense for text.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPredicate {
    Equals(Value),
    GreaterThan(Value),
    LessThan(Value),
    /// Inclusive on both ends
    Between(Value, Value),
    Contains(Value),
}

/// Aggregate operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    /// Sum of all values
    Sum,
    /// Product of all values
    Product,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
    /// Arithmetic mean
    Mean,
    /// Population variance (divisor = length)
    Variance,
}

impl AggregateOp {
    pub fn name(self) -> &'static str {
        match self {
            AggregateOp::Sum => "sum",
            AggregateOp::Product => "product",
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
            AggregateOp::Mean => "mean",
            AggregateOp::Variance => "variance",
        }
    }
}
