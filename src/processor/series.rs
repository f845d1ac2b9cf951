use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesType {
    Float64,
    Str,
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesType::Float64 => f.write_str("float"),
            SeriesType::Str => f.write_str("string"),
        }
    }
}

/// A single homogeneous column.
///
/// Exactly one representation is active at a time. Operations that change
/// the representation (see [`crate::SeriesProcessor::convert_to_numeric`])
/// build the replacement sequence completely before swapping it in.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Float64(Vec<f64>),
    Str(Vec<String>),
}

impl Series {
    pub fn new_float64() -> Self {
        Series::Float64(Vec::new())
    }

    pub fn new_str() -> Self {
        Series::Str(Vec::new())
    }

    pub fn series_type(&self) -> SeriesType {
        match self {
            Series::Float64(_) => SeriesType::Float64,
            Series::Str(_) => SeriesType::Str,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Float64(values) => values.len(),
            Series::Str(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            Series::Float64(values) => Some(values),
            Series::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&[String]> {
        match self {
            Series::Str(values) => Some(values),
            Series::Float64(_) => None,
        }
    }

    /// Random access, rendered as text for numeric series
    pub fn get(&self, idx: usize) -> Option<String> {
        match self {
            Series::Float64(values) => values.get(idx).map(|v| v.to_string()),
            Series::Str(values) => values.get(idx).cloned(),
        }
    }

    /// Rebuilds the backing sequence so it holds only the elements at
    /// `indexes`, in the order given. The old sequence is dropped once the
    /// new one is complete.
    ///
    /// # Panics
    /// If any index is out of bounds.
    pub fn retain_indexes(&mut self, indexes: &[usize]) {
        match self {
            Series::Float64(values) => {
                let retained: Vec<f64> = indexes.iter().map(|&i| values[i]).collect();
                *values = retained;
            }
            Series::Str(values) => {
                let retained: Vec<String> = indexes.iter().map(|&i| values[i].clone()).collect();
                *values = retained;
            }
        }
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Series::Float64(values)
    }
}

impl From<Vec<String>> for Series {
    fn from(values: Vec<String>) -> Self {
        Series::Str(values)
    }
}

impl From<Vec<&str>> for Series {
    fn from(values: Vec<&str>) -> Self {
        Series::Str(values.into_iter().map(str::to_string).collect())
    }
}
