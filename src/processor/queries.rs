//! Cheap diagnostic scans. Both are total over the two series variants:
//! asking the "wrong" variant returns an empty result instead of an error.

use crate::processor::{convert::parse_number, series::Series};

/// Number of whitespace-separated tokens equal to `word` across all elements.
pub fn count_word(series: &Series, word: &str) -> usize {
    match series {
        Series::Str(values) => values
            .iter()
            .map(|v| v.split_whitespace().filter(|token| *token == word).count())
            .sum(),
        Series::Float64(_) => 0,
    }
}

/// Elements that would make a text-to-numeric conversion fail, in order.
pub fn non_numeric_values(series: &Series) -> Vec<String> {
    match series {
        Series::Str(values) => values
            .iter()
            .filter(|v| parse_number(v).is_none())
            .cloned()
            .collect(),
        Series::Float64(_) => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_word_exact_tokens() {
        let series = Series::from(vec!["the cat and the hat", "The end", "theme the"]);
        assert_eq!(count_word(&series, "the"), 3);
        assert_eq!(count_word(&series, "hat"), 1);
        assert_eq!(count_word(&series, "dog"), 0);
    }

    #[test]
    fn test_count_word_on_numeric_is_zero() {
        assert_eq!(count_word(&Series::from(vec![1.0, 2.0]), "1"), 0);
    }

    #[test]
    fn test_non_numeric_values() {
        let series = Series::from(vec!["1", "two", "3.5", "", "4e1", "n/a"]);
        assert_eq!(non_numeric_values(&series), vec!["two", "", "n/a"]);
    }

    #[test]
    fn test_non_numeric_on_numeric_is_empty() {
        assert!(non_numeric_values(&Series::from(vec![1.0])).is_empty());
    }
}
