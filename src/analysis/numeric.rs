//! Descriptive statistics for numeric columns.

use serde::Serialize;

/// Summary of the parsable values of a numeric column. Absent entirely when
/// the column has no parsable values, so callers can tell "no data" from
/// "value is 0".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub q1: f64,
}

impl NumericSummary {
    /// Compute the summary from already-parsed values.
    ///
    /// Median averages the two middle elements on even counts; standard
    /// deviation is the population form (divide by N); q1 is the lower-bound
    /// nearest-rank element at `floor(N * 0.25)` of the sorted values, with
    /// no interpolation. The q1 rule is a compatibility contract, not a
    /// canonical quantile method.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };
        let q1 = sorted[(count as f64 * 0.25).floor() as usize];

        Some(NumericSummary {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            median,
            std_dev: variance.sqrt(),
            q1,
        })
    }
}
