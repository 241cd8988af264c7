//! Equal-width histogram binning for numeric columns.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: usize,
}

/// Bin `values` into `bins` equal-width intervals covering [min, max].
///
/// A value is assigned to `min(bins - 1, floor((v - min) / width))`; the
/// clamp keeps the value equal to `max` inside the last bin when floating
/// point pushes it past the boundary. When every value is identical the
/// width is zero and everything lands in bin 0 (the zero-width division is
/// guarded, no NaN escapes). Empty input yields no bins.
pub fn build_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in values {
        let idx = if width == 0.0 {
            0
        } else {
            (((value - min) / width) as usize).min(bins - 1)
        };
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            range_start: min + i as f64 * width,
            range_end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}
