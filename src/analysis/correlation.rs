//! Pairwise Pearson correlation across numeric columns.

use serde::Serialize;

/// Square, symmetric matrix of coefficients in [-1, 1]. `values[i][j]` is
/// the correlation between `columns[i]` and `columns[j]`; the diagonal is 1
/// except for a zero-variance column, which reports 0 like every other
/// degenerate pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Pearson coefficient over row-aligned series via the sum-of-products
/// formula. Rows where either side is `None` (missing or unparsable) are
/// excluded pairwise rather than propagated as NaN. A zero or non-finite
/// denominator reports 0, and the result is clamped to [-1, 1] against
/// floating-point overshoot.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let mut n = 0.0f64;
    let (mut sum_x, mut sum_y) = (0.0f64, 0.0f64);
    let (mut sum_xy, mut sum_xx, mut sum_yy) = (0.0f64, 0.0f64, 0.0f64);

    for (x, y) in xs.iter().zip(ys.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
            sum_yy += y * y;
        }
    }

    if n == 0.0 {
        return 0.0;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_xx - sum_x * sum_x) * (n * sum_yy - sum_y * sum_y)).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Build the full matrix over the given named series. Each pair is computed
/// once for `i <= j` and mirrored; the diagonal goes through the same
/// zero-variance rule as every other pair.
pub fn build_matrix(series: &[(String, Vec<Option<f64>>)]) -> CorrelationMatrix {
    let size = series.len();
    let mut values = vec![vec![0.0; size]; size];

    for i in 0..size {
        for j in i..size {
            let r = pearson(&series[i].1, &series[j].1);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        columns: series.iter().map(|(name, _)| name.clone()).collect(),
        values,
    }
}
