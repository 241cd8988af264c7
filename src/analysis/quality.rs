//! Dataset-level quality summary.

use crate::grid::Grid;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityRating {
    Excellent,
    Good,
    Poor,
}

/// Percentage-based rating: >= 90 excellent, >= 70 good, else poor.
fn rate(percentage: f64) -> QualityRating {
    if percentage >= 90.0 {
        QualityRating::Excellent
    } else if percentage >= 70.0 {
        QualityRating::Good
    } else {
        QualityRating::Poor
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualitySummary {
    pub completeness_percent: f64,
    pub filled_cells: usize,
    pub total_cells: usize,
    pub completeness_rating: QualityRating,
    pub duplicate_rows: usize,
    pub duplicate_percent: f64,
    pub duplicate_rating: QualityRating,
    pub column_count: usize,
    pub named_columns: usize,
    pub avg_missing_percent: f64,
    pub missing_rating: QualityRating,
}

impl QualitySummary {
    /// Compute the summary from the grid, the detected duplicate count and
    /// the per-column missing percentages. Every ratio guards its zero
    /// denominator and reports 0, so header-only and zero-column grids
    /// never produce NaN.
    pub fn compute(grid: &Grid, duplicate_rows: usize, missing_percents: &[f64]) -> Self {
        let width = grid.width();
        let row_count = grid.data_rows().len();
        let total_cells = width * row_count;

        let filled_cells: usize = grid
            .data_rows()
            .iter()
            .map(|row| {
                (0..width)
                    .filter(|&i| row.get(i).is_some_and(|c| !c.is_missing()))
                    .count()
            })
            .sum();

        let completeness_percent = if total_cells > 0 {
            filled_cells as f64 / total_cells as f64 * 100.0
        } else {
            0.0
        };

        let duplicate_percent = if row_count > 0 {
            duplicate_rows as f64 / row_count as f64 * 100.0
        } else {
            0.0
        };
        let duplicate_rating = if duplicate_rows == 0 {
            QualityRating::Excellent
        } else if (duplicate_rows as f64) < row_count as f64 * 0.05 {
            QualityRating::Good
        } else {
            QualityRating::Poor
        };

        let named_columns = grid
            .rows
            .first()
            .map(|header| {
                header
                    .iter()
                    .filter(|c| !c.to_string().trim().is_empty())
                    .count()
            })
            .unwrap_or(0);

        let avg_missing_percent = if missing_percents.is_empty() {
            0.0
        } else {
            missing_percents.iter().sum::<f64>() / missing_percents.len() as f64
        };

        QualitySummary {
            completeness_percent,
            filled_cells,
            total_cells,
            completeness_rating: rate(completeness_percent),
            duplicate_rows,
            duplicate_percent,
            duplicate_rating,
            column_count: width,
            named_columns,
            avg_missing_percent,
            missing_rating: rate(100.0 - avg_missing_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn t(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn complete_grid_rates_excellent() {
        let grid = Grid::new(vec![
            vec![t("a"), t("b")],
            vec![t("1"), t("2")],
            vec![t("3"), t("4")],
        ]);
        let q = QualitySummary::compute(&grid, 0, &[0.0, 0.0]);
        assert_eq!(q.completeness_percent, 100.0);
        assert_eq!(q.filled_cells, 4);
        assert_eq!(q.total_cells, 4);
        assert_eq!(q.completeness_rating, QualityRating::Excellent);
        assert_eq!(q.duplicate_rating, QualityRating::Excellent);
        assert_eq!(q.named_columns, 2);
        assert_eq!(q.missing_rating, QualityRating::Excellent);
    }

    #[test]
    fn half_missing_rates_poor() {
        let grid = Grid::new(vec![
            vec![t("a"), t("b")],
            vec![t("1"), Cell::Missing],
            vec![Cell::Missing, t("4")],
        ]);
        let q = QualitySummary::compute(&grid, 0, &[50.0, 50.0]);
        assert_eq!(q.completeness_percent, 50.0);
        assert_eq!(q.completeness_rating, QualityRating::Poor);
        assert_eq!(q.avg_missing_percent, 50.0);
        assert_eq!(q.missing_rating, QualityRating::Poor);
    }

    #[test]
    fn duplicate_ratings() {
        let mut rows = vec![vec![t("v")]];
        for i in 0..40 {
            rows.push(vec![t(&i.to_string())]);
        }
        rows.push(vec![t("0")]);
        let grid = Grid::new(rows);
        // 1 duplicate in 41 rows is under the 5% line.
        let q = QualitySummary::compute(&grid, 1, &[0.0]);
        assert_eq!(q.duplicate_rating, QualityRating::Good);

        let q = QualitySummary::compute(&grid, 10, &[0.0]);
        assert_eq!(q.duplicate_rating, QualityRating::Poor);
    }

    #[test]
    fn header_only_grid_reports_zeros_not_nan() {
        let grid = Grid::new(vec![vec![t("a"), Cell::Missing]]);
        let q = QualitySummary::compute(&grid, 0, &[0.0, 0.0]);
        assert_eq!(q.completeness_percent, 0.0);
        assert_eq!(q.duplicate_percent, 0.0);
        assert_eq!(q.total_cells, 0);
        assert_eq!(q.named_columns, 1);
        assert!(q.completeness_percent.is_finite());
    }

    #[test]
    fn whitespace_headers_are_not_named() {
        let grid = Grid::new(vec![vec![t("a"), t("  "), t("")]]);
        let q = QualitySummary::compute(&grid, 0, &[]);
        assert_eq!(q.named_columns, 1);
    }
}
