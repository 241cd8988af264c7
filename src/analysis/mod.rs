//! Column analysis engine.
//!
//! [`Analyzer::analyze`] is a pure, synchronous function from a [`Grid`] to
//! an [`AnalysisReport`]: no I/O, no shared state across invocations, total
//! over any well-formed grid. Callers that must not block (the HTTP
//! service, a UI thread) schedule it themselves.

pub mod categorical;
pub mod classify;
pub mod correlation;
pub mod duplicates;
pub mod histogram;
pub mod numeric;
pub mod quality;
pub mod types;

pub use categorical::{FrequencyTable, TextSummary, ValueCount};
pub use classify::ColumnType;
pub use correlation::CorrelationMatrix;
pub use histogram::HistogramBin;
pub use numeric::NumericSummary;
pub use quality::{QualityRating, QualitySummary};
pub use types::*;

use crate::grid::{Cell, Grid};
use std::time::Instant;

/// Policy knobs for chart extraction and preview size. The defaults are the
/// documented conventions; none of them changes the statistics themselves.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub histogram_bins: usize,
    pub max_histogram_columns: usize,
    pub max_bar_columns: usize,
    pub top_bar_values: usize,
    pub max_correlation_columns: usize,
    pub preview_rows: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            max_histogram_columns: MAX_HISTOGRAM_COLUMNS,
            max_bar_columns: MAX_BAR_COLUMNS,
            top_bar_values: TOP_BAR_VALUES,
            max_correlation_columns: MAX_CORRELATION_COLUMNS,
            preview_rows: PREVIEW_ROWS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    /// Analyze one grid. Deterministic and total: an empty grid yields an
    /// empty report, a header-only grid yields per-column stats with zero
    /// counts and all summaries unavailable.
    pub fn analyze(&self, grid: &Grid) -> AnalysisReport {
        let start = Instant::now();
        let width = grid.width();
        let row_count = grid.data_rows().len();
        tracing::info!("Starting grid analysis: {} rows, {} columns", row_count, width);

        let mut columns = Vec::with_capacity(width);
        let mut numeric_columns = Vec::new();
        let mut text_columns = Vec::new();
        let mut histograms = Vec::new();
        let mut top_values = Vec::new();
        let mut correlation_series: Vec<(String, Vec<Option<f64>>)> = Vec::new();

        for idx in 0..width {
            let name = grid.column_name(idx);
            let cells = grid.column_cells(idx);

            let missing = cells.iter().filter(|c| c.is_missing()).count();
            let non_empty = row_count - missing;
            let missing_percent = if row_count > 0 {
                missing as f64 / row_count as f64 * 100.0
            } else {
                0.0
            };

            // Row-aligned numeric view; None marks missing or unparsable.
            let parsed: Vec<Option<f64>> = cells.iter().map(Cell::as_number).collect();
            let values: Vec<f64> = parsed.iter().copied().flatten().collect();

            let column_type = classify::classify(&cells);
            let table = FrequencyTable::from_cells(&cells);

            let (numeric_summary, text_summary) = match column_type {
                ColumnType::Numeric => (NumericSummary::compute(&values), None),
                ColumnType::Text => (None, TextSummary::compute(&cells, &table)),
            };

            match column_type {
                ColumnType::Numeric => {
                    numeric_columns.push(name.clone());
                    if !values.is_empty()
                        && histograms.len() < self.options.max_histogram_columns
                    {
                        histograms.push(ColumnHistogram {
                            column: name.clone(),
                            bins: histogram::build_histogram(&values, self.options.histogram_bins),
                        });
                    }
                    if correlation_series.len() < self.options.max_correlation_columns {
                        correlation_series.push((name.clone(), parsed));
                    }
                }
                ColumnType::Text => {
                    text_columns.push(name.clone());
                    if non_empty > 0 && top_values.len() < self.options.max_bar_columns {
                        top_values.push(TopValues {
                            column: name.clone(),
                            values: table.most_common(self.options.top_bar_values),
                        });
                    }
                }
            }

            columns.push(ColumnStat {
                name,
                column_type,
                total: row_count,
                non_empty,
                missing,
                missing_percent,
                unique_count: table.unique_count(),
                numeric: numeric_summary,
                text: text_summary,
            });
        }

        let correlation = if correlation_series.len() >= 2 {
            Some(correlation::build_matrix(&correlation_series))
        } else {
            None
        };

        let duplicate_rows = duplicates::find_duplicates(grid);

        let missing_percents: Vec<f64> = columns.iter().map(|c| c.missing_percent).collect();
        let quality = QualitySummary::compute(grid, duplicate_rows.len(), &missing_percents);

        let preview = GridPreview {
            columns: (0..width).map(|i| grid.column_name(i)).collect(),
            rows: grid
                .data_rows()
                .iter()
                .take(self.options.preview_rows)
                .map(|row| (0..width.max(row.len()))
                    .map(|i| row.get(i).map(|c| c.to_string()).unwrap_or_default())
                    .collect())
                .collect(),
            total_rows: row_count,
        };

        tracing::info!(
            "Analysis completed in {:?}: {} numeric, {} text, {} duplicate rows",
            start.elapsed(),
            numeric_columns.len(),
            text_columns.len(),
            duplicate_rows.len()
        );

        AnalysisReport {
            row_count,
            column_count: width,
            columns,
            numeric_columns,
            text_columns,
            duplicate_rows,
            quality,
            charts: ChartData {
                histograms,
                top_values,
                correlation,
            },
            preview,
        }
    }
}

/// Analyze with default options.
pub fn analyze(grid: &Grid) -> AnalysisReport {
    Analyzer::default().analyze(grid)
}
