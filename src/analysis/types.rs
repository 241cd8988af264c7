//! Report types and policy default constants.

use super::categorical::{TextSummary, ValueCount};
use super::classify::ColumnType;
use super::correlation::CorrelationMatrix;
use super::histogram::HistogramBin;
use super::numeric::NumericSummary;
use super::quality::QualitySummary;
use serde::Serialize;

/// Equal-width bins per histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;
/// Histograms are extracted for at most this many numeric columns.
pub const MAX_HISTOGRAM_COLUMNS: usize = 4;
/// Top-value bars are extracted for at most this many text columns.
pub const MAX_BAR_COLUMNS: usize = 2;
/// Values per top-value bar chart.
pub const TOP_BAR_VALUES: usize = 10;
/// Correlations are computed pairwise over at most this many numeric
/// columns, bounding the O(columns^2) cost.
pub const MAX_CORRELATION_COLUMNS: usize = 5;
/// Data rows included in the preview.
pub const PREVIEW_ROWS: usize = 5;

/// Per-column statistics. The type-specific summary is present only for
/// the matching column type and only when the column has data; absent means
/// "unavailable", never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStat {
    pub name: String,
    pub column_type: ColumnType,
    pub total: usize,
    pub non_empty: usize,
    pub missing: usize,
    pub missing_percent: f64,
    pub unique_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHistogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopValues {
    pub column: String,
    pub values: Vec<ValueCount>,
}

/// Chart-ready aggregates, plain data for an external renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub histograms: Vec<ColumnHistogram>,
    pub top_values: Vec<TopValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationMatrix>,
}

/// Resolved column names plus the first few data rows, stringified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

/// Everything the analyzer derives from one grid. Rebuilt wholesale on
/// every call; owned by the caller; serializes to JSON with stable field
/// order and no UI state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnStat>,
    pub numeric_columns: Vec<String>,
    pub text_columns: Vec<String>,
    pub duplicate_rows: Vec<usize>,
    pub quality: QualitySummary,
    pub charts: ChartData,
    pub preview: GridPreview,
}
