//! Column type classification.

use crate::grid::Cell;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Text,
}

/// Classify a column from its cells. A column is `Numeric` when strictly
/// more than 80% of its non-missing cells parse as numbers; anything else,
/// including a column with no non-missing cells, is `Text`. The decision is
/// global per column: a few unparsable entries in a `Numeric` column are
/// simply excluded from numeric aggregates later, never reclassified.
pub fn classify(cells: &[Cell]) -> ColumnType {
    let mut non_missing = 0usize;
    let mut numeric = 0usize;
    for cell in cells {
        if cell.is_missing() {
            continue;
        }
        non_missing += 1;
        if cell.as_number().is_some() {
            numeric += 1;
        }
    }
    if non_missing > 0 && numeric as f64 > non_missing as f64 * 0.8 {
        ColumnType::Numeric
    } else {
        ColumnType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(vals: &[&str]) -> Vec<Cell> {
        vals.iter().map(|v| Cell::Text(v.to_string())).collect()
    }

    #[test]
    fn all_numeric_strings_classify_numeric() {
        assert_eq!(classify(&texts(&["1", "2", "3"])), ColumnType::Numeric);
    }

    #[test]
    fn four_of_five_is_exactly_80_percent_and_stays_text() {
        // The threshold is strictly greater than 0.8.
        assert_eq!(
            classify(&texts(&["1", "2", "abc", "4", "5"])),
            ColumnType::Text
        );
    }

    #[test]
    fn five_of_six_crosses_the_threshold() {
        assert_eq!(
            classify(&texts(&["1", "2", "3", "4", "5", "abc"])),
            ColumnType::Numeric
        );
    }

    #[test]
    fn empty_and_all_missing_columns_are_text() {
        assert_eq!(classify(&[]), ColumnType::Text);
        assert_eq!(
            classify(&[Cell::Missing, Cell::Text(String::new())]),
            ColumnType::Text
        );
    }

    #[test]
    fn missing_cells_do_not_dilute_the_ratio() {
        let mut cells = texts(&["1", "2", "3"]);
        cells.push(Cell::Missing);
        cells.push(Cell::Missing);
        assert_eq!(classify(&cells), ColumnType::Numeric);
    }
}
