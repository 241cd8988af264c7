//! Exact-duplicate row detection.

use crate::grid::Grid;
use std::collections::HashSet;

/// Indices (0-based over data rows, header excluded) of rows that exactly
/// repeat an earlier row. The first occurrence is not counted; only second
/// and later occurrences are.
///
/// Rows are compared through a composite key: each cell stringified
/// (missing becomes the empty string) and joined with `|`, padded out to
/// the header width so a short row keys the same as one padded with missing
/// cells. Two structurally different rows whose cells contain the delimiter
/// can collide; this is an accepted limitation, no escaping is attempted.
pub fn find_duplicates(grid: &Grid) -> Vec<usize> {
    let width = grid.width();
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for (idx, row) in grid.data_rows().iter().enumerate() {
        let positions = width.max(row.len());
        let key = (0..positions)
            .map(|i| row.get(i).map(|c| c.to_string()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("|");
        if !seen.insert(key) {
            duplicates.push(idx);
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn grid(rows: Vec<Vec<Cell>>) -> Grid {
        Grid::new(rows)
    }

    fn t(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn second_and_later_occurrences_only() {
        let g = grid(vec![
            vec![t("name"), t("n")],
            vec![t("A"), Cell::Number(1.0)],
            vec![t("B"), Cell::Number(2.0)],
            vec![t("A"), Cell::Number(1.0)],
            vec![t("C"), Cell::Number(3.0)],
            vec![t("A"), Cell::Number(1.0)],
        ]);
        assert_eq!(find_duplicates(&g), vec![2, 4]);
    }

    #[test]
    fn no_duplicates_in_distinct_rows() {
        let g = grid(vec![
            vec![t("a")],
            vec![t("x")],
            vec![t("y")],
        ]);
        assert!(find_duplicates(&g).is_empty());
    }

    #[test]
    fn short_row_matches_row_padded_with_missing() {
        let g = grid(vec![
            vec![t("a"), t("b")],
            vec![t("x")],
            vec![t("x"), Cell::Missing],
        ]);
        assert_eq!(find_duplicates(&g), vec![1]);
    }

    #[test]
    fn header_only_grid_has_none() {
        let g = grid(vec![vec![t("a")]]);
        assert!(find_duplicates(&g).is_empty());
    }

    #[test]
    fn numeric_and_text_cells_collide_when_they_stringify_alike() {
        let g = grid(vec![
            vec![t("v")],
            vec![Cell::Number(5.0)],
            vec![t("5")],
        ]);
        assert_eq!(find_duplicates(&g), vec![1]);
    }
}
