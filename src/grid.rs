//! Cell and grid data model.
//!
//! A [`Grid`] is the raw 2D array an upstream parser hands to the analyzer:
//! row 0 is the header, the rest are data rows. Rows may be shorter than the
//! header; absent trailing cells read as [`Cell::Missing`]. The grid is never
//! mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spreadsheet cell.
///
/// JSON payloads map straight onto the variants: `null` is `Missing`,
/// numbers, booleans and strings keep their type. The empty string also
/// counts as missing for statistics purposes (literal `""` only, no
/// trimming).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    /// True iff the cell carries no usable value: `Missing` or the literal
    /// empty string. A whitespace-only string is a present value.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric view of the cell, if it has one. Text goes through the
    /// standard float parse after trimming; a parse that yields NaN is
    /// rejected. Booleans coerce to 1.0 / 0.0.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Text(s) => {
                if s.is_empty() {
                    return None;
                }
                s.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
            }
            Cell::Missing => None,
        }
    }
}

/// String coercion used everywhere values are compared or keyed: `5.0`
/// renders as "5" and collides with the text cell "5"; missing renders as
/// the empty string.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// All rows of one sheet, header included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Number of columns, defined by the header row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Rows below the header.
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        if self.rows.len() > 1 {
            &self.rows[1..]
        } else {
            &[]
        }
    }

    /// Resolved name for column `idx`: the stringified header cell, or a
    /// synthesized `Column {idx+1}` when the header stringifies empty.
    pub fn column_name(&self, idx: usize) -> String {
        let header = self
            .rows
            .first()
            .and_then(|r| r.get(idx))
            .map(|c| c.to_string())
            .unwrap_or_default();
        if header.is_empty() {
            format!("Column {}", idx + 1)
        } else {
            header
        }
    }

    /// The cells of column `idx` across all data rows, short rows padded
    /// with missing cells.
    pub fn column_cells(&self, idx: usize) -> Vec<Cell> {
        self.data_rows()
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or(Cell::Missing))
            .collect()
    }

    /// Serialize the whole grid (header included) as CSV: every cell is
    /// double-quoted, embedded quotes doubled.
    pub fn to_csv(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| format!("\"{}\"", cell.to_string().replace('"', "\"\"")))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
