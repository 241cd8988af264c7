//! Frequency tables and text-column summaries.
//!
//! Values are compared by their stringified form, so the number `5` and the
//! text `"5"` count as the same value, matching how the raw grid treats
//! them upstream.

use crate::grid::Cell;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;

pub const MOST_COMMON_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Summary of a text column's non-missing values. Absent when the column
/// has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSummary {
    pub most_common: SmallVec<[ValueCount; MOST_COMMON_LIMIT]>,
    pub avg_length: f64,
}

/// Insertion-ordered value counts over the stringified non-missing cells of
/// a column. First-seen order is retained so that ties in the most-common
/// ranking break deterministically.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<ValueCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut table = FrequencyTable::default();
        for cell in cells {
            if cell.is_missing() {
                continue;
            }
            table.insert(cell.to_string());
        }
        table
    }

    fn insert(&mut self, value: String) {
        match self.index.get(&value) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(value.clone(), self.entries.len());
                self.entries.push(ValueCount { value, count: 1 });
            }
        }
    }

    /// Number of distinct stringified values.
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// Top `limit` values by count descending; ties keep first-seen order
    /// (the sort is stable over insertion order). This tie-break is the
    /// documented contract.
    pub fn most_common(&self, limit: usize) -> Vec<ValueCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}

impl TextSummary {
    pub fn compute(cells: &[Cell], table: &FrequencyTable) -> Option<Self> {
        let mut count = 0usize;
        let mut total_len = 0usize;
        for cell in cells {
            if cell.is_missing() {
                continue;
            }
            count += 1;
            total_len += cell.to_string().chars().count();
        }
        if count == 0 {
            return None;
        }
        Some(TextSummary {
            most_common: table.most_common(MOST_COMMON_LIMIT).into_iter().collect(),
            avg_length: total_len as f64 / count as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(vals: &[&str]) -> Vec<Cell> {
        vals.iter().map(|v| Cell::Text(v.to_string())).collect()
    }

    #[test]
    fn counts_and_uniques() {
        let cells = texts(&["a", "b", "a", "c", "a", "b"]);
        let table = FrequencyTable::from_cells(&cells);
        assert_eq!(table.unique_count(), 3);
        let top = table.most_common(2);
        assert_eq!(top[0], ValueCount { value: "a".into(), count: 3 });
        assert_eq!(top[1], ValueCount { value: "b".into(), count: 2 });
    }

    #[test]
    fn number_collides_with_identical_text() {
        let cells = vec![Cell::Number(5.0), Cell::Text("5".into())];
        let table = FrequencyTable::from_cells(&cells);
        assert_eq!(table.unique_count(), 1);
        assert_eq!(table.most_common(1)[0].count, 2);
    }

    #[test]
    fn ties_break_by_first_seen() {
        let cells = texts(&["x", "y", "y", "x", "z"]);
        let table = FrequencyTable::from_cells(&cells);
        let top = table.most_common(3);
        // x and y both count 2; x was seen first.
        assert_eq!(top[0].value, "x");
        assert_eq!(top[1].value, "y");
        assert_eq!(top[2].value, "z");
    }

    #[test]
    fn missing_cells_are_skipped() {
        let cells = vec![
            Cell::Text("a".into()),
            Cell::Missing,
            Cell::Text(String::new()),
        ];
        let table = FrequencyTable::from_cells(&cells);
        assert_eq!(table.unique_count(), 1);
    }

    #[test]
    fn text_summary_avg_length() {
        let cells = texts(&["ab", "abcd"]);
        let table = FrequencyTable::from_cells(&cells);
        let s = TextSummary::compute(&cells, &table).unwrap();
        assert_eq!(s.avg_length, 3.0);
        assert_eq!(s.most_common.len(), 2);
    }

    #[test]
    fn text_summary_absent_for_all_missing() {
        let cells = vec![Cell::Missing];
        let table = FrequencyTable::from_cells(&cells);
        assert_eq!(TextSummary::compute(&cells, &table), None);
    }

    #[test]
    fn most_common_caps_at_five() {
        let cells = texts(&["a", "b", "c", "d", "e", "f", "g"]);
        let table = FrequencyTable::from_cells(&cells);
        let s = TextSummary::compute(&cells, &table).unwrap();
        assert_eq!(s.most_common.len(), 5);
    }
}
