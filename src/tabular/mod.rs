//! Shared tabular form for workbook export.
//!
//! A `Table` is ordered column names plus rows of typed cells. Cells map
//! 1:1 onto spreadsheet cell types; `Empty` is a null that still occupies
//! its column.

pub mod activity;
pub mod flatten;
pub mod peers;

use chrono::NaiveDateTime;
use serde_json::Value;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Empty,
}

/// An ordered-column table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Rows must match the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Map a JSON leaf onto a cell, without coercion.
///
/// Arrays are leaves here: they serialize to JSON text in one cell.
pub fn json_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::Bool(b) => Cell::Bool(*b),
        Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
        Value::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_cell_maps_scalars() {
        assert_eq!(json_cell(&json!(null)), Cell::Empty);
        assert_eq!(json_cell(&json!(true)), Cell::Bool(true));
        assert_eq!(json_cell(&json!(7)), Cell::Number(7.0));
        assert_eq!(json_cell(&json!("x")), Cell::Text("x".into()));
    }

    #[test]
    fn json_cell_serializes_arrays() {
        assert_eq!(
            json_cell(&json!(["a", 1])),
            Cell::Text(r#"["a",1]"#.into())
        );
    }
}
