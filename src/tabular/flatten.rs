//! Snapshot flattening.
//!
//! The instance metadata document has no fixed schema; whatever comes back
//! is flattened into a single row, one column per leaf, named by the
//! dotted path of object keys leading to it.

use super::{json_cell, Cell, Table};
use serde_json::Value;

/// Flatten an arbitrary JSON document into a one-row table.
///
/// Objects are recursed into; arrays and scalars are leaves. A non-object
/// top-level document becomes a single column named `value`. A document
/// with no leaves (an empty object, possibly nested) yields zero rows.
pub fn flatten_snapshot(doc: &Value) -> Table {
    let mut columns = Vec::new();
    let mut cells = Vec::new();

    match doc {
        Value::Object(_) => walk(doc, String::new(), &mut columns, &mut cells),
        other => {
            columns.push("value".to_string());
            cells.push(json_cell(other));
        }
    }

    let mut table = Table::new(columns);
    if !table.columns.is_empty() {
        table.push_row(cells);
    }
    table
}

fn walk(value: &Value, prefix: String, columns: &mut Vec<String>, cells: &mut Vec<Cell>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                walk(child, path, columns, cells);
            }
        }
        leaf => {
            columns.push(prefix);
            cells.push(json_cell(leaf));
        }
    }
}
