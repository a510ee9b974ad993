//! Weekly activity normalization.
//!
//! The activity endpoint returns records whose numbers are often
//! string-encoded and whose fields are sometimes missing or malformed.
//! Normalization always yields a well-formed four-column table: rows with
//! an unparsable week are dropped, unparsable metrics become null cells.

use super::{Cell, Table};
use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

/// Fixed output schema, in column order.
pub const ACTIVITY_COLUMNS: [&str; 4] = ["week_start", "statuses", "logins", "registrations"];

const METRICS: [&str; 3] = ["statuses", "logins", "registrations"];

/// Accept a finite JSON number or a finite numeric string.
///
/// Strings like "nan" and "inf" parse as f64 but are rejected: a NaN week
/// would fabricate an epoch-zero week_start instead of dropping the row.
fn as_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse().ok().filter(|f: &f64| f.is_finite()),
        _ => None,
    }
}

/// Epoch seconds to a naive UTC timestamp; fractional seconds truncated.
fn week_start(week: f64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(week.trunc() as i64, 0).map(|dt| dt.naive_utc())
}

/// Normalize the raw activity payload.
///
/// Anything other than a non-empty array yields the empty four-column
/// table. Output rows are sorted ascending by `week_start`.
pub fn normalize_activity(raw: &Value) -> Table {
    let mut table = Table::new(ACTIVITY_COLUMNS);

    let Some(items) = raw.as_array().filter(|a| !a.is_empty()) else {
        return table;
    };

    let mut rows: Vec<(NaiveDateTime, Vec<Cell>)> = Vec::with_capacity(items.len());
    for item in items {
        let Some(week) = item.get("week").and_then(as_numeric) else {
            continue;
        };
        let Some(start) = week_start(week) else {
            continue;
        };

        let mut row = Vec::with_capacity(ACTIVITY_COLUMNS.len());
        row.push(Cell::DateTime(start));
        for metric in METRICS {
            let cell = item
                .get(metric)
                .and_then(as_numeric)
                .map(Cell::Number)
                .unwrap_or(Cell::Empty);
            row.push(cell);
        }
        rows.push((start, row));
    }

    rows.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, row) in rows {
        table.push_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn start_of(row: &[Cell]) -> NaiveDateTime {
        match row[0] {
            Cell::DateTime(dt) => dt,
            ref other => panic!("expected datetime, got {other:?}"),
        }
    }

    #[test]
    fn non_array_input_yields_empty_table() {
        for raw in [json!(null), json!({}), json!("nope"), json!([])] {
            let table = normalize_activity(&raw);
            assert_eq!(table.columns, ACTIVITY_COLUMNS);
            assert_eq!(table.row_count(), 0);
        }
    }

    #[test]
    fn string_encoded_numbers_are_coerced() {
        let raw = json!([
            {"week": "1609459200", "statuses": "10", "logins": "2", "registrations": "x"}
        ]);
        let table = normalize_activity(&raw);
        assert_eq!(table.row_count(), 1);
        let row = &table.rows[0];
        assert_eq!(
            start_of(row).to_string(),
            "2021-01-01 00:00:00"
        );
        assert_eq!(row[1], Cell::Number(10.0));
        assert_eq!(row[2], Cell::Number(2.0));
        assert_eq!(row[3], Cell::Empty);
    }

    #[test]
    fn unparsable_week_drops_the_row() {
        let raw = json!([
            {"week": "soon", "statuses": 1, "logins": 1, "registrations": 1},
            {"week": 604800, "statuses": 5, "logins": 3, "registrations": 0}
        ]);
        let table = normalize_activity(&raw);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0][1], Cell::Number(5.0));
    }

    #[test]
    fn missing_metric_is_null_not_dropped() {
        let raw = json!([{"week": 0}]);
        let table = normalize_activity(&raw);
        assert_eq!(table.row_count(), 1);
        assert_eq!(&table.rows[0][1..], &[Cell::Empty, Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn rows_are_sorted_by_week_start() {
        let raw = json!([
            {"week": 1209600, "statuses": 3},
            {"week": 0, "statuses": 1},
            {"week": 604800, "statuses": 2}
        ]);
        let table = normalize_activity(&raw);
        let starts: Vec<_> = table.rows.iter().map(|r| start_of(r)).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn non_finite_week_is_dropped() {
        let raw = json!([
            {"week": "nan", "statuses": 1, "logins": 1, "registrations": 1},
            {"week": "inf", "statuses": 2, "logins": 2, "registrations": 2}
        ]);
        let table = normalize_activity(&raw);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn non_finite_metric_is_null() {
        let raw = json!([{"week": 0, "statuses": "nan", "logins": "-inf", "registrations": 3}]);
        let table = normalize_activity(&raw);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0][1], Cell::Empty);
        assert_eq!(table.rows[0][2], Cell::Empty);
        assert_eq!(table.rows[0][3], Cell::Number(3.0));
    }

    #[test]
    fn out_of_range_week_drops_the_row() {
        let raw = json!([{"week": 1e18, "statuses": 1}]);
        let table = normalize_activity(&raw);
        assert_eq!(table.row_count(), 0);
    }
}
