//! Peer list tabulation.

use super::{json_cell, Table};
use serde_json::Value;

/// Wrap the peers payload in a one-column table named `peer`.
///
/// Order and duplicates from the source are preserved. A non-array
/// payload yields zero rows.
pub fn peers_table(raw: &Value) -> Table {
    let mut table = Table::new(["peer"]);
    if let Some(items) = raw.as_array() {
        for item in items {
            table.push_row(vec![json_cell(item)]);
        }
    }
    table
}
