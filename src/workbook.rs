//! Workbook output via rust_xlsxwriter.
//!
//! One workbook per run; each table becomes one sheet with column names as
//! the first row, column order preserved, no styling beyond a datetime
//! number format.

use crate::tabular::{Cell, Table};
use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Write named tables as sheets of one workbook.
///
/// An empty sheet name keeps the writer's default name.
pub fn write_workbook(path: &Path, sheets: &[(&str, &Table)]) -> Result<()> {
    let mut workbook = Workbook::new();
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

    for (name, table) in sheets {
        let worksheet = workbook.add_worksheet();
        if !name.is_empty() {
            worksheet
                .set_name(*name)
                .with_context(|| format!("invalid sheet name '{name}'"))?;
        }
        write_table(worksheet, table, &datetime_format)
            .with_context(|| format!("failed to write sheet '{name}'"))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save workbook to {}", path.display()))?;
    Ok(())
}

fn write_table(worksheet: &mut Worksheet, table: &Table, datetime_format: &Format) -> Result<()> {
    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, name.as_str())?;
    }
    for (row, cells) in table.rows.iter().enumerate() {
        let row = (row + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(row, col, s.as_str())?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                Cell::Bool(b) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
                Cell::DateTime(dt) => {
                    worksheet.write_datetime_with_format(row, col, dt, datetime_format)?;
                }
                Cell::Empty => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::Cell;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_table() -> Table {
        let mut table = Table::new(["name", "count", "seen"]);
        table.push_row(vec![
            Cell::Text("a.example".into()),
            Cell::Number(3.0),
            Cell::DateTime(
                NaiveDate::from_ymd_opt(2021, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            ),
        ]);
        table.push_row(vec![Cell::Text("b.example".into()), Cell::Empty, Cell::Empty]);
        table
    }

    #[test]
    fn writes_named_sheets() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.xlsx");
        let table = sample_table();
        write_workbook(&path, &[("first", &table), ("second", &table)]).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn empty_name_uses_default_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("default.xlsx");
        write_workbook(&path, &[("", &sample_table())]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rejects_invalid_sheet_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.xlsx");
        let table = sample_table();
        // square brackets are illegal in xlsx sheet names
        assert!(write_workbook(&path, &[("bad[name]", &table)]).is_err());
    }
}
