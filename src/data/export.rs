use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use super::error::DashboardError;
use super::model::{CellValue, Table};

/// Largest magnitude an Excel number (an `f64`) holds without losing digits.
const MAX_EXACT_INTEGER: i64 = 1 << 53;

/// Serialize `table` as a single-sheet workbook: one bold header row, then
/// one row per table row. No index column is written.
pub fn to_bytes(table: &Table, sheet_name: &str) -> Result<Vec<u8>, DashboardError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col_index(col)?, name, &header_format)?;
    }

    for (r, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(r + 1)
            .map_err(|_| DashboardError::Serialization(format!("row {r} out of range")))?;
        for (c, cell) in row.iter().enumerate() {
            let col_num = col_index(c)?;
            match cell {
                CellValue::Text(s) => {
                    worksheet.write_string(row_num, col_num, s)?;
                }
                CellValue::Integer(i) if i.unsigned_abs() <= MAX_EXACT_INTEGER as u64 => {
                    worksheet.write_number(row_num, col_num, *i as f64)?;
                }
                // Written as text so every digit survives.
                CellValue::Integer(i) => {
                    worksheet.write_string(row_num, col_num, i.to_string())?;
                }
                CellValue::Float(f) if f.is_finite() => {
                    worksheet.write_number(row_num, col_num, *f)?;
                }
                // Excel has no NaN/inf, keep them readable as text.
                CellValue::Float(f) => {
                    worksheet.write_string(row_num, col_num, f.to_string())?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row_num, col_num, *b)?;
                }
                CellValue::DateTime(dt) => {
                    worksheet.write_datetime_with_format(row_num, col_num, dt, &date_format)?;
                }
                CellValue::Missing => {}
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    log::debug!(
        "Serialized {} rows into {} bytes (sheet {sheet_name:?})",
        table.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Build the workbook in memory first, then write it out in one go so a
/// serialization failure never leaves a file behind.
pub fn save(table: &Table, sheet_name: &str, path: &Path) -> Result<(), DashboardError> {
    let bytes = to_bytes(table, sheet_name)?;
    std::fs::write(path, &bytes)?;
    log::info!("Exported {} rows to {}", table.len(), path.display());
    Ok(())
}

fn col_index(c: usize) -> Result<u16, DashboardError> {
    u16::try_from(c).map_err(|_| DashboardError::Serialization(format!("column {c} out of range")))
}
