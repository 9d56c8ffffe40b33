use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use calamine::{Data, Reader, open_workbook_auto};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DashboardError;
use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – first worksheet, first row is the header
/// * `.csv`     – header row, types guessed per cell
/// * `.parquet` – flat columns (strings, ints, floats, bools)
/// * `.json`    – `[{ "col": value, ... }, ...]`
pub fn load_file(path: &Path) -> Result<Table, DashboardError> {
    if !path.is_file() {
        return Err(DashboardError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_spreadsheet(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        other => Err(anyhow::anyhow!("Unsupported file extension: .{other}")),
    }
    .map_err(|e| DashboardError::format(path, format!("{e:#}")))?;

    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

/// Turn raw header cells into unique column names.
///
/// Names are kept as written. Blank headers become `Unnamed: <index>`;
/// repeated names get `.1`, `.2`, …
pub fn header_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    raw.into_iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.as_ref();
            let base = if name.trim().is_empty() {
                format!("Unnamed: {i}")
            } else {
                name.to_string()
            };
            let mut candidate = base.clone();
            let mut n = 1;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{base}.{n}");
                n += 1;
            }
            candidate
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

fn load_spreadsheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .context("reading first worksheet")?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        bail!("worksheet is empty, expected a header row");
    };
    let columns = header_names(header.iter().map(|cell| cell.to_string()));

    let body = rows
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect();

    Ok(Table::new(columns, body))
}

fn data_to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::from_number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // `as_datetime` honours the 1904 epoch and the 1900 leap-day quirk.
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::from_number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let columns = header_names(reader.headers().context("reading CSV headers")?.iter());

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(Table::new(columns, rows))
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Missing;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`). Nested columns are shown as text.
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let columns = header_names(builder.schema().fields().iter().map(|f| f.name().clone()));
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row in 0..batch.num_rows() {
            rows.push(
                batch
                    .columns()
                    .iter()
                    .map(|col| extract_cell(col, row))
                    .collect(),
            );
        }
    }

    Ok(Table::new(columns, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &ArrayRef, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Missing;
    }
    let any = col.as_any();
    let value = match col.data_type() {
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map(|a| CellValue::Text(a.value(row).to_string())),
        DataType::LargeUtf8 => any
            .downcast_ref::<LargeStringArray>()
            .map(|a| CellValue::Text(a.value(row).to_string())),
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map(|a| CellValue::Integer(i64::from(a.value(row)))),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map(|a| CellValue::Integer(a.value(row))),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map(|a| CellValue::Float(f64::from(a.value(row)))),
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .map(|a| CellValue::Float(a.value(row))),
        DataType::Boolean => any
            .downcast_ref::<BooleanArray>()
            .map(|a| CellValue::Bool(a.value(row))),
        _ => None,
    };
    value.unwrap_or_else(|| {
        arrow::util::display::array_value_to_string(col, row)
            .map(CellValue::Text)
            .unwrap_or(CellValue::Missing)
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Sindicato": "A", "Legitimados": "Sí" },
///   ...
/// ]
/// ```
///
/// Columns appear in first-seen order across records (keys within one record
/// come back sorted from `serde_json`).
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(|rec| rec.as_object())
        .map(|obj| {
            columns
                .iter()
                .map(|col| obj.get(col).map(json_to_cell).unwrap_or(CellValue::Missing))
                .collect()
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Missing,
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("Sindicatos_limpio.xlsx")).unwrap_err();
        assert!(matches!(err, DashboardError::FileNotFound { .. }));
    }

    #[test]
    fn garbage_workbook_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        fs::write(&path, b"definitely not a zip archive").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DashboardError::Format { .. }));
    }

    #[test]
    fn unknown_extension_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(matches!(
            load_file(&path).unwrap_err(),
            DashboardError::Format { .. }
        ));
    }

    #[test]
    fn csv_guesses_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "Sindicato,Afiliados,Legitimados\nA,12,SI\nB,,no\n").unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.columns, vec!["Sindicato", "Afiliados", "Legitimados"]);
        assert_eq!(
            table.rows[0],
            vec!["A".into(), CellValue::Integer(12), "SI".into()]
        );
        assert_eq!(table.rows[1][1], CellValue::Missing);
    }

    #[test]
    fn json_records_keep_first_seen_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"[{"REPOSITORIO": "No", "n": 1.5}, {"extra": true}]"#,
        )
        .unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.has_column("extra"));
        let n = table.column_index("n").unwrap();
        assert_eq!(table.rows[0][n], CellValue::Float(1.5));
        assert_eq!(table.rows[1][n], CellValue::Missing);
    }

    #[test]
    fn headers_are_made_unique() {
        let names = header_names(["Legitimados", "", "Legitimados", "Legitimados"]);
        assert_eq!(
            names,
            vec!["Legitimados", "Unnamed: 1", "Legitimados.1", "Legitimados.2"]
        );
    }

    #[test]
    fn headers_keep_surrounding_spaces() {
        let names = header_names([" Legitimados", "Legitimados ", "   "]);
        assert_eq!(names, vec![" Legitimados", "Legitimados ", "Unnamed: 2"]);
    }
}
