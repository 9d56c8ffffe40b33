use super::model::{CellValue, Table};

pub const YES: &str = "Sí";
pub const NO: &str = "No";

/// Canonical Sí/No form of one text cell: trimmed, uppercased, with the
/// yes/no tokens mapped back to `Sí` / `No`. Other text stays uppercased.
/// Both the precomposed `Í` and `I` + combining acute (U+0301) count as yes.
pub fn normalize_yes_no(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    match upper.as_str() {
        "SI" | "SÍ" | "SI\u{301}" => YES.to_string(),
        "NO" => NO.to_string(),
        _ => upper,
    }
}

/// Normalize every configured categorical column present in `table`.
/// Non-text and missing cells pass through unchanged.
pub fn normalize_categorical(table: &mut Table, columns: &[String]) {
    for col in columns {
        let Some(idx) = table.column_index(col) else {
            log::debug!("Column {col:?} not present, skipping normalization");
            continue;
        };
        for row in &mut table.rows {
            if let CellValue::Text(s) = &row[idx] {
                row[idx] = CellValue::Text(normalize_yes_no(s));
            }
        }
    }
}
