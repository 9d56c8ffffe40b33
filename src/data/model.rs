use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDateTime, Timelike};

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring what a spreadsheet can hold.
/// Using `BTreeMap` / `BTreeSet` downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Missing,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --
// Equality follows `Ord` so floats compare by `total_cmp` everywhere.

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Missing => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                DateTime(_) => 4,
                Text(_) => 5,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Text(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::DateTime(dt) => dt.hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Missing => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) if dt.num_seconds_from_midnight() == 0 => {
                write!(f, "{}", dt.format("%Y-%m-%d"))
            }
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Build a numeric cell, keeping integral values as `Integer` the way
    /// spreadsheet readers hand them back.
    pub fn from_number(n: f64) -> Self {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
        if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT {
            CellValue::Integer(n as i64)
        } else {
            CellValue::Float(n)
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Ordered columns and rows; every row holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table, padding or truncating rows to the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Missing);
                row
            })
            .collect();
        Table { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Iterate the cells of one column, or `None` if the column is absent.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &CellValue> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Sorted set of distinct non-missing values in a column.
    pub fn unique_values(&self, name: &str) -> BTreeSet<CellValue> {
        self.column_values(name)
            .map(|values| values.filter(|v| !v.is_missing()).cloned().collect())
            .unwrap_or_default()
    }

    /// New table holding copies of the given rows, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pads_short_rows() {
        let t = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec![CellValue::Integer(1)]],
        );
        assert_eq!(t.rows[0], vec![CellValue::Integer(1), CellValue::Missing]);
    }

    #[test]
    fn unique_values_skip_missing() {
        let t = Table::new(
            vec!["x".into()],
            vec![
                vec!["No".into()],
                vec![CellValue::Missing],
                vec!["Sí".into()],
                vec!["No".into()],
            ],
        );
        let uniq: Vec<_> = t.unique_values("x").into_iter().collect();
        assert_eq!(uniq, vec![CellValue::from("No"), CellValue::from("Sí")]);
        assert!(t.unique_values("absent").is_empty());
    }

    #[test]
    fn integral_numbers_become_integers() {
        assert_eq!(CellValue::from_number(3.0), CellValue::Integer(3));
        assert_eq!(CellValue::from_number(2.5), CellValue::Float(2.5));
        assert_eq!(CellValue::from_number(1e300), CellValue::Float(1e300));
    }

    #[test]
    fn dates_render_as_iso() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let midnight = CellValue::DateTime(day.and_hms_opt(0, 0, 0).unwrap());
        let noon = CellValue::DateTime(day.and_hms_opt(12, 0, 0).unwrap());
        assert_eq!(midnight.to_string(), "2024-01-01");
        assert_eq!(noon.to_string(), "2024-01-01 12:00:00");
        assert_eq!(CellValue::Missing.to_string(), "");
    }

    #[test]
    fn last_second_of_day_stays_on_that_day() {
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 600)
            .unwrap();
        assert_eq!(CellValue::DateTime(dt).to_string(), "2024-01-01 23:59:59");
    }

    #[test]
    fn equality_agrees_with_ordering_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(v: &CellValue) -> u64 {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        }

        let nan = CellValue::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_eq!(nan.cmp(&nan.clone()), Ordering::Equal);

        let pos = CellValue::Float(0.0);
        let neg = CellValue::Float(-0.0);
        assert_eq!(pos == neg, pos.cmp(&neg) == Ordering::Equal);
        if pos == neg {
            assert_eq!(hash_of(&pos), hash_of(&neg));
        }
    }
}
