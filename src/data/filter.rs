use std::collections::{BTreeMap, BTreeSet};

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Filter predicate: which values are allowed per column
// ---------------------------------------------------------------------------

/// Per-column selection state: maps column_name → set of allowed values.
/// A column absent from the map carries no constraint; an empty set allows
/// nothing.
pub type FilterSelection = BTreeMap<String, BTreeSet<CellValue>>;

/// Default selection: every distinct non-missing value of each configured
/// column that exists in the table.
pub fn default_selection(table: &Table, columns: &[String]) -> FilterSelection {
    columns
        .iter()
        .filter(|col| table.has_column(col))
        .map(|col| (col.clone(), table.unique_values(col)))
        .collect()
}

/// Return indices of rows that pass all active filters.
///
/// Only columns in `columns` that exist in the table *and* have an entry in
/// `selection` constrain the result. A row passes a column constraint when its
/// value is in the allowed set, so missing values never pass.
pub fn filtered_indices(
    table: &Table,
    selection: &FilterSelection,
    columns: &[String],
) -> Vec<usize> {
    let active: Vec<(usize, &BTreeSet<CellValue>)> = columns
        .iter()
        .filter_map(|col| Some((table.column_index(col)?, selection.get(col)?)))
        .collect();

    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| active.iter().all(|(idx, allowed)| allowed.contains(&row[*idx])))
        .map(|(i, _)| i)
        .collect()
}

/// Derive the filtered table. The input is left untouched.
pub fn apply_filters(table: &Table, selection: &FilterSelection, columns: &[String]) -> Table {
    table.select_rows(&filtered_indices(table, selection, columns))
}
