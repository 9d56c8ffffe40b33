use super::counts::{CountSeries, count_values};
use super::filter::{FilterSelection, apply_filters};
use super::model::{CellValue, Table};

/// Everything one render pass needs from the data layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    pub filtered: Table,
    /// One series per configured column present in the table, in configured order.
    pub counts: Vec<(String, CountSeries)>,
}

/// `Table × FilterSelection → (filtered table, counts)`. Holds no state; the
/// shell calls it again whenever the selection changes.
pub fn run(
    table: &Table,
    selection: &FilterSelection,
    columns: &[String],
    order: &[CellValue],
) -> PipelineOutput {
    let filtered = apply_filters(table, selection, columns);
    let counts = columns
        .iter()
        .filter(|col| filtered.has_column(col))
        .map(|col| (col.clone(), count_values(&filtered, col, Some(order))))
        .collect();
    PipelineOutput { filtered, counts }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::filter::default_selection;
    use crate::data::normalize::{NO, YES, normalize_categorical};

    fn configured() -> Vec<String> {
        ["NUEVOS REFORMA", "Legitimados", "REPOSITORIO"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn yes_no() -> Vec<CellValue> {
        vec![CellValue::from(YES), CellValue::from(NO)]
    }

    #[test]
    fn five_row_scenario() {
        let mut table = Table::new(
            vec!["Sindicato".into(), "Legitimados".into()],
            ["Sí", "No", "sí ", "NO", "No"]
                .iter()
                .enumerate()
                .map(|(i, v)| vec![CellValue::Integer(i as i64), CellValue::from(*v)])
                .collect(),
        );
        normalize_categorical(&mut table, &configured());
        assert_eq!(
            table.unique_values("Legitimados"),
            yes_no().into_iter().collect::<BTreeSet<_>>()
        );

        let mut selection = FilterSelection::new();
        selection.insert("Legitimados".into(), [CellValue::from(YES)].into());
        let out = run(&table, &selection, &configured(), &yes_no());

        assert_eq!(out.filtered.len(), 2);
        assert_eq!(out.filtered.rows[0][0], CellValue::Integer(0));
        assert_eq!(out.filtered.rows[1][0], CellValue::Integer(2));
        assert_eq!(out.counts.len(), 1);
        let (col, series) = &out.counts[0];
        assert_eq!(col, "Legitimados");
        assert_eq!(
            series.buckets,
            vec![(CellValue::from(YES), 2), (CellValue::from(NO), 0)]
        );
    }

    #[test]
    fn default_selection_keeps_everything_and_counts_each_column() {
        let table = Table::new(
            vec!["NUEVOS REFORMA".into(), "REPOSITORIO".into()],
            vec![
                vec![CellValue::from("Sí"), CellValue::from("No")],
                vec![CellValue::from("No"), CellValue::from("No")],
            ],
        );
        let selection = default_selection(&table, &configured());
        let out = run(&table, &selection, &configured(), &yes_no());

        assert_eq!(out.filtered, table);
        let names: Vec<&str> = out.counts.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["NUEVOS REFORMA", "REPOSITORIO"]);
        assert_eq!(
            out.counts[1].1.buckets,
            vec![(CellValue::from(YES), 0), (CellValue::from(NO), 2)]
        );
    }
}
