use std::collections::BTreeMap;

use super::model::{CellValue, Table};

/// Frequency counts laid out in a fixed order, ready for a bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountSeries {
    pub buckets: Vec<(CellValue, usize)>,
    /// Non-missing values that matched no bucket.
    pub unlisted: usize,
}

impl CountSeries {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, n)| n).sum()
    }
}

/// Count the values of `column`, re-expressed in `order` with zero for every
/// entry that was not observed. Without an order the observed values are used
/// in sorted order. An absent column yields an empty series.
pub fn count_values(table: &Table, column: &str, order: Option<&[CellValue]>) -> CountSeries {
    let Some(values) = table.column_values(column) else {
        return CountSeries::default();
    };

    let mut observed: BTreeMap<&CellValue, usize> = BTreeMap::new();
    for v in values.filter(|v| !v.is_missing()) {
        *observed.entry(v).or_default() += 1;
    }

    match order {
        Some(order) => {
            let buckets: Vec<(CellValue, usize)> = order
                .iter()
                .map(|v| (v.clone(), observed.get(v).copied().unwrap_or(0)))
                .collect();
            let unlisted = observed
                .iter()
                .filter(|&(v, _)| !order.contains(*v))
                .map(|(_, n)| n)
                .sum();
            CountSeries { buckets, unlisted }
        }
        None => CountSeries {
            buckets: observed.into_iter().map(|(v, n)| (v.clone(), n)).collect(),
            unlisted: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normalize::{NO, YES};

    fn yes_no() -> Vec<CellValue> {
        vec![YES.into(), NO.into()]
    }

    fn column(values: &[&str]) -> Table {
        Table::new(
            vec!["REPOSITORIO".into()],
            values.iter().map(|v| vec![CellValue::from(*v)]).collect(),
        )
    }

    #[test]
    fn zero_fills_unobserved_entries() {
        let series = count_values(&column(&["No", "No"]), "REPOSITORIO", Some(&yes_no()));
        assert_eq!(series.buckets, vec![(CellValue::from(YES), 0), (CellValue::from(NO), 2)]);
    }

    #[test]
    fn values_outside_order_are_not_bucketed() {
        let table = column(&["Sí", "PENDIENTE", "No", "Sí", "SI"]);
        let series = count_values(&table, "REPOSITORIO", Some(&yes_no()));
        assert_eq!(series.buckets, vec![(CellValue::from(YES), 2), (CellValue::from(NO), 1)]);
        assert_eq!(series.unlisted, 2);
        assert_eq!(series.total() + series.unlisted, table.len());
    }

    #[test]
    fn absent_column_gives_empty_series() {
        assert!(count_values(&column(&["Sí"]), "Legitimados", Some(&yes_no())).is_empty());
    }

    #[test]
    fn missing_values_are_not_counted() {
        let mut table = column(&["Sí"]);
        table.rows.push(vec![CellValue::Missing]);
        let series = count_values(&table, "REPOSITORIO", Some(&yes_no()));
        assert_eq!(series.total(), 1);
        assert_eq!(series.unlisted, 0);
    }

    #[test]
    fn without_order_uses_observed_values() {
        let series = count_values(&column(&["b", "a", "b"]), "REPOSITORIO", None);
        assert_eq!(
            series.buckets,
            vec![(CellValue::from("a"), 1), (CellValue::from("b"), 2)]
        );
    }
}
