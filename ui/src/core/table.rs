//! Sorting and filtering behaviour of the results table. Pagination is off:
//! every row that passes the filters is shown.

use std::collections::BTreeMap;

use super::{columns::ColumnSpec, model::TestFileResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    sort: Option<(&'static str, SortOrder)>,
    filters: BTreeMap<&'static str, &'static str>,
}

impl TableState {
    pub fn sort_order(&self, column: &str) -> Option<SortOrder> {
        self.sort
            .filter(|(key, _)| *key == column)
            .map(|(_, order)| order)
    }

    /// Header click: none → ascend → descend → none. Another column's sort is dropped.
    pub fn cycle_sort(&mut self, column: &'static str) {
        self.sort = match self.sort_order(column) {
            None => Some((column, SortOrder::Ascend)),
            Some(SortOrder::Ascend) => Some((column, SortOrder::Descend)),
            Some(SortOrder::Descend) => None,
        };
    }

    pub fn filter_value(&self, column: &str) -> Option<&'static str> {
        self.filters.get(column).copied()
    }

    /// Single-select: the new value replaces whatever was selected.
    pub fn select_filter(&mut self, column: &'static str, value: &'static str) {
        self.filters.insert(column, value);
    }

    pub fn reset_filter(&mut self, column: &str) {
        self.filters.remove(column);
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Rows that pass every active filter, in display order.
pub fn visible_rows<'a>(
    columns: &[ColumnSpec],
    rows: &'a [TestFileResult],
    state: &TableState,
) -> Vec<&'a TestFileResult> {
    let mut visible: Vec<&TestFileResult> = rows
        .iter()
        .filter(|row| {
            columns.iter().all(|column| {
                match (&column.filter, state.filter_value(column.key)) {
                    (Some(filter), Some(value)) => (filter.predicate)(value, row),
                    _ => true,
                }
            })
        })
        .collect();

    if let Some((key, order)) = state.sort {
        if let Some(sorter) = columns
            .iter()
            .find(|column| column.key == key)
            .and_then(|column| column.sorter)
        {
            match order {
                SortOrder::Ascend => visible.sort_by(|a, b| sorter(a, b)),
                SortOrder::Descend => visible.sort_by(|a, b| sorter(b, a)),
            }
        }
    }

    visible
}
