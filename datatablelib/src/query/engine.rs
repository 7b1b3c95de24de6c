//! Row model computation: filter, sort, paginate.
//!
//! [`ViewEngine`] is the narrow seam between the table and whatever computes
//! its visible rows. [`BasicEngine`] is the in-memory implementation used by
//! default; any engine that honours the same filter/sort/page contract can be
//! plugged into [`TableState`](crate::TableState) instead.

use log::debug;
use serde::Serialize;

use super::filter::{matches_global, ColumnFilter};
use super::options::ViewQuery;
use super::sort::sort_indices;
use crate::data::{Columns, Row, RowId};

/// A row as it appears in a view, with its position in the input dataset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ViewRow<'a> {
    /// Index in the input dataset
    pub index: usize,
    /// The row itself
    pub row: &'a Row,
}

impl ViewRow<'_> {
    /// Stable identity used to key the rendered row.
    pub fn id(&self) -> RowId {
        self.row.identity(self.index)
    }
}

/// Result of applying a query to a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct TableView<'a> {
    /// Rows on the current page, in display order
    pub visible_rows: Vec<ViewRow<'a>>,
    /// Rows left after filtering, before pagination
    pub total_filtered: usize,
    /// Pages available for `total_filtered` rows
    pub page_count: usize,
    /// Page actually shown, clamped into `0..page_count`
    pub page_index: usize,
}

impl TableView<'_> {
    pub fn is_empty(&self) -> bool {
        self.total_filtered == 0
    }
}

/// Computes the visible rows of a table.
///
/// Implementations must be total: any query, including a page index past
/// the last page, yields a view whose `page_index` addresses an existing
/// page (or 0 when nothing matches).
pub trait ViewEngine {
    fn compute_view<'a>(
        &self,
        rows: &'a [Row],
        columns: &Columns,
        query: &ViewQuery,
    ) -> TableView<'a>;
}

/// In-memory filter/sort/paginate engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEngine;

impl BasicEngine {
    /// Indices of rows passing the column filters and global search, in input order.
    pub fn filter_indices(
        &self,
        rows: &[Row],
        columns: &Columns,
        query: &ViewQuery,
    ) -> Vec<usize> {
        let column_filters: Vec<(&str, ColumnFilter)> = query
            .filters
            .iter()
            .filter_map(|(key, value)| {
                let column = columns.get(key)?;
                ColumnFilter::for_column(column, value).map(|f| (column.key.as_str(), f))
            })
            .collect();
        let needle = query.global_filter.trim().to_lowercase();

        rows.iter()
            .enumerate()
            .filter(|(_, row)| {
                column_filters
                    .iter()
                    .all(|(key, filter)| filter.matches(row.get(key)))
            })
            .filter(|(_, row)| needle.is_empty() || matches_global(row, columns, &needle))
            .map(|(index, _)| index)
            .collect()
    }
}

impl ViewEngine for BasicEngine {
    fn compute_view<'a>(
        &self,
        rows: &'a [Row],
        columns: &Columns,
        query: &ViewQuery,
    ) -> TableView<'a> {
        let mut indices = self.filter_indices(rows, columns, query);
        sort_indices(&mut indices, rows, columns, &query.sort);

        let total_filtered = indices.len();
        let pagination = query.pagination.clamped(total_filtered);
        let page_count = pagination.page_count(total_filtered);
        let visible_rows: Vec<ViewRow<'a>> = indices
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.page_size)
            .map(|index| ViewRow {
                index,
                row: &rows[index],
            })
            .collect();

        debug!(
            "Computed view: {} of {} rows match, page {}/{} shows {}",
            total_filtered,
            rows.len(),
            pagination.page_index + 1,
            page_count.max(1),
            visible_rows.len()
        );

        TableView {
            visible_rows,
            total_filtered,
            page_count,
            page_index: pagination.page_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::PaginationBar;
    use crate::data::{ColumnConfig, DataType};
    use crate::query::options::{Pagination, SortDirection, SortState};

    fn columns() -> Columns {
        Columns::new(vec![
            ColumnConfig::new("id", "ID", DataType::Number),
            ColumnConfig::new("customer", "Customer", DataType::String),
            ColumnConfig::new("amount", "Amount", DataType::Currency),
            ColumnConfig::new("status", "Status", DataType::Status),
            ColumnConfig::new("created_at", "Created", DataType::Date),
            ColumnConfig::new("note", "Note", DataType::String).not_filterable(),
        ])
        .unwrap()
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| {
                Row::new()
                    .with("id", (i + 1) as i64)
                    .with("customer", if i % 2 == 0 { "Acme" } else { "Globex" })
                    .with("amount", ((i + 1) * 100) as i64)
                    .with("status", if i % 3 == 0 { "PAID" } else { "unpaid" })
                    .with("note", "internal")
            })
            .collect()
    }

    fn ids(view: &TableView) -> Vec<String> {
        view.visible_rows
            .iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    #[test]
    fn test_paginates_filtered_rows() {
        let data = rows(12);
        let query = ViewQuery::new().pagination(Pagination::default().page(2));
        let view = BasicEngine.compute_view(&data, &columns(), &query);

        assert_eq!(view.total_filtered, 12);
        assert_eq!(view.page_count, 3);
        assert_eq!(ids(&view), vec!["11", "12"]);
    }

    #[test]
    fn test_numeric_filter_bad_input_returns_everything() {
        let data = rows(12);
        let query = ViewQuery::new()
            .filter("id", "abc")
            .pagination(Pagination::with_page_size(100).unwrap());
        let view = BasicEngine.compute_view(&data, &columns(), &query);
        assert_eq!(view.total_filtered, 12);
        assert_eq!(view.visible_rows.len(), 12);
    }

    #[test]
    fn test_filters_combine_with_search() {
        let data = rows(12);
        let query = ViewQuery::new().filter("status", "paid").search("  ACME ");
        let view = BasicEngine.compute_view(&data, &columns(), &query);
        // PAID: i in {0,3,6,9}; Acme: even i -> {0,6}
        assert_eq!(view.total_filtered, 2);
        assert_eq!(ids(&view), vec!["1", "7"]);
    }

    #[test]
    fn test_filter_on_unknown_or_locked_column_ignored() {
        let data = rows(4);
        let query = ViewQuery::new()
            .filter("missing", "x")
            .filter("note", "nothing-like-this");
        let view = BasicEngine.compute_view(&data, &columns(), &query);
        assert_eq!(view.total_filtered, 4);
    }

    #[test]
    fn test_sort_then_paginate() {
        let data = rows(7);
        let query = ViewQuery::new().sort(SortState::by("amount", SortDirection::Descending));
        let view = BasicEngine.compute_view(&data, &columns(), &query);
        assert_eq!(ids(&view), vec!["7", "6", "5", "4", "3"]);
    }

    #[test]
    fn test_date_filter_exact_instant() {
        let at = |id: i64, ts: &str| Row::new().with("id", id).with("created_at", ts);
        let data = vec![
            at(1, "2024-05-01T09:59:59Z"),
            at(2, "2024-05-01T10:00:00Z"),
            at(3, "2024-05-01T10:00:01Z"),
        ];
        let instant = "2024-05-01T10:00:00Z|2024-05-01T10:00:00Z";
        let query = ViewQuery::new().filter("created_at", instant);
        let view = BasicEngine.compute_view(&data, &columns(), &query);
        assert_eq!(ids(&view), vec!["2"]);
    }

    #[test]
    fn test_empty_dataset() {
        let view = BasicEngine.compute_view(&[], &columns(), &ViewQuery::new());
        assert!(view.is_empty());
        assert_eq!(view.page_count, 0);
        assert!(view.visible_rows.is_empty());
    }

    #[test]
    fn test_out_of_range_page_shows_last_page() {
        let data = rows(3);
        let query = ViewQuery::new().pagination(Pagination::default().page(9));
        let view = BasicEngine.compute_view(&data, &columns(), &query);
        assert_eq!(view.total_filtered, 3);
        assert_eq!(view.page_index, 0);
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_huge_page_index_is_clamped() {
        let data = rows(12);
        for page in [9, usize::MAX / 2, usize::MAX] {
            let query = ViewQuery::new().pagination(Pagination::default().page(page));
            let view = BasicEngine.compute_view(&data, &columns(), &query);
            assert_eq!(view.page_index, 2);
            assert_eq!(ids(&view), vec!["11", "12"]);

            let bar = PaginationBar::new(&query.pagination, &view);
            assert_eq!(bar.summary, "11-12 of 12");
            assert_eq!(bar.page_label, "Page 3 of 3");
            assert!(!bar.can_next);
        }
    }
}
