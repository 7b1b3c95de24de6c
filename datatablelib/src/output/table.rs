//! Table-ready data structures for display.
//!
//! `RenderedTable` is a pure presentation layer: it formats the rows a
//! [`ViewEngine`] selected and copies the control snapshots alongside. No
//! filtering or sorting happens here.

use serde::{Deserialize, Serialize};

use crate::controls::{FilterPanel, PaginationBar, SearchBox};
use crate::data::{Align, Columns, DataType};
use crate::format::{format_cell, StatusCategory};
use crate::query::{SortDirection, TableView, ViewEngine};
use crate::state::TableState;

/// Shown instead of rows when nothing matches.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// A column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub align: Align,
    /// Width hint, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Clicking the header toggles the sort
    pub sortable: bool,
    /// Current sort direction, if this column is sorted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
}

/// A formatted cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Display text
    pub text: String,
    /// Badge category, for status columns only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusCategory>,
}

/// A formatted row, keyed by its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row `id`, or its dataset index when the row has none
    pub id: String,
    /// One cell per column, in column order
    pub cells: Vec<Cell>,
}

/// Presentation-ready table.
///
/// Templates iterate over headers and rows and apply styling; no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    /// Opaque styling hook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub headers: Vec<HeaderCell>,
    /// Rows on the current page
    pub rows: Vec<TableRow>,
    /// Set when the filtered set is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    pub search: SearchBox,
    /// Filter panel, present only while it is open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterPanel>,
    pub pagination: PaginationBar,
}

impl RenderedTable {
    /// Snapshot a table's current page.
    pub fn from_state<E: ViewEngine>(state: &TableState<E>) -> Self {
        let view = state.view();
        let columns = state.columns();

        RenderedTable {
            class_name: state.class_name().map(str::to_string),
            headers: build_headers(columns, |key| state.sort_direction(key)),
            rows: build_rows(columns, &view),
            empty_message: view.is_empty().then(|| NO_DATA_MESSAGE.to_string()),
            search: state.search_box(),
            filters: state.filter_panel().filter(|panel| panel.open),
            pagination: PaginationBar::new(&state.query().pagination, &view),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn build_headers(
    columns: &Columns,
    sort_of: impl Fn(&str) -> Option<SortDirection>,
) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key.clone(),
            label: column.label.clone(),
            align: column.align,
            width: column.width.clone(),
            sortable: column.sortable,
            sort: sort_of(&column.key),
        })
        .collect()
}

fn build_rows(columns: &Columns, view: &TableView<'_>) -> Vec<TableRow> {
    view.visible_rows
        .iter()
        .map(|view_row| TableRow {
            id: view_row.id().to_string(),
            cells: columns
                .iter()
                .map(|column| {
                    let value = view_row.row.get(&column.key);
                    let text = format_cell(value, column.data_type);
                    let is_status = column.data_type == DataType::Status && !value.is_null();
                    let status = is_status.then(|| StatusCategory::classify(&text));
                    Cell { text, status }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ColumnConfig, DataType, Row};

    fn table() -> TableState {
        let columns = Columns::new(vec![
            ColumnConfig::new("customer", "Customer", DataType::String).with_width("200px"),
            ColumnConfig::new("amount", "Amount", DataType::Currency).with_align(Align::Right),
            ColumnConfig::new("status", "Status", DataType::Status),
            ColumnConfig::new("created_at", "Created", DataType::Date).not_sortable(),
        ])
        .unwrap();
        let rows = vec![
            Row::new()
                .with("id", "inv-1")
                .with("customer", "Acme")
                .with("amount", 123456)
                .with("status", "paid")
                .with("created_at", "2024-01-15T14:30:00Z"),
            Row::new()
                .with("customer", "Globex")
                .with("amount", 900)
                .with("status", "Refunded"),
        ];
        TableState::new(columns, rows)
    }

    #[test]
    fn test_headers() {
        let mut table = table();
        table.toggle_sort("amount").unwrap();
        let rendered = table.render();

        assert_eq!(rendered.headers.len(), 4);
        assert_eq!(rendered.headers[0].width.as_deref(), Some("200px"));
        assert_eq!(rendered.headers[1].align, Align::Right);
        assert_eq!(rendered.headers[1].sort, Some(SortDirection::Ascending));
        assert_eq!(rendered.headers[0].sort, None);
        assert!(!rendered.headers[3].sortable);
    }

    #[test]
    fn test_rows_are_formatted() {
        let rendered = table().render();
        assert_eq!(rendered.rows.len(), 2);

        let first = &rendered.rows[0];
        assert_eq!(first.id, "inv-1");
        let texts: Vec<&str> = first.cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Acme", "1,234.56", "paid", "Jan 15, 2024, 02:30 PM"]
        );
        assert_eq!(first.cells[2].status, Some(StatusCategory::Paid));
        assert_eq!(first.cells[0].status, None);

        let second = &rendered.rows[1];
        assert_eq!(second.id, "1");
        assert_eq!(second.cells[1].text, "9.00");
        assert_eq!(second.cells[2].status, Some(StatusCategory::Other));
        assert_eq!(second.cells[3].text, "");
        assert!(rendered.empty_message.is_none());
    }

    #[test]
    fn test_empty_state() {
        let mut table = table();
        table.set_global_filter("nothing matches this");
        let rendered = table.render();
        assert!(rendered.is_empty());
        assert_eq!(rendered.empty_message.as_deref(), Some("No data available"));
        assert_eq!(rendered.pagination.summary, "0 of 0");
    }

    #[test]
    fn test_filter_panel_only_when_open() {
        let mut table = table();
        assert!(table.render().filters.is_none());
        table.toggle_filters();
        let rendered = table.render();
        assert_eq!(rendered.filters.map(|p| p.inputs.len()), Some(4));
        assert!(rendered.search.show_filters);
    }

    #[test]
    fn test_class_name_passthrough_and_json() {
        let table = table().with_class_name("invoices");
        let json = serde_json::to_value(table.render()).unwrap();
        assert_eq!(json["class_name"], "invoices");
        assert_eq!(json["rows"][0]["cells"][2]["status"], "PAID");
        assert_eq!(json["headers"][1]["align"], "right");
        assert!(json.get("filters").is_none());
    }
}
