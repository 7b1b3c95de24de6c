//! Interactive table state.
//!
//! [`TableState`] is the single owner of a table's configuration, dataset
//! and UI state (search text, column filters, sort, page, filter panel
//! visibility). State only changes through its handlers, and every handler
//! that changes which rows match or their order moves back to the first page.
//!
//! Derived values are pure functions of the state: [`TableState::view`]
//! recomputes the row model on each call, while status options are cached and
//! rebuilt when the columns or rows are replaced.

use log::debug;
use std::collections::BTreeMap;

use crate::controls::{filters, FilterPanel, PaginationBar, SearchBox};
use crate::data::{ColumnConfig, Columns, DataType, Row};
use crate::error::DatatableError;
use crate::output::RenderedTable;
use crate::query::filter::{encode_date_range, status_options};
use crate::query::{BasicEngine, SortDirection, SortState, TableView, ViewEngine, ViewQuery};
use crate::Result;

/// A table instance: configuration, data and interactive state.
#[derive(Debug, Clone)]
pub struct TableState<E: ViewEngine = BasicEngine> {
    columns: Columns,
    rows: Vec<Row>,
    engine: E,
    query: ViewQuery,
    show_filters: bool,
    status_options: BTreeMap<String, Vec<String>>,
    class_name: Option<String>,
}

impl TableState<BasicEngine> {
    /// Create a table over `rows` using the in-memory engine.
    pub fn new(columns: Columns, rows: Vec<Row>) -> Self {
        Self::with_engine(columns, rows, BasicEngine)
    }
}

impl<E: ViewEngine> TableState<E> {
    /// Create a table that computes its row model with `engine`.
    pub fn with_engine(columns: Columns, rows: Vec<Row>, engine: E) -> Self {
        let status_options = status_options(&columns, &rows);
        Self {
            columns,
            rows,
            engine,
            query: ViewQuery::default(),
            show_filters: false,
            status_options,
            class_name: None,
        }
    }

    /// Builder: attach an opaque styling hook, passed through to the output.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Current search/filter/sort/page state.
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// Replace the column configuration. Resets all UI state.
    pub fn set_columns(&mut self, columns: Columns) {
        debug!(
            "Columns replaced ({} columns), resetting table state",
            columns.len()
        );
        self.columns = columns;
        self.status_options = status_options(&self.columns, &self.rows);
        self.reset();
    }

    /// Replace the dataset. Resets all UI state.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        debug!(
            "Dataset replaced ({} rows), resetting table state",
            rows.len()
        );
        self.rows = rows;
        self.status_options = status_options(&self.columns, &self.rows);
        self.reset();
    }

    /// Back to defaults: no search, filters or sort, first page of 5 rows,
    /// filter panel closed.
    pub fn reset(&mut self) {
        self.query = ViewQuery::default();
        self.show_filters = false;
    }

    // ------------------------------------------------------------------
    // Global search
    // ------------------------------------------------------------------

    pub fn global_filter(&self) -> &str {
        &self.query.global_filter
    }

    /// Set the free-text search and return to the first page.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.query.global_filter = text.into();
        self.query.pagination.reset_page();
    }

    // ------------------------------------------------------------------
    // Column filters
    // ------------------------------------------------------------------

    /// Current filter value for a column (`""` when unset).
    pub fn column_filter(&self, key: &str) -> &str {
        self.query.filters.get(key)
    }

    pub fn is_filter_active(&self, key: &str) -> bool {
        self.query.filters.is_active(key)
    }

    /// Number of columns with a filter value.
    pub fn active_filter_count(&self) -> usize {
        self.query.filters.active_count()
    }

    /// Set a column filter and return to the first page. `""` clears it.
    pub fn set_column_filter(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.filterable_column(key)?;
        let value = value.into();
        if self.query.filters.set(key, value.as_str()) {
            debug!("Filter on '{}' set to {:?}", key, value);
        }
        self.query.pagination.reset_page();
        Ok(())
    }

    /// Clear a column filter.
    pub fn clear_column_filter(&mut self, key: &str) -> Result<()> {
        self.set_column_filter(key, "")
    }

    /// Clear every column filter and return to the first page.
    pub fn clear_filters(&mut self) {
        self.query.filters.clear_all();
        self.query.pagination.reset_page();
    }

    /// Feed keyboard input into a number column's filter.
    ///
    /// Input that is not an optional minus sign followed by digits and at
    /// most one decimal point is rejected and leaves the filter unchanged.
    /// Returns whether the input was accepted. Columns of any other type
    /// are an error.
    pub fn input_number_filter(&mut self, key: &str, input: &str) -> Result<bool> {
        let column = self.filterable_column(key)?;
        if column.data_type != DataType::Number {
            return Err(DatatableError::NotNumeric(key.to_string()));
        }
        if !filters::is_valid_number_input(input) {
            debug!("Rejected number filter input {:?} for '{}'", input, key);
            return Ok(false);
        }
        self.set_column_filter(key, input)?;
        Ok(true)
    }

    /// Set a date column's range from its two picker values.
    ///
    /// Either side may be empty; both empty clears the filter.
    pub fn set_date_range_filter(&mut self, key: &str, from: &str, to: &str) -> Result<()> {
        self.set_column_filter(key, encode_date_range(from, to))
    }

    /// Status options of a status column, sorted (empty for other columns).
    pub fn status_options(&self, key: &str) -> &[String] {
        self.status_options
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Filter panel
    // ------------------------------------------------------------------

    /// Whether the filter panel is open.
    pub fn show_filters(&self) -> bool {
        self.show_filters
    }

    /// Open or close the filter panel. Stays closed when no column is
    /// filterable. Returns the new visibility.
    pub fn toggle_filters(&mut self) -> bool {
        self.show_filters = self.columns.has_filterable() && !self.show_filters;
        self.show_filters
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Current sort direction of a column.
    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.query.sort.direction_of(key)
    }

    /// Header click: cycle unsorted -> ascending -> descending -> unsorted,
    /// sorting by this column only. Returns to the first page.
    pub fn toggle_sort(&mut self, key: &str) -> Result<()> {
        self.sortable_column(key)?;
        self.query.sort.toggle(key);
        debug!(
            "Sort on '{}' is now {:?}",
            key,
            self.query.sort.direction_of(key)
        );
        self.query.pagination.reset_page();
        Ok(())
    }

    /// Replace the whole sort and return to the first page.
    pub fn set_sort(&mut self, sort: SortState) -> Result<()> {
        for key in sort.keys() {
            self.sortable_column(&key.column)?;
        }
        self.query.sort = sort;
        self.query.pagination.reset_page();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn page_index(&self) -> usize {
        self.query.pagination.page_index
    }

    pub fn page_size(&self) -> usize {
        self.query.pagination.page_size
    }

    /// Change rows per page, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.query.pagination.set_page_size(page_size)
    }

    /// Jump to a page, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page_index: usize) {
        let total = self.filtered_count();
        self.query.pagination.go_to(page_index, total);
    }

    pub fn first_page(&mut self) {
        self.query.pagination.reset_page();
    }

    pub fn previous_page(&mut self) {
        let index = self.page_index().saturating_sub(1);
        self.go_to_page(index);
    }

    pub fn next_page(&mut self) {
        let index = self.page_index() + 1;
        self.go_to_page(index);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(usize::MAX);
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    /// Compute the current row model.
    pub fn view(&self) -> TableView<'_> {
        self.engine.compute_view(&self.rows, &self.columns, &self.query)
    }

    /// Rows matching the current search and filters.
    pub fn filtered_count(&self) -> usize {
        self.view().total_filtered
    }

    pub fn search_box(&self) -> SearchBox {
        SearchBox::from_state(self)
    }

    /// Filter panel model, `None` when no column is filterable.
    pub fn filter_panel(&self) -> Option<FilterPanel> {
        FilterPanel::from_state(self)
    }

    pub fn pagination_bar(&self) -> PaginationBar {
        PaginationBar::new(&self.query.pagination, &self.view())
    }

    /// Presentation-ready snapshot of the whole table.
    pub fn render(&self) -> RenderedTable {
        RenderedTable::from_state(self)
    }

    fn column(&self, key: &str) -> Result<&ColumnConfig> {
        self.columns
            .get(key)
            .ok_or_else(|| DatatableError::UnknownColumn(key.to_string()))
    }

    fn filterable_column(&self, key: &str) -> Result<&ColumnConfig> {
        let column = self.column(key)?;
        if column.filterable {
            Ok(column)
        } else {
            Err(DatatableError::NotFilterable(key.to_string()))
        }
    }

    fn sortable_column(&self, key: &str) -> Result<&ColumnConfig> {
        let column = self.column(key)?;
        if column.sortable {
            Ok(column)
        } else {
            Err(DatatableError::NotSortable(key.to_string()))
        }
    }
}
