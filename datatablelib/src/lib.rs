//! # datatablelib
//!
//! A headless data-table view model: typed cell formatting, per-column
//! filters, global search, sorting and pagination over an in-memory dataset.
//!
//! ## Overview
//!
//! A table is described declaratively by a set of [`ColumnConfig`]s and fed
//! with [`Row`]s. Each column has a [`DataType`] that decides how its cells
//! are displayed, compared and filtered:
//!
//! - **string**: displayed as-is, filtered by case-insensitive substring
//! - **number**: thousands separators, filtered by numeric equality
//! - **currency**: integer minor units shown as `1,234.56`, sorted numerically
//! - **date**: `Jan 15, 2024, 02:30 PM`, filtered by an inclusive `from|to` range
//! - **status**: shown as-is with a [`StatusCategory`], filtered by exact match
//!
//! The data flow is:
//! 1. Data (`Columns`, `Row`s)
//! 2. Query (`ViewQuery` applied by a [`ViewEngine`] into a [`TableView`])
//! 3. Output ([`RenderedTable`], formatted strings ready for display)
//!
//! [`TableState`] ties the stages together and owns the interactive state
//! (search text, column filters, sort, page), mutated only through its
//! handlers.
//!
//! ## Example
//!
//! ```rust
//! use datatablelib::{ColumnConfig, Columns, DataType, Row, TableState};
//!
//! let columns = Columns::new(vec![
//!     ColumnConfig::new("customer", "Customer", DataType::String),
//!     ColumnConfig::new("amount", "Amount", DataType::Currency),
//!     ColumnConfig::new("status", "Status", DataType::Status),
//! ])
//! .unwrap();
//!
//! let rows = vec![
//!     Row::new().with("customer", "Acme").with("amount", 123456).with("status", "paid"),
//!     Row::new().with("customer", "Globex").with("amount", 900).with("status", "UNPAID"),
//! ];
//!
//! let mut table = TableState::new(columns, rows);
//! table.set_column_filter("status", "PAID").unwrap();
//!
//! let rendered = table.render();
//! assert_eq!(rendered.rows.len(), 1);
//! assert_eq!(rendered.rows[0].cells[1].text, "1,234.56");
//! assert_eq!(rendered.pagination.summary, "1-1 of 1");
//! ```

pub mod controls;
pub mod data;
pub mod error;
pub mod format;
pub mod output;
pub mod query;
pub mod state;

pub use controls::{
    FilterInput, FilterInputKind, FilterPanel, PaginationBar, SearchBox, SelectOption,
};
pub use data::{
    load_columns, load_rows, Align, CellValue, ColumnConfig, Columns, DataType, Row, RowId,
};
pub use error::DatatableError;
pub use format::{format_cell, StatusCategory};
pub use output::{Cell, HeaderCell, RenderedTable, TableRow};
pub use query::{
    BasicEngine, ColumnFilter, DateRange, FilterState, Pagination, SortDirection, SortKey,
    SortState, TableView, ViewEngine, ViewQuery, ViewRow, DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
pub use state::TableState;

/// Result type for datatablelib operations
pub type Result<T> = std::result::Result<T, DatatableError>;
