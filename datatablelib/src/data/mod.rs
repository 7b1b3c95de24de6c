//! Data model: column configuration, cell values and rows.
//!
//! This module handles the first stage of the pipeline - the declarative
//! input a table is built from. It provides:
//!
//! - **Columns**: Ordered, key-unique set of [`ColumnConfig`]s
//! - **Values**: [`CellValue`], the scalar stored in a row field
//! - **Rows**: [`Row`], an open field map with optional stable identity
//! - **Loading**: Read column sets and datasets from JSON files
//!
//! ## Example
//!
//! ```rust,ignore
//! use datatablelib::data::{load_columns, load_rows};
//!
//! let columns = load_columns("demos/columns.json")?;
//! let rows = load_rows("demos/invoices.json")?;
//! ```

pub mod column;
pub mod load;
pub mod row;
pub mod value;

pub use column::{Align, ColumnConfig, Columns, DataType};
pub use load::{load_columns, load_rows, parse_columns, parse_rows};
pub use row::{Row, RowId};
pub use value::CellValue;
