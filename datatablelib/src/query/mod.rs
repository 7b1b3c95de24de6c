//! Query processing: filter, sort, and paginate rows.
//!
//! This module handles the second stage of the pipeline - turning the full
//! dataset into the rows a table shows. It provides:
//!
//! - **Options**: Sort and pagination state (`SortState`, `Pagination`, `ViewQuery`)
//! - **Filters**: Typed per-column predicates and global search (`ColumnFilter`)
//! - **Engine**: The `ViewEngine` seam and its in-memory `BasicEngine`
//!
//! ## Example
//!
//! ```rust,ignore
//! use datatablelib::query::{BasicEngine, SortDirection, SortState, ViewEngine, ViewQuery};
//!
//! let query = ViewQuery::new()
//!     .filter("status", "paid")
//!     .sort(SortState::by("amount", SortDirection::Descending));
//! let view = BasicEngine.compute_view(&rows, &columns, &query);
//! println!("{} matching rows", view.total_filtered);
//! ```

pub mod engine;
pub mod filter;
pub mod options;
pub mod sort;

pub use engine::{BasicEngine, TableView, ViewEngine, ViewRow};
pub use filter::{
    encode_date_range, split_date_range, status_options, ColumnFilter, DateRange, FilterState,
};
pub use options::{
    Pagination, SortDirection, SortKey, SortState, ViewQuery, DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
