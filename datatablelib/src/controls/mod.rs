//! Headless models of the table's interactive controls.
//!
//! Each control is a plain serializable snapshot built from a
//! [`TableState`](crate::TableState): what a renderer needs to draw the
//! search box, the filter panel and the pagination bar. User input flows back
//! through the `TableState` handlers, never through these models.

pub mod filters;
pub mod pagination;
pub mod search;

pub use filters::{FilterInput, FilterInputKind, FilterPanel, SelectOption};
pub use pagination::PaginationBar;
pub use search::SearchBox;
